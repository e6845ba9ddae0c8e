use axum::{Json, extract::State};

use crate::db::Stats;
use crate::error::PortfolioError;
use crate::router::PortfolioState;

/// GET /api/stats
pub async fn get_stats(State(state): State<PortfolioState>) -> Result<Json<Stats>, PortfolioError> {
    Ok(Json(state.store.stats().await?))
}
