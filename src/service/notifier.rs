use crate::error::PortfolioError;
use crate::types::NewMessage;
use std::sync::Arc;
use tracing::info;

/// Hook run after a contact message has been stored.
pub trait ContactNotifier: Send + Sync {
    fn notify(&self, id: i64, msg: &NewMessage) -> Result<(), PortfolioError>;
}

/// Default notifier: does nothing.
pub struct Disabled;

impl ContactNotifier for Disabled {
    fn notify(&self, _id: i64, _msg: &NewMessage) -> Result<(), PortfolioError> {
        Ok(())
    }
}

/// Emits one structured event per stored message.
pub struct LogNotifier;

impl ContactNotifier for LogNotifier {
    fn notify(&self, id: i64, msg: &NewMessage) -> Result<(), PortfolioError> {
        info!(
            id,
            from = %msg.name,
            email = %msg.email,
            subject = %msg.subject,
            "new contact message"
        );
        Ok(())
    }
}

/// Pick the notifier for the `notify_contact` flag.
pub fn from_flag(enabled: bool) -> Arc<dyn ContactNotifier> {
    if enabled {
        Arc::new(LogNotifier)
    } else {
        Arc::new(Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewMessage {
        NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice site".into(),
        }
    }

    #[test]
    fn both_notifiers_accept_a_stored_message() {
        for enabled in [false, true] {
            assert!(from_flag(enabled).notify(7, &sample()).is_ok());
        }
    }

    #[test]
    fn disabled_is_a_no_op() {
        assert!(Disabled.notify(1, &NewMessage::default()).is_ok());
    }
}
