use crate::error::PortfolioError;
use std::path::{Path, PathBuf};
use tracing::info;
use unicode_normalization::UnicodeNormalization;

/// URL prefix uploaded files are served under.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// The name is NFKD-decomposed so accented letters keep their ASCII base.
/// Path separators become spaces, anything outside `[A-Za-z0-9_.-]` is
/// dropped, whitespace runs collapse into `_`, and leading/trailing `.`/`_`
/// are trimmed. The result may be empty.
pub fn secure_filename(raw: &str) -> String {
    let flattened: String = raw
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .filter(|c| c.is_ascii())
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Write `bytes` to `dir/filename`, replacing any existing file.
pub async fn save(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, PortfolioError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    info!(path = %path.display(), size = bytes.len(), "stored upload");
    Ok(path)
}

pub fn public_url(filename: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories() {
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename(r"C:\Users\me\photo.png"), "C_Users_me_photo.png");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(secure_filename("my   cv final.pdf"), "my_cv_final.pdf");
    }

    #[test]
    fn transliterates_accents_and_drops_symbols() {
        assert_eq!(secure_filename("résumé$.pdf"), "resume.pdf");
        assert_eq!(secure_filename("ﬁle №1.txt"), "file_No1.txt");
        assert_eq!(secure_filename("日本.png"), "png");
    }

    #[test]
    fn trims_leading_dots() {
        assert_eq!(secure_filename(".bashrc"), "bashrc");
        assert_eq!(secure_filename("..."), "");
    }

    #[test]
    fn url_is_under_uploads() {
        assert_eq!(public_url("a.png"), "/uploads/a.png");
    }

    #[tokio::test]
    async fn save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested");
        let path = save(&dir, "hello.txt", b"hi").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"hi");
    }
}
