use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfabError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("upload error: {0}")]
    Upload(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ConfabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_message() {
        let err = ConfabError::Backend("conversation not found".to_string());
        assert_eq!(err.to_string(), "backend error: conversation not found");
    }

    #[test]
    fn upload_error_message() {
        let err = ConfabError::Upload("file too large".to_string());
        assert_eq!(err.to_string(), "upload error: file too large");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ConfabError::from(io_err);
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err = ConfabError::from(json_err);
        assert!(!err.to_string().is_empty());
    }
}
