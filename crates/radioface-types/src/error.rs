//! Error types for radioface.

use std::io;

/// Errors produced by the radioface display head.
#[derive(Debug, thiserror::Error)]
pub enum RadioError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("compose error: {0}")]
    Compose(String),

    #[error("convert error: {0}")]
    Convert(String),

    #[error("directory error: {0}")]
    Directory(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RadioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let e = RadioError::Backend("window creation failed".into());
        assert_eq!(format!("{e}"), "backend error: window creation failed");
    }

    #[test]
    fn compose_error_display() {
        let e = RadioError::Compose("flush not acknowledged".into());
        assert_eq!(format!("{e}"), "compose error: flush not acknowledged");
    }

    #[test]
    fn directory_error_display() {
        let e = RadioError::Directory("parsed 15 of 16".into());
        assert_eq!(format!("{e}"), "directory error: parsed 15 of 16");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: RadioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [[[ valid").unwrap_err();
        let e: RadioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<u32> = Ok(7);
        assert_eq!(r.unwrap(), 7);
    }
}
