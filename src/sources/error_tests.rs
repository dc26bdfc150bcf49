//! Unit tests for source error types

#[cfg(test)]
mod tests {
    use crate::sources::error::SourceError;
    use std::error::Error;

    fn io_error(message: &str) -> std::io::Error {
        std::io::Error::other(message.to_string())
    }

    #[test]
    fn test_io_error_display() {
        let error = SourceError::from(io_error("copy failed"));
        assert!(error.to_string().contains("reading bookmark store"));
        assert!(error.to_string().contains("copy failed"));
    }

    #[test]
    fn test_sqlite_error_from_rusqlite() {
        let sqlite_error = rusqlite::Error::InvalidQuery;
        let error: SourceError = sqlite_error.into();

        assert!(error.to_string().contains("Database error"));
    }

    #[test]
    fn test_malformed_data_from_serde() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = SourceError::from(parse_error);

        assert!(error.to_string().contains("Malformed bookmark data"));
    }

    #[test]
    fn test_error_debug() {
        let error = SourceError::from(io_error("boom"));
        let debug = format!("{error:?}");
        assert!(debug.contains("IoError"));
    }

    #[test]
    fn test_error_source_chain() {
        let error = SourceError::from(io_error("inner"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceError>();
    }

    #[test]
    fn test_error_pattern_matching() {
        let errors = vec![
            SourceError::from(io_error("io")),
            SourceError::SqliteError(rusqlite::Error::InvalidQuery),
        ];

        for error in errors {
            match error {
                SourceError::IoError(inner) => {
                    assert_eq!(inner.to_string(), "io");
                }
                SourceError::SqliteError(_) | SourceError::MalformedData(_) => {
                    // Expected
                }
            }
        }
    }
}
