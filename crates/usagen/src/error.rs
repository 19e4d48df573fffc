//! Error type for config I/O.
//!
//! Rendering itself is total over its input domain and returns plain
//! strings; only reading and writing the usage config can fail.

use thiserror::Error;

/// Error type for usage config loading and writing.
#[derive(Debug, Error)]
pub enum UsageError {
    /// Failure reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config document could not be encoded or decoded.
    #[error("config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UsageError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_yaml_error_display() {
        let yaml_err = serde_yaml::from_str::<usize>("not a number").unwrap_err();
        let err: UsageError = yaml_err.into();
        assert!(err.to_string().contains("config error"));
    }
}
