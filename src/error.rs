//! Error types for dashboard-raster operations.
//!
//! Rasterization itself never fails. Errors only come from the fallible edges:
//! framebuffer allocation, gauge domains, configuration and PNG output.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dashboard-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Gauge domain with equal or non-finite bounds.
    #[error("Invalid gauge domain: [{min}, {max}]")]
    InvalidDomain {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration value that parses but cannot be used.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_domain_display() {
        let err = Error::InvalidDomain { min: 5.0, max: 5.0 };
        let msg = err.to_string();
        assert!(msg.contains("[5, 5]"));
    }

    #[test]
    fn test_config_parse_has_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "unexpected key".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
