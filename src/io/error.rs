//! Error types for morph pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all morph operations
#[derive(Debug)]
pub enum MorphError {
    /// Failed to decode an input image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Decoded image cannot be sampled
    InvalidImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Grid resolution outside the usable range
    InvalidResolution {
        /// Provided resolution
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Assignment requested for a degenerate zero-cell grid
    SingularAssignment,

    /// Failed to save a rendered frame or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImage { reason } => {
                write!(f, "Invalid image: {reason}")
            }
            Self::InvalidResolution { value, reason } => {
                write!(f, "Invalid resolution {value}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SingularAssignment => {
                write!(f, "Assignment is undefined for an empty grid")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MorphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for morph results
pub type Result<T> = std::result::Result<T, MorphError>;

impl From<image::ImageError> for MorphError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MorphError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MorphError {
    MorphError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("proximity_importance", &1.5, &"must lie in [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'proximity_importance' = '1.5': must lie in [0, 1]"
        );
    }

    #[test]
    fn test_file_system_error_preserves_source() {
        let err = MorphError::FileSystem {
            path: PathBuf::from("outputs"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert!(err.to_string().contains("create directory"));
    }
}
