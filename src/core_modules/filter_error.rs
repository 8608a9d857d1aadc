//! Error types for outline filtering.

use std::fmt;

/// Result type for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors reported by the median smoother and its adapters.
///
/// Every window failure is an input-validation failure; none of them is transient.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// The window has no unambiguous centre.
    InvalidWindowParity { window: i64 },

    /// The window is negative.
    InvalidWindowSign { window: i64 },

    /// The window covers the whole outline or more.
    WindowTooLarge { window: i64, len: usize },

    /// The outline has no points.
    EmptyInput,

    /// A configuration entry is missing or cannot be converted.
    Config { key: String, message: String },

    /// The filter was run before any outline was attached.
    NoData,

    /// The worker pool stopped before answering.
    WorkerUnavailable,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowParity { window } => {
                write!(f, "Window must be uneven, got {}", window)
            }
            Self::InvalidWindowSign { window } => {
                write!(f, "Window must not be negative, got {}", window)
            }
            Self::WindowTooLarge { window, len } => {
                write!(
                    f,
                    "Window {} is too long for an outline of {} points",
                    window, len
                )
            }
            Self::EmptyInput => write!(f, "Outline has no points"),
            Self::Config { key, message } => {
                write!(f, "Wrong configuration for '{}': {}", key, message)
            }
            Self::NoData => write!(f, "No outline attached to the filter"),
            Self::WorkerUnavailable => write!(f, "Smoothing worker pool is not running"),
        }
    }
}

impl std::error::Error for FilterError {}
