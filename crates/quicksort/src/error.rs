use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Rejected tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// Windows of two elements or fewer cannot always be split by a partition, so the
    /// insertion threshold must be at least 2.
    InsertionThresholdTooSmall { threshold: usize },

    /// The parallel threshold must be at least the insertion threshold.
    ParallelThresholdBelowInsertion { parallel: usize, insertion: usize },
}

impl Display for ParamsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsertionThresholdTooSmall { threshold } => {
                write!(f, "insertion threshold must be at least 2, got {threshold}")
            }
            Self::ParallelThresholdBelowInsertion {
                parallel,
                insertion,
            } => write!(
                f,
                "parallel threshold ({parallel}) must not be below the insertion threshold ({insertion})"
            ),
        }
    }
}

impl Error for ParamsError {}
