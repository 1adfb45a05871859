use thiserror::Error;

/// Why a single submitted combination was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationFault {
    #[error("must have exactly {expected} numbers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("number {value} is outside {low}-{high}")]
    OutOfRange { value: i64, low: u8, high: u8 },

    #[error("number {value} appears more than once")]
    Duplicate { value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("at most {max} combinations allowed, got {count}")]
    InvalidBatchSize { count: usize, max: usize },

    #[error("please provide at least one combination")]
    EmptyBatch,

    /// `index` is 1-based, in submission order.
    #[error("combination {index}: {reason}")]
    InvalidCombination {
        index: usize,
        reason: CombinationFault,
    },

    #[error("could not generate a non-matching draw after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("invalid rules: {message}")]
    InvalidRules { message: String },
}

impl DrawError {
    /// True for failures that are not the caller's fault.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DrawError::GenerationExhausted { .. } | DrawError::InvalidRules { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;
