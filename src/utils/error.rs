use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input {position} is not a valid integer: {input:?} ({source})")]
    ParseError {
        position: usize,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input ended after {received} of {expected} numbers")]
    InputExhausted { expected: usize, received: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DrillError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrillError::ParseError { .. } | DrillError::InputExhausted { .. } => {
                ErrorSeverity::High
            }
            DrillError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::ParseError { position, input, .. } => {
                format!("Number {} ({:?}) is not a valid integer", position, input)
            }
            DrillError::InputExhausted { expected, received } => format!(
                "Expected {} numbers but input closed after {}",
                expected, received
            ),
            DrillError::IoError(e) => format!("Console failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::ParseError { .. } => {
                "Enter whole numbers only, e.g. 42 or -7, one per line"
            }
            DrillError::InputExhausted { .. } => "Provide all numbers before closing the input",
            DrillError::IoError(_) => "Check that stdin and stdout are attached and writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
