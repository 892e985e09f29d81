use thiserror::Error;

use crate::ElementId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("counter text {0:?} has no numeric part")]
    InvalidCounterText(String),
    #[error("missing required selection: {0}")]
    MissingSelection(&'static str),
    #[error("unknown element id {0:?}")]
    UnknownElement(ElementId),
}

pub type CoreResult<T> = Result<T, CoreError>;
