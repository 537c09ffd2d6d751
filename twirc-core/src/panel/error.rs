use thiserror::Error;

/// Errors raised by the access panel buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("offset {offset} is outside the buffer (length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },
}
