use thiserror::Error;

/// Reasons a buffer operation was refused.
///
/// A refused operation leaves both the content and the cursor untouched,
/// so callers can ignore these (or beep) without any cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("cannot delete character")]
    CannotDelete,
    #[error("cannot move cursor to the left")]
    CannotMoveLeft,
    #[error("cannot move cursor to the right")]
    CannotMoveRight,
    #[error("cannot move cursor up")]
    CannotMoveUp,
    #[error("cannot move cursor down")]
    CannotMoveDown,
    #[error("cursor {cursor} is out of range for {len} bytes")]
    CursorOutOfRange { cursor: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BufferError::CannotDelete.to_string(), "cannot delete character");
        assert_eq!(
            BufferError::CursorOutOfRange { cursor: 7, len: 5 }.to_string(),
            "cursor 7 is out of range for 5 bytes"
        );
    }
}
