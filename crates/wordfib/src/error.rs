//! Unified error type for wordfib.

use wordfib_store::StoreError;
use wordfib_textgen::TextGenError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates `From` impls, so the
/// `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordfibError {
    /// A store-level error (missing room or game, round overflow).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A text generation error (HTTP failure, unusable prediction).
    #[error(transparent)]
    TextGen(#[from] TextGenError),
}

#[cfg(test)]
mod tests {
    use wordfib_model::RoomId;

    use super::*;

    #[test]
    fn test_from_store_error() {
        let err = StoreError::NotFound(RoomId(1));
        let wordfib_err: WordfibError = err.into();
        assert!(matches!(wordfib_err, WordfibError::Store(_)));
        assert_eq!(wordfib_err.to_string(), "room R-1 not found");
    }

    #[test]
    fn test_from_textgen_error() {
        let err = TextGenError::UnknownWord("yeti".into());
        let wordfib_err: WordfibError = err.into();
        assert!(matches!(wordfib_err, WordfibError::TextGen(_)));
        assert!(wordfib_err.to_string().contains("yeti"));
    }
}
