/// Errors that can occur while generating descriptions.
#[derive(Debug, thiserror::Error)]
pub enum TextGenError {
    /// The HTTP request could not be sent, or the response body could not
    /// be read or decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("text generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body has no `predictions` field.
    #[error("response has no predictions")]
    MissingPredictions,

    /// The prediction contained no usable definition for the word.
    #[error("empty prediction for {0:?}")]
    EmptyPrediction(String),

    /// A fixed source has no definition for the word.
    #[error("no definition known for {0:?}")]
    UnknownWord(String),
}
