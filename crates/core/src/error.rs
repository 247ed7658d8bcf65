//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// The search provider request failed.
    #[error("Web search failed: {0}")]
    SearchFailed(String),

    /// A required API credential is missing from the environment.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// The text-generation request failed.
    #[error("Outline generation failed: {0}")]
    GenerationFailed(String),

    /// A collaborator returned a response that could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// ZIP packaging error (for PPTX output).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error (for PPTX output).
    #[error("XML error: {0}")]
    XmlError(String),
}
