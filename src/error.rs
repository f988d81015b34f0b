use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tscproc operations
#[derive(Error, Diagnostic, Debug)]
pub enum TscError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tscproc::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tscproc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Input is not a PNG image")]
    #[diagnostic(code(tscproc::signature))]
    SignatureMismatch,

    #[error("Failed to decode PNG: {message}")]
    #[diagnostic(code(tscproc::decode))]
    Decode { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(tscproc::config))]
    Configuration {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tscproc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{feature} is not implemented")]
    #[diagnostic(code(tscproc::not_implemented))]
    NotImplemented { feature: String },
}

/// Non-fatal conditions reported alongside a successful conversion.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    #[error("No collision rectangles found")]
    #[diagnostic(code(tscproc::no_bboxes), severity(Warning))]
    NoBoundingBoxes,

    #[error("No authors given")]
    #[diagnostic(
        code(tscproc::no_authors),
        severity(Warning),
        help("Pass at least one --author option")
    )]
    NoAuthors,
}

pub type Result<T> = std::result::Result<T, TscError>;
