use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packtex operations
#[derive(Error, Diagnostic, Debug)]
pub enum PacktexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(packtex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(packtex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(packtex::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(packtex::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PacktexError>;
