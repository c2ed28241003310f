use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brandkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(brandkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(brandkit::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Rasterization failed: {message}")]
    #[diagnostic(code(brandkit::raster))]
    Raster { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(brandkit::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl BrandError {
    pub(crate) fn parse(message: impl Into<String>, help: Option<&str>) -> Self {
        BrandError::Parse {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }

    pub(crate) fn raster(message: impl Into<String>) -> Self {
        BrandError::Raster {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrandError>;
