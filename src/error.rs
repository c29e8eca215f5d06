// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the viewer core, the codec wrappers and the config layer.
//!
//! Errors are `Clone` so they can travel inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The file could not be read or is not a decodable image.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// The image could not be written to the requested path.
    #[error("Encode Error: {0}")]
    Encode(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Short label used as the heading of the error banner.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Decode(_) => "Error opening image",
            Error::Encode(_) => "Error saving image",
            Error::Io(_) => "File system error",
            Error::Config(_) => "Configuration error",
        }
    }

    /// The underlying message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Decode(msg) | Error::Encode(msg) | Error::Io(msg) | Error::Config(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
