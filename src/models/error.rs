use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Malformed or self-contradictory ontology, or invalid extractor settings.
    ConfigurationError(String),
    /// A resource could be read but not parsed.
    ParserError(String),
    /// A document was passed where the opposite role was expected.
    DocumentRoleMismatch(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::DocumentRoleMismatch(msg) => write!(f, "Document Role Mismatch: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::ParserError(format!("{:?}", other)),
            }
        } else {
            Error::ParserError(err.to_string())
        }
    }
}
