use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Malformed input: wrong pixel list length, out-of-range
    /// coordinates or color channels, bad rotation value.
    Validation(String),
    /// An optional collaborator is not compiled in.
    CapabilityUnavailable(&'static str),
    /// A file path did not resolve.
    ResourceNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::CapabilityUnavailable(capability) => {
                write!(f, "{} is unavailable; \
                           build with the `image` feature enabled",
                       capability)
            }
            Error::ResourceNotFound(path) => {
                write!(f, "{} not found", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
