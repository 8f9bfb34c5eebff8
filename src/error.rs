use crate::content_type::ContentKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request payload could not be serialized, or does not have the
    /// shape its content type requires. Raised before any network I/O.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// DNS, connect, TLS, timeout, or body read failure.
    #[error("Error executing request: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body does not match its declared content type.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The server answered with a status outside `[200, 400)`.
    #[error("Response status code: {0}")]
    ResponseStatus(u16),
    #[error("descriptor has already been executed")]
    DescriptorReused,
}

impl Error {
    /// Status code carried by a [`Error::ResponseStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ResponseStatus(status) => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Error encoding {kind} request payload: {message}")]
pub struct EncodeError {
    pub kind: ContentKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Error unmarshalling {kind} response: {message}")]
pub struct DecodeError {
    pub kind: ContentKind,
    pub message: String,
}
