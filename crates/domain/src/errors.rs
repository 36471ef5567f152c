use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout talking to {0}")]
    Timeout(String),

    #[error("DoH server {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}
