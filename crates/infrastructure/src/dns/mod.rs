pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::DohResolver;
pub use transport::{DohTransport, HttpsTransport};
pub use wire::{QueryEncoder, ResponseDecoder, WireCursor};
