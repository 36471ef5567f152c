//! Hand-written DNS wire-format codec
//!
//! Only what a stub DoH client needs: building one-question queries and
//! pulling A/AAAA RDATA back out of responses. Names in the answer section
//! are skipped, never reconstructed, so compression pointers cost exactly
//! their two wire bytes here.

pub mod cursor;
pub mod query;
pub mod response;

pub use cursor::WireCursor;
pub use query::QueryEncoder;
pub use response::ResponseDecoder;

/// DNS header flags for a standard query with recursion desired (RD bit).
pub(crate) const FLAGS_RD_QUERY: u16 = 0x0100;

/// QCLASS/CLASS value for Internet.
pub(crate) const CLASS_IN: u16 = 1;

/// Maximum length of a single DNS label (RFC 1035 §2.3.4).
pub(crate) const MAX_LABEL_LEN: usize = 63;

/// Top two bits of a length byte marking a compression pointer (RFC 1035 §4.1.4).
pub(crate) const POINTER_MASK: u8 = 0xC0;
