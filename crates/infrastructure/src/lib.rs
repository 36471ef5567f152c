//! Dohgen Infrastructure Layer
//!
//! Wire-format DNS codec, DNS-over-HTTPS transport, the resolver tying the
//! two together, and the hosts-file I/O around them.

pub mod dns;
pub mod hosts;
