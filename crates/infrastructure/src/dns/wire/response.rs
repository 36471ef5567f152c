use dohgen_domain::{DomainError, RecordType};
use tracing::{debug, trace};

use super::cursor::WireCursor;
use super::CLASS_IN;

/// Lenient extractor of address records from DNS responses
///
/// DoH servers are variable and occasionally hostile; a structurally broken
/// response must never take down the resolution loop. Decoding therefore
/// stops at the first malformed field and returns whatever was already
/// extracted, down to an empty list.
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Extract all RDATA of `expected` type from the answer section,
    /// formatted as address strings, in record order. Duplicate records
    /// yield duplicate strings; dedup is the caller's merging concern.
    pub fn extract_addresses(message: &[u8], expected: RecordType) -> Vec<String> {
        let mut addresses = Vec::new();
        if let Err(e) = Self::walk_answers(message, expected, &mut addresses) {
            debug!(
                error = %e,
                collected = addresses.len(),
                "Stopped decoding malformed DNS response"
            );
        }
        addresses
    }

    fn walk_answers(
        message: &[u8],
        expected: RecordType,
        addresses: &mut Vec<String>,
    ) -> Result<(), DomainError> {
        let mut cursor = WireCursor::new(message);

        // Header: ID + flags, counts, NSCOUNT + ARCOUNT unused.
        cursor.skip(4)?;
        let qdcount = cursor.read_u16()?;
        let ancount = cursor.read_u16()?;
        cursor.skip(4)?;

        for _ in 0..qdcount {
            cursor.skip_name()?;
            cursor.skip(4)?; // QTYPE + QCLASS
        }

        for _ in 0..ancount {
            cursor.skip_name()?;
            let rtype = cursor.read_u16()?;
            let class = cursor.read_u16()?;
            cursor.read_u32()?; // TTL, unused here
            let rdlength = cursor.read_u16()? as usize;

            if rtype == expected.qtype() && class == CLASS_IN {
                let rdata = cursor.read_bytes(rdlength)?;
                match format_rdata(rdata) {
                    Some(address) => addresses.push(address),
                    None => trace!(
                        rdlength = rdlength,
                        record_type = %expected,
                        "RDATA length does not match an address, skipping record"
                    ),
                }
            } else {
                cursor.skip(rdlength)?;
            }
        }
        Ok(())
    }
}

/// Render address RDATA as text: dotted decimal for 4 bytes, 8 groups of
/// lowercase hex joined by `:` for 16. Not canonical IPv6 (no `::`
/// folding); callers wanting RFC 5952 form must post-process.
fn format_rdata(rdata: &[u8]) -> Option<String> {
    match rdata.len() {
        4 => Some(format!("{}.{}.{}.{}", rdata[0], rdata[1], rdata[2], rdata[3])),
        16 => {
            let groups: Vec<String> = rdata
                .chunks_exact(2)
                .map(|pair| format!("{:x}", u16::from_be_bytes([pair[0], pair[1]])))
                .collect();
            Some(groups.join(":"))
        }
        _ => None,
    }
}
