use dohgen_domain::{DomainError, RecordType};

use super::{CLASS_IN, FLAGS_RD_QUERY, MAX_LABEL_LEN};

/// Builds DNS query messages in wire format
///
/// Produces a standard recursive query with a single question: fixed
/// 12-byte header, QNAME as length-prefixed labels, then QTYPE and
/// QCLASS=IN. Pure function of its inputs apart from the random ID.
pub struct QueryEncoder;

impl QueryEncoder {
    /// Encode a query with a random transaction ID.
    pub fn encode(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        Self::encode_with_id(domain, record_type, fastrand::u16(..))
    }

    /// Encode a query with a caller-chosen transaction ID.
    ///
    /// The ID only has to be stable within one query/response pair;
    /// tests use this for byte-exact assertions.
    pub fn encode_with_id(
        domain: &str,
        record_type: RecordType,
        id: u16,
    ) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(12 + domain.len() + 2 + 4);

        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAGS_RD_QUERY.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

        Self::encode_name(domain, &mut buf)?;

        buf.extend_from_slice(&record_type.qtype().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(buf)
    }

    /// Append `domain` as length-prefixed labels plus the root terminator.
    fn encode_name(domain: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        if domain.is_empty() {
            return Err(DomainError::InvalidName("empty domain".to_string()));
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidName(format!(
                    "empty label in '{}'",
                    domain
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        Ok(())
    }
}
