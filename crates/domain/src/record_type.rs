use std::fmt;

/// Address record types this resolver queries for.
///
/// QTYPE values follow RFC 1035 (A) and RFC 3596 (AAAA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
}

impl RecordType {
    /// Wire-format QTYPE value.
    pub fn qtype(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::AAAA => 28,
        }
    }

    pub fn from_qtype(value: u16) -> Option<RecordType> {
        match value {
            1 => Some(RecordType::A),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
        }
    }

    /// Exact RDATA length of a well-formed record of this type.
    pub fn rdata_len(&self) -> usize {
        match self {
            RecordType::A => 4,
            RecordType::AAAA => 16,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
