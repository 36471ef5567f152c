//! Shared fixtures: a scripted DoH transport and wire-format response builders.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use dohgen_domain::{DomainError, RecordType};
use dohgen_infrastructure::dns::DohTransport;

/// Transport that replays crafted responses keyed by (qname, qtype),
/// decoding the question straight from the query bytes it receives.
pub struct ScriptedTransport {
    responses: HashMap<(String, u16), Vec<u8>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_answer(mut self, domain: &str, record_type: RecordType, rdata: &[u8]) -> Self {
        let response = crafted_response(domain, record_type.qtype(), &[rdata]);
        self.responses
            .insert((domain.to_string(), record_type.qtype()), response);
        self
    }

    pub fn with_answers(
        mut self,
        domain: &str,
        record_type: RecordType,
        rdatas: &[&[u8]],
    ) -> Self {
        let response = crafted_response(domain, record_type.qtype(), rdatas);
        self.responses
            .insert((domain.to_string(), record_type.qtype()), response);
        self
    }
}

#[async_trait]
impl DohTransport for ScriptedTransport {
    async fn exchange(&self, query: &[u8], _timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let (qname, qtype) = parse_question(query);
        match self.responses.get(&(qname.clone(), qtype)) {
            Some(response) => Ok(response.clone()),
            // Unscripted lookups get a clean NODATA-style answer.
            None => Ok(crafted_response(&qname, qtype, &[])),
        }
    }

    fn endpoint(&self) -> &str {
        "https://scripted.invalid/dns-query"
    }
}

/// Pull (qname, qtype) out of an encoded one-question query.
fn parse_question(query: &[u8]) -> (String, u16) {
    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = query[pos] as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(&query[pos..pos + len]).into_owned());
        pos += len;
    }
    let qtype = u16::from_be_bytes([query[pos], query[pos + 1]]);
    (labels.join("."), qtype)
}

/// Build a response message: echoed question for `domain`, one answer per
/// RDATA with the answer names compressed as pointers to offset 12.
pub fn crafted_response(domain: &str, rtype: u16, rdatas: &[&[u8]]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&0x1234u16.to_be_bytes());
    buf.extend_from_slice(&0x8180u16.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&(rdatas.len() as u16).to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());

    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    buf.extend_from_slice(&rtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());

    for rdata in rdatas {
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&rtype.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&300u32.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(rdata);
    }
    buf
}
