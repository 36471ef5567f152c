use dohgen_domain::DomainError;

use super::POINTER_MASK;

/// Forward-only cursor over a DNS message.
///
/// Every read and skip is bounds-checked; advancing past the end of the
/// buffer yields `DomainError::Malformed` and the caller is expected to
/// stop processing the message. The cursor borrows the message for the
/// duration of one decode call and is never shared across calls.
pub struct WireCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes left between the cursor and the end of the message.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn check(&self, n: usize) -> Result<(), DomainError> {
        if self.remaining() < n {
            return Err(DomainError::Malformed(format!(
                "need {} bytes at offset {}, message is {} bytes",
                n,
                self.pos,
                self.data.len()
            )));
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        self.check(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        self.check(2)?;
        let value = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        self.check(4)?;
        let value = u32::from_be_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(value)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        self.check(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }

    /// Advance past a wire-format name without reconstructing it.
    ///
    /// A zero length byte ends the name. A length byte with the top two
    /// bits set is a compression pointer: the name occupies exactly two
    /// bytes on the wire at this position, so the cursor steps over both
    /// and does not follow the offset. Anything else is a plain label of
    /// that many bytes.
    pub fn skip_name(&mut self) -> Result<(), DomainError> {
        loop {
            let len = self.read_u8()?;
            if len == 0 {
                return Ok(());
            }
            if len & POINTER_MASK == POINTER_MASK {
                // Second pointer byte (low half of the 14-bit offset).
                self.skip(1)?;
                return Ok(());
            }
            self.skip(len as usize)?;
        }
    }
}
