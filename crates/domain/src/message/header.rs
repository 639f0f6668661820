/// Fixed 12-byte DNS header.
///
/// `flags` is carried opaquely; queries built by this crate always send 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

/// RCODE value signalling a non-existent domain.
const RCODE_NXDOMAIN: u8 = 3;

impl Header {
    /// Header for a single-question query with all flags cleared.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            num_questions: 1,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    /// Response code from the low four bits of `flags`.
    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode() == RCODE_NXDOMAIN
    }
}
