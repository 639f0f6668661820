//! DNS Message Builder
//!
//! Serializes single-question query messages in wire format.

use super::name::encode_name;
use super::HEADER_LEN;
use rootwalk_domain::{DomainError, Header, Question, RecordType};

/// RD (Recursion Desired) bit in the header flags.
pub const FLAG_RECURSION_DESIRED: u16 = 0x0100;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random ID and return the ID alongside the bytes,
    /// for matching the response.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
        flags: u16,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_for_id(id, domain, record_type, flags)?;
        Ok((id, bytes))
    }

    /// Build a query with a caller-chosen ID and flags.
    pub fn build_query_for_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
        flags: u16,
    ) -> Result<Vec<u8>, DomainError> {
        let header = Header {
            flags,
            ..Header::query(id)
        };
        let question = Question::new(domain, record_type);

        let question_bytes = Self::encode_question(&question)?;
        let mut output = Vec::with_capacity(HEADER_LEN + question_bytes.len());
        output.extend_from_slice(&Self::encode_header(&header));
        output.extend_from_slice(&question_bytes);
        Ok(output)
    }

    /// Six big-endian u16 fields: id, flags, then the four section counts.
    pub fn encode_header(header: &Header) -> [u8; HEADER_LEN] {
        let fields = [
            header.id,
            header.flags,
            header.num_questions,
            header.num_answers,
            header.num_authorities,
            header.num_additionals,
        ];

        let mut out = [0u8; HEADER_LEN];
        for (chunk, field) in out.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        out
    }

    pub fn encode_question(question: &Question) -> Result<Vec<u8>, DomainError> {
        let mut output = encode_name(&question.name)?;
        output.extend_from_slice(&question.record_type.to_u16().to_be_bytes());
        output.extend_from_slice(&question.class.to_be_bytes());
        Ok(output)
    }
}
