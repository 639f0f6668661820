//! DNS Message Parser
//!
//! Decodes complete messages (header, questions and the three record
//! sections). Every read is bounds-checked; a short buffer is always an
//! error, never a partially filled message.

use super::name::{decode_name, decode_name_uncompressed};
use super::reader::WireReader;
use rootwalk_domain::{DomainError, Header, Message, Question, Record, RecordData, RecordType};
use std::net::Ipv4Addr;

pub struct MessageParser;

impl MessageParser {
    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        let mut reader = WireReader::new(bytes);
        let header = Self::parse_header(&mut reader)?;

        let questions = (0..header.num_questions)
            .map(|_| Self::parse_question(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = Self::parse_records(&mut reader, header.num_answers)?;
        let authorities = Self::parse_records(&mut reader, header.num_authorities)?;
        let additionals = Self::parse_records(&mut reader, header.num_additionals)?;

        Ok(Message::new(
            header,
            questions,
            answers,
            authorities,
            additionals,
        ))
    }

    pub fn parse_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
        Ok(Header {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            num_questions: reader.read_u16()?,
            num_answers: reader.read_u16()?,
            num_authorities: reader.read_u16()?,
            num_additionals: reader.read_u16()?,
        })
    }

    pub fn parse_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
        let name = decode_name(reader)?;
        Self::finish_question(reader, name)
    }

    /// Question parse for messages this crate built itself, where the name
    /// is known to be uncompressed.
    pub fn parse_question_uncompressed(
        reader: &mut WireReader<'_>,
    ) -> Result<Question, DomainError> {
        let name = decode_name_uncompressed(reader)?;
        Self::finish_question(reader, name)
    }

    fn finish_question(reader: &mut WireReader<'_>, name: String) -> Result<Question, DomainError> {
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let class = reader.read_u16()?;
        Ok(Question {
            name,
            record_type,
            class,
        })
    }

    pub fn parse_record(reader: &mut WireReader<'_>) -> Result<Record, DomainError> {
        let name = decode_name(reader)?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let data_len = reader.read_u16()? as usize;

        let data_start = reader.position();
        let payload = reader.read_bytes(data_len)?;

        let data = match record_type {
            RecordType::A if payload.len() == 4 => {
                RecordData::Ipv4(Ipv4Addr::new(payload[0], payload[1], payload[2], payload[3]))
            }
            RecordType::NS => {
                // The name may point anywhere earlier in the message, so it is
                // decoded against the full buffer; the outer cursor already
                // sits at data_start + data_len.
                let mut rdata = WireReader::at(reader.buffer(), data_start);
                let name = decode_name(&mut rdata)?;

                let data_end = data_start + data_len;
                if rdata.position() > data_end {
                    return Err(DomainError::InvalidName(format!(
                        "NS name at offset {} runs past its {}-byte payload",
                        data_start, data_len
                    )));
                }
                RecordData::Name(name)
            }
            _ => RecordData::Opaque(payload.to_vec()),
        };

        Ok(Record {
            name,
            record_type,
            class,
            ttl,
            data,
        })
    }

    fn parse_records(reader: &mut WireReader<'_>, count: u16) -> Result<Vec<Record>, DomainError> {
        let mut records = Vec::with_capacity(count.min(64) as usize);
        for _ in 0..count {
            records.push(Self::parse_record(reader)?);
        }
        Ok(records)
    }
}
