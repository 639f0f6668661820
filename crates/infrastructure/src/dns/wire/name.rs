//! Domain name encoding and decoding (RFC 1035 §3.1, §4.1.4)

use super::reader::WireReader;
use rootwalk_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum wire length of a name, terminating zero byte included.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum number of compression pointer jumps followed for one name.
const MAX_POINTER_HOPS: usize = 128;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;
const LITERAL_TAG: u8 = 0x00;

/// Encodes a dotted name as length-prefixed labels followed by a zero byte.
///
/// A single trailing dot is accepted. Compression is never emitted.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(DomainError::UnsupportedEncodeInput(
            "domain name is empty".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::UnsupportedEncodeInput(format!(
                "'{}' contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::UnsupportedEncodeInput(format!(
                "label '{}' is {} bytes, limit is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    if out.len() > MAX_NAME_LEN {
        return Err(DomainError::UnsupportedEncodeInput(format!(
            "'{}' encodes to {} bytes, limit is {}",
            name,
            out.len(),
            MAX_NAME_LEN
        )));
    }

    Ok(out)
}

/// Decodes a name at the reader's position, following compression pointers.
///
/// Pointer targets are resolved against the whole message held by the
/// reader. On success the reader sits just past the name as it appears at
/// the original position (after the first pointer, if any).
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let (name, consumed) = parse_name_at(reader.buffer(), reader.position(), true)?;
    reader.advance(consumed)?;
    Ok(name)
}

/// Decodes a name that is known to contain no compression pointers, such as
/// the question of a query this crate built itself.
pub fn decode_name_uncompressed(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let (name, consumed) = parse_name_at(reader.buffer(), reader.position(), false)?;
    reader.advance(consumed)?;
    Ok(name)
}

/// Returns the dotted name starting at `offset` and the number of bytes it
/// occupies there.
fn parse_name_at(
    buf: &[u8],
    offset: usize,
    follow_pointers: bool,
) -> Result<(String, usize), DomainError> {
    let mut labels: Vec<String> = Vec::new();
    let mut wire_len = 1;
    let mut pos = offset;
    let mut consumed: Option<usize> = None;
    let mut hops = 0;

    loop {
        let len_byte = *buf.get(pos).ok_or(DomainError::truncated(pos, 1))?;

        match len_byte & LABEL_TYPE_MASK {
            POINTER_TAG => {
                if !follow_pointers {
                    return Err(DomainError::InvalidName(format!(
                        "unexpected compression pointer at offset {}",
                        pos
                    )));
                }

                let low = *buf.get(pos + 1).ok_or(DomainError::truncated(pos + 1, 1))?;
                let target = u16::from_be_bytes([len_byte & !LABEL_TYPE_MASK, low]) as usize;

                if target >= buf.len() {
                    return Err(DomainError::InvalidName(format!(
                        "pointer at offset {} targets {}, past the end of a {}-byte message",
                        pos,
                        target,
                        buf.len()
                    )));
                }
                if target >= pos {
                    return Err(DomainError::InvalidName(format!(
                        "pointer at offset {} does not point backwards (target {})",
                        pos, target
                    )));
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::InvalidName(format!(
                        "more than {} compression pointers in one name",
                        MAX_POINTER_HOPS
                    )));
                }

                consumed.get_or_insert(pos + 2 - offset);
                pos = target;
            }
            LITERAL_TAG => {
                if len_byte == 0 {
                    consumed.get_or_insert(pos + 1 - offset);
                    break;
                }

                let len = len_byte as usize;
                let start = pos + 1;
                if start + len > buf.len() {
                    return Err(DomainError::truncated(start, len));
                }

                wire_len += 1 + len;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::InvalidName(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_LEN
                    )));
                }

                labels.push(String::from_utf8_lossy(&buf[start..start + len]).into_owned());
                pos = start + len;
            }
            _ => {
                return Err(DomainError::InvalidName(format!(
                    "reserved label type {:#04x} at offset {}",
                    len_byte, pos
                )));
            }
        }
    }

    Ok((labels.join("."), consumed.unwrap_or(0)))
}
