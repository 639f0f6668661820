use rootwalk_domain::{DomainError, Message, RecordData, RecordType};
use std::net::Ipv4Addr;

/// What a response tells the resolver to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome<'m> {
    /// An answer record of the requested type.
    Answer(&'m RecordData),
    /// An A record in the additional section: query that address next.
    Glue(Ipv4Addr),
    /// An NS record in the authority section with no address supplied.
    Referral(&'m str),
    /// Nothing usable.
    DeadEnd,
}

/// Classifies a response for `record_type`.
///
/// Checks run in a fixed order and the first match wins: answer, glue,
/// name-only referral, dead end. Within a section the first matching record
/// is used.
pub fn classify(message: &Message, record_type: RecordType) -> ResponseOutcome<'_> {
    if let Some(answer) = message
        .answers()
        .iter()
        .find(|record| record.record_type == record_type)
    {
        return ResponseOutcome::Answer(&answer.data);
    }

    if let Some(glue) = message
        .additionals()
        .iter()
        .filter(|record| record.record_type == RecordType::A)
        .find_map(|record| record.data.as_ipv4())
    {
        return ResponseOutcome::Glue(glue);
    }

    if let Some(nameserver) = message
        .authorities()
        .iter()
        .filter(|record| record.record_type == RecordType::NS)
        .find_map(|record| record.data.as_name())
    {
        return ResponseOutcome::Referral(nameserver);
    }

    ResponseOutcome::DeadEnd
}

/// Error for a response that left nowhere to go.
///
/// An NXDOMAIN response code is reported as such; anything else is a generic
/// unusable response.
pub fn dead_end_error(message: &Message, domain: &str, nameserver: Ipv4Addr) -> DomainError {
    if message.header().is_nxdomain() {
        DomainError::NxDomain
    } else {
        DomainError::NoUsableResponse {
            domain: domain.to_string(),
            nameserver: nameserver.to_string(),
        }
    }
}
