mod header;
mod question;
mod record;

pub use header::Header;
pub use question::{Question, CLASS_IN};
pub use record::{Record, RecordData};

use std::fmt;

/// A decoded or freshly built DNS message.
///
/// Constructed once per encode or decode and never mutated afterwards; the
/// section accessors only hand out shared slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authorities: Vec<Record>,
    additionals: Vec<Record>,
}

impl Message {
    pub fn new(
        header: Header,
        questions: Vec<Question>,
        answers: Vec<Record>,
        authorities: Vec<Record>,
        additionals: Vec<Record>,
    ) -> Self {
        Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; id: {}, flags: {:#06x}, rcode: {}",
            self.header.id,
            self.header.flags,
            self.header.rcode()
        )?;
        writeln!(
            f,
            ";; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.header.num_questions,
            self.header.num_answers,
            self.header.num_authorities,
            self.header.num_additionals
        )?;

        writeln!(f, "\n;; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(f, "{}", question)?;
        }

        for (title, records) in [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additionals),
        ] {
            if records.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {} SECTION:", title)?;
            for record in records {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}
