use crate::RecordType;
use std::fmt;

/// The Internet class.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: CLASS_IN,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ";{}.\t\t{}\t{}", self.name, class_name(self.class), self.record_type)
    }
}

pub(crate) fn class_name(class: u16) -> String {
    match class {
        CLASS_IN => "IN".to_string(),
        other => format!("CLASS{}", other),
    }
}
