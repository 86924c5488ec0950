use crate::error::Result;
use crate::gateway::xml::{FromXml, XmlElement};

/// One entry of an email address or phone number list.
///
/// Lists of these collapse to the first entry's `value` in a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetail {
    pub description: Option<String>,
    pub value: Option<String>,
}

impl FromXml for ContactDetail {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            description: element.string("Description"),
            value: element.string("Value"),
        })
    }
}
