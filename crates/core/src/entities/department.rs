use crate::error::Result;
use crate::gateway::xml::{FromXml, XmlElement};
use crate::record::{FieldValue, ReadError, Record};
use crate::schema::{EntityDescriptor, FieldDescriptor, ScalarKind};

pub static DEPARTMENT: EntityDescriptor = EntityDescriptor {
    name: "Department",
    fields: &[
        FieldDescriptor::scalar("Id", ScalarKind::Int32),
        FieldDescriptor::scalar("Name", ScalarKind::Text),
    ],
};

/// A department from the client service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Department {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl Record for Department {
    fn descriptor(&self) -> &'static EntityDescriptor {
        &DEPARTMENT
    }

    fn read(&self, member: &str) -> std::result::Result<FieldValue<'_>, ReadError> {
        match member {
            "Id" => Ok(self.id.into()),
            "Name" => Ok((&self.name).into()),
            other => Err(ReadError::Unreadable(other.to_string())),
        }
    }
}

impl FromXml for Department {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.int32("Id"),
            name: element.string("Name"),
        })
    }
}
