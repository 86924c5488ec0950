use crate::error::Result;
use crate::gateway::xml::{FromXml, XmlElement};
use crate::record::{FieldValue, ReadError, Record, nested};
use crate::schema::{EntityDescriptor, FieldDescriptor, ScalarKind};

pub static ADDRESS: EntityDescriptor = EntityDescriptor {
    name: "Address",
    fields: &[
        FieldDescriptor::scalar("Street", ScalarKind::Text),
        FieldDescriptor::scalar("State", ScalarKind::Text),
        FieldDescriptor::scalar("PostalCode", ScalarKind::Text),
        FieldDescriptor::scalar("PostalArea", ScalarKind::Text),
        FieldDescriptor::scalar("City", ScalarKind::Text),
        FieldDescriptor::scalar("Country", ScalarKind::Text),
    ],
};

pub static ADDRESSES: EntityDescriptor = EntityDescriptor {
    name: "Addresses",
    fields: &[
        FieldDescriptor::composite("Post", &ADDRESS),
        FieldDescriptor::composite("Delivery", &ADDRESS),
        FieldDescriptor::composite("Visit", &ADDRESS),
        FieldDescriptor::composite("Invoice", &ADDRESS),
    ],
};

/// A postal address
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub postal_area: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Record for Address {
    fn descriptor(&self) -> &'static EntityDescriptor {
        &ADDRESS
    }

    fn read(&self, member: &str) -> std::result::Result<FieldValue<'_>, ReadError> {
        match member {
            "Street" => Ok((&self.street).into()),
            "State" => Ok((&self.state).into()),
            "PostalCode" => Ok((&self.postal_code).into()),
            "PostalArea" => Ok((&self.postal_area).into()),
            "City" => Ok((&self.city).into()),
            "Country" => Ok((&self.country).into()),
            other => Err(ReadError::Unreadable(other.to_string())),
        }
    }
}

impl FromXml for Address {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            street: element.string("Street"),
            state: element.string("State"),
            postal_code: element.string("PostalCode"),
            postal_area: element.string("PostalArea"),
            city: element.string("City"),
            country: element.string("Country"),
        })
    }
}

/// The address set attached to persons and invoices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Addresses {
    pub post: Option<Address>,
    pub delivery: Option<Address>,
    pub visit: Option<Address>,
    pub invoice: Option<Address>,
}

impl Record for Addresses {
    fn descriptor(&self) -> &'static EntityDescriptor {
        &ADDRESSES
    }

    fn read(&self, member: &str) -> std::result::Result<FieldValue<'_>, ReadError> {
        match member {
            "Post" => Ok(nested(&self.post)),
            "Delivery" => Ok(nested(&self.delivery)),
            "Visit" => Ok(nested(&self.visit)),
            "Invoice" => Ok(nested(&self.invoice)),
            other => Err(ReadError::Unreadable(other.to_string())),
        }
    }
}

impl FromXml for Addresses {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            post: element.record("Post")?,
            delivery: element.record("Delivery")?,
            visit: element.record("Visit")?,
            invoice: element.record("Invoice")?,
        })
    }
}
