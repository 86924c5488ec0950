use chrono::NaiveDateTime;

use super::address::{ADDRESSES, Addresses};
use super::contact::ContactDetail;
use crate::error::Result;
use crate::gateway::xml::{FromXml, XmlElement};
use crate::record::{FieldValue, ReadError, Record, nested};
use crate::schema::{EntityDescriptor, FieldDescriptor, ScalarKind};

pub static PERSON_ITEM: EntityDescriptor = EntityDescriptor {
    name: "PersonItem",
    fields: &[
        FieldDescriptor::scalar("Id", ScalarKind::Int32),
        FieldDescriptor::scalar("FirstName", ScalarKind::Text),
        FieldDescriptor::scalar("LastName", ScalarKind::Text),
        FieldDescriptor::scalar("Title", ScalarKind::Text),
        FieldDescriptor::scalar("Nickname", ScalarKind::Text),
        FieldDescriptor::scalar("DateOfBirth", ScalarKind::DateTime),
        FieldDescriptor::scalar("IsEmployee", ScalarKind::Bool),
        FieldDescriptor::scalar("EmployeeNumber", ScalarKind::Int64),
        FieldDescriptor::scalar("CustomerId", ScalarKind::Int32),
        FieldDescriptor::scalar("Comment", ScalarKind::Text),
        FieldDescriptor::scalar("Url", ScalarKind::Text),
        FieldDescriptor::scalar("ExternalId", ScalarKind::Text),
        FieldDescriptor::composite("Addresses", &ADDRESSES),
        FieldDescriptor::contact_list("EmailAddresses"),
        FieldDescriptor::contact_list("PhoneNumbers"),
        FieldDescriptor::unsupported("Relations", "RelationItem[]"),
        FieldDescriptor::scalar("Password", ScalarKind::Text).write_only(),
    ],
};

/// A person from the person service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonItem {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub nickname: Option<String>,
    pub date_of_birth: Option<NaiveDateTime>,
    pub is_employee: Option<bool>,
    pub employee_number: Option<i64>,
    pub customer_id: Option<i32>,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub addresses: Option<Addresses>,
    pub email_addresses: Vec<ContactDetail>,
    pub phone_numbers: Vec<ContactDetail>,
}

impl Record for PersonItem {
    fn descriptor(&self) -> &'static EntityDescriptor {
        &PERSON_ITEM
    }

    fn read(&self, member: &str) -> std::result::Result<FieldValue<'_>, ReadError> {
        match member {
            "Id" => Ok(self.id.into()),
            "FirstName" => Ok((&self.first_name).into()),
            "LastName" => Ok((&self.last_name).into()),
            "Title" => Ok((&self.title).into()),
            "Nickname" => Ok((&self.nickname).into()),
            "DateOfBirth" => Ok(self.date_of_birth.into()),
            "IsEmployee" => Ok(self.is_employee.into()),
            "EmployeeNumber" => Ok(self.employee_number.into()),
            "CustomerId" => Ok(self.customer_id.into()),
            "Comment" => Ok((&self.comment).into()),
            "Url" => Ok((&self.url).into()),
            "ExternalId" => Ok((&self.external_id).into()),
            "Addresses" => Ok(nested(&self.addresses)),
            "EmailAddresses" => Ok(self.email_addresses.as_slice().into()),
            "PhoneNumbers" => Ok(self.phone_numbers.as_slice().into()),
            other => Err(ReadError::Unreadable(other.to_string())),
        }
    }
}

impl FromXml for PersonItem {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.int32("Id"),
            first_name: element.string("FirstName"),
            last_name: element.string("LastName"),
            title: element.string("Title"),
            nickname: element.string("Nickname"),
            date_of_birth: element.date_time("DateOfBirth"),
            is_employee: element.boolean("IsEmployee"),
            employee_number: element.int64("EmployeeNumber"),
            customer_id: element.int32("CustomerId"),
            comment: element.string("Comment"),
            url: element.string("Url"),
            external_id: element.string("ExternalId"),
            addresses: element.record("Addresses")?,
            email_addresses: element.list("EmailAddresses")?,
            phone_numbers: element.list("PhoneNumbers")?,
        })
    }
}
