//! Remote entity types and their member tables
//!
//! Each type mirrors the shape the 24SevenOffice services return, implements
//! [`Record`](crate::record::Record) for value access and
//! [`FromXml`](crate::gateway::xml::FromXml) for decoding.

pub mod address;
pub mod contact;
pub mod department;
pub mod invoice;
pub mod person;

pub use address::{ADDRESS, ADDRESSES, Address, Addresses};
pub use contact::ContactDetail;
pub use department::{DEPARTMENT, Department};
pub use invoice::{INVOICE_ORDER, InvoiceOrder};
pub use person::{PERSON_ITEM, PersonItem};

use crate::schema::EntityDescriptor;
use crate::types::EntityKind;

/// Member table of the remote type behind `kind`.
pub fn descriptor_for(kind: EntityKind) -> Option<&'static EntityDescriptor> {
    match kind {
        EntityKind::Invoices => Some(&INVOICE_ORDER),
        EntityKind::Persons => Some(&PERSON_ITEM),
        EntityKind::Departments => Some(&DEPARTMENT),
        EntityKind::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::xml::{FromXml, XmlElement};
    use crate::record::{Record, extract};
    use crate::schema::project;
    use crate::types::{ColumnDefinition, Value};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn render(columns: &[ColumnDefinition]) -> String {
        columns
            .iter()
            .map(|c| format!("{} {} {}", c.ordinal, c.name, c.column_type))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_address(city: &str) -> Address {
        Address {
            street: Some("Storgata 1".to_string()),
            postal_code: Some("0155".to_string()),
            city: Some(city.to_string()),
            country: Some("NO".to_string()),
            ..Default::default()
        }
    }

    fn sample_person() -> PersonItem {
        PersonItem {
            id: Some(3005346),
            first_name: Some("Kari".to_string()),
            last_name: Some("Nordmann".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 2, 3).and_then(|d| d.and_hms_opt(0, 0, 0)),
            is_employee: Some(true),
            employee_number: Some(12_345_678_901),
            addresses: Some(Addresses {
                post: Some(sample_address("Oslo")),
                visit: Some(sample_address("Bergen")),
                ..Default::default()
            }),
            email_addresses: vec![
                ContactDetail {
                    description: Some("Work".to_string()),
                    value: Some("kari@example.com".to_string()),
                },
                ContactDetail {
                    description: Some("Home".to_string()),
                    value: Some("kari@home.example".to_string()),
                },
            ],
            ..Default::default()
        }
    }

    fn sample_invoice() -> InvoiceOrder {
        InvoiceOrder {
            order_id: Some(1001),
            customer_id: Some(55),
            customer_name: Some("Acme AS".to_string()),
            ocr: Some(100_100_100_100),
            order_total_inc_vat: Some(Decimal::new(125_000, 2)),
            order_total_vat: Some(Decimal::new(25_000, 2)),
            exchange_rate: Some(1.0),
            paid: Some(false),
            addresses: Some(Addresses {
                invoice: Some(sample_address("Trondheim")),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_department_schema() {
        insta::assert_snapshot!(render(&project(&DEPARTMENT)), @r###"
        0 Id Integer
        1 Name Text
        "###);
    }

    #[test]
    fn test_person_schema_flattens_addresses() {
        let columns = project(&PERSON_ITEM);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

        // 12 scalars, 4 addresses of 6 members, 2 contact lists
        assert_eq!(columns.len(), 12 + 4 * 6 + 2);
        assert_eq!(names[12], "Addresses.Post.Street");
        assert_eq!(names[35], "Addresses.Invoice.Country");
        assert_eq!(names[36], "EmailAddresses");
        assert_eq!(names[37], "PhoneNumbers");
        assert!(!names.contains(&"Relations"));
        assert!(!names.contains(&"Password"));
    }

    #[test]
    fn test_invoice_schema_skips_unsupported_members() {
        let columns = project(&INVOICE_ORDER);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

        assert!(!names.contains(&"OrderStatus"));
        assert!(!names.contains(&"InvoiceRows"));
        let ocr = columns.iter().find(|c| c.name == "OCR").unwrap();
        assert_eq!(ocr.column_type.to_string(), "Text");
        let total = columns.iter().find(|c| c.name == "OrderTotalIncVat").unwrap();
        assert_eq!(total.column_type.to_string(), "Real");
    }

    #[test]
    fn test_every_record_reads_every_projected_column() {
        let person = sample_person();
        let invoice = sample_invoice();
        let department = Department {
            id: Some(1),
            name: Some("Sales".to_string()),
        };
        let records: [&dyn Record; 3] = [&person, &invoice, &department];

        for record in records {
            for column in project(record.descriptor()) {
                let value = extract(record, &column.name).unwrap();
                if let Some(value) = value {
                    assert_eq!(value.column_type(), column.column_type, "column {}", column.name);
                }
            }
        }
    }

    #[test]
    fn test_person_values() {
        let person = sample_person();
        assert_eq!(
            extract(&person, "Addresses.Visit.City").unwrap(),
            Some(Value::Text("Bergen".to_string()))
        );
        assert_eq!(extract(&person, "Addresses.Delivery.City").unwrap(), None);
        assert_eq!(
            extract(&person, "EmailAddresses").unwrap(),
            Some(Value::Text("kari@example.com".to_string()))
        );
        assert_eq!(extract(&person, "PhoneNumbers").unwrap(), None);
        assert_eq!(
            extract(&person, "EmployeeNumber").unwrap(),
            Some(Value::Text("12345678901".to_string()))
        );
        assert_eq!(extract(&person, "Password").unwrap(), None);
    }

    #[test]
    fn test_invoice_values() {
        let invoice = sample_invoice();
        assert_eq!(
            extract(&invoice, "OrderTotalIncVat").unwrap(),
            Some(Value::Real(1250.0))
        );
        assert_eq!(
            extract(&invoice, "OCR").unwrap(),
            Some(Value::Text("100100100100".to_string()))
        );
        assert_eq!(
            extract(&invoice, "Addresses.Invoice.City").unwrap(),
            Some(Value::Text("Trondheim".to_string()))
        );
    }

    #[test]
    fn test_decode_person_from_xml() {
        let xml = r#"<PersonItem>
  <Id>3005346</Id>
  <FirstName>Kari</FirstName>
  <LastName>Nordmann</LastName>
  <DateOfBirth>1985-02-03T00:00:00</DateOfBirth>
  <IsEmployee>true</IsEmployee>
  <EmployeeNumber>12345678901</EmployeeNumber>
  <Addresses>
    <Post><Street>Storgata 1</Street><City>Oslo</City></Post>
  </Addresses>
  <EmailAddresses>
    <EmailAddress><Description>Work</Description><Value>kari@example.com</Value></EmailAddress>
  </EmailAddresses>
  <PhoneNumbers />
  <Relations><RelationItem><Id>1</Id></RelationItem></Relations>
</PersonItem>"#;

        let element = XmlElement::parse(xml).unwrap();
        let person = PersonItem::from_xml(&element).unwrap();

        assert_eq!(person.id, Some(3005346));
        assert_eq!(person.employee_number, Some(12_345_678_901));
        assert_eq!(
            person
                .addresses
                .as_ref()
                .and_then(|a| a.post.as_ref())
                .and_then(|p| p.city.as_deref()),
            Some("Oslo")
        );
        assert_eq!(person.email_addresses.len(), 1);
        assert!(person.phone_numbers.is_empty());
        assert_eq!(person.title, None);
    }

    #[test]
    fn test_decode_invoice_from_xml() {
        let xml = r#"<InvoiceOrder>
  <OrderId>1001</OrderId>
  <CustomerName>Acme AS</CustomerName>
  <OCR>100100100100</OCR>
  <DateChanged>2024-01-31T10:15:00</DateChanged>
  <OrderStatus>Invoiced</OrderStatus>
  <OrderTotalIncVat>1250.00</OrderTotalIncVat>
  <ExchangeRate>1</ExchangeRate>
  <Paid>false</Paid>
</InvoiceOrder>"#;

        let element = XmlElement::parse(xml).unwrap();
        let invoice = InvoiceOrder::from_xml(&element).unwrap();

        assert_eq!(invoice.order_id, Some(1001));
        assert_eq!(invoice.ocr, Some(100_100_100_100));
        assert_eq!(invoice.order_total_inc_vat, Some(Decimal::new(125_000, 2)));
        assert_eq!(invoice.exchange_rate, Some(1.0));
        assert_eq!(invoice.paid, Some(false));
        assert!(invoice.addresses.is_none());
    }

    #[test]
    fn test_descriptor_for_kind() {
        assert_eq!(
            descriptor_for(EntityKind::Departments).map(|d| d.name),
            Some("Department")
        );
        assert_eq!(
            descriptor_for(EntityKind::Persons).map(|d| d.name),
            Some("PersonItem")
        );
        assert_eq!(
            descriptor_for(EntityKind::Invoices).map(|d| d.name),
            Some("InvoiceOrder")
        );
        assert!(descriptor_for(EntityKind::Unknown).is_none());
    }
}
