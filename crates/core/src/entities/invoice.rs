use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::address::{ADDRESSES, Addresses};
use crate::error::Result;
use crate::gateway::xml::{FromXml, XmlElement};
use crate::record::{FieldValue, ReadError, Record, nested};
use crate::schema::{EntityDescriptor, FieldDescriptor, ScalarKind};

pub static INVOICE_ORDER: EntityDescriptor = EntityDescriptor {
    name: "InvoiceOrder",
    fields: &[
        FieldDescriptor::scalar("OrderId", ScalarKind::Int32),
        FieldDescriptor::scalar("CustomerId", ScalarKind::Int32),
        FieldDescriptor::scalar("CustomerName", ScalarKind::Text),
        FieldDescriptor::scalar("InvoiceId", ScalarKind::Int32),
        FieldDescriptor::scalar("OCR", ScalarKind::Int64),
        FieldDescriptor::scalar("DateOrdered", ScalarKind::DateTime),
        FieldDescriptor::scalar("DateInvoiced", ScalarKind::DateTime),
        FieldDescriptor::scalar("DateChanged", ScalarKind::DateTime),
        FieldDescriptor::unsupported("OrderStatus", "OrderSlipStateType"),
        FieldDescriptor::scalar("OrderTotalIncVat", ScalarKind::Decimal),
        FieldDescriptor::scalar("OrderTotalVat", ScalarKind::Decimal),
        FieldDescriptor::scalar("Currency", ScalarKind::Text),
        FieldDescriptor::scalar("ExchangeRate", ScalarKind::Double),
        FieldDescriptor::scalar("PaymentTime", ScalarKind::Int32),
        FieldDescriptor::scalar("Paid", ScalarKind::Bool),
        FieldDescriptor::scalar("YourReference", ScalarKind::Text),
        FieldDescriptor::scalar("OurReference", ScalarKind::Int32),
        FieldDescriptor::composite("Addresses", &ADDRESSES),
        FieldDescriptor::unsupported("InvoiceRows", "InvoiceRow[]"),
    ],
};

/// An invoice from the invoice service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceOrder {
    pub order_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub customer_name: Option<String>,
    pub invoice_id: Option<i32>,
    pub ocr: Option<i64>,
    pub date_ordered: Option<NaiveDateTime>,
    pub date_invoiced: Option<NaiveDateTime>,
    pub date_changed: Option<NaiveDateTime>,
    pub order_total_inc_vat: Option<Decimal>,
    pub order_total_vat: Option<Decimal>,
    pub currency: Option<String>,
    pub exchange_rate: Option<f64>,
    pub payment_time: Option<i32>,
    pub paid: Option<bool>,
    pub your_reference: Option<String>,
    pub our_reference: Option<i32>,
    pub addresses: Option<Addresses>,
}

impl Record for InvoiceOrder {
    fn descriptor(&self) -> &'static EntityDescriptor {
        &INVOICE_ORDER
    }

    fn read(&self, member: &str) -> std::result::Result<FieldValue<'_>, ReadError> {
        match member {
            "OrderId" => Ok(self.order_id.into()),
            "CustomerId" => Ok(self.customer_id.into()),
            "CustomerName" => Ok((&self.customer_name).into()),
            "InvoiceId" => Ok(self.invoice_id.into()),
            "OCR" => Ok(self.ocr.into()),
            "DateOrdered" => Ok(self.date_ordered.into()),
            "DateInvoiced" => Ok(self.date_invoiced.into()),
            "DateChanged" => Ok(self.date_changed.into()),
            "OrderTotalIncVat" => Ok(self.order_total_inc_vat.into()),
            "OrderTotalVat" => Ok(self.order_total_vat.into()),
            "Currency" => Ok((&self.currency).into()),
            "ExchangeRate" => Ok(self.exchange_rate.into()),
            "PaymentTime" => Ok(self.payment_time.into()),
            "Paid" => Ok(self.paid.into()),
            "YourReference" => Ok((&self.your_reference).into()),
            "OurReference" => Ok(self.our_reference.into()),
            "Addresses" => Ok(nested(&self.addresses)),
            other => Err(ReadError::Unreadable(other.to_string())),
        }
    }
}

impl FromXml for InvoiceOrder {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            order_id: element.int32("OrderId"),
            customer_id: element.int32("CustomerId"),
            customer_name: element.string("CustomerName"),
            invoice_id: element.int32("InvoiceId"),
            ocr: element.int64("OCR"),
            date_ordered: element.date_time("DateOrdered"),
            date_invoiced: element.date_time("DateInvoiced"),
            date_changed: element.date_time("DateChanged"),
            order_total_inc_vat: element.decimal("OrderTotalIncVat"),
            order_total_vat: element.decimal("OrderTotalVat"),
            currency: element.string("Currency"),
            exchange_rate: element.double("ExchangeRate"),
            payment_time: element.int32("PaymentTime"),
            paid: element.boolean("Paid"),
            your_reference: element.string("YourReference"),
            our_reference: element.int32("OurReference"),
            addresses: element.record("Addresses")?,
        })
    }
}
