//! Minimal SOAP 1.1 envelope handling.
//!
//! Requests are written as escaped text; responses are read with
//! `quick_xml` into a small owned element tree that entity decoders walk.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use quick_xml::events::{BytesStart, Event};
use quick_xml::escape::escape;
use quick_xml::Reader;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Error, Result};

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Format used for dates sent to the service.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decodes a value from a response element
pub trait FromXml: Sized {
    fn from_xml(element: &XmlElement) -> Result<Self>;
}

/// An element of a parsed response, namespaces stripped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    /// Set for `xsi:nil="true"` elements.
    pub nil: bool,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parses a whole document and returns its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::XmlError(format!("at byte {}: {e}", reader.buffer_position()))
            })?;
            match event {
                Event::Start(start) => stack.push(Self::open(&start)?),
                Event::Empty(start) => {
                    let element = Self::open(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::XmlError("unbalanced end tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text.unescape().map_err(|e| Error::XmlError(e.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(Error::XmlError("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| Error::XmlError("empty document".to_string()))
    }

    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = XmlElement {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        };
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| Error::XmlError(e.to_string()))?;
            if attribute.key.local_name().as_ref() == b"nil" {
                element.nil = attribute.value.as_ref() == b"true";
            }
        }
        Ok(element)
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(Error::XmlError("multiple root elements".to_string())),
        }
        Ok(())
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// First element called `name` at any depth below this one.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find_map(|child| if child.name == name { Some(child) } else { child.find(name) })
    }

    /// Text of the child `name`; `None` if missing or nil.
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.child(name)
            .filter(|child| !child.nil)
            .map(|child| child.text.as_str())
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.text_of(name).map(str::to_string)
    }

    pub fn int32(&self, name: &str) -> Option<i32> {
        self.parsed(name)
    }

    pub fn int64(&self, name: &str) -> Option<i64> {
        self.parsed(name)
    }

    pub fn decimal(&self, name: &str) -> Option<Decimal> {
        self.parsed(name)
    }

    pub fn double(&self, name: &str) -> Option<f64> {
        self.parsed(name)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        let text = self.non_empty(name)?;
        match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => self.invalid(name, text),
        }
    }

    pub fn date_time(&self, name: &str) -> Option<NaiveDateTime> {
        let text = self.non_empty(name)?;
        parse_date_time(text).or_else(|| self.invalid(name, text))
    }

    /// Decodes the optional child `name` as a nested record.
    pub fn record<T: FromXml>(&self, name: &str) -> Result<Option<T>> {
        match self.child(name).filter(|child| !child.nil) {
            Some(child) => T::from_xml(child).map(Some),
            None => Ok(None),
        }
    }

    /// Decodes every child of the array element `name`.
    pub fn list<T: FromXml>(&self, name: &str) -> Result<Vec<T>> {
        match self.child(name) {
            Some(array) => array.items(),
            None => Ok(Vec::new()),
        }
    }

    /// Decodes every direct child of this element.
    pub fn items<T: FromXml>(&self) -> Result<Vec<T>> {
        self.children.iter().map(T::from_xml).collect()
    }

    fn non_empty(&self, name: &str) -> Option<&str> {
        self.text_of(name).map(str::trim).filter(|text| !text.is_empty())
    }

    fn parsed<T: FromStr>(&self, name: &str) -> Option<T> {
        let text = self.non_empty(name)?;
        text.parse::<T>().ok().or_else(|| self.invalid(name, text))
    }

    /// A malformed scalar reads as absent; one bad value never fails the entity.
    fn invalid<T>(&self, name: &str, text: &str) -> Option<T> {
        debug!("Ignoring invalid value '{}' for {}.{}", text, self.name, name);
        None
    }
}

/// Parses the date formats the service produces, with or without an offset.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_local()))
}

/// Wraps an operation body in a SOAP envelope.
pub fn envelope(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:soap="{}">"#,
            "<soap:Body>{}</soap:Body></soap:Envelope>"
        ),
        SOAP_ENVELOPE_NS, body
    )
}

/// `<name>value</name>` with the value escaped.
pub fn element(name: &str, value: &str) -> String {
    format!("<{name}>{}</{name}>", escape(value))
}

/// Operation element in the service namespace.
pub fn operation(name: &str, namespace: &str, content: &str) -> String {
    if content.is_empty() {
        format!(r#"<{name} xmlns="{namespace}" />"#)
    } else {
        format!(r#"<{name} xmlns="{namespace}">{content}</{name}>"#)
    }
}

/// Parses a SOAP response and returns the result element of `operation`.
///
/// A `Fault` in the body is reported as [`Error::SoapFault`].
pub fn response_result(xml: &str, operation: &str) -> Result<XmlElement> {
    let root = XmlElement::parse(xml)?;
    let body = root
        .child("Body")
        .ok_or_else(|| Error::XmlError("response has no SOAP body".to_string()))?;

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    let result_name = format!("{operation}Result");
    body.find(&result_name)
        .cloned()
        .ok_or_else(|| Error::XmlError(format!("response has no {result_name} element")))
}

/// Extracts the fault message from a response body, if it carries one.
pub fn fault_message(xml: &str) -> Option<String> {
    let root = XmlElement::parse(xml).ok()?;
    root.find("Fault").map(fault_text)
}

fn fault_error(fault: &XmlElement) -> Error {
    Error::SoapFault(fault_text(fault))
}

fn fault_text(fault: &XmlElement) -> String {
    fault
        .text_of("faultstring")
        .or_else(|| fault.find("Text").map(|text| text.text.as_str()))
        .unwrap_or("unknown fault")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soap:Body>
    <GetThingsResponse xmlns="http://24sevenOffice.com/webservices">
      <GetThingsResult>
        <Thing>
          <Id>7</Id>
          <Name>Tom &amp; Jerry</Name>
          <Big>9007199254740993</Big>
          <Amount>12.50</Amount>
          <When>2021-06-01T08:30:00.123+02:00</When>
          <Flag>True</Flag>
          <Missing xsi:nil="true" />
          <Blank></Blank>
          <Note><![CDATA[<raw>]]></Note>
        </Thing>
        <Thing />
      </GetThingsResult>
    </GetThingsResponse>
  </soap:Body>
</soap:Envelope>"#;

    #[test]
    fn test_response_result_and_typed_values() {
        let result = response_result(RESPONSE, "GetThings").unwrap();
        assert_eq!(result.children.len(), 2);

        let thing = &result.children[0];
        assert_eq!(thing.int32("Id"), Some(7));
        assert_eq!(thing.string("Name").as_deref(), Some("Tom & Jerry"));
        assert_eq!(thing.int64("Big"), Some(9_007_199_254_740_993));
        assert_eq!(
            thing.decimal("Amount"),
            Some(Decimal::from_str("12.50").unwrap())
        );
        assert_eq!(thing.boolean("Flag"), Some(true));
        assert_eq!(
            thing.date_time("When").unwrap().to_string(),
            "2021-06-01 08:30:00.123"
        );
        assert_eq!(thing.string("Missing"), None);
        assert_eq!(thing.int32("Blank"), None);
        assert_eq!(thing.int32("Absent"), None);
        assert_eq!(thing.string("Note").as_deref(), Some("<raw>"));
    }

    #[test]
    fn test_invalid_scalars_read_as_absent() {
        let root = XmlElement::parse(
            "<Thing><Id>seven</Id><Flag>maybe</Flag><When>yesterday</When><Name>ok</Name></Thing>",
        )
        .unwrap();
        assert_eq!(root.int32("Id"), None);
        assert_eq!(root.boolean("Flag"), None);
        assert_eq!(root.date_time("When"), None);
        assert_eq!(root.string("Name").as_deref(), Some("ok"));
    }

    #[test]
    fn test_fault_is_reported() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Server</faultcode>
      <faultstring>Not authenticated</faultstring>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

        match response_result(xml, "GetThings") {
            Err(Error::SoapFault(message)) => assert_eq!(message, "Not authenticated"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            fault_message(xml).as_deref(),
            Some("Not authenticated")
        );
    }

    #[test]
    fn test_malformed_documents() {
        assert!(XmlElement::parse("").is_err());
        assert!(XmlElement::parse("<a><b></a>").is_err());
        assert!(response_result("<Envelope />", "GetThings").is_err());
    }

    #[test]
    fn test_envelope_escapes_values() {
        let body = operation(
            "Login",
            "http://24sevenOffice.com/webservices",
            &element("Username", "a<b>&c"),
        );
        let xml = envelope(&body);

        assert!(xml.contains("<Username>a&lt;b&gt;&amp;c</Username>"));
        assert!(xml.contains(r#"<Login xmlns="http://24sevenOffice.com/webservices">"#));

        // The envelope we write must be readable by our own parser
        let root = XmlElement::parse(&xml).unwrap();
        let login = root.find("Login").unwrap();
        assert_eq!(login.string("Username").as_deref(), Some("a<b>&c"));
    }

    #[test]
    fn test_empty_operation_is_self_closing() {
        assert_eq!(
            operation("GetDepartmentList", "urn:x", ""),
            r#"<GetDepartmentList xmlns="urn:x" />"#
        );
    }
}
