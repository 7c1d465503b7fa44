//! # SOAP 1.1 Envelopes
//!
//! Parsing of request envelopes and rendering of responses and faults.
//!
//! ## Request Shape
//! ```text
//! <soap:Envelope>                      depth 1
//!   <soap:Header>…</soap:Header>       (ignored)
//!   <soap:Body>                        depth 2
//!     <tns:UpdateProduct>              depth 3  → operation
//!       <tns:product_id>7</…>          depth 4  → Param::Value("7")
//!       <tns:name xsi:nil="true"/>     depth 4  → Param::Nil
//!     </tns:UpdateProduct>
//!   </soap:Body>
//! </soap:Envelope>
//! ```
//!
//! Elements are matched by local name; prefixes and namespace URIs are not
//! checked. Only the first element inside `Body` is read.

use quick_xml::escape::escape;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use inventory_core::Product;

use crate::fault::Fault;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target namespace of the service.
pub const SERVICE_NS: &str = "urn:inventory";

/// Content type for every XML response.
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Reasons a request body is not a usable envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("Invalid UTF-8 in request: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Root element must be a SOAP Envelope, found '{0}'")]
    NotAnEnvelope(String),

    #[error("SOAP Envelope has no Body")]
    MissingBody,

    #[error("SOAP Body contains no operation")]
    MissingOperation,
}

/// A single parameter element of the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Element carried `xsi:nil="true"`
    Nil,

    /// Element text, unescaped (empty for `<x/>`)
    Value(String),
}

/// A parsed request: operation name and its parameter elements in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapRequest {
    pub operation: String,
    pub params: Vec<(String, Param)>,
}

impl SoapRequest {
    /// First parameter with the given local name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params
            .iter()
            .find(|(param_name, _)| param_name == name)
            .map(|(_, param)| param)
    }
}

/// Parses a SOAP 1.1 request envelope from the raw request body.
pub fn parse_request(body: &[u8]) -> Result<SoapRequest, EnvelopeError> {
    let xml = std::str::from_utf8(body)?;
    let mut reader = Reader::from_str(xml);

    // Local names of the currently open elements
    let mut path: Vec<String> = Vec::new();
    let mut saw_body = false;
    let mut operation: Option<String> = None;
    let mut operation_closed = false;
    let mut params: Vec<(String, Param)> = Vec::new();
    let mut current: Option<(String, Param)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = local_name(&element)?;
                if let Some(param) = open_element(
                    &path,
                    &name,
                    &element,
                    &mut saw_body,
                    &mut operation,
                    operation_closed,
                )? {
                    current = Some((name.clone(), param));
                }
                path.push(name);
            }
            Event::Empty(element) => {
                let name = local_name(&element)?;
                if let Some(param) = open_element(
                    &path,
                    &name,
                    &element,
                    &mut saw_body,
                    &mut operation,
                    operation_closed,
                )? {
                    params.push((name, param));
                }
            }
            Event::Text(text) => {
                if path.len() == 4 {
                    if let Some((_, Param::Value(value))) = current.as_mut() {
                        value.push_str(&text.unescape()?);
                    }
                }
            }
            Event::CData(data) => {
                if path.len() == 4 {
                    if let Some((_, Param::Value(value))) = current.as_mut() {
                        value.push_str(std::str::from_utf8(&data)?);
                    }
                }
            }
            Event::End(_) => {
                match path.len() {
                    4 => {
                        if let Some(param) = current.take() {
                            params.push(param);
                        }
                    }
                    3 if operation.is_some() && is_body(&path) => operation_closed = true,
                    _ => {}
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_body {
        return Err(EnvelopeError::MissingBody);
    }
    let operation = operation.ok_or(EnvelopeError::MissingOperation)?;

    Ok(SoapRequest { operation, params })
}

/// Handles an opening (or self-closing) tag at the current `path`.
///
/// Returns the parameter it starts, if the tag is a direct child of the
/// operation element.
fn open_element(
    path: &[String],
    name: &str,
    element: &BytesStart<'_>,
    saw_body: &mut bool,
    operation: &mut Option<String>,
    operation_closed: bool,
) -> Result<Option<Param>, EnvelopeError> {
    match path.len() {
        0 if name != "Envelope" => Err(EnvelopeError::NotAnEnvelope(name.to_string())),
        1 if name == "Body" => {
            *saw_body = true;
            Ok(None)
        }
        2 if is_body(path) && operation.is_none() => {
            *operation = Some(name.to_string());
            Ok(None)
        }
        3 if is_body(path) && !operation_closed && operation.as_deref() == Some(path[2].as_str()) => {
            if is_nil(element)? {
                Ok(Some(Param::Nil))
            } else {
                Ok(Some(Param::Value(String::new())))
            }
        }
        _ => Ok(None),
    }
}

fn is_body(path: &[String]) -> bool {
    path.get(1).map(String::as_str) == Some("Body")
}

fn local_name(element: &BytesStart<'_>) -> Result<String, EnvelopeError> {
    Ok(std::str::from_utf8(element.local_name().as_ref())?.to_string())
}

/// `xsi:nil="true"` (or `"1"`), whatever the prefix.
fn is_nil(element: &BytesStart<'_>) -> Result<bool, EnvelopeError> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == b"nil" {
            let value = attribute.unescape_value()?;
            return Ok(matches!(value.trim(), "true" | "1"));
        }
    }
    Ok(false)
}

// =============================================================================
// Rendering
// =============================================================================

/// Result payload of a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapResult {
    Product(Product),
    Message(String),
}

/// A successful operation response.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapResponse {
    pub operation: String,
    pub result: SoapResult,
}

/// Renders `<{Op}Response><{Op}Result>…</{Op}Result></{Op}Response>` in an envelope.
pub fn render_response(response: &SoapResponse) -> String {
    let op = &response.operation;
    let result = match &response.result {
        SoapResult::Product(product) => format!(
            "<id>{}</id><name>{}</name><quantity_in_stock>{}</quantity_in_stock><price_per_unit>{}</price_per_unit>",
            product.id,
            escape(product.name.as_str()),
            product.quantity_in_stock,
            product.price_per_unit
        ),
        SoapResult::Message(text) => escape(text.as_str()).into_owned(),
    };

    wrap_in_envelope(&format!(
        "<{op}Response xmlns=\"{ns}\"><{op}Result>{result}</{op}Result></{op}Response>",
        op = op,
        ns = SERVICE_NS,
        result = result
    ))
}

/// Renders a `soap:Fault` envelope.
pub fn render_fault(fault: &Fault) -> String {
    wrap_in_envelope(&format!(
        "<soap:Fault><faultcode>{}</faultcode><faultstring>{}</faultstring></soap:Fault>",
        fault.code.as_qname(),
        escape(fault.message.as_str())
    ))
}

fn wrap_in_envelope(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 160);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    out.push_str("<soap:Envelope xmlns:soap=\"");
    out.push_str(SOAP_ENV_NS);
    out.push_str("\"><soap:Body>");
    out.push_str(body);
    out.push_str("</soap:Body></soap:Envelope>");
    out
}
