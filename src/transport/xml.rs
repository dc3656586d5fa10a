//! SOAP envelope construction and response conversion.
//!
//! Requests are SOAP 1.1 envelopes with the operation's arguments as
//! child elements. Responses are converted into a `serde_json::Value`
//! tree so the rest of the crate can stay loosely typed: element names
//! become object keys (namespace prefixes stripped), text-only
//! elements become strings, and repeated sibling elements collapse
//! into arrays. Note that a list with a single entry is
//! indistinguishable from a nested object at this layer; the domain
//! mappers accept both shapes.

use crate::application::operation::CcrMethod;
use crate::constants::SOAP_NAMESPACE;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Builds the SOAP 1.1 request envelope for one operation invocation.
pub fn request_envelope(method: CcrMethod, args: &BTreeMap<String, String>) -> String {
    let mut body = String::new();
    for (name, value) in args {
        let _ = write!(body, "<{name}>{}</{name}>", escape(value.as_str()));
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
            "<soap:Body>",
            r#"<{op} xmlns="{ns}">{body}</{op}>"#,
            "</soap:Body>",
            "</soap:Envelope>",
        ),
        op = method.as_str(),
        ns = SOAP_NAMESPACE,
        body = body,
    )
}

struct Node {
    name: String,
    children: Map<String, Value>,
    text: String,
}

/// Converts an XML document into a `Value` tree rooted at the document
/// element's content.
pub fn document_to_value(xml: &str) -> Result<Value, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = Value::Null;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(Node {
                    name,
                    children: Map::new(),
                    text: String::new(),
                });
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    insert_child(&mut parent.children, name, Value::Null);
                }
            }
            Event::Text(t) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(_) => {
                let node = stack.pop().expect("balanced document");
                let value = if !node.children.is_empty() {
                    Value::Object(node.children)
                } else if !node.text.is_empty() {
                    Value::String(node.text)
                } else {
                    Value::Null
                };

                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, node.name, value),
                    None => root = value,
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(root)
}

/// Inserts a child value, collapsing repeated sibling names into arrays
fn insert_child(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}
