//! XML response parsing and the API's result convention

use crate::error::TenetError;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashMap;

/// Value of `result` on success
pub(crate) const SUCCESS_MARKER: &str = "OK";

/// Message used when a failed response carries no `error_desc`
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Flat view of a response document
///
/// Every direct child of the root element becomes one entry keyed by tag name,
/// holding the element's own text content. Empty elements map to the empty
/// string. Attributes, text directly under the root and deeper subtrees are
/// ignored; when a tag repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFields {
    fields: HashMap<String, String>,
}

impl ResponseFields {
    /// Parse a raw response body
    ///
    /// # Errors
    ///
    /// Returns `TenetError::Xml` if the body is not UTF-8 or not well-formed XML.
    pub fn parse(body: &[u8]) -> Result<Self, TenetError> {
        let text = std::str::from_utf8(body)
            .map_err(|e| TenetError::Xml(format!("response is not valid UTF-8: {}", e)))?;

        let mut reader = Reader::from_str(text);
        let mut fields = HashMap::new();
        // Depth 1 is the root, depth 2 its direct children
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut current: Option<(String, String)> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                TenetError::Xml(format!("at position {}: {}", reader.error_position(), e))
            })?;

            match event {
                Event::Start(e) => {
                    depth += 1;
                    if depth == 1 && seen_root {
                        return Err(TenetError::Xml("multiple root elements".to_string()));
                    }
                    seen_root = true;
                    if depth == 2 {
                        current = Some((utf8(e.name().as_ref())?, String::new()));
                    }
                }
                Event::Empty(e) => match depth {
                    0 if seen_root => {
                        return Err(TenetError::Xml("multiple root elements".to_string()));
                    }
                    0 => seen_root = true,
                    1 => {
                        fields
                            .entry(utf8(e.name().as_ref())?)
                            .or_insert_with(String::new);
                    }
                    _ => {}
                },
                Event::End(_) => {
                    if depth == 2
                        && let Some((tag, value)) = current.take()
                    {
                        fields.entry(tag).or_insert(value);
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Text(e) if depth == 2 => {
                    push_text(&mut current, &unescape(&e)?);
                }
                Event::CData(e) if depth == 2 => {
                    push_text(&mut current, &utf8(&e)?);
                }
                Event::GeneralRef(e) if depth == 2 => {
                    push_text(&mut current, &unescape(format!("&{};", utf8(&e)?).as_bytes())?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root || depth != 0 {
            return Err(TenetError::Xml("incomplete XML document".to_string()));
        }

        Ok(Self { fields })
    }

    /// Text of a field, if the tag is present
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    /// Text of a field the endpoint always sends on success
    pub fn require(&self, tag: &'static str) -> Result<&str, TenetError> {
        self.get(tag).ok_or(TenetError::MissingField(tag))
    }

    /// Whether the result discriminator is exactly the success marker
    pub fn is_ok(&self) -> bool {
        self.get("result") == Some(SUCCESS_MARKER)
    }

    /// Trimmed `error_desc`, or [`UNKNOWN_ERROR`] when absent or blank
    pub fn error_message(&self) -> String {
        self.get("error_desc")
            .map(str::trim)
            .filter(|desc| !desc.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string()
    }

    /// Check the result discriminator before trusting any other field
    ///
    /// # Errors
    ///
    /// Returns `TenetError::ServerError` with [`error_message`](Self::error_message)
    /// if `result` is anything other than `OK`.
    pub fn ensure_ok(self) -> Result<Self, TenetError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(TenetError::ServerError(self.error_message()))
        }
    }
}

fn utf8(raw: &[u8]) -> Result<String, TenetError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| TenetError::Xml(e.to_string()))
}

fn unescape(raw: &[u8]) -> Result<String, TenetError> {
    let text = utf8(raw)?;
    quick_xml::escape::unescape(&text)
        .map(|unescaped| unescaped.into_owned())
        .map_err(|e| TenetError::Xml(e.to_string()))
}

fn push_text(current: &mut Option<(String, String)>, text: &str) {
    if let Some((_, value)) = current {
        value.push_str(text);
    }
}

/// Parse a response body and apply the result convention in one step
pub fn parse_response(body: &[u8]) -> Result<ResponseFields, TenetError> {
    ResponseFields::parse(body)?.ensure_ok()
}
