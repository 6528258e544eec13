//! Field schema documents.
//!
//! A field definition is an XML fragment with a single root element whose
//! attributes carry the field's configuration. This module reads the root
//! element's attributes and rewrites selected ones in place, leaving
//! attribute order, untouched values, and all element content exactly as
//! they were in the input.

use quick_xml::escape::{escape, unescape, EscapeError};
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Errors produced while reading or rewriting a field schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The XML markup could not be read.
    #[error("malformed field schema: {0}")]
    Markup(#[from] quick_xml::Error),
    /// An attribute of the root element could not be parsed.
    #[error("malformed attribute in field schema: {0}")]
    Attribute(#[from] AttrError),
    /// An attribute value contains a broken entity reference.
    #[error("malformed attribute value in field schema: {0}")]
    Escape(#[from] EscapeError),
    /// The document contains no root element.
    #[error("field schema has no root element")]
    NoRootElement,
    /// The document contains more than one top-level element.
    #[error("field schema has more than one root element")]
    MultipleRoots,
    /// Text or other content appears outside the root element.
    #[error("field schema has content outside the root element")]
    ContentOutsideRoot,
    /// The document ended before the root element was closed.
    #[error("field schema ends before the root element is closed")]
    Truncated,
}

/// One attribute of the root element, with its entity references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAttribute {
    /// Attribute name as written (attribute names are case-sensitive).
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// Looks up a root attribute by exact name.
#[must_use]
pub fn attribute<'a>(attrs: &'a [SchemaAttribute], name: &str) -> Option<&'a str> {
    attrs.iter().find(|a| a.name == name).map(|a| a.value.as_str())
}

/// Parses the root element's attributes, in document order.
///
/// # Errors
///
/// Returns a [`SchemaError`] if the document is malformed: unreadable
/// markup, no root element, more than one root, content outside the root,
/// or a truncated document.
pub fn root_attributes(xml: &str) -> Result<Vec<SchemaAttribute>, SchemaError> {
    let root = scan(xml)?;
    Ok(root
        .attrs
        .into_iter()
        .map(|a| SchemaAttribute { name: a.name, value: a.value })
        .collect())
}

/// Rewrites the values of the named root attributes and returns the new
/// document text.
///
/// Only attributes already present on the root element are touched; an
/// update naming an absent attribute is ignored. Everything outside the
/// root start tag is copied from the input verbatim, and within the tag
/// attribute order and untouched values are preserved.
///
/// # Errors
///
/// Returns a [`SchemaError`] if the document is malformed (same conditions
/// as [`root_attributes`]).
pub fn rewrite_root_attributes(
    xml: &str,
    updates: &[(&str, String)],
) -> Result<String, SchemaError> {
    let root = scan(xml)?;
    let (tag_start, tag_end) = root.span;

    let mut tag = String::with_capacity(tag_end - tag_start + 64);
    tag.push('<');
    tag.push_str(&root.name);
    for attr in &root.attrs {
        tag.push(' ');
        tag.push_str(&attr.name);
        tag.push('=');
        if let Some((_, new_value)) = updates.iter().find(|(name, _)| *name == attr.name) {
            tag.push('"');
            tag.push_str(&escape(new_value.as_str()));
            tag.push('"');
        } else if attr.raw.contains('"') {
            // The source used single quotes around a literal double quote;
            // re-quoting with '"' would break the value.
            tag.push('\'');
            tag.push_str(&attr.raw);
            tag.push('\'');
        } else {
            tag.push('"');
            tag.push_str(&attr.raw);
            tag.push('"');
        }
    }
    tag.push_str(if root.self_closing { " />" } else { ">" });

    let mut out = String::with_capacity(xml.len() + 64);
    out.push_str(&xml[..tag_start]);
    out.push_str(&tag);
    out.push_str(&xml[tag_end..]);
    Ok(out)
}

/// A root attribute with both its raw (still-escaped) and resolved text.
struct RawAttribute {
    name: String,
    raw: String,
    value: String,
}

/// The root element of a schema document and where its start tag sits.
struct RootTag {
    name: String,
    /// Byte range of the start (or self-closing) tag within the input.
    span: (usize, usize),
    self_closing: bool,
    attrs: Vec<RawAttribute>,
}

/// Walks the whole document, validating its shape and capturing the root tag.
fn scan(xml: &str) -> Result<RootTag, SchemaError> {
    let mut reader = Reader::from_str(xml);
    let mut depth: usize = 0;
    let mut root: Option<RootTag> = None;
    let mut pos: usize = 0;

    loop {
        let event = reader.read_event()?;
        let end = usize::try_from(reader.buffer_position()).unwrap_or(xml.len());
        match event {
            Event::Start(ref tag) => {
                if depth == 0 {
                    if root.is_some() {
                        return Err(SchemaError::MultipleRoots);
                    }
                    root = Some(read_root_tag(tag, (pos, end), false)?);
                }
                depth += 1;
            }
            Event::Empty(ref tag) => {
                if depth == 0 {
                    if root.is_some() {
                        return Err(SchemaError::MultipleRoots);
                    }
                    root = Some(read_root_tag(tag, (pos, end), true)?);
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(SchemaError::ContentOutsideRoot);
                }
                depth -= 1;
            }
            Event::Text(ref text) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(SchemaError::ContentOutsideRoot);
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(SchemaError::ContentOutsideRoot);
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(SchemaError::Truncated);
                }
                break;
            }
            _ => {}
        }
        pos = end;
    }

    root.ok_or(SchemaError::NoRootElement)
}

fn read_root_tag(
    tag: &BytesStart<'_>,
    span: (usize, usize),
    self_closing: bool,
) -> Result<RootTag, SchemaError> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in tag.attributes() {
        let attr = attr?;
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = unescape(&raw)?.into_owned();
        attrs.push(RawAttribute {
            name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            raw,
            value,
        });
    }
    Ok(RootTag { name, span, self_closing, attrs })
}
