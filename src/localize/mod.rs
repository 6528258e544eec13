//! Lookup schema localization.
//!
//! A deployed lookup column still points at its target list by the folder
//! path it was authored against, and at its original web through the
//! `SourceID` attribute. [`localize`] rewrites both so the column addresses
//! the current environment by durable identifier instead.

use thiserror::Error;

use crate::ports::resolver::ListResolver;
use crate::schema::{self, SchemaError};

/// `Type` attribute values eligible for localization, lower-cased.
const LOOKUP_KINDS: [&str; 2] = ["lookup", "lookupmulti"];

/// Errors produced by [`localize`].
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// The schema document is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The field is not a lookup kind. Non-lookup fields are rejected
    /// rather than passed through: asking to localize one means the field
    /// set is misconfigured, and silently skipping it would hide that.
    #[error("field '{name}' has type '{kind}'; expected Lookup or LookupMulti")]
    NotALookup {
        /// The field's `Name` attribute, when present.
        name: String,
        /// The `Type` value found (empty when the attribute is absent).
        kind: String,
    },
}

/// Rewrites a lookup field schema so its `List` and `SourceID` attributes
/// address the current environment.
///
/// The `List` attribute's folder path is resolved through `resolver`; on
/// success it is replaced with the owning list's identifier, and a present
/// `SourceID` is replaced with the current web's identifier. The two
/// rewrites are coupled: `SourceID` changes only when the list resolved.
/// When `List` is absent, or names a folder no list owns, the input is
/// returned unchanged. Since a list identifier never resolves as a folder
/// path, already-localized schemas pass through untouched.
///
/// # Errors
///
/// Returns [`LocalizeError::Schema`] for malformed XML and
/// [`LocalizeError::NotALookup`] when the `Type` attribute is missing or
/// not a lookup kind.
pub fn localize(schema_xml: &str, resolver: &dyn ListResolver) -> Result<String, LocalizeError> {
    let attrs = schema::root_attributes(schema_xml)?;

    let kind = schema::attribute(&attrs, "Type").unwrap_or_default().to_lowercase();
    if !LOOKUP_KINDS.contains(&kind.as_str()) {
        let name = schema::attribute(&attrs, "Name").unwrap_or("<unnamed>").to_string();
        return Err(LocalizeError::NotALookup { name, kind });
    }

    let Some(list_path) = schema::attribute(&attrs, "List") else {
        return Ok(schema_xml.to_string());
    };
    let Some(list_id) = resolver.list_owning_folder(list_path) else {
        return Ok(schema_xml.to_string());
    };

    let mut updates = vec![("List", list_id.to_string())];
    if schema::attribute(&attrs, "SourceID").is_some() {
        updates.push(("SourceID", resolver.web_id().to_string()));
    }
    Ok(schema::rewrite_root_attributes(schema_xml, &updates)?)
}
