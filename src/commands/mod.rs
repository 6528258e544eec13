//! Command dispatch and handlers.

pub mod check;
pub mod localize;
pub mod resolve;
pub mod show;

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::localize::LocalizeError;
use crate::sitemap::SiteMap;
use crate::store::FieldStore;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Localize { fields, site_map, store, dry_run } => {
            localize::run_with_context(ctx, fields, site_map, store.as_deref(), *dry_run)
        }
        Command::Check { fields, site_map, store, json } => {
            check::run_with_context(ctx, fields, site_map, store.as_deref(), *json)
        }
        Command::Show { field, store } => {
            show::run_with_context(ctx, field.as_deref(), store.as_deref())
        }
        Command::Resolve { path, site_map } => resolve::run_with_context(ctx, path, site_map),
    }
}

/// The outcome of running the localizer over one stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// The schema changed and addresses the current web's lists now.
    Localized,
    /// Nothing to do: no `List` attribute, or its path resolved to no list.
    Unchanged,
    /// The field is not present in the store.
    Missing,
}

/// Runs the localizer over one field from the store.
///
/// Returns the status plus the rewritten schema when it changed. Nothing
/// is written back here; persisting is the caller's decision.
///
/// # Errors
///
/// Returns an error string for malformed schemas, non-lookup fields, and
/// store I/O failures.
pub(crate) fn localize_field(
    store: &FieldStore<'_>,
    site: &SiteMap,
    name: &str,
) -> Result<(FieldStatus, Option<String>), String> {
    let Some(xml) = store.load_field(name)? else {
        return Ok((FieldStatus::Missing, None));
    };
    let rewritten = crate::localize::localize(&xml, site).map_err(|e| match &e {
        LocalizeError::Schema(_) => format!("field '{name}': {e}"),
        LocalizeError::NotALookup { .. } => e.to_string(),
    })?;
    if rewritten == xml {
        Ok((FieldStatus::Unchanged, None))
    } else {
        Ok((FieldStatus::Localized, Some(rewritten)))
    }
}

/// Resolves the field store directory: explicit flag, then the
/// `LOOKFIX_STORE` environment variable, then `fields`.
pub(crate) fn store_root(flag: Option<&Path>) -> PathBuf {
    flag.map_or_else(
        || env::var("LOOKFIX_STORE").map_or_else(|_| PathBuf::from("fields"), PathBuf::from),
        Path::to_path_buf,
    )
}

/// Loads and parses a site map through the filesystem port.
pub(crate) fn load_site_map(ctx: &ServiceContext, path: &Path) -> Result<SiteMap, String> {
    let text = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read site map {}: {e}", path.display()))?;
    SiteMap::from_yaml(&text)
        .map_err(|e| format!("Failed to parse site map {}: {e}", path.display()))
}
