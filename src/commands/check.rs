//! `lookfix check` command.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::context::ServiceContext;
use crate::store::FieldStore;

use super::FieldStatus;

/// Per-field entry in a check report.
#[derive(Debug, Serialize)]
struct FieldReport {
    field: String,
    status: FieldStatus,
}

/// The full report for one `check` run.
#[derive(Debug, Serialize)]
struct CheckReport {
    generated_at: DateTime<Utc>,
    site_map: String,
    web_id: Uuid,
    fields: Vec<FieldReport>,
}

/// Execute the `check` command: run the localizer over the named fields
/// (all stored fields when none are given) and report what would change.
/// Never writes anything.
///
/// # Errors
///
/// Returns an error string when the site map cannot be loaded, a schema is
/// malformed, or a field is not a lookup kind.
pub fn run_with_context(
    ctx: &ServiceContext,
    fields: &[String],
    site_map_path: &Path,
    store_dir: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let site = super::load_site_map(ctx, site_map_path)?;
    let store = FieldStore::new(ctx, &super::store_root(store_dir));

    let names = if fields.is_empty() { store.list_fields()? } else { fields.to_vec() };

    let mut report = CheckReport {
        generated_at: Utc::now(),
        site_map: site_map_path.display().to_string(),
        web_id: site.web.id,
        fields: Vec::with_capacity(names.len()),
    };
    for name in &names {
        let (status, _) = super::localize_field(&store, &site, name)?;
        report.fields.push(FieldReport { field: name.clone(), status });
    }

    if json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize check report: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    if report.fields.is_empty() {
        println!("No fields found in store.");
        return Ok(());
    }
    let mut localized = 0usize;
    let mut missing = 0usize;
    for entry in &report.fields {
        match entry.status {
            FieldStatus::Localized => {
                localized += 1;
                println!("  [localized] {}", entry.field);
            }
            FieldStatus::Unchanged => println!("  [unchanged] {}", entry.field),
            FieldStatus::Missing => {
                missing += 1;
                println!("  [missing]   {}", entry.field);
            }
        }
    }
    println!(
        "\n{localized} of {} field(s) would be rewritten; {missing} missing.",
        report.fields.len()
    );
    Ok(())
}
