//! `lookfix localize` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::FieldStore;

use super::FieldStatus;

/// Execute the `localize` command: run the localizer over each named field
/// and write back the schemas that changed.
///
/// A field absent from the store is reported and skipped; a field that is
/// not a lookup aborts the run.
///
/// # Errors
///
/// Returns an error string when the site map cannot be loaded, a schema is
/// malformed, a field is not a lookup kind, or a write fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    fields: &[String],
    site_map_path: &Path,
    store_dir: Option<&Path>,
    dry_run: bool,
) -> Result<(), String> {
    let site = super::load_site_map(ctx, site_map_path)?;
    let store = FieldStore::new(ctx, &super::store_root(store_dir));

    let mut localized = 0usize;
    let mut missing = 0usize;
    for name in fields {
        match super::localize_field(&store, &site, name)? {
            (FieldStatus::Localized, rewritten) => {
                if !dry_run {
                    if let Some(rewritten) = &rewritten {
                        store.save_field(name, rewritten)?;
                    }
                }
                localized += 1;
                println!("  [localized] {name}");
            }
            (FieldStatus::Unchanged, _) => println!("  [unchanged] {name}"),
            (FieldStatus::Missing, _) => {
                missing += 1;
                println!("  [missing]   {name}");
            }
        }
    }

    let action = if dry_run { "would be rewritten" } else { "rewritten" };
    println!("\n{localized} of {} field(s) {action}; {missing} missing.", fields.len());
    Ok(())
}
