//! `lookfix show` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::schema;
use crate::store::FieldStore;

/// Execute the `show` command.
///
/// With a field name, prints the parsed root attributes of its schema.
/// Without one, lists the internal names in the store.
///
/// # Errors
///
/// Returns an error string when the named field is absent or its schema
/// cannot be parsed.
pub fn run_with_context(
    ctx: &ServiceContext,
    field: Option<&str>,
    store_dir: Option<&Path>,
) -> Result<(), String> {
    let store = FieldStore::new(ctx, &super::store_root(store_dir));

    let Some(name) = field else {
        let names = store.list_fields()?;
        if names.is_empty() {
            println!("No fields found in store.");
        } else {
            println!("Fields in store:");
            for name in &names {
                println!("  {name}");
            }
            println!("\nUse `lookfix show <FIELD>` to view a field's schema.");
        }
        return Ok(());
    };

    let Some(xml) = store.load_field(name)? else {
        return Err(format!("Field '{name}' not found in store"));
    };
    let attrs =
        schema::root_attributes(&xml).map_err(|e| format!("field '{name}': {e}"))?;

    println!("Field: {name}");
    for attr in &attrs {
        println!("  {} = {}", attr.name, attr.value);
    }
    Ok(())
}
