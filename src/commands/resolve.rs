//! `lookfix resolve` command.

use std::path::Path;

use crate::context::ServiceContext;

/// Execute the `resolve` command: print the list that owns a folder path
/// according to the site map. A path no list owns is an answer, not an
/// error; the localizer treats it as a no-op too.
///
/// # Errors
///
/// Returns an error string when the site map cannot be loaded.
pub fn run_with_context(
    ctx: &ServiceContext,
    path: &str,
    site_map_path: &Path,
) -> Result<(), String> {
    let site = super::load_site_map(ctx, site_map_path)?;

    println!("Web: {} ({})", site.web.url, site.web.id);
    if let Some(site_id) = site.web.site_id {
        println!("Site: {site_id}");
    }

    match site.find_list(path) {
        Some(list) => {
            match &list.title {
                Some(title) => println!("List: {title} ({})", list.id),
                None => println!("List: {}", list.id),
            }
            println!("Folder: {}", list.folder);
        }
        None => println!("No list owns folder '{path}'."),
    }
    Ok(())
}
