//! Site map: the current web's layout, loaded from YAML.
//!
//! The site map stands in for the activation context the host would
//! provide: which web the fields live in, and which lists (with their
//! folder hierarchies) exist there. It backs the [`ListResolver`] port for
//! the CLI.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ports::resolver::ListResolver;

/// The identity of the web the localization runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebEntry {
    /// Durable identifier of the web.
    pub id: Uuid,
    /// Identifier of the site collection containing the web, when known.
    #[serde(default)]
    pub site_id: Option<Uuid>,
    /// Server-relative URL of the web (e.g. `/sites/contoso`).
    pub url: String,
}

/// One list and the folders it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Durable identifier of the list.
    pub id: Uuid,
    /// Display title, informational only.
    #[serde(default)]
    pub title: Option<String>,
    /// The list's root folder, web-relative (e.g. `Pages` or `Lists/Colors`).
    pub folder: String,
    /// Known folders beneath the root, relative to it.
    #[serde(default)]
    pub subfolders: Vec<String>,
}

/// The web and its lists, as described by a site map document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMap {
    /// The current web.
    pub web: WebEntry,
    /// Lists available in the web.
    #[serde(default)]
    pub lists: Vec<ListEntry>,
}

impl SiteMap {
    /// Parses a site map from its YAML text.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error when the document does
    /// not match the site map shape.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Returns the list whose folder hierarchy contains the folder at
    /// `path`, if any.
    ///
    /// A server-relative path (leading `/`) must fall inside this web's URL
    /// namespace; a path without a leading `/` is taken as web-relative.
    /// Comparisons are case-insensitive throughout. The path must land on
    /// the list's root folder or on a declared subfolder chain beneath it;
    /// an undeclared remainder does not resolve, the same way probing a
    /// folder that does not exist finds nothing.
    #[must_use]
    pub fn find_list(&self, path: &str) -> Option<&ListEntry> {
        let rel = self.web_relative(path)?;
        if rel.is_empty() {
            return None;
        }
        self.lists.iter().find(|list| {
            let root = normalize(&list.folder);
            if rel == root {
                return true;
            }
            match rel.strip_prefix(&format!("{root}/")) {
                Some(rest) => list.subfolders.iter().any(|sub| normalize(sub) == rest),
                None => false,
            }
        })
    }

    /// Reduces `path` to a normalized web-relative folder path, or `None`
    /// when it addresses something outside this web.
    fn web_relative(&self, path: &str) -> Option<String> {
        let trimmed = path.trim();
        if trimmed.starts_with('/') {
            let full = normalize(trimmed);
            let web_url = normalize(&self.web.url);
            if full == web_url {
                return Some(String::new());
            }
            full.strip_prefix(&format!("{web_url}/")).map(str::to_string)
        } else {
            Some(normalize(trimmed))
        }
    }
}

impl ListResolver for SiteMap {
    fn list_owning_folder(&self, path: &str) -> Option<Uuid> {
        self.find_list(path).map(|list| list.id)
    }

    fn web_id(&self) -> Uuid {
        self.web.id
    }
}

/// Strips surrounding slashes and lower-cases for comparison. Folder URLs
/// in the content platform are case-insensitive.
fn normalize(path: &str) -> String {
    path.trim().trim_matches('/').to_lowercase()
}
