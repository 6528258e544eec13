//! List resolution port: mapping folder paths to list and web identities.

use uuid::Uuid;

/// Resolves folder paths against the current web's layout.
///
/// A lookup field addresses its target list by a folder path at authoring
/// time. Localization needs to turn that path into the list's durable
/// identifier and to know which web the field now lives in; this trait is
/// the whole of what it needs to know about the environment.
pub trait ListResolver: Send + Sync {
    /// Returns the identifier of the list whose folder hierarchy contains
    /// the folder addressed by `path`, or `None` when no list owns it.
    ///
    /// `path` may be web-relative (`Pages`) or server-relative
    /// (`/sites/contoso/Pages`). A string that is not a folder path at all
    /// (for instance an already-localized list identifier) resolves to
    /// `None`.
    fn list_owning_folder(&self, path: &str) -> Option<Uuid>;

    /// Returns the identifier of the current web.
    fn web_id(&self) -> Uuid;
}
