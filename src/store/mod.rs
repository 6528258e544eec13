//! Field store: the directory of field definition files localization
//! runs over.
//!
//! Each field lives in `<root>/<InternalName>.xml`, standing in for the
//! web's field collection. All I/O goes through the `FileSystem` port so
//! the store works the same against the real disk and the in-memory fake
//! used in tests.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;

/// Read/write access to the field definition files under one directory.
pub struct FieldStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> FieldStore<'a> {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Loads a field's schema XML by internal name.
    ///
    /// Returns `Ok(None)` when the field is not present; looking up a
    /// field that does not exist is an answer, not a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_field(&self, name: &str) -> Result<Option<String>, String> {
        let path = self.field_path(name);
        if !self.ctx.fs.exists(&path) {
            return Ok(None);
        }
        self.ctx
            .fs
            .read_to_string(&path)
            .map(Some)
            .map_err(|e| format!("Failed to read field '{name}': {e}"))
    }

    /// Writes a field's schema XML, creating or overwriting its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_field(&self, name: &str, schema_xml: &str) -> Result<(), String> {
        self.ctx
            .fs
            .write(&self.field_path(name), schema_xml)
            .map_err(|e| format!("Failed to write field '{name}': {e}"))
    }

    /// Lists the internal names of all stored fields, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be listed.
    pub fn list_fields(&self) -> Result<Vec<String>, String> {
        if !self.ctx.fs.exists(&self.root) {
            return Ok(Vec::new());
        }
        let entries = self
            .ctx
            .fs
            .list_dir(&self.root)
            .map_err(|e| format!("Failed to list field store: {e}"))?;
        let mut names: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| entry.strip_suffix(".xml").map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }

    fn field_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.xml"))
    }
}
