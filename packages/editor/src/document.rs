//! # Page Document
//!
//! Core page abstraction for Vitrine editing.
//!
//! A PageDocument wraps one page's content tree and its editing state. The
//! base snapshot is taken when the tree arrives and is the reference point
//! for every diff until the next save.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Snapshot → Edit → Diff → Save
//!   ↓       ↓         ↓      ↓      ↓
//! Store   base      tree  changes  Store
//! ```

use serde_json::Value;
use tracing::debug;

use vitrine_engine::{diff, set_leaf, with_array_items, FieldPath, TranslationDiff};
use vitrine_model::Page;

use crate::errors::EditorResult;
use crate::store::PageStore;

/// Editable page document
#[derive(Debug)]
pub struct PageDocument {
    /// Store id of the page
    pub id: u64,

    /// Current version number (increments on each edit)
    pub version: u64,

    /// Working tree mutated by the editing UI
    page: Page,

    /// Snapshot taken at load/save time, the diff reference point
    base: Page,

    /// Whether the working tree has unsaved edits
    dirty: bool,
}

impl PageDocument {
    /// Wrap a freshly authored or loaded tree. The base snapshot is taken
    /// immediately.
    pub fn new(id: u64, page: Page) -> Self {
        Self {
            id,
            version: 0,
            base: page.clone(),
            page,
            dirty: false,
        }
    }

    /// Load a page from a store.
    pub fn load(id: u64, store: &dyn PageStore) -> EditorResult<Self> {
        Ok(Self::new(id, store.load(id)?))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base(&self) -> &Page {
        &self.base
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write one leaf by its canonical address. Addresses that do not parse
    /// or do not resolve are ignored and reported as `false`.
    pub fn set_text(&mut self, address: &str, value: &str) -> bool {
        let path: FieldPath = match address.parse() {
            Ok(path) => path,
            Err(error) => {
                debug!(%address, %error, "edit address does not parse");
                return false;
            }
        };
        let changed = set_leaf(&mut self.page, &path, value);
        if changed {
            self.touch();
        }
        changed
    }

    /// Replace the detected repeatable list of one component. Fails only
    /// when the component index is out of range.
    pub fn replace_array_items(&mut self, component_index: usize, items: Vec<Value>) -> bool {
        let Some(component) = self.page.components.get(component_index) else {
            return false;
        };
        let updated = with_array_items(component, items);
        self.page.components[component_index] = updated;
        self.touch();
        true
    }

    /// Replace the working tree wholesale (JSON editor, import).
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.touch();
    }

    /// Discard edits and return to the base snapshot.
    pub fn restore_base(&mut self) {
        self.page = self.base.clone();
        self.version += 1;
        self.dirty = false;
    }

    /// Changed text leaves, working tree vs. base snapshot.
    pub fn diff(&self) -> TranslationDiff {
        diff(&self.page, &self.base)
    }

    /// Persist the working tree wholesale and re-snapshot it.
    pub fn save(&mut self, store: &mut dyn PageStore) -> EditorResult<()> {
        store.save(self.id, &self.page)?;
        self.base = self.page.clone();
        self.dirty = false;
        debug!(page = self.id, version = self.version, "page saved");
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_model::{Component, Field};

    fn hero_document() -> PageDocument {
        PageDocument::new(
            1,
            Page::new(vec![Component::new("hero", "heroSection")
                .with_item(Field::text("headline", "Welcome"))]),
        )
    }

    #[test]
    fn test_set_text_marks_dirty_and_bumps_version() {
        let mut document = hero_document();
        assert!(!document.is_dirty());

        assert!(document.set_text("component_hero.items[0].content", "Bienvenue"));

        assert!(document.is_dirty());
        assert_eq!(document.version, 1);
        assert_eq!(
            document.page().components[0].items[0].content.as_deref(),
            Some("Bienvenue")
        );
        // The base snapshot is untouched.
        assert_eq!(
            document.base().components[0].items[0].content.as_deref(),
            Some("Welcome")
        );
    }

    #[test]
    fn test_bad_addresses_leave_document_clean() {
        let mut document = hero_document();

        assert!(!document.set_text("not an address", "x"));
        assert!(!document.set_text("component_hero.items[9].content", "x"));

        assert!(!document.is_dirty());
        assert_eq!(document.version, 0);
    }

    #[test]
    fn test_diff_and_restore_base() {
        let mut document = hero_document();
        document.set_text("component_hero.items[0].content", "Bienvenue");

        let changes = document.diff();
        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes["component_hero.items[0].content"].source_text,
            "Welcome"
        );

        document.restore_base();
        assert!(!document.is_dirty());
        assert!(document.diff().is_empty());
    }

    #[test]
    fn test_save_resnapshots_base() {
        let mut store = crate::store::InMemoryPageStore::new();
        let mut document = hero_document();

        document.set_text("component_hero.items[0].content", "Bienvenue");
        document.save(&mut store).unwrap();

        assert!(!document.is_dirty());
        assert!(document.diff().is_empty());
        assert_eq!(
            store.load(1).unwrap().components[0].items[0].content.as_deref(),
            Some("Bienvenue")
        );
    }

    #[test]
    fn test_replace_array_items_targets_component() {
        let mut document = PageDocument::new(
            2,
            Page::new(vec![serde_json::from_value(json!({
                "key": "showcase",
                "type": "gallerySection",
                "items": [{ "type": "carousel", "images": [{ "src": "a.png" }] }]
            }))
            .unwrap()]),
        );

        assert!(document.replace_array_items(0, vec![json!({ "src": "b.png" })]));
        assert!(!document.replace_array_items(5, vec![]));

        let images = vitrine_engine::array_items(&document.page().components[0]);
        assert_eq!(images, vec![json!({ "src": "b.png" })]);
    }
}
