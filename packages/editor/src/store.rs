//! Boundary contracts for persistence.
//!
//! Pages are replaced wholesale on save; translations are stored as flat
//! overlays keyed by content type, content id and language. The in-memory
//! implementations back tests and embedded use.

use std::collections::HashMap;

use vitrine_engine::{overlay_from_diff, Overlay, TranslationDiff};
use vitrine_model::Page;

use crate::errors::{EditorError, EditorResult};

/// Content type tag for whole pages.
pub const PAGE_CONTENT_TYPE: &str = "page";

/// Whole-page persistence.
pub trait PageStore {
    fn load(&self, page_id: u64) -> EditorResult<Page>;
    fn save(&mut self, page_id: u64, page: &Page) -> EditorResult<()>;
}

/// Stored translation overlays.
pub trait TranslationStore {
    /// Fetch the overlay for one language. Unknown languages yield an empty
    /// overlay, not an error; a missing translation just shows base text.
    fn fetch_overlay(
        &self,
        content_type: &str,
        content_id: u64,
        language: &str,
    ) -> EditorResult<Overlay>;

    /// Persist the diff for one language, replacing what was stored.
    fn save_diff(
        &mut self,
        content_type: &str,
        content_id: u64,
        language: &str,
        diff: &TranslationDiff,
    ) -> EditorResult<()>;
}

/// In-memory page store.
#[derive(Debug, Default)]
pub struct InMemoryPageStore {
    pages: HashMap<u64, Page>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page_id: u64, page: Page) {
        self.pages.insert(page_id, page);
    }
}

impl PageStore for InMemoryPageStore {
    fn load(&self, page_id: u64) -> EditorResult<Page> {
        self.pages
            .get(&page_id)
            .cloned()
            .ok_or(EditorError::PageNotFound(page_id))
    }

    fn save(&mut self, page_id: u64, page: &Page) -> EditorResult<()> {
        self.pages.insert(page_id, page.clone());
        Ok(())
    }
}

/// In-memory translation store. Diffs are reduced to plain overlays on
/// save, which is all later language switches need.
#[derive(Debug, Default)]
pub struct InMemoryTranslationStore {
    overlays: HashMap<(String, u64, String), Overlay>,
}

impl InMemoryTranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_overlay(
        &mut self,
        content_type: &str,
        content_id: u64,
        language: &str,
        overlay: Overlay,
    ) {
        self.overlays.insert(
            (content_type.to_string(), content_id, language.to_string()),
            overlay,
        );
    }
}

impl TranslationStore for InMemoryTranslationStore {
    fn fetch_overlay(
        &self,
        content_type: &str,
        content_id: u64,
        language: &str,
    ) -> EditorResult<Overlay> {
        let key = (content_type.to_string(), content_id, language.to_string());
        Ok(self.overlays.get(&key).cloned().unwrap_or_default())
    }

    fn save_diff(
        &mut self,
        content_type: &str,
        content_id: u64,
        language: &str,
        diff: &TranslationDiff,
    ) -> EditorResult<()> {
        self.insert_overlay(content_type, content_id, language, overlay_from_diff(diff));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::Component;

    #[test]
    fn test_page_store_load_miss_is_an_error() {
        let store = InMemoryPageStore::new();
        let result = store.load(7);
        assert!(matches!(result, Err(EditorError::PageNotFound(7))));
    }

    #[test]
    fn test_page_store_round_trip() {
        let mut store = InMemoryPageStore::new();
        let page = Page::new(vec![Component::new("hero", "heroSection")]);

        store.save(1, &page).unwrap();
        assert_eq!(store.load(1).unwrap(), page);
    }

    #[test]
    fn test_unknown_language_yields_empty_overlay() {
        let store = InMemoryTranslationStore::new();
        let overlay = store.fetch_overlay(PAGE_CONTENT_TYPE, 1, "fr").unwrap();
        assert!(overlay.is_empty());
    }
}
