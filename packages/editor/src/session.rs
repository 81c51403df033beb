//! Translation editing sessions.
//!
//! A session is one editor's view of a page document, possibly switched to
//! a non-source language. Overlays are ephemeral: switching applies the
//! stored overlay onto the base snapshot to build a view, and returning to
//! the source language discards that view outright. Translation edits live
//! in the view and never dirty the underlying document.

use tracing::{debug, info};

use vitrine_engine::{apply_overlay, diff, set_leaf, FieldPath};
use vitrine_model::Page;

use crate::document::PageDocument;
use crate::errors::{EditorError, EditorResult};
use crate::store::{TranslationStore, PAGE_CONTENT_TYPE};

/// One editor's view of a page.
pub struct TranslationSession {
    pub document: PageDocument,

    /// Active target language, if any.
    language: Option<String>,

    /// Overlaid working tree while a target language is active.
    view: Option<Page>,
}

impl TranslationSession {
    pub fn new(document: PageDocument) -> Self {
        Self {
            document,
            language: None,
            view: None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The tree currently shown: the overlaid view when a target language
    /// is active, the document's working tree otherwise.
    pub fn current(&self) -> &Page {
        self.view.as_ref().unwrap_or_else(|| self.document.page())
    }

    /// Fetch the stored overlay for `language` and show the base tree
    /// through it. Unsaved edits to a previous view are dropped.
    pub fn switch_language(
        &mut self,
        language: &str,
        store: &dyn TranslationStore,
    ) -> EditorResult<()> {
        let overlay = store.fetch_overlay(PAGE_CONTENT_TYPE, self.document.id, language)?;
        info!(
            page = self.document.id,
            language,
            entries = overlay.len(),
            "switching language"
        );
        self.view = Some(apply_overlay(self.document.base(), &overlay));
        self.language = Some(language.to_string());
        Ok(())
    }

    /// Drop the translated view and show the source tree again.
    pub fn return_to_source(&mut self) {
        self.view = None;
        self.language = None;
    }

    /// Edit one leaf in the current tree. Translation edits go to the view;
    /// source-language edits go to the document.
    pub fn set_text(&mut self, address: &str, value: &str) -> bool {
        let Some(view) = self.view.as_mut() else {
            return self.document.set_text(address, value);
        };
        let path: FieldPath = match address.parse() {
            Ok(path) => path,
            Err(error) => {
                debug!(%address, %error, "translation address does not parse");
                return false;
            }
        };
        set_leaf(view, &path, value)
    }

    /// Diff the translated view against the base snapshot and persist it
    /// for the active language. Returns the number of stored entries.
    pub fn save_translation(&self, store: &mut dyn TranslationStore) -> EditorResult<usize> {
        let Some(language) = self.language.as_deref() else {
            return Err(EditorError::Translation(
                "no target language selected".to_string(),
            ));
        };
        let view = self.view.as_ref().unwrap_or_else(|| self.document.page());

        let changes = diff(view, self.document.base());
        store.save_diff(PAGE_CONTENT_TYPE, self.document.id, language, &changes)?;
        info!(
            page = self.document.id,
            language,
            entries = changes.len(),
            "translation saved"
        );
        Ok(changes.len())
    }
}
