//! # Vitrine Editor
//!
//! Page editing and translation layer for Vitrine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: content trees (Page → Field)         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: addresses, extract, diff, overlay   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document lifecycle + sessions       │
//! │  - Load/save pages through PageStore        │
//! │  - Snapshot base trees for diffing          │
//! │  - Language views through TranslationStore  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is source of truth**: overlays and diffs are derived views
//! 2. **Base snapshots anchor diffs**: taken at load and save, never edited
//! 3. **Translation views are ephemeral**: rebuilt from base + overlay on
//!    every language switch, dropped on return to source
//! 4. **Structural drift degrades quietly**: stale addresses skip, they
//!    never fail a save or a render
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrine_editor::{InMemoryPageStore, PageDocument, TranslationSession};
//!
//! // Load and edit the source language
//! let mut document = PageDocument::load(page_id, &store)?;
//! document.set_text("component_hero.items[0].content", "Welcome");
//! document.save(&mut store)?;
//!
//! // Translate through a session
//! let mut session = TranslationSession::new(document);
//! session.switch_language("fr", &translations)?;
//! session.set_text("component_hero.items[0].content", "Bienvenue");
//! session.save_translation(&mut translations)?;
//! ```

mod document;
mod errors;
mod session;
mod store;

pub use document::PageDocument;
pub use errors::{EditorError, EditorResult};
pub use session::TranslationSession;
pub use store::{
    InMemoryPageStore, InMemoryTranslationStore, PageStore, TranslationStore, PAGE_CONTENT_TYPE,
};

// Re-export engine types for convenience
pub use vitrine_engine::{Overlay, TranslationDiff};
pub use vitrine_model::Page;
