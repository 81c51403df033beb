//! Flat overlays and their application onto content trees.
//!
//! An overlay is a flat `address -> text` map, typically one stored
//! translation. Applying it never changes tree shape: every write lands on
//! an existing leaf resolved by address, and addresses that no longer match
//! the tree (structural drift since the overlay was produced) are skipped.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitrine_model::Page;

use crate::path::{set_leaf, FieldPath};

/// Flat address -> replacement text map.
pub type Overlay = IndexMap<String, String>;

/// Flat address -> changed leaf map produced by [`crate::differ::diff`].
pub type TranslationDiff = IndexMap<String, DiffEntry>;

/// One changed leaf: the new value plus the base text it replaces. The base
/// text travels with the diff so reviewers see what was translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub value: String,
    pub source_text: String,
}

/// Produce a new page with every overlay value written over a clone of
/// `base`. The input tree is never touched and shares no storage with the
/// result; an empty overlay therefore yields a deep independent copy.
pub fn apply_overlay(base: &Page, overlay: &Overlay) -> Page {
    let mut page = base.clone();
    let mut applied = 0usize;

    for (address, value) in overlay {
        let path: FieldPath = match address.parse() {
            Ok(path) => path,
            Err(error) => {
                debug!(%address, %error, "overlay address does not parse, skipping");
                continue;
            }
        };
        if set_leaf(&mut page, &path, value) {
            applied += 1;
        } else {
            debug!(%address, "overlay address does not resolve, skipping");
        }
    }

    debug!(applied, total = overlay.len(), "overlay applied");
    page
}

/// Strip a diff down to the overlay that reproduces its values.
pub fn overlay_from_diff(diff: &TranslationDiff) -> Overlay {
    diff.iter()
        .map(|(address, entry)| (address.clone(), entry.value.clone()))
        .collect()
}
