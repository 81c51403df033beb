//! Text diff between two structurally identical trees.
//!
//! The differencer only compares leaves that exist on both sides under the
//! same address. Addresses present on one side only are structural drift
//! (the UI added or removed array entries) and are not translation data, so
//! they are skipped silently. Structural changes never error here.

use tracing::debug;
use vitrine_model::Page;

use crate::extract::{extract_text_with, TextAllowList};
use crate::overlay::{DiffEntry, TranslationDiff};

/// Every text leaf whose value differs between `current` and `base`,
/// addressed canonically, with the base text carried along.
pub fn diff(current: &Page, base: &Page) -> TranslationDiff {
    diff_with(current, base, &TextAllowList::default())
}

pub fn diff_with(current: &Page, base: &Page, allow: &TextAllowList) -> TranslationDiff {
    let current_text = extract_text_with(current, allow);
    let base_text = extract_text_with(base, allow);

    let mut changes = TranslationDiff::new();
    for (address, value) in &current_text {
        let Some(source) = base_text.get(address) else {
            continue;
        };
        if value != source {
            changes.insert(
                address.clone(),
                DiffEntry {
                    value: value.clone(),
                    source_text: source.clone(),
                },
            );
        }
    }

    debug!(
        changed = changes.len(),
        scanned = current_text.len(),
        "page diff complete"
    );
    changes
}
