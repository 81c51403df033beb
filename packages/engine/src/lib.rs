pub mod differ;
pub mod extract;
pub mod normalizer;
pub mod overlay;
pub mod path;
pub mod uniform;
pub mod validator;

#[cfg(test)]
mod tests_translation;

#[cfg(test)]
mod tests_normalizer_scenarios;

pub use differ::{diff, diff_with};
pub use extract::{extract_text, extract_text_with, TextAllowList, DEFAULT_TEXT_FIELDS};
pub use normalizer::{
    array_items, detect_array_kind, has_array_content, with_array_items, ArrayDetection,
    ArrayKind,
};
pub use overlay::{apply_overlay, overlay_from_diff, DiffEntry, Overlay, TranslationDiff};
pub use path::{leaf_value, set_leaf, FieldPath, PathError, PathResult, PathSegment};
pub use uniform::{from_uniform, to_uniform};
pub use validator::{ValidationLevel, ValidationWarning, Validator};
