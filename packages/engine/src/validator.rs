//! Development mode validators for detecting unstable content patterns.

use std::collections::HashMap;

use vitrine_model::{walk_field, Component, Field, Page, Visitor};

use crate::extract::TextAllowList;
use crate::normalizer::CANDIDATE_EXTRA_PROPERTIES;

/// Validation warning level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationLevel {
    /// Warning that should be addressed
    Warning,
    /// Error that will cause issues
    Error,
}

/// Validation warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    /// Address of the offending component, when one applies.
    pub address: Option<String>,
}

impl ValidationWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            address: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Validator for content pages
pub struct Validator {
    /// Whether dev mode is enabled
    dev_mode: bool,
    /// Collected warnings
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    /// Create a new validator
    pub fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
            warnings: Vec::new(),
        }
    }

    /// Validate a page
    pub fn validate(&mut self, page: &Page) -> Vec<ValidationWarning> {
        self.warnings.clear();

        if !self.dev_mode {
            return vec![];
        }

        self.check_identities(page);

        for (index, component) in page.components.iter().enumerate() {
            let identity = component.identity(index);
            self.check_component_fields(component, &identity);
        }

        self.warnings.clone()
    }

    /// Identity collisions make later components unreachable by address;
    /// dotted identities render addresses that cannot be parsed back.
    fn check_identities(&mut self, page: &Page) {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, component) in page.components.iter().enumerate() {
            let identity = component.identity(index);

            if component.key.as_deref().map_or(true, str::is_empty) && component.kind.is_empty() {
                self.warnings.push(
                    ValidationWarning::warning(format!(
                        "Component at position {} has neither key nor type. \
                         Its address falls back to the page position and breaks when components are reordered.",
                        index
                    ))
                    .with_address(format!("component_{}", identity)),
                );
            }

            if identity.contains('.') {
                self.warnings.push(
                    ValidationWarning::warning(format!(
                        "Component identity '{}' contains '.'. \
                         Addresses built from it cannot be parsed back and stored overlays will be skipped.",
                        identity
                    ))
                    .with_address(format!("component_{}", identity)),
                );
            }

            if let Some(first) = seen.insert(identity.clone(), index) {
                self.warnings.push(
                    ValidationWarning::error(format!(
                        "Duplicate component identity '{}' at positions {} and {}. \
                         Translations for the later component land on the earlier one.",
                        identity, first, index
                    ))
                    .with_address(format!("component_{}", identity)),
                );
            }
        }
    }

    fn check_component_fields(&mut self, component: &Component, identity: &str) {
        let mut checks = FieldChecks {
            allow: TextAllowList::default(),
            address: format!("component_{}", identity),
            warnings: Vec::new(),
        };
        checks.visit_component(component);
        self.warnings.extend(checks.warnings);
    }
}

/// Per-field checks, run over every node of a component.
struct FieldChecks {
    allow: TextAllowList,
    address: String,
    warnings: Vec<ValidationWarning>,
}

impl Visitor for FieldChecks {
    fn visit_field(&mut self, field: &Field) {
        for property in CANDIDATE_EXTRA_PROPERTIES {
            if let Some(value) = field.extra.get(property) {
                if !value.is_array() {
                    self.warnings.push(
                        ValidationWarning::warning(format!(
                            "Field '{}' keeps a non-array value under '{}'. \
                             Array detection treats it as empty.",
                            field.key, property
                        ))
                        .with_address(self.address.clone()),
                    );
                }
            }
        }

        for name in self.allow.iter() {
            if let Some(value) = field.text_value(name) {
                if !value.is_empty() && value.trim().is_empty() {
                    self.warnings.push(
                        ValidationWarning::warning(format!(
                            "Field '{}' has a whitespace-only '{}'. \
                             It looks filled but is invisible to extraction.",
                            field.key, name
                        ))
                        .with_address(self.address.clone()),
                    );
                }
            }
        }

        walk_field(self, field);
    }
}
