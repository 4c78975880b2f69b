// SPDX-License-Identifier: MPL-2.0
//! Typed schema for persisted form fields.
//!
//! Every field the persister touches has a [`FieldKind`]. The kind is
//! inferred from the element and can be overridden per field id in the
//! `[persistence.fields]` configuration table:
//!
//! ```toml
//! [persistence.fields]
//! dpi = "number"
//! lang = "choice"
//! ```
//!
//! Stored values are checked against the kind before they are written back
//! into a field, so a stale or hand-edited entry cannot put a field into a
//! state the page never offers.

use crate::application::port::{ControlKind, FormControl};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Expected shape of a persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Any string.
    Text,
    /// A finite number. The empty string is also accepted.
    Number,
    /// One of the element's option values.
    Choice,
}

impl FieldKind {
    /// Kind implied by the element, or `None` for inputs that are not
    /// persisted (checkboxes, files, hidden fields, ...).
    #[must_use]
    pub fn infer(control: &ControlKind) -> Option<Self> {
        match control {
            ControlKind::Select { .. } => Some(FieldKind::Choice),
            ControlKind::NumberInput => Some(FieldKind::Number),
            ControlKind::TextInput => Some(FieldKind::Text),
            ControlKind::OtherInput => None,
        }
    }

    /// Checks `value` for a field of this kind on `control`.
    pub fn validate(self, value: &str, control: &ControlKind) -> Result<(), Mismatch> {
        match self {
            FieldKind::Text => Ok(()),
            FieldKind::Number => {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
                    Ok(())
                } else {
                    Err(Mismatch::NotANumber)
                }
            }
            FieldKind::Choice => match control {
                ControlKind::Select { options }
                    if !options.is_empty() && !options.iter().any(|o| o == value) =>
                {
                    Err(Mismatch::UnknownOption)
                }
                _ => Ok(()),
            },
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Choice => "choice",
        };
        f.write_str(name)
    }
}

/// Why a stored value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    NotANumber,
    UnknownOption,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::NotANumber => write!(f, "not a finite number"),
            Mismatch::UnknownOption => write!(f, "not one of the available options"),
        }
    }
}

/// Per-id overrides on top of inferred kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    overrides: BTreeMap<String, FieldKind>,
}

impl FieldSchema {
    #[must_use]
    pub fn new(overrides: BTreeMap<String, FieldKind>) -> Self {
        Self { overrides }
    }

    /// Kind of the given control, or `None` if it is not persisted.
    ///
    /// Controls without an id are never persisted. An override applies only to
    /// controls that would be persisted anyway.
    #[must_use]
    pub fn kind_for(&self, control: &FormControl) -> Option<FieldKind> {
        if control.id.is_empty() {
            return None;
        }
        let inferred = FieldKind::infer(&control.kind)?;
        Some(self.overrides.get(&control.id).copied().unwrap_or(inferred))
    }
}
