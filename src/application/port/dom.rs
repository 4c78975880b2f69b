// SPDX-License-Identifier: MPL-2.0
//! Document port definition.
//!
//! This module defines the [`Dom`] trait through which every component reads
//! and mutates the rendered page. The browser adapter implements it on top of
//! `web-sys`; the in-memory page implements it for tests and tooling.
//!
//! Queries return nodes in document order. Queries scoped to a root only look
//! at its descendants, never at the root itself (like `querySelectorAll`).

use crate::domain::ui::NodeHandle;

// =============================================================================
// ElementQuery
// =============================================================================

/// Structured element selector.
///
/// Components describe what they look for with this type rather than raw CSS
/// strings, so the in-memory page can match without a selector engine. The
/// browser adapter turns it into CSS with [`ElementQuery::to_css`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery {
    /// Elements carrying the given class.
    Class(String),
    /// Elements carrying all of the given classes.
    AllClasses(Vec<String>),
    /// Elements whose `id` contains the given fragment.
    IdContains(String),
    /// Elements whose attribute equals the given value.
    Attribute { name: String, value: String },
    /// Elements matching any of the nested queries.
    AnyOf(Vec<ElementQuery>),
}

impl ElementQuery {
    /// Shorthand for [`ElementQuery::Class`].
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Shorthand for [`ElementQuery::Attribute`].
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Renders the query as a CSS selector list.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            ElementQuery::Class(class) => format!(".{}", css_ident(class)),
            ElementQuery::AllClasses(classes) => classes
                .iter()
                .map(|class| format!(".{}", css_ident(class)))
                .collect(),
            ElementQuery::IdContains(fragment) => {
                format!("[id*=\"{}\"]", css_string(fragment))
            }
            ElementQuery::Attribute { name, value } => {
                format!("[{}=\"{}\"]", css_ident(name), css_string(value))
            }
            ElementQuery::AnyOf(queries) => queries
                .iter()
                .map(ElementQuery::to_css)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Escapes characters that are not valid in a bare CSS identifier.
fn css_ident(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (index, ch) in raw.chars().enumerate() {
        let plain = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii();
        if index == 0 && ch.is_ascii_digit() {
            // Leading digits need a hex escape followed by a terminating space.
            out.push_str(&format!("\\3{ch} "));
        } else if plain {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}

/// Escapes a value placed inside a double-quoted CSS string.
fn css_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

// =============================================================================
// Form controls
// =============================================================================

/// What kind of form control an element is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// `<select>` with its option values in document order.
    Select { options: Vec<String> },
    /// `<input type="text">` (or an input without a type).
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// Any other input type (checkbox, file, hidden, ...).
    OtherInput,
}

/// Description of a form control found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub node: NodeHandle,
    /// The element's `id`, possibly empty.
    pub id: String,
    pub kind: ControlKind,
}

// =============================================================================
// ElementSpec
// =============================================================================

/// Description of an element the page should create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    /// Inline style declarations, applied in order.
    pub styles: Vec<(String, String)>,
}

impl ElementSpec {
    /// Starts a spec for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }
}

// =============================================================================
// Dom
// =============================================================================

/// Access to the rendered page.
///
/// All operations are best effort: missing nodes are ignored by mutators and
/// reported as empty by queries. Style properties use CSS names
/// (`border-color`, not `borderColor`); setting an empty value removes the
/// inline override.
pub trait Dom {
    /// Elements in the whole document matching `query`.
    fn query(&self, query: &ElementQuery) -> Vec<NodeHandle>;

    /// Descendants of `root` matching `query`.
    fn query_within(&self, root: NodeHandle, query: &ElementQuery) -> Vec<NodeHandle>;

    /// Whether the node is an element (not text, comment or document).
    fn is_element(&self, node: NodeHandle) -> bool;

    /// Whether the node is currently attached to the document.
    fn is_connected(&self, node: NodeHandle) -> bool;

    /// Whether the element carries `class`.
    fn has_class(&self, node: NodeHandle, class: &str) -> bool;

    /// Whether the element is a disabled control.
    fn is_disabled(&self, node: NodeHandle) -> bool;

    /// Every `select` and `input` in the document, in document order.
    fn form_controls(&self) -> Vec<FormControl>;

    /// Current value of a form control (empty for other nodes).
    fn value(&self, node: NodeHandle) -> String;

    /// Sets the value of a form control.
    fn set_value(&mut self, node: NodeHandle, value: &str);

    /// Inline style value of `property`, empty when not overridden.
    fn style(&self, node: NodeHandle, property: &str) -> String;

    /// Sets (or with an empty value, clears) an inline style property.
    fn set_style(&mut self, node: NodeHandle, property: &str, value: &str);

    /// Dispatches a synthetic click on the element.
    fn click(&mut self, node: NodeHandle);

    /// Creates a detached element.
    fn create_element(&mut self, spec: &ElementSpec) -> NodeHandle;

    /// Appends a node to the document body.
    fn append_to_body(&mut self, node: NodeHandle);

    /// Detaches a node from the document.
    fn remove(&mut self, node: NodeHandle);

    /// The `lang` attribute of the root element, if any.
    fn document_language(&self) -> Option<String>;

    /// Adds a `<style>` element with the given id to the document head unless
    /// one with that id already exists.
    fn install_stylesheet(&mut self, id: &str, css: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_attribute_render_as_css() {
        assert_eq!(ElementQuery::class("result").to_css(), ".result");
        assert_eq!(
            ElementQuery::attribute("data-ocr-role", "drop-zone").to_css(),
            "[data-ocr-role=\"drop-zone\"]"
        );
        assert_eq!(
            ElementQuery::IdContains("upload".into()).to_css(),
            "[id*=\"upload\"]"
        );
    }

    #[test]
    fn all_classes_render_as_compound_selector() {
        let query = ElementQuery::AllClasses(vec!["modal".into(), "show".into()]);
        assert_eq!(query.to_css(), ".modal.show");
    }

    #[test]
    fn any_of_renders_as_selector_list() {
        let query = ElementQuery::AnyOf(vec![
            ElementQuery::class("btn-close"),
            ElementQuery::attribute("data-bs-dismiss", "modal"),
        ]);
        assert_eq!(query.to_css(), ".btn-close, [data-bs-dismiss=\"modal\"]");
    }

    #[test]
    fn css_escaping_handles_quotes_and_leading_digits() {
        assert_eq!(ElementQuery::class("1col").to_css(), ".\\31 col");
        assert_eq!(
            ElementQuery::IdContains("a\"b".into()).to_css(),
            "[id*=\"a\\\"b\"]"
        );
    }

    #[test]
    fn element_spec_builder_collects_parts() {
        let spec = ElementSpec::new("div")
            .with_class("notification")
            .with_text("Done")
            .with_style("position", "fixed");
        assert_eq!(spec.tag, "div");
        assert_eq!(spec.classes, vec!["notification".to_string()]);
        assert_eq!(spec.text, "Done");
        assert_eq!(spec.styles.len(), 1);
    }
}
