// SPDX-License-Identifier: MPL-2.0
//! Form field persistence through browser storage.
//!
//! At load every `select` and text/number `input` with an id is wired up:
//! an empty field receives its stored value (if that value fits the field's
//! [`FieldKind`]), and every later `change` writes the current value back
//! under `<namespace>_<id>`, empty strings included.
//!
//! Storage failures never stop the page. They are recorded as warnings and
//! the field is skipped.

use super::persisted_state::{FieldKind, FieldSchema};
use crate::application::port::{ControlKind, Dom, KeyValueStore};
use crate::config::{PersistenceConfig, StorageConfig};
use crate::diagnostics::{DiagnosticsHandle, PageAction, WarningType};
use crate::domain::ui::{NodeHandle, StorageKey};

#[derive(Debug, Clone)]
struct PersistedField {
    node: NodeHandle,
    id: String,
    key: StorageKey,
    kind: FieldKind,
    control: ControlKind,
}

/// Field persister state.
#[derive(Debug)]
pub struct FieldPersister {
    namespace: String,
    schema: FieldSchema,
    fields: Vec<PersistedField>,
    diagnostics: DiagnosticsHandle,
}

impl FieldPersister {
    #[must_use]
    pub fn new(
        storage: &StorageConfig,
        persistence: &PersistenceConfig,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            namespace: storage.namespace().to_string(),
            schema: FieldSchema::new(persistence.fields.clone()),
            fields: Vec::new(),
            diagnostics,
        }
    }

    /// Discovers persisted fields and pre-fills the empty ones.
    ///
    /// Returns the nodes that need a `change` listener.
    pub fn restore<D: Dom, S: KeyValueStore>(&mut self, dom: &mut D, store: &S) -> Vec<NodeHandle> {
        self.fields = dom
            .form_controls()
            .into_iter()
            .filter_map(|control| {
                let kind = self.schema.kind_for(&control)?;
                Some(PersistedField {
                    node: control.node,
                    key: StorageKey::new(&self.namespace, &control.id),
                    id: control.id,
                    kind,
                    control: control.kind,
                })
            })
            .collect();

        for field in &self.fields {
            self.restore_field(dom, store, field);
        }

        self.fields.iter().map(|field| field.node).collect()
    }

    fn restore_field<D: Dom, S: KeyValueStore>(&self, dom: &mut D, store: &S, field: &PersistedField) {
        let stored = match store.get(field.key.as_str()) {
            Ok(Some(value)) => value,
            Ok(None) => return,
            Err(err) => {
                self.diagnostics
                    .warn(WarningType::Storage, format!("{}: {err}", field.key));
                return;
            }
        };

        if !dom.value(field.node).is_empty() {
            return;
        }

        if let Err(mismatch) = field.kind.validate(&stored, &field.control) {
            self.diagnostics.warn(
                WarningType::Validation,
                format!(
                    "{}: stored value {stored:?} rejected for {} field ({mismatch})",
                    field.key, field.kind
                ),
            );
            return;
        }

        dom.set_value(field.node, &stored);
        self.diagnostics.log_action(PageAction::FieldRestored {
            field: field.id.clone(),
        });
    }

    /// Writes the field's current value. Nodes that were not wired at load
    /// are ignored.
    pub fn save<D: Dom, S: KeyValueStore>(&self, dom: &D, store: &mut S, node: NodeHandle) {
        let Some(field) = self.fields.iter().find(|field| field.node == node) else {
            return;
        };
        let value = dom.value(node);
        match store.set(field.key.as_str(), &value) {
            Ok(()) => self.diagnostics.log_action(PageAction::FieldSaved {
                field: field.id.clone(),
            }),
            Err(err) => self
                .diagnostics
                .warn(WarningType::Storage, format!("{}: {err}", field.key)),
        }
    }

    /// Nodes wired at load.
    #[must_use]
    pub fn fields(&self) -> Vec<NodeHandle> {
        self.fields.iter().map(|field| field.node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemoryDom, MemoryStore, NodeBuilder};

    fn persister(diagnostics: &DiagnosticsHandle) -> FieldPersister {
        FieldPersister::new(
            &StorageConfig::default(),
            &PersistenceConfig::default(),
            diagnostics.clone(),
        )
    }

    fn lang_select(dom: &mut MemoryDom, value: &str) -> NodeHandle {
        let body = dom.body();
        dom.append(
            body,
            NodeBuilder::new("select")
                .id("lang")
                .options(&["", "rus", "eng", "rus+eng"])
                .value(value),
        )
    }

    #[test]
    fn empty_field_is_restored() {
        let mut dom = MemoryDom::new();
        let select = lang_select(&mut dom, "");
        let mut store = MemoryStore::new();
        store.insert("ocr_lang", "rus");
        let diagnostics = DiagnosticsHandle::default();

        let wired = persister(&diagnostics).restore(&mut dom, &store);

        assert_eq!(wired, vec![select]);
        assert_eq!(dom.value(select), "rus");
        assert_eq!(
            diagnostics.actions(),
            vec![PageAction::FieldRestored { field: "lang".into() }]
        );
    }

    #[test]
    fn filled_field_is_never_overwritten() {
        let mut dom = MemoryDom::new();
        let select = lang_select(&mut dom, "eng");
        let mut store = MemoryStore::new();
        store.insert("ocr_lang", "rus");

        persister(&DiagnosticsHandle::default()).restore(&mut dom, &store);

        assert_eq!(dom.value(select), "eng");
    }

    #[test]
    fn invalid_stored_value_is_rejected_with_warning() {
        let mut dom = MemoryDom::new();
        let select = lang_select(&mut dom, "");
        let mut store = MemoryStore::new();
        store.insert("ocr_lang", "klingon");
        let diagnostics = DiagnosticsHandle::default();

        persister(&diagnostics).restore(&mut dom, &store);

        assert_eq!(dom.value(select), "");
        let warnings = diagnostics.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::Validation);
    }

    #[test]
    fn change_writes_value_including_empty() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let dpi = dom.append(body, NodeBuilder::new("input").id("dpi").input_type("number"));
        let mut store = MemoryStore::new();
        let mut persister = persister(&DiagnosticsHandle::default());
        persister.restore(&mut dom, &store);

        dom.set_value(dpi, "300");
        persister.save(&dom, &mut store, dpi);
        assert_eq!(store.value("ocr_dpi").as_deref(), Some("300"));

        dom.set_value(dpi, "");
        persister.save(&dom, &mut store, dpi);
        assert_eq!(store.value("ocr_dpi").as_deref(), Some(""));
    }

    #[test]
    fn unsupported_and_anonymous_controls_are_skipped() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.append(body, NodeBuilder::new("input").id("agree").input_type("checkbox"));
        dom.append(body, NodeBuilder::new("input"));
        let text = dom.append(body, NodeBuilder::new("input").id("title"));

        let wired = persister(&DiagnosticsHandle::default()).restore(&mut dom, &MemoryStore::new());

        assert_eq!(wired, vec![text]);
    }

    #[test]
    fn storage_failure_is_recorded_and_setup_continues() {
        let mut dom = MemoryDom::new();
        let select = lang_select(&mut dom, "");
        let mut store = MemoryStore::new();
        store.insert("ocr_lang", "rus");
        store.fail_with("storage disabled");
        let diagnostics = DiagnosticsHandle::default();
        let mut persister = persister(&diagnostics);

        let wired = persister.restore(&mut dom, &store);
        dom.set_value(select, "eng");
        persister.save(&dom, &mut store, select);

        assert_eq!(wired, vec![select]);
        assert_eq!(dom.value(select), "eng");
        let warnings = diagnostics.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings
            .iter()
            .all(|warning| warning.warning_type == WarningType::Storage));
    }

    #[test]
    fn namespace_follows_config() {
        let mut dom = MemoryDom::new();
        let select = lang_select(&mut dom, "");
        let mut store = MemoryStore::new();
        store.insert("scan_lang", "eng");
        let storage = StorageConfig {
            namespace: "scan".into(),
        };
        let mut persister = FieldPersister::new(
            &storage,
            &PersistenceConfig::default(),
            DiagnosticsHandle::default(),
        );

        persister.restore(&mut dom, &store);

        assert_eq!(dom.value(select), "eng");
    }
}
