// SPDX-License-Identifier: MPL-2.0
//! [`Dom`] on top of `web-sys`.
//!
//! Nodes a component touches are registered and handed out as
//! [`NodeHandle`]s. A JS `Map` keyed by the node object maps each node to its
//! slot, so the same element seen by a query and by the mutation observer
//! compares equal. Registration does not outlive the node's place in the
//! document: [`WebDom::sweep`] drops every node that is no longer connected,
//! and [`Dom::remove`] drops the removed node right away.

use super::describe;
use crate::application::port::{ControlKind, Dom, ElementQuery, ElementSpec, FormControl};
use crate::domain::ui::NodeHandle;
use crate::infrastructure::registry::{HandleRegistry, UNREGISTERED};
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, Node, NodeList,
};

/// Browser document adapter.
pub struct WebDom {
    document: Document,
    nodes: RefCell<HandleRegistry<Node>>,
    index: js_sys::Map,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            nodes: RefCell::new(HandleRegistry::new()),
            index: js_sys::Map::new(),
        }
    }

    /// Handle for a live node, registering it on first sight.
    pub fn intern(&self, node: &Node) -> Option<NodeHandle> {
        let nodes = self.nodes.borrow();
        if let Some(handle) = slot_of(&self.index.get(node)).and_then(|slot| nodes.handle_at(slot)) {
            return Some(handle);
        }
        drop(nodes);
        let handle = self.nodes.borrow_mut().insert(node.clone());
        match handle {
            Some(handle) => {
                self.index.set(node, &JsValue::from(handle.index()));
            }
            None => console::error_1(&"ocr_lens: node registry is full".into()),
        }
        handle
    }

    /// The node behind a handle.
    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<Node> {
        self.nodes.borrow().get(handle).cloned()
    }

    /// Unregisters every node that has left the document.
    pub fn sweep(&self) {
        let released = self.nodes.borrow_mut().retain(Node::is_connected);
        for node in released {
            self.index.delete(&node);
        }
    }

    fn release(&self, handle: NodeHandle) {
        if let Some(node) = self.nodes.borrow_mut().release(handle) {
            self.index.delete(&node);
        }
    }

    fn element(&self, handle: NodeHandle) -> Option<Element> {
        self.node(handle)?.dyn_into::<Element>().ok()
    }

    fn html_element(&self, handle: NodeHandle) -> Option<HtmlElement> {
        self.node(handle)?.dyn_into::<HtmlElement>().ok()
    }

    fn collect(&self, list: Result<NodeList, JsValue>) -> Vec<NodeHandle> {
        match list {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|node| self.intern(&node))
                .collect(),
            Err(err) => {
                console::warn_1(&format!("ocr_lens: query failed: {}", describe(&err)).into());
                Vec::new()
            }
        }
    }

    fn control_kind(element: &Element) -> Option<ControlKind> {
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            let options = select
                .query_selector_all("option")
                .map(|list| {
                    (0..list.length())
                        .filter_map(|i| list.get(i))
                        .filter_map(|node| node.dyn_into::<HtmlOptionElement>().ok())
                        .map(|option| option.value())
                        .collect()
                })
                .unwrap_or_default();
            return Some(ControlKind::Select { options });
        }
        let input = element.dyn_ref::<HtmlInputElement>()?;
        Some(match input.type_().to_ascii_lowercase().as_str() {
            "" | "text" => ControlKind::TextInput,
            "number" => ControlKind::NumberInput,
            _ => ControlKind::OtherInput,
        })
    }
}

impl Dom for WebDom {
    fn query(&self, query: &ElementQuery) -> Vec<NodeHandle> {
        self.collect(self.document.query_selector_all(&query.to_css()))
    }

    fn query_within(&self, root: NodeHandle, query: &ElementQuery) -> Vec<NodeHandle> {
        match self.element(root) {
            Some(root) => self.collect(root.query_selector_all(&query.to_css())),
            None => Vec::new(),
        }
    }

    fn is_element(&self, node: NodeHandle) -> bool {
        self.node(node)
            .is_some_and(|node| node.node_type() == Node::ELEMENT_NODE)
    }

    fn is_connected(&self, node: NodeHandle) -> bool {
        self.node(node).is_some_and(|node| node.is_connected())
    }

    fn has_class(&self, node: NodeHandle, class: &str) -> bool {
        self.element(node)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn is_disabled(&self, node: NodeHandle) -> bool {
        self.element(node)
            .is_some_and(|element| element.has_attribute("disabled"))
    }

    fn form_controls(&self) -> Vec<FormControl> {
        let Ok(list) = self.document.query_selector_all("select, input") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| {
                let element = node.dyn_ref::<Element>()?;
                Some(FormControl {
                    node: self.intern(&node)?,
                    id: element.id(),
                    kind: Self::control_kind(element)?,
                })
            })
            .collect()
    }

    fn value(&self, node: NodeHandle) -> String {
        let Some(node) = self.node(node) else {
            return String::new();
        };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, node: NodeHandle, value: &str) {
        let Some(node) = self.node(node) else {
            return;
        };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn style(&self, node: NodeHandle, property: &str) -> String {
        self.html_element(node)
            .and_then(|element| element.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: NodeHandle, property: &str, value: &str) {
        let Some(element) = self.html_element(node) else {
            return;
        };
        let style = element.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            console::warn_1(&format!("ocr_lens: style {property}: {}", describe(&err)).into());
        }
    }

    fn click(&mut self, node: NodeHandle) {
        if let Some(element) = self.html_element(node) {
            element.click();
        }
    }

    fn create_element(&mut self, spec: &ElementSpec) -> NodeHandle {
        let element = match self.document.create_element(&spec.tag) {
            Ok(element) => element,
            Err(err) => {
                console::error_1(&err);
                return UNREGISTERED;
            }
        };
        if let Some(id) = &spec.id {
            element.set_id(id);
        }
        element.set_class_name(&spec.classes.join(" "));
        element.set_text_content(Some(&spec.text));
        let Some(handle) = self.intern(&element) else {
            return UNREGISTERED;
        };
        for (property, value) in &spec.styles {
            self.set_style(handle, property, value);
        }
        handle
    }

    fn append_to_body(&mut self, node: NodeHandle) {
        let (Some(body), Some(node)) = (self.document.body(), self.node(node)) else {
            return;
        };
        if let Err(err) = body.append_child(&node) {
            console::error_1(&err);
        }
    }

    fn remove(&mut self, node_handle: NodeHandle) {
        let Some(node) = self.node(node_handle) else {
            return;
        };
        if let Some(parent) = node.parent_node() {
            // Already detached by the page is fine.
            let _ = parent.remove_child(&node);
        }
        self.release(node_handle);
    }

    fn document_language(&self) -> Option<String> {
        self.document
            .document_element()?
            .get_attribute("lang")
            .filter(|lang| !lang.trim().is_empty())
    }

    fn install_stylesheet(&mut self, id: &str, css: &str) {
        if self.document.get_element_by_id(id).is_some() {
            return;
        }
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        let parent: Option<Node> = match self.document.query_selector("head") {
            Ok(Some(head)) => Some(head.into()),
            _ => self.document.body().map(Into::into),
        };
        if let Some(parent) = parent {
            if let Err(err) = parent.append_child(&style) {
                console::error_1(&err);
            }
        }
    }
}

/// Slot index stored in the node map, if the value is one.
fn slot_of(value: &JsValue) -> Option<u32> {
    let raw = value.as_f64()?;
    (raw.fract() == 0.0 && (0.0..f64::from(u32::MAX)).contains(&raw)).then(|| raw as u32)
}
