// SPDX-License-Identifier: MPL-2.0
//! In-memory document.
//!
//! A small arena of nodes with just enough of the DOM to back the [`Dom`]
//! port: tags, ids, classes, attributes, inline styles, form values and a
//! click counter. Tests build pages with [`NodeBuilder`].

use crate::application::port::{ControlKind, Dom, ElementQuery, ElementSpec, FormControl};
use crate::domain::ui::NodeHandle;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: Vec<(String, String)>,
    value: String,
    input_type: String,
    disabled: bool,
    options: Vec<String>,
    text: String,
    clicks: usize,
}

impl Element {
    fn matches(&self, query: &ElementQuery) -> bool {
        match query {
            ElementQuery::Class(class) => self.has_class(class),
            ElementQuery::AllClasses(classes) => classes.iter().all(|c| self.has_class(c)),
            ElementQuery::IdContains(fragment) => {
                !fragment.is_empty() && self.id.contains(fragment.as_str())
            }
            ElementQuery::Attribute { name, value } => match name.as_str() {
                "id" => self.id == *value,
                "type" => self.input_type == *value,
                _ => self.attributes.get(name) == Some(value),
            },
            ElementQuery::AnyOf(queries) => queries.iter().any(|q| self.matches(q)),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn control_kind(&self) -> Option<ControlKind> {
        match self.tag.as_str() {
            "select" => Some(ControlKind::Select {
                options: self.options.clone(),
            }),
            "input" => Some(match self.input_type.to_ascii_lowercase().as_str() {
                "" | "text" => ControlKind::TextInput,
                "number" => ControlKind::NumberInput,
                _ => ControlKind::OtherInput,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Content {
    Document,
    Element(Box<Element>),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    content: Content,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Builder for elements placed into a [`MemoryDom`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    element: Element,
}

impl NodeBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            element: Element {
                tag: tag.into().to_ascii_lowercase(),
                ..Element::default()
            },
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.id = id.into();
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.attributes.insert(name.into(), value.into());
        self
    }

    /// `type` of an `<input>`.
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.element.input_type = input_type.into();
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.element.value = value.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.element.disabled = true;
        self
    }

    /// Option values of a `<select>`.
    #[must_use]
    pub fn options(mut self, options: &[&str]) -> Self {
        self.element.options = options.iter().map(|o| (*o).to_string()).collect();
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.text = text.into();
        self
    }
}

impl From<&ElementSpec> for NodeBuilder {
    fn from(spec: &ElementSpec) -> Self {
        let mut builder = NodeBuilder::new(spec.tag.as_str()).text(spec.text.as_str());
        if let Some(id) = &spec.id {
            builder = builder.id(id.as_str());
        }
        for class in &spec.classes {
            builder = builder.class(class.as_str());
        }
        builder.element.styles = spec
            .styles
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .cloned()
            .collect();
        builder
    }
}

/// In-memory page: `document > html > (head, body)`.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    head: usize,
    body: usize,
    lang: Option<String>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT: usize = 0;

impl MemoryDom {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: vec![Node {
                content: Content::Document,
                parent: None,
                children: Vec::new(),
            }],
            head: 0,
            body: 0,
            lang: None,
        };
        let html = dom.push(Content::Element(Box::new(NodeBuilder::new("html").element)));
        dom.link(DOCUMENT, html);
        dom.head = dom.push(Content::Element(Box::new(NodeBuilder::new("head").element)));
        dom.link(html, dom.head);
        dom.body = dom.push(Content::Element(Box::new(NodeBuilder::new("body").element)));
        dom.link(html, dom.body);
        dom
    }

    /// Sets the `lang` attribute of the root element.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub fn body(&self) -> NodeHandle {
        handle(self.body)
    }

    #[must_use]
    pub fn head(&self) -> NodeHandle {
        handle(self.head)
    }

    /// Creates a detached element.
    pub fn create(&mut self, builder: NodeBuilder) -> NodeHandle {
        handle(self.push(Content::Element(Box::new(builder.element))))
    }

    /// Creates an element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeHandle, builder: NodeBuilder) -> NodeHandle {
        let node = self.create(builder);
        self.append_child(parent, node);
        node
    }

    /// Creates a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeHandle, text: impl Into<String>) -> NodeHandle {
        let node = handle(self.push(Content::Text(text.into())));
        self.append_child(parent, node);
        node
    }

    /// Moves `child` (and its subtree) under `parent`.
    pub fn append_child(&mut self, parent: NodeHandle, child: NodeHandle) {
        let (parent, child) = (index(parent), index(child));
        if parent == child || parent >= self.nodes.len() || child >= self.nodes.len() {
            return;
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return;
        }
        self.detach(child);
        self.link(parent, child);
    }

    /// Number of clicks the element received.
    #[must_use]
    pub fn click_count(&self, node: NodeHandle) -> usize {
        self.element(node).map_or(0, |e| e.clicks)
    }

    /// Text content of an element or text node.
    #[must_use]
    pub fn text(&self, node: NodeHandle) -> String {
        match self.nodes.get(index(node)).map(|n| &n.content) {
            Some(Content::Element(element)) => element.text.clone(),
            Some(Content::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    pub fn set_disabled(&mut self, node: NodeHandle, disabled: bool) {
        if let Some(element) = self.element_mut(node) {
            element.disabled = disabled;
        }
    }

    pub fn add_class(&mut self, node: NodeHandle, class: &str) {
        if let Some(element) = self.element_mut(node) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeHandle, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Ids of the `<style>` elements in the document, in order.
    #[must_use]
    pub fn stylesheet_ids(&self) -> Vec<String> {
        self.descendants(DOCUMENT)
            .into_iter()
            .filter_map(|i| match &self.nodes[i].content {
                Content::Element(e) if e.tag == "style" => Some(e.id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Connected elements carrying `class`, in document order.
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeHandle> {
        self.query(&ElementQuery::class(class))
    }

    fn push(&mut self, content: Content) -> usize {
        self.nodes.push(Node {
            content,
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn link(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    fn detach(&mut self, child: usize) {
        if let Some(parent) = self.nodes[child].parent.take() {
            self.nodes[parent].children.retain(|&c| c != child);
        }
    }

    fn ancestors(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(start), |&i| self.nodes[i].parent)
    }

    fn element(&self, node: NodeHandle) -> Option<&Element> {
        match &self.nodes.get(index(node))?.content {
            Content::Element(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeHandle) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(index(node))?.content {
            Content::Element(element) => Some(element.as_mut()),
            _ => None,
        }
    }

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current].children.iter().rev().copied());
        }
        out
    }

    fn matching(&self, root: usize, query: &ElementQuery) -> Vec<NodeHandle> {
        self.descendants(root)
            .into_iter()
            .filter(|&i| matches!(&self.nodes[i].content, Content::Element(e) if e.matches(query)))
            .map(handle)
            .collect()
    }
}

fn handle(index: usize) -> NodeHandle {
    NodeHandle::from_raw(u32::try_from(index).unwrap_or(u32::MAX))
}

fn index(node: NodeHandle) -> usize {
    node.index() as usize
}

impl Dom for MemoryDom {
    fn query(&self, query: &ElementQuery) -> Vec<NodeHandle> {
        self.matching(DOCUMENT, query)
    }

    fn query_within(&self, root: NodeHandle, query: &ElementQuery) -> Vec<NodeHandle> {
        if index(root) >= self.nodes.len() {
            return Vec::new();
        }
        self.matching(index(root), query)
    }

    fn is_element(&self, node: NodeHandle) -> bool {
        self.element(node).is_some()
    }

    fn is_connected(&self, node: NodeHandle) -> bool {
        index(node) < self.nodes.len() && self.ancestors(index(node)).any(|i| i == DOCUMENT)
    }

    fn has_class(&self, node: NodeHandle, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    fn is_disabled(&self, node: NodeHandle) -> bool {
        self.element(node).is_some_and(|e| e.disabled)
    }

    fn form_controls(&self) -> Vec<FormControl> {
        self.descendants(DOCUMENT)
            .into_iter()
            .filter_map(|i| match &self.nodes[i].content {
                Content::Element(element) => Some(FormControl {
                    node: handle(i),
                    id: element.id.clone(),
                    kind: element.control_kind()?,
                }),
                _ => None,
            })
            .collect()
    }

    fn value(&self, node: NodeHandle) -> String {
        self.element(node).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, node: NodeHandle, value: &str) {
        if let Some(element) = self.element_mut(node) {
            element.value = value.to_string();
        }
    }

    fn style(&self, node: NodeHandle, property: &str) -> String {
        self.element(node)
            .and_then(|e| e.styles.iter().find(|(p, _)| p == property))
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: NodeHandle, property: &str, value: &str) {
        let Some(element) = self.element_mut(node) else {
            return;
        };
        if value.is_empty() {
            element.styles.retain(|(p, _)| p != property);
        } else if let Some(slot) = element.styles.iter_mut().find(|(p, _)| p == property) {
            slot.1 = value.to_string();
        } else {
            element.styles.push((property.to_string(), value.to_string()));
        }
    }

    fn click(&mut self, node: NodeHandle) {
        if let Some(element) = self.element_mut(node) {
            element.clicks += 1;
        }
    }

    fn create_element(&mut self, spec: &ElementSpec) -> NodeHandle {
        self.create(NodeBuilder::from(spec))
    }

    fn append_to_body(&mut self, node: NodeHandle) {
        let body = self.body();
        self.append_child(body, node);
    }

    fn remove(&mut self, node: NodeHandle) {
        if index(node) < self.nodes.len() {
            self.detach(index(node));
        }
    }

    fn document_language(&self) -> Option<String> {
        self.lang.clone()
    }

    fn install_stylesheet(&mut self, id: &str, css: &str) {
        if self.query(&ElementQuery::attribute("id", id)).is_empty() {
            let head = self.head();
            self.append(head, NodeBuilder::new("style").id(id).text(css));
        }
    }
}
