// SPDX-License-Identifier: MPL-2.0
//! Drag-zone highlighter.
//!
//! Lights up upload targets while a file is dragged over them. The highlight
//! lives only in inline style, so clearing it hands the element back to the
//! page's stylesheet.

use crate::app::Effect;
use crate::application::port::Dom;
use crate::config::{DragConfig, TargetsConfig};
use crate::diagnostics::{DiagnosticsHandle, PageAction};
use crate::domain::ui::NodeHandle;
use crate::ui::state::DragState;
use crate::ui::targets::{self, Capability};

const BACKGROUND: &str = "background";
const BORDER_COLOR: &str = "border-color";

/// Drag events delivered to a drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    DragOver(NodeHandle),
    DragLeave(NodeHandle),
    Drop(NodeHandle),
}

impl Message {
    /// `dragover` and `dragleave` must be cancelled for the zone to accept a
    /// drop. The drop itself is left to the upload component.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Message::DragOver(_) | Message::DragLeave(_))
    }
}

/// Drop-zone highlighter state.
#[derive(Debug, Default)]
pub struct Highlighter {
    zones: Vec<NodeHandle>,
    state: DragState,
    background: String,
    border_color: String,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Highlighter {
    #[must_use]
    pub fn new(config: &DragConfig) -> Self {
        Self {
            background: config.highlight_background.clone(),
            border_color: config.highlight_border_color.clone(),
            ..Self::default()
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Finds the drop zones present at DOM-ready. Each of them needs
    /// `dragover`, `dragleave` and `drop` listeners.
    pub fn attach<D: Dom>(&mut self, dom: &D, config: &TargetsConfig) -> &[NodeHandle] {
        self.zones = targets::find(dom, config, Capability::DropZone);
        &self.zones
    }

    #[must_use]
    pub fn zones(&self) -> &[NodeHandle] {
        &self.zones
    }

    #[must_use]
    pub fn is_highlighted(&self, zone: NodeHandle) -> bool {
        self.state.is_dragging_over(zone)
    }

    pub fn update<D: Dom>(&mut self, dom: &mut D, message: Message) -> Vec<Effect<Message>> {
        let prevent_default = message.prevents_default();
        match message {
            Message::DragOver(zone) => {
                if !self.zones.contains(&zone) {
                    return Vec::new();
                }
                dom.set_style(zone, BACKGROUND, &self.background);
                dom.set_style(zone, BORDER_COLOR, &self.border_color);
                // dragover repeats while the pointer moves; log the first one.
                if self.state.start(zone) {
                    self.log(PageAction::ZoneHighlighted);
                }
            }
            Message::DragLeave(zone) => {
                if !self.zones.contains(&zone) {
                    return Vec::new();
                }
                self.clear(dom, zone, false);
            }
            Message::Drop(zone) => {
                if self.zones.contains(&zone) {
                    self.clear(dom, zone, true);
                }
            }
        }
        if prevent_default {
            vec![Effect::PreventDefault]
        } else {
            Vec::new()
        }
    }

    fn clear<D: Dom>(&mut self, dom: &mut D, zone: NodeHandle, dropped: bool) {
        dom.set_style(zone, BACKGROUND, "");
        dom.set_style(zone, BORDER_COLOR, "");
        if self.state.stop(zone) {
            self.log(PageAction::ZoneCleared { dropped });
        }
    }

    fn log(&self, action: PageAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_HIGHLIGHT_BACKGROUND, DEFAULT_HIGHLIGHT_BORDER_COLOR};
    use crate::infrastructure::memory::{MemoryDom, NodeBuilder};

    fn setup() -> (MemoryDom, Highlighter, NodeHandle) {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let zone = dom.append(body, NodeBuilder::new("div").id("upload-document"));
        let mut highlighter = Highlighter::new(&DragConfig::default());
        highlighter.attach(&dom, &TargetsConfig::default());
        (dom, highlighter, zone)
    }

    #[test]
    fn dragover_highlights_and_prevents_default() {
        let (mut dom, mut highlighter, zone) = setup();

        let effects = highlighter.update(&mut dom, Message::DragOver(zone));

        assert_eq!(effects, vec![Effect::PreventDefault]);
        assert_eq!(dom.style(zone, "background"), DEFAULT_HIGHLIGHT_BACKGROUND);
        assert_eq!(dom.style(zone, "border-color"), DEFAULT_HIGHLIGHT_BORDER_COLOR);
        assert!(highlighter.is_highlighted(zone));
    }

    #[test]
    fn dragleave_clears_and_prevents_default() {
        let (mut dom, mut highlighter, zone) = setup();
        highlighter.update(&mut dom, Message::DragOver(zone));

        let effects = highlighter.update(&mut dom, Message::DragLeave(zone));

        assert_eq!(effects, vec![Effect::PreventDefault]);
        assert_eq!(dom.style(zone, "background"), "");
        assert_eq!(dom.style(zone, "border-color"), "");
        assert!(!highlighter.is_highlighted(zone));
    }

    #[test]
    fn drop_clears_without_preventing_default() {
        let (mut dom, mut highlighter, zone) = setup();
        highlighter.update(&mut dom, Message::DragOver(zone));

        let effects = highlighter.update(&mut dom, Message::Drop(zone));

        assert!(effects.is_empty());
        assert_eq!(dom.style(zone, "background"), "");
        assert_eq!(dom.style(zone, "border-color"), "");
    }

    #[test]
    fn repeated_dragover_logs_once() {
        let (mut dom, mut highlighter, zone) = setup();
        let diagnostics = DiagnosticsHandle::default();
        highlighter.set_diagnostics(diagnostics.clone());

        highlighter.update(&mut dom, Message::DragOver(zone));
        highlighter.update(&mut dom, Message::DragOver(zone));
        highlighter.update(&mut dom, Message::Drop(zone));

        assert_eq!(
            diagnostics.actions(),
            vec![
                PageAction::ZoneHighlighted,
                PageAction::ZoneCleared { dropped: true }
            ]
        );
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let (mut dom, mut highlighter, _) = setup();
        let body = dom.body();
        let other = dom.append(body, NodeBuilder::new("div").id("sidebar"));

        assert!(highlighter.update(&mut dom, Message::DragOver(other)).is_empty());
        assert_eq!(dom.style(other, "background"), "");
    }

    #[test]
    fn custom_colors_are_applied() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let zone = dom.append(body, NodeBuilder::new("div").attr("data-ocr-role", "drop-zone"));
        let config = DragConfig {
            highlight_background: "#fff8e1".into(),
            highlight_border_color: "orange".into(),
        };
        let mut highlighter = Highlighter::new(&config);
        highlighter.attach(&dom, &TargetsConfig::default());

        highlighter.update(&mut dom, Message::DragOver(zone));

        assert_eq!(dom.style(zone, "background"), "#fff8e1");
        assert_eq!(dom.style(zone, "border-color"), "orange");
    }
}
