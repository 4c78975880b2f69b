// SPDX-License-Identifier: MPL-2.0
//! Entrance animation for inserted recognition results.
//!
//! The animation runs in two phases. On insertion the node is hidden and
//! pushed down; after the reveal delay the transition is set together with
//! the final state. Both must not land in the same tick, otherwise the
//! browser never paints the start state and nothing animates.

use crate::app::Effect;
use crate::application::port::{Dom, ElementQuery};
use crate::config::{AnimationConfig, TargetsConfig};
use crate::diagnostics::{DiagnosticsHandle, PageAction};
use crate::domain::ui::{Millis, NodeHandle, SlideOffset};
use crate::ui::targets;

/// Messages driving the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Nodes reported by one mutation batch, in order.
    NodesAdded(Vec<NodeHandle>),
    /// Second phase for a node hidden earlier.
    Reveal(NodeHandle),
}

/// Insertion animator state.
#[derive(Debug)]
pub struct Animator {
    results: ElementQuery,
    result_class: String,
    delay: Millis,
    transition: Millis,
    offset: SlideOffset,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Animator {
    #[must_use]
    pub fn new(animation: &AnimationConfig, targets_config: &TargetsConfig) -> Self {
        Self {
            results: targets::results(targets_config),
            result_class: targets_config.result_class.clone(),
            delay: animation.reveal_delay(),
            transition: animation.transition(),
            offset: animation.offset(),
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn update<D: Dom>(&mut self, dom: &mut D, message: Message) -> Vec<Effect<Message>> {
        match message {
            Message::NodesAdded(nodes) => {
                let mut effects = Vec::new();
                for node in nodes {
                    if self.is_result(dom, node) {
                        effects.push(self.hide(dom, node));
                    }
                }
                effects
            }
            Message::Reveal(node) => {
                if dom.is_connected(node) {
                    self.reveal(dom, node);
                }
                Vec::new()
            }
        }
    }

    /// An added element is animated when it is a result or wraps one.
    fn is_result<D: Dom>(&self, dom: &D, node: NodeHandle) -> bool {
        dom.is_element(node)
            && (dom.has_class(node, &self.result_class)
                || !dom.query_within(node, &self.results).is_empty())
    }

    fn hide<D: Dom>(&self, dom: &mut D, node: NodeHandle) -> Effect<Message> {
        dom.set_style(node, "opacity", "0");
        dom.set_style(node, "transform", &self.offset.translate_css());
        if let Some(handle) = &self.diagnostics {
            handle.log_action(PageAction::ResultRevealed);
        }
        Effect::after(self.delay, Message::Reveal(node))
    }

    fn reveal<D: Dom>(&self, dom: &mut D, node: NodeHandle) {
        let duration = self.transition.css();
        dom.set_style(
            node,
            "transition",
            &format!("opacity {duration} ease, transform {duration} ease"),
        );
        dom.set_style(node, "opacity", "1");
        dom.set_style(node, "transform", &SlideOffset::new(0).translate_css());
    }
}
