// SPDX-License-Identifier: MPL-2.0
//! Deterministic host for [`App`].
//!
//! The runtime plays the browser's part: it routes events to the wired
//! nodes, keeps one-shot timers on a virtual clock and answers clipboard
//! writes. Time only moves through [`Runtime::advance`], so timing-dependent
//! behavior can be checked exactly.

use super::{MemoryDom, MemoryStore, NodeBuilder};
use crate::app::{App, Effect, Message, Wiring};
use crate::application::port::Dom;
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::ui::{KeyPress, NodeHandle};
use crate::ui::animator;
use crate::ui::drag_zone;
use crate::ui::notifications::Severity;
use std::collections::VecDeque;

#[derive(Debug)]
struct Timer {
    due: u64,
    seq: u64,
    message: Message,
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Whether the event's default action was prevented.
    pub default_prevented: bool,
}

/// In-memory page runtime with a virtual clock.
#[derive(Debug)]
pub struct Runtime {
    app: App,
    dom: MemoryDom,
    store: MemoryStore,
    wiring: Option<Wiring>,
    now: u64,
    timers: Vec<Timer>,
    next_seq: u64,
    clipboard: Option<String>,
    clipboard_rejection: Option<String>,
}

impl Runtime {
    #[must_use]
    pub fn new(config: Config, dom: MemoryDom, store: MemoryStore) -> Self {
        Self {
            app: App::new(config),
            dom,
            store,
            wiring: None,
            now: 0,
            timers: Vec::new(),
            next_seq: 0,
            clipboard: None,
            clipboard_rejection: None,
        }
    }

    /// Runs DOM-ready wiring. Events reach the app only after boot.
    pub fn boot(&mut self) -> Wiring {
        let wiring = self.app.boot(&mut self.dom, &self.store);
        self.wiring = Some(wiring.clone());
        wiring
    }

    /// Delivers a message and runs the resulting effects.
    pub fn dispatch(&mut self, message: Message) -> Dispatch {
        let mut outcome = Dispatch::default();
        let mut queue = VecDeque::from([message]);
        while let Some(message) = queue.pop_front() {
            for effect in self.app.update(&mut self.dom, &mut self.store, message) {
                match effect {
                    Effect::After { delay, message } => {
                        self.timers.push(Timer {
                            due: self.now + u64::from(delay.value()),
                            seq: self.next_seq,
                            message,
                        });
                        self.next_seq += 1;
                    }
                    Effect::PreventDefault => outcome.default_prevented = true,
                    Effect::WriteClipboard(text) => {
                        let result = match &self.clipboard_rejection {
                            Some(reason) => Err(reason.clone()),
                            None => {
                                self.clipboard = Some(text);
                                Ok(())
                            }
                        };
                        queue.push_back(Message::ClipboardWritten(result));
                    }
                }
            }
        }
        outcome
    }

    /// Moves the clock forward, firing due timers in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now + ms;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(_, timer)| (timer.due, timer.seq))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            let timer = self.timers.remove(index);
            self.now = timer.due;
            self.dispatch(timer.message);
        }
        self.now = target;
    }

    /// `dragover` on a node. Only wired drop zones listen.
    pub fn drag_over(&mut self, zone: NodeHandle) -> Dispatch {
        self.drag_event(zone, drag_zone::Message::DragOver(zone))
    }

    pub fn drag_leave(&mut self, zone: NodeHandle) -> Dispatch {
        self.drag_event(zone, drag_zone::Message::DragLeave(zone))
    }

    pub fn drop_on(&mut self, zone: NodeHandle) -> Dispatch {
        self.drag_event(zone, drag_zone::Message::Drop(zone))
    }

    fn drag_event(&mut self, zone: NodeHandle, message: drag_zone::Message) -> Dispatch {
        let wired = self
            .wiring
            .as_ref()
            .is_some_and(|w| w.drop_zones.contains(&zone));
        if wired {
            self.dispatch(Message::DragZone(message))
        } else {
            Dispatch::default()
        }
    }

    /// Global `keydown`.
    pub fn key_down(&mut self, press: KeyPress) -> Dispatch {
        if self.wiring.is_none() {
            return Dispatch::default();
        }
        self.dispatch(Message::KeyDown(press))
    }

    /// User edits a field and commits it, firing `change`.
    pub fn change(&mut self, field: NodeHandle, value: &str) {
        self.dom.set_value(field, value);
        let wired = self
            .wiring
            .as_ref()
            .is_some_and(|w| w.persisted_fields.contains(&field));
        if wired {
            self.dispatch(Message::FieldChanged(field));
        }
    }

    /// Inserts a new element, as the server does when results arrive.
    pub fn insert(&mut self, parent: NodeHandle, builder: NodeBuilder) -> NodeHandle {
        let node = self.dom.create(builder);
        self.attach(parent, node);
        node
    }

    /// Attaches a prepared subtree and reports it to the mutation observer.
    pub fn attach(&mut self, parent: NodeHandle, node: NodeHandle) {
        self.dom.append_child(parent, node);
        if self.wiring.is_some() {
            self.dispatch(Message::Animator(animator::Message::NodesAdded(vec![node])));
        }
    }

    /// `showNotification(message, severity)`.
    pub fn show_notification(&mut self, message: &str, severity: &str) {
        self.dispatch(Message::ShowNotification {
            message: message.to_string(),
            severity: Severity::parse(severity),
        });
    }

    /// `copyToClipboard(text)`.
    pub fn copy_to_clipboard(&mut self, text: &str) {
        self.dispatch(Message::CopyToClipboard(text.to_string()));
    }

    /// Makes later clipboard writes fail with `reason`.
    pub fn reject_clipboard(&mut self, reason: impl Into<String>) {
        self.clipboard_rejection = Some(reason.into());
    }

    /// Last text written to the clipboard.
    #[must_use]
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        self.app.diagnostics()
    }

    #[must_use]
    pub fn dom(&self) -> &MemoryDom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut MemoryDom {
        &mut self.dom
    }

    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }
}
