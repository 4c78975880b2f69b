// SPDX-License-Identifier: MPL-2.0
//! Global keyboard shortcuts.
//!
//! | Keys | Action |
//! |---|---|
//! | Ctrl+Enter | Click the recognition trigger unless it is disabled |
//! | Escape | Click the dismiss control of every open modal |
//!
//! Keystrokes are handled independently and are never consumed: the
//! dispatcher does not prevent default or stop propagation.

use crate::application::port::Dom;
use crate::config::TargetsConfig;
use crate::diagnostics::{DiagnosticsHandle, PageAction};
use crate::domain::ui::{Key, KeyPress};
use crate::ui::targets::{self, Capability};

/// What a keystroke did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a shortcut.
    Ignored,
    /// Ctrl+Enter clicked the trigger.
    RunTriggered,
    /// Ctrl+Enter found no trigger, or a disabled one.
    RunUnavailable,
    /// Escape clicked this many dismiss controls.
    ModalsClosed(usize),
}

/// Keyboard shortcut dispatcher.
#[derive(Debug, Default)]
pub struct Shortcuts {
    targets: TargetsConfig,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Shortcuts {
    #[must_use]
    pub fn new(targets: &TargetsConfig) -> Self {
        Self {
            targets: targets.clone(),
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn handle<D: Dom>(&self, dom: &mut D, press: &KeyPress) -> Outcome {
        match press.key {
            Key::Enter if press.ctrl => self.run_ocr(dom),
            Key::Escape => self.close_modals(dom),
            _ => Outcome::Ignored,
        }
    }

    fn run_ocr<D: Dom>(&self, dom: &mut D) -> Outcome {
        let Some(trigger) = targets::first(dom, &self.targets, Capability::RunOcr) else {
            return Outcome::RunUnavailable;
        };
        if dom.is_disabled(trigger) {
            self.log(PageAction::RunSkippedDisabled);
            return Outcome::RunUnavailable;
        }
        dom.click(trigger);
        self.log(PageAction::RunTriggered);
        Outcome::RunTriggered
    }

    fn close_modals<D: Dom>(&self, dom: &mut D) -> Outcome {
        let close_control = targets::close_control(&self.targets);
        let mut closed = 0;
        for modal in dom.query(&targets::open_modals(&self.targets)) {
            if let Some(&control) = dom.query_within(modal, &close_control).first() {
                dom.click(control);
                closed += 1;
            }
        }
        if closed > 0 {
            self.log(PageAction::ModalsClosed { count: closed });
        }
        Outcome::ModalsClosed(closed)
    }

    fn log(&self, action: PageAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}
