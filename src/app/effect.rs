// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by `update` functions.
//!
//! Components never wait. Anything that has to happen later, or that needs the
//! browser event currently being dispatched, is returned as an [`Effect`] and
//! carried out by the host runtime.

use crate::domain::ui::Millis;

/// Work the host runtime performs after an `update` returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<M> {
    /// Deliver `message` once after `delay`. Never cancelled.
    After { delay: Millis, message: M },
    /// Stop the browser's default action for the event being handled.
    PreventDefault,
    /// Write text to the clipboard and report back with
    /// [`Message::ClipboardWritten`](crate::app::Message::ClipboardWritten).
    WriteClipboard(String),
}

impl<M> Effect<M> {
    /// Schedules `message` after `delay`.
    pub fn after(delay: Millis, message: M) -> Self {
        Effect::After { delay, message }
    }

    /// Converts the carried message, like `Task::map`.
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> Effect<N> {
        match self {
            Effect::After { delay, message } => Effect::After {
                delay,
                message: f(message),
            },
            Effect::PreventDefault => Effect::PreventDefault,
            Effect::WriteClipboard(text) => Effect::WriteClipboard(text),
        }
    }
}

/// Maps every effect of a component into the parent's message type.
pub fn map_all<M, N>(effects: Vec<Effect<M>>, f: impl Fn(M) -> N) -> Vec<Effect<N>> {
    effects.into_iter().map(|effect| effect.map(&f)).collect()
}
