// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page behaviors.
//!
//! The `App` struct owns the five behaviors together with the configuration,
//! localization and diagnostics they share. The host runtime (browser or
//! in-memory) calls [`App::boot`] once at DOM-ready, attaches the listeners
//! described by the returned [`Wiring`], then feeds every event through
//! [`App::update`] and runs the [`Effect`]s it returns.

mod effect;
mod message;
pub mod persisted_state;
pub mod persistence;
mod update;

pub use effect::{map_all, Effect};
pub use message::Message;

use crate::application::port::{Dom, KeyValueStore};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, PageAction};
use crate::domain::ui::NodeHandle;
use crate::i18n::fluent::I18n;
use crate::ui::animator::Animator;
use crate::ui::drag_zone::Highlighter;
use crate::ui::notifications;
use crate::ui::shortcuts::Shortcuts;
use persistence::FieldPersister;
use std::fmt;

/// Listeners the host must attach after boot.
///
/// The global `keydown` listener and the body mutation observer are always
/// needed and are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wiring {
    /// Nodes needing `dragover`, `dragleave` and `drop` listeners.
    pub drop_zones: Vec<NodeHandle>,
    /// Nodes needing a `change` listener.
    pub persisted_fields: Vec<NodeHandle>,
}

/// Root state of the page layer.
pub struct App {
    pub i18n: I18n,
    config: Config,
    diagnostics: DiagnosticsHandle,
    highlighter: Highlighter,
    animator: Animator,
    shortcuts: Shortcuts,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    persister: FieldPersister,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("drop_zones", &self.highlighter.zones().len())
            .field("persisted_fields", &self.persister.fields().len())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Creates the app with its own diagnostics buffer.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let diagnostics = DiagnosticsHandle::new(config.diagnostics.capacity());
        Self::with_diagnostics(config, diagnostics)
    }

    /// Creates the app recording into an existing diagnostics handle.
    #[must_use]
    pub fn with_diagnostics(config: Config, diagnostics: DiagnosticsHandle) -> Self {
        let mut highlighter = Highlighter::new(&config.drag);
        highlighter.set_diagnostics(diagnostics.clone());

        let mut animator = Animator::new(&config.animation, &config.targets);
        animator.set_diagnostics(diagnostics.clone());

        let mut shortcuts = Shortcuts::new(&config.targets);
        shortcuts.set_diagnostics(diagnostics.clone());

        let mut notifications = notifications::Manager::new(&config.notifications);
        notifications.set_diagnostics(diagnostics.clone());

        let persister = FieldPersister::new(&config.storage, &config.persistence, diagnostics.clone());

        Self {
            i18n: I18n::new(config.general.language.as_deref(), None),
            config,
            diagnostics,
            highlighter,
            animator,
            shortcuts,
            notifications,
            persister,
        }
    }

    /// DOM-ready wiring: picks the locale, finds drop zones and restores
    /// persisted fields.
    pub fn boot<D: Dom, S: KeyValueStore>(&mut self, dom: &mut D, store: &S) -> Wiring {
        self.i18n = I18n::new(
            self.config.general.language.as_deref(),
            dom.document_language().as_deref(),
        );

        let drop_zones = self.highlighter.attach(dom, &self.config.targets).to_vec();
        let persisted_fields = self.persister.restore(dom, store);

        self.diagnostics.log_action(PageAction::Booted {
            drop_zones: drop_zones.len(),
            persisted_fields: persisted_fields.len(),
        });

        Wiring {
            drop_zones,
            persisted_fields,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    #[must_use]
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
