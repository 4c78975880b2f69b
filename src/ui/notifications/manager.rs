// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` inserts toasts, schedules their slide-out and removes them.
//! Every toast follows the same fixed timeline: visible for the display time,
//! then the slide-out animation, then removal. There is no queue and no limit
//! on simultaneous toasts; each one is independent.

use super::notification::{Notification, NotificationId};
use super::toast;
use crate::app::Effect;
use crate::application::port::Dom;
use crate::config::NotificationsConfig;
use crate::diagnostics::{DiagnosticsHandle, PageAction};
use crate::domain::ui::{Millis, NodeHandle};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Display time elapsed: start the slide-out.
    Expire(NotificationId),
    /// Slide-out finished: detach the toast.
    Remove(NotificationId),
}

#[derive(Debug)]
struct Live {
    notification: Notification,
    node: NodeHandle,
    leaving: bool,
}

/// Tracks the toasts currently on the page.
#[derive(Debug)]
pub struct Manager {
    /// Oldest first.
    live: Vec<Live>,
    display: Millis,
    fade: Millis,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(&NotificationsConfig::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            live: Vec::new(),
            display: config.display(),
            fade: config.fade(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging toast activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Inserts the toast and schedules its expiry.
    pub fn push<D: Dom>(&mut self, dom: &mut D, notification: Notification) -> Vec<Effect<Message>> {
        dom.install_stylesheet(toast::STYLESHEET_ID, &toast::keyframes_css());

        let node = dom.create_element(&toast::element_spec(&notification, self.fade));
        dom.append_to_body(node);

        if let Some(handle) = &self.diagnostics {
            handle.log_action(PageAction::NotificationShown {
                severity: notification.severity().to_string(),
            });
        }

        let id = notification.id();
        self.live.push(Live {
            notification,
            node,
            leaving: false,
        });
        vec![Effect::after(self.display, Message::Expire(id))]
    }

    /// Advances a toast through its timeline.
    pub fn update<D: Dom>(&mut self, dom: &mut D, message: Message) -> Vec<Effect<Message>> {
        match message {
            Message::Expire(id) => {
                let Some(live) = self.live.iter_mut().find(|l| l.notification.id() == id) else {
                    return Vec::new();
                };
                if live.leaving {
                    return Vec::new();
                }
                live.leaving = true;
                dom.set_style(live.node, "animation", &toast::slide_out(self.fade));
                vec![Effect::after(self.fade, Message::Remove(id))]
            }
            Message::Remove(id) => {
                if let Some(index) = self.live.iter().position(|l| l.notification.id() == id) {
                    let live = self.live.remove(index);
                    dom.remove(live.node);
                    if let Some(handle) = &self.diagnostics {
                        handle.log_action(PageAction::NotificationRemoved);
                    }
                }
                Vec::new()
            }
        }
    }

    /// Returns the notifications currently on the page, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter().map(|l| &l.notification)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    /// Node rendering the given notification, while it is on the page.
    #[must_use]
    pub fn node_of(&self, id: NotificationId) -> Option<NodeHandle> {
        self.live
            .iter()
            .find(|l| l.notification.id() == id)
            .map(|l| l.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryDom;
    use crate::ui::notifications::Severity;

    fn expire_id(effects: &[Effect<Message>]) -> NotificationId {
        match effects {
            [Effect::After {
                message: Message::Expire(id),
                ..
            }] => *id,
            other => panic!("expected a single expiry, got {other:?}"),
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert!(!manager.has_notifications());
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn push_inserts_toast_and_schedules_expiry() {
        let mut dom = MemoryDom::new();
        let mut manager = Manager::default();

        let effects = manager.push(&mut dom, Notification::success("Saved"));

        assert_eq!(
            effects,
            vec![Effect::after(
                Millis::new(3_000),
                Message::Expire(expire_id(&effects))
            )]
        );
        let node = manager.node_of(expire_id(&effects)).expect("toast node");
        assert!(dom.is_connected(node));
        assert!(dom.has_class(node, "notification"));
        assert!(dom.has_class(node, "notification-success"));
        assert_eq!(dom.text(node), "Saved");
    }

    #[test]
    fn expire_starts_slide_out_then_remove_detaches() {
        let mut dom = MemoryDom::new();
        let mut manager = Manager::default();
        let id = expire_id(&manager.push(&mut dom, Notification::info("Hi")));
        let node = manager.node_of(id).expect("toast node");

        let effects = manager.update(&mut dom, Message::Expire(id));
        assert_eq!(effects, vec![Effect::after(Millis::new(300), Message::Remove(id))]);
        assert_eq!(dom.style(node, "animation"), "slideOut 300ms ease-in forwards");
        assert!(dom.is_connected(node));

        assert!(manager.update(&mut dom, Message::Remove(id)).is_empty());
        assert!(!dom.is_connected(node));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn toasts_are_independent() {
        let mut dom = MemoryDom::new();
        let mut manager = Manager::default();
        let first = expire_id(&manager.push(&mut dom, Notification::new(Severity::Warning, "a")));
        let second = expire_id(&manager.push(&mut dom, Notification::error("b")));
        assert_eq!(manager.visible_count(), 2);

        manager.update(&mut dom, Message::Expire(first));
        manager.update(&mut dom, Message::Remove(first));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.node_of(second).is_some());
    }

    #[test]
    fn stale_messages_are_ignored() {
        let mut dom = MemoryDom::new();
        let mut manager = Manager::default();
        let id = expire_id(&manager.push(&mut dom, Notification::info("x")));
        manager.update(&mut dom, Message::Remove(id));

        assert!(manager.update(&mut dom, Message::Expire(id)).is_empty());
        assert!(manager.update(&mut dom, Message::Remove(id)).is_empty());
    }

    #[test]
    fn keyframes_are_installed_once() {
        let mut dom = MemoryDom::new();
        let mut manager = Manager::default();
        manager.push(&mut dom, Notification::info("a"));
        manager.push(&mut dom, Notification::info("b"));
        assert_eq!(dom.stylesheet_ids(), vec![toast::STYLESHEET_ID.to_string()]);
    }

    #[test]
    fn timing_follows_config() {
        let config = NotificationsConfig {
            display_ms: Some(1_000),
            fade_ms: Some(0),
            ..NotificationsConfig::default()
        };
        let mut dom = MemoryDom::new();
        let mut manager = Manager::new(&config);
        let effects = manager.push(&mut dom, Notification::info("x"));
        let id = expire_id(&effects);
        assert!(matches!(effects[0], Effect::After { delay, .. } if delay == Millis::new(1_000)));
        assert_eq!(
            manager.update(&mut dom, Message::Expire(id)),
            vec![Effect::after(Millis::new(0), Message::Remove(id))]
        );
    }
}
