// SPDX-License-Identifier: MPL-2.0
//! Message routing for [`App`].

use super::{map_all, App, Effect, Message};
use crate::application::port::{Dom, KeyValueStore};
use crate::diagnostics::{PageAction, WarningType};
use crate::ui::notifications::{Notification, Severity};

impl App {
    /// Handles one message and returns the effects for the host to run.
    pub fn update<D: Dom, S: KeyValueStore>(
        &mut self,
        dom: &mut D,
        store: &mut S,
        message: Message,
    ) -> Vec<Effect<Message>> {
        match message {
            Message::DragZone(msg) => {
                map_all(self.highlighter.update(dom, msg), Message::DragZone)
            }
            Message::Animator(msg) => map_all(self.animator.update(dom, msg), Message::Animator),
            Message::KeyDown(press) => {
                self.shortcuts.handle(dom, &press);
                Vec::new()
            }
            Message::FieldChanged(node) => {
                self.persister.save(dom, store, node);
                Vec::new()
            }
            Message::ShowNotification { message, severity } => {
                self.notify(dom, Notification::new(severity, message))
            }
            Message::Notification(msg) => {
                map_all(self.notifications.update(dom, msg), Message::Notification)
            }
            Message::CopyToClipboard(text) => vec![Effect::WriteClipboard(text)],
            Message::ClipboardWritten(Ok(())) => {
                self.diagnostics.log_action(PageAction::ClipboardWritten);
                let text = self.i18n.tr("notification-copied");
                self.notify(dom, Notification::new(Severity::Success, text))
            }
            Message::ClipboardWritten(Err(reason)) => {
                self.diagnostics.warn(WarningType::Clipboard, reason);
                if self.config.notifications.notify_clipboard_failure {
                    let text = self.i18n.tr("notification-copy-failed");
                    self.notify(dom, Notification::new(Severity::Error, text))
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Shows a toast. Same as sending [`Message::ShowNotification`].
    pub fn show_notification<D: Dom>(
        &mut self,
        dom: &mut D,
        message: &str,
        severity: Severity,
    ) -> Vec<Effect<Message>> {
        self.notify(dom, Notification::new(severity, message))
    }

    fn notify<D: Dom>(&mut self, dom: &mut D, notification: Notification) -> Vec<Effect<Message>> {
        map_all(self.notifications.push(dom, notification), Message::Notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::infrastructure::memory::{MemoryDom, MemoryStore};

    #[test]
    fn copy_request_becomes_clipboard_effect() {
        let mut app = App::default();
        let mut dom = MemoryDom::new();
        let mut store = MemoryStore::new();

        let effects = app.update(&mut dom, &mut store, Message::CopyToClipboard("abc".into()));

        assert_eq!(effects, vec![Effect::WriteClipboard("abc".into())]);
    }

    #[test]
    fn successful_copy_shows_localized_toast() {
        let mut app = App::default();
        let mut dom = MemoryDom::new();
        let mut store = MemoryStore::new();

        app.update(&mut dom, &mut store, Message::ClipboardWritten(Ok(())));

        let shown: Vec<_> = app.notifications().visible().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Success);
        assert_eq!(shown[0].message(), "Copied to clipboard!");
    }

    #[test]
    fn failed_copy_is_logged_without_toast_by_default() {
        let mut app = App::default();
        let mut dom = MemoryDom::new();
        let mut store = MemoryStore::new();

        let effects = app.update(
            &mut dom,
            &mut store,
            Message::ClipboardWritten(Err("NotAllowedError".into())),
        );

        assert!(effects.is_empty());
        assert!(!app.notifications().has_notifications());
        let warnings = app.diagnostics().warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::Clipboard);
    }

    #[test]
    fn failed_copy_can_show_error_toast() {
        let mut config = Config::default();
        config.notifications.notify_clipboard_failure = true;
        let mut app = App::new(config);
        let mut dom = MemoryDom::new();
        let mut store = MemoryStore::new();

        app.update(&mut dom, &mut store, Message::ClipboardWritten(Err("denied".into())));

        let shown: Vec<_> = app.notifications().visible().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Error);
        assert_eq!(shown[0].message(), "Could not copy to clipboard");
    }

    #[test]
    fn russian_page_gets_russian_messages() {
        let mut app = App::default();
        let mut dom = MemoryDom::new().with_lang("ru");
        let mut store = MemoryStore::new();
        app.boot(&mut dom, &store);

        app.update(&mut dom, &mut store, Message::ClipboardWritten(Ok(())));

        let shown: Vec<_> = app.notifications().visible().collect();
        assert_eq!(shown[0].message(), "Скопировано в буфер обмена!");
    }
}
