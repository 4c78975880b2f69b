// SPDX-License-Identifier: MPL-2.0
//! Admission of messages into a shared page.
//!
//! In the browser the page state sits behind a `RefCell` shared by every
//! listener. An update may click an element, and the page's own click handler
//! may call back into `showNotification` while the update still holds the
//! borrow. Such messages are not dropped. They come back as a zero-delay retry
//! for the host to schedule.
//!
//! A retried event has already returned to the browser, so `preventDefault`
//! can no longer reach it. For drag messages the decision is taken up front
//! with [`Message::prevents_default`].

use crate::app::{Effect, Message};
use crate::domain::ui::Millis;
use std::cell::RefCell;

/// What happened to a message offered to the page.
#[derive(Debug, PartialEq)]
pub enum Admission {
    /// The page was free and produced these effects.
    Ran(Vec<Effect<Message>>),
    /// The page was busy. `retry` must be scheduled by the host, and the
    /// live event's default action is cancelled now when `prevent_default`
    /// is set.
    Deferred {
        retry: Effect<Message>,
        prevent_default: bool,
    },
}

/// Runs `message` through `update` if the page is not already borrowed.
pub fn admit<P>(
    page: &RefCell<P>,
    message: Message,
    update: impl FnOnce(&mut P, Message) -> Vec<Effect<Message>>,
) -> Admission {
    match page.try_borrow_mut() {
        Ok(mut guard) => Admission::Ran(update(&mut *guard, message)),
        Err(_) => Admission::Deferred {
            prevent_default: message.prevents_default(),
            retry: Effect::after(Millis::ZERO, message),
        },
    }
}

/// Reads from the page unless an update currently holds it.
pub fn inspect<P, R>(page: &RefCell<P>, read: impl FnOnce(&P) -> R) -> Option<R> {
    page.try_borrow().ok().map(|guard| read(&*guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use crate::domain::ui::NodeHandle;
    use crate::infrastructure::memory::{MemoryDom, MemoryStore, NodeBuilder};
    use crate::ui::drag_zone;
    use crate::ui::notifications::Severity;

    struct Page {
        app: App,
        dom: MemoryDom,
        store: MemoryStore,
    }

    fn booted_page() -> (RefCell<Page>, NodeHandle) {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let zone = dom.append(body, NodeBuilder::new("div").id("upload-document"));
        let mut app = App::new(Config::default());
        let store = MemoryStore::new();
        app.boot(&mut dom, &store);
        (RefCell::new(Page { app, dom, store }), zone)
    }

    fn run(page: &mut Page, message: Message) -> Vec<Effect<Message>> {
        let Page { app, dom, store } = page;
        app.update(dom, store, message)
    }

    fn toast(text: &str) -> Message {
        Message::ShowNotification {
            message: text.into(),
            severity: Severity::Info,
        }
    }

    #[test]
    fn free_page_runs_the_message() {
        let (page, zone) = booted_page();
        let admission = admit(
            &page,
            Message::DragZone(drag_zone::Message::DragOver(zone)),
            run,
        );
        assert_eq!(admission, Admission::Ran(vec![Effect::PreventDefault]));
        assert!(page.borrow().app.highlighter().is_highlighted(zone));
    }

    #[test]
    fn busy_page_defers_instead_of_dropping() {
        let (page, _) = booted_page();
        let _update_in_progress = page.borrow_mut();

        let admission = admit(&page, toast("Uploaded"), run);

        assert_eq!(
            admission,
            Admission::Deferred {
                retry: Effect::after(Millis::ZERO, toast("Uploaded")),
                prevent_default: false,
            }
        );
    }

    #[test]
    fn deferred_message_runs_once_the_page_is_free() {
        let (page, _) = booted_page();
        let retry = {
            let _update_in_progress = page.borrow_mut();
            match admit(&page, toast("Uploaded"), run) {
                Admission::Deferred { retry, .. } => retry,
                Admission::Ran(_) => panic!("page was borrowed"),
            }
        };
        let Effect::After { delay, message } = retry else {
            panic!("retry is a timer");
        };
        assert_eq!(delay, Millis::ZERO);

        assert!(matches!(admit(&page, message, run), Admission::Ran(_)));
        assert_eq!(page.borrow().app.notifications().visible_count(), 1);
    }

    #[test]
    fn deferred_drag_over_still_cancels_the_live_event() {
        let (page, zone) = booted_page();
        let _update_in_progress = page.borrow_mut();

        let over = admit(&page, Message::DragZone(drag_zone::Message::DragOver(zone)), run);
        let dropped = admit(&page, Message::DragZone(drag_zone::Message::Drop(zone)), run);

        assert!(matches!(over, Admission::Deferred { prevent_default: true, .. }));
        assert!(matches!(dropped, Admission::Deferred { prevent_default: false, .. }));
    }

    #[test]
    fn inspect_yields_nothing_while_an_update_holds_the_page() {
        let (page, _) = booted_page();
        assert_eq!(inspect(&page, |p| p.app.notifications().visible_count()), Some(0));

        let _update_in_progress = page.borrow_mut();
        assert_eq!(inspect(&page, |p| p.app.notifications().visible_count()), None);
    }
}
