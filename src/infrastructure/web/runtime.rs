// SPDX-License-Identifier: MPL-2.0
//! Browser host for [`App`].
//!
//! Boot runs on `DOMContentLoaded` (or right away when the document is
//! already parsed). The app lives in an `Rc<RefCell<_>>` shared by every
//! listener; listener closures are leaked for the page's lifetime.
//!
//! Messages enter through [`admit`]. After every update the node registry is
//! swept, so nodes the page has discarded are not kept alive from here.

use super::{describe, WebDom, WebStorage};
use crate::app::{App, Effect, Message};
use crate::config::{Config, CONFIG_ELEMENT_ID};
use crate::diagnostics::{DiagnosticEvent, DiagnosticsHandle, WarningType};
use crate::domain::ui::{KeyPress, Millis, NodeHandle};
use crate::infrastructure::dispatch::{admit, inspect, Admission};
use crate::ui::animator;
use crate::ui::drag_zone;
use crate::ui::notifications::Severity;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    console, Event, KeyboardEvent, MutationObserver, MutationObserverInit, MutationRecord, Node,
};

struct Page {
    app: App,
    dom: WebDom,
    store: WebStorage,
}

type SharedPage = Rc<RefCell<Page>>;

thread_local! {
    static PAGE: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("ocr_lens: no document"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            if let Err(err) = boot() {
                console::error_1(&err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        boot()
    }
}

fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("ocr_lens: no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("ocr_lens: no document"))?;

    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let (config, warning) = Config::from_inline_block(inline.as_deref());

    let diagnostics =
        DiagnosticsHandle::new(config.diagnostics.capacity()).with_sink(Rc::new(mirror_to_console));
    if let Some(warning) = warning {
        diagnostics.warn(WarningType::Config, warning);
    }

    let mut app = App::with_diagnostics(config, diagnostics);
    let mut dom = WebDom::new(document.clone());
    let store = WebStorage::from_window(&window);
    let wiring = app.boot(&mut dom, &store);
    dom.sweep();

    let page: SharedPage = Rc::new(RefCell::new(Page { app, dom, store }));

    for zone in &wiring.drop_zones {
        listen(&page, *zone, "dragover", |z| Message::DragZone(drag_zone::Message::DragOver(z)))?;
        listen(&page, *zone, "dragleave", |z| Message::DragZone(drag_zone::Message::DragLeave(z)))?;
        listen(&page, *zone, "drop", |z| Message::DragZone(drag_zone::Message::Drop(z)))?;
    }
    for field in &wiring.persisted_fields {
        listen(&page, *field, "change", Message::FieldChanged)?;
    }

    let keys = Rc::clone(&page);
    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let press = KeyPress::from_dom(
            &event.key(),
            event.ctrl_key(),
            event.shift_key(),
            event.alt_key(),
            event.meta_key(),
        );
        dispatch(&keys, Message::KeyDown(press), Some(event.as_ref()));
    });
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    observe_insertions(&page, &document)?;

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn listen(
    page: &SharedPage,
    node: NodeHandle,
    event_name: &str,
    to_message: fn(NodeHandle) -> Message,
) -> Result<(), JsValue> {
    let Some(target) = page.borrow().dom.node(node) else {
        return Ok(());
    };
    let page = Rc::clone(page);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        dispatch(&page, to_message(node), Some(&event));
    });
    target.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn observe_insertions(page: &SharedPage, document: &web_sys::Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let observed = Rc::clone(page);
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            let nodes: Vec<NodeHandle> = {
                let page = observed.borrow();
                records
                    .iter()
                    .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                    .flat_map(|record| {
                        let added = record.added_nodes();
                        (0..added.length())
                            .filter_map(|i| added.get(i))
                            .filter(|node| node.node_type() == Node::ELEMENT_NODE)
                            .filter_map(|node| page.dom.intern(&node))
                            .collect::<Vec<_>>()
                    })
                    .collect()
            };
            if !nodes.is_empty() {
                dispatch(&observed, Message::Animator(animator::Message::NodesAdded(nodes)), None);
            }
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&body, &options)?;
    callback.forget();
    Ok(())
}

/// Runs one message through the app and carries out its effects.
fn dispatch(page: &SharedPage, message: Message, event: Option<&Event>) {
    let cell: &RefCell<Page> = page;
    let admission = admit(cell, message, |page, message| {
        let Page { app, dom, store } = page;
        let effects = app.update(dom, store, message);
        dom.sweep();
        effects
    });
    let effects = match admission {
        Admission::Ran(effects) => effects,
        // Re-entered from inside an update (a synchronous DOM callback).
        Admission::Deferred {
            retry,
            prevent_default,
        } => {
            if prevent_default {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            vec![retry]
        }
    };

    for effect in effects {
        match effect {
            Effect::After { delay, message } => schedule(page, delay, message),
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Effect::WriteClipboard(text) => write_clipboard(page, text),
        }
    }
}

fn schedule(page: &SharedPage, delay: Millis, message: Message) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let page = Rc::clone(page);
    let callback = Closure::once_into_js(move || dispatch(&page, message, None));
    let timeout = i32::try_from(delay.value()).unwrap_or(i32::MAX);
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
    {
        console::error_1(&err);
    }
}

fn write_clipboard(page: &SharedPage, text: String) {
    let page = Rc::clone(page);
    spawn_local(async move {
        let result = match web_sys::window() {
            Some(window) => JsFuture::from(window.navigator().clipboard().write_text(&text))
                .await
                .map(|_| ())
                .map_err(|err| describe(&err)),
            None => Err("no window".to_string()),
        };
        dispatch(&page, Message::ClipboardWritten(result), None);
    });
}

fn mirror_to_console(event: &DiagnosticEvent) {
    if let Some(warning) = event.warning() {
        console::warn_1(
            &format!("ocr_lens [{:?}]: {}", warning.warning_type, warning.message).into(),
        );
    }
}

fn with_page(f: impl FnOnce(&SharedPage)) {
    match PAGE.with(|slot| slot.borrow().clone()) {
        Some(page) => f(&page),
        None => console::warn_1(&"ocr_lens: called before the page finished loading".into()),
    }
}

/// Shows a toast. `severity` is `info` (default), `success`, `warning` or
/// `error`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    let severity = severity.as_deref().map(Severity::parse).unwrap_or_default();
    let message = message.to_string();
    with_page(|page| dispatch(page, Message::ShowNotification { message, severity }, None));
}

/// Copies `text` and confirms with a toast.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    with_page(|page| dispatch(page, Message::CopyToClipboard(text), None));
}

/// Recorded diagnostics as JSON.
#[wasm_bindgen(js_name = exportDiagnostics)]
pub fn export_diagnostics() -> Result<String, JsValue> {
    let page = PAGE
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("ocr_lens: not booted"))?;
    inspect(&*page, |page| page.app.diagnostics().export_json())
        .ok_or_else(|| JsValue::from_str("ocr_lens: busy, try again after this event"))?
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
