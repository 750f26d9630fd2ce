//! Startup wiring for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page ships fully rendered; this crate only attaches behavior to
//! it. [`start`] runs when the module is instantiated, deferring to
//! `DOMContentLoaded` when the script loads before the document finishes
//! parsing. [`install`] then captures the page once, applies the stored
//! theme, asks for notification permission, arms the alert dismissal
//! timers, and hooks the theme toggle.
//!
//! Retained state (dismissal guards, the toggle listener) lives in a
//! thread local for the lifetime of the page. Browser WASM is single
//! threaded, so the thread local is effectively a module global.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::dom::DomPage;
use crate::flash::{self, DismissGuard};
use crate::notify;
use crate::page::Page;
use crate::prefs::LocalStoragePrefs;
use crate::theme;
use crate::timers::GlooTimers;

/// Handles that must outlive `install`: dropping a guard cancels its
/// dismissal timers, and dropping the closure would unhook the toggle.
struct Installed {
    guards: Vec<DismissGuard>,
    toggle_click: Option<Closure<dyn FnMut()>>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; nothing to enhance");
        return;
    };

    if document.ready_state() == "loading" {
        let deferred = Closure::wrap(Box::new(move || {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                install(&document);
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.as_ref().unchecked_ref());
        deferred.forget();
    } else {
        install(&document);
    }
}

/// Wire every behavior onto the current document. A second call replaces
/// the retained state from the first, dropping its timers and listener
/// handle with it.
pub fn install(document: &Document) {
    let page = Rc::new(DomPage::capture(document));
    let prefs = Rc::new(LocalStoragePrefs);

    theme::initialize(page.as_ref(), prefs.as_ref());
    notify::ensure_permission();

    let dyn_page: Rc<dyn Page> = page.clone();
    let guards = flash::schedule_dismissals(&dyn_page, &GlooTimers);

    let toggle_click = page.toggle_control().map(|control| {
        let page = Rc::clone(&page);
        let prefs = Rc::clone(&prefs);
        let closure = Closure::wrap(Box::new(move || {
            let applied = theme::toggle(page.as_ref(), prefs.as_ref());
            log::debug!("theme toggled to {}", applied.as_str());
        }) as Box<dyn FnMut()>);
        let _ = control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure
    });

    log::info!("behaviors installed; {} alerts scheduled", guards.len());

    INSTALLED.with(|installed| {
        *installed.borrow_mut() = Some(Installed { guards, toggle_click });
    });
}
