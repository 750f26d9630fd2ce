//! Browser-backed implementation of the page environment.
//!
//! Thin web-sys glue: the elements the behaviors touch are captured once at
//! initialization and every operation degrades to a logged no-op when its
//! element is missing or detached. Like the rest of the DOM layer this
//! module only does real work in the browser; logic coverage lives against
//! the in-memory fake.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::{
    ALERT_FADE_TRANSITION, ALERT_SELECTOR, THEME_ATTR, THEME_TOGGLE_ID, TOGGLE_ICON_SELECTOR,
};
use crate::page::{AlertId, Page};
use crate::theme::Theme;

/// The host document's theme targets, toggle control, and alert banners.
pub struct DomPage {
    root: Option<Element>,
    body: Option<HtmlElement>,
    toggle: Option<Element>,
    toggle_icon: Option<HtmlElement>,
    alerts: Vec<HtmlElement>,
}

impl DomPage {
    /// Capture the elements the behaviors need from `document`. Missing
    /// pieces disable their feature rather than failing capture.
    #[must_use]
    pub fn capture(document: &Document) -> Self {
        let root = document.document_element();
        let body = document.body();
        let toggle = document.get_element_by_id(THEME_TOGGLE_ID);
        let toggle_icon = toggle
            .as_ref()
            .and_then(|el| el.query_selector(TOGGLE_ICON_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let alerts = dismissable_alerts(document);

        if toggle.is_none() {
            log::debug!("theme toggle #{THEME_TOGGLE_ID} not found; toggle disabled");
        } else if toggle_icon.is_none() {
            log::debug!("toggle icon not found; icon updates disabled");
        }

        Self { root, body, toggle, toggle_icon, alerts }
    }

    /// The toggle control, for click-listener wiring.
    #[must_use]
    pub fn toggle_control(&self) -> Option<Element> {
        self.toggle.clone()
    }
}

fn dismissable_alerts(document: &Document) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(ALERT_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

impl Page for DomPage {
    fn theme_attr(&self) -> Option<String> {
        self.root.as_ref().and_then(|el| el.get_attribute(THEME_ATTR))
    }

    fn set_theme_attr(&self, theme: Theme) {
        if let Some(root) = &self.root {
            let _ = root.set_attribute(THEME_ATTR, theme.as_str());
        }
        if let Some(body) = &self.body {
            let _ = body.set_attribute(THEME_ATTR, theme.as_str());
        }
    }

    fn set_toggle_icon(&self, theme: Theme) {
        let Some(icon) = &self.toggle_icon else {
            return;
        };
        let _ = icon
            .class_list()
            .replace(theme.flipped().icon_class(), theme.icon_class());
        match theme.icon_accent() {
            Some(color) => {
                let _ = icon.style().set_property("color", color);
            }
            None => {
                let _ = icon.style().remove_property("color");
            }
        }
    }

    fn alerts(&self) -> Vec<AlertId> {
        (0..self.alerts.len()).map(AlertId).collect()
    }

    fn fade_alert(&self, alert: AlertId) {
        let Some(element) = self.alerts.get(alert.0) else {
            return;
        };
        if !element.is_connected() {
            log::debug!("alert {} already detached; skipping fade", alert.0);
            return;
        }
        let style = element.style();
        let _ = style.set_property("transition", ALERT_FADE_TRANSITION);
        let _ = style.set_property("opacity", "0");
    }

    fn remove_alert(&self, alert: AlertId) {
        let Some(element) = self.alerts.get(alert.0) else {
            return;
        };
        if !element.is_connected() {
            log::debug!("alert {} already detached; skipping removal", alert.0);
            return;
        }
        element.remove();
    }
}
