//! Page-environment capability consumed by the behaviors.
//!
//! DESIGN
//! ======
//! Everything the behaviors do to the document goes through [`Page`], so the
//! logic modules never reach for `web_sys::window()` themselves. The browser
//! implementation is [`crate::dom::DomPage`]; tests inject `FakePage`.
//! Alert banners are addressed by opaque [`AlertId`] handles into the set
//! captured at initialization.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::theme::Theme;

/// Handle for one dismissable alert captured at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertId(pub usize);

/// The parts of the host document the behaviors touch.
pub trait Page {
    /// Current value of the theme marker attribute on the root element.
    fn theme_attr(&self) -> Option<String>;

    /// Write the theme marker attribute on both the root and body elements.
    fn set_theme_attr(&self, theme: Theme);

    /// Bring the toggle icon (class and accent color) in line with `theme`.
    /// A page without a toggle icon treats this as a no-op.
    fn set_toggle_icon(&self, theme: Theme);

    /// Handles for every dismissable (non-permanent) alert banner.
    fn alerts(&self) -> Vec<AlertId>;

    /// Start the opacity fade on one alert. Detached alerts are skipped.
    fn fade_alert(&self, alert: AlertId);

    /// Remove one alert from the document. Detached alerts are skipped.
    fn remove_alert(&self, alert: AlertId);
}

#[cfg(test)]
pub use fake::{FakeAlert, FakePage};
