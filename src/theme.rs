//! Theme model and the initialize/toggle operations.
//!
//! DESIGN
//! ======
//! The live theme is whatever the root element's `data-theme` attribute says;
//! the store is only consulted once at initialization and written on toggle.
//! Reads are lenient (any value other than `dark` resolves to
//! [`Theme::Light`]) while writes only ever emit the canonical
//! `light`/`dark` strings, so a foreign stored value is normalized by the
//! first toggle rather than scrubbed eagerly.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MOON_ICON_CLASS, SUN_ACCENT_COLOR, SUN_ICON_CLASS, THEME_STORAGE_KEY};
use crate::page::Page;
use crate::prefs::PreferenceStore;

/// Visual theme selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Canonical attribute/storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse an attribute or stored value, treating anything other than
    /// `dark` (including absence) as light-equivalent.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other member of the binary light/dark set.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle icon class shown while this theme is active.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => MOON_ICON_CLASS,
            Theme::Dark => SUN_ICON_CLASS,
        }
    }

    /// Inline accent color for the icon, if this theme uses one.
    #[must_use]
    pub fn icon_accent(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some(SUN_ACCENT_COLOR),
        }
    }
}

/// Read the persisted theme preference, defaulting to light when the key is
/// absent, unparseable, or the store is unavailable.
#[must_use]
pub fn stored_theme(prefs: &dyn PreferenceStore) -> Theme {
    Theme::from_attr(prefs.get(THEME_STORAGE_KEY).as_deref())
}

/// Apply the persisted preference to the page: set the theme attribute on
/// the root and body elements and bring the toggle icon in line.
pub fn initialize(page: &dyn Page, prefs: &dyn PreferenceStore) {
    let theme = stored_theme(prefs);
    page.set_theme_attr(theme);
    page.set_toggle_icon(theme);
}

/// Flip the theme in response to a toggle activation.
///
/// Reads the *current* root attribute (not the stored value), writes the
/// complement to the page and the store, and updates the icon. Returns the
/// theme that is now active.
pub fn toggle(page: &dyn Page, prefs: &dyn PreferenceStore) -> Theme {
    let next = Theme::from_attr(page.theme_attr().as_deref()).flipped();
    page.set_theme_attr(next);
    prefs.set(THEME_STORAGE_KEY, next.as_str());
    page.set_toggle_icon(next);
    next
}
