//! Shared constants for the page-chrome behaviors.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute carrying the active theme on the root and body elements.
pub const THEME_ATTR: &str = "data-theme";

/// Element id of the theme toggle control the host page provides.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Selector for the icon element nested inside the toggle control.
pub const TOGGLE_ICON_SELECTOR: &str = "i";

/// Icon class shown while the light theme is active.
pub const MOON_ICON_CLASS: &str = "bi-moon-stars-fill";

/// Icon class shown while the dark theme is active.
pub const SUN_ICON_CLASS: &str = "bi-sun-fill";

/// Inline accent color applied to the sun icon (warning yellow).
pub const SUN_ACCENT_COLOR: &str = "#fbbf24";

// ── Alerts ──────────────────────────────────────────────────────

/// Selector matching dismissable alert banners; permanent alerts opt out.
pub const ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

/// Dwell time before a dismissable alert starts fading, in milliseconds.
pub const ALERT_DWELL_MS: u32 = 4000;

/// Duration of the opacity fade before removal, in milliseconds.
pub const ALERT_FADE_MS: u32 = 1000;

/// Inline transition applied when the fade begins; keep the duration in
/// sync with [`ALERT_FADE_MS`].
pub const ALERT_FADE_TRANSITION: &str = "opacity 1s ease";
