//! Notification permission capability check and request.
//!
//! The request is opportunistic and fire-and-forget: the browser's returned
//! promise is dropped, and the eventual decision is neither observed nor
//! acted upon. Environments without the `Notification` global are silently
//! skipped.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use wasm_bindgen::JsValue;

/// Notification permission as the browser reports it, plus the
/// capability-missing case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    /// The `Notification` API is not present on the window.
    Unsupported,
    /// The user has not decided yet (`default`).
    Unset,
    Granted,
    Denied,
}

/// Whether a permission request should be issued: only when the user has
/// never decided. Granted, denied, and capability-free environments are all
/// left alone.
#[must_use]
pub fn should_request(state: PermissionState) -> bool {
    matches!(state, PermissionState::Unset)
}

/// Read the current permission state from the browser.
#[must_use]
pub fn permission_state() -> PermissionState {
    let Some(window) = web_sys::window() else {
        return PermissionState::Unsupported;
    };
    let supported =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("Notification")).unwrap_or(false);
    if !supported {
        return PermissionState::Unsupported;
    }
    match web_sys::Notification::permission() {
        web_sys::NotificationPermission::Granted => PermissionState::Granted,
        web_sys::NotificationPermission::Denied => PermissionState::Denied,
        _ => PermissionState::Unset,
    }
}

/// Request notification permission if the user has never been asked (or
/// dismissed the prompt without deciding).
pub fn ensure_permission() {
    if !should_request(permission_state()) {
        return;
    }
    match web_sys::Notification::request_permission() {
        Ok(promise) => {
            // Deliberately unobserved; only the act of asking matters here.
            drop(promise);
            log::debug!("notification permission requested");
        }
        Err(_) => log::debug!("notification permission request rejected by browser"),
    }
}
