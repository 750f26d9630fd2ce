//! Page-chrome behaviors for the vault's server-rendered frontend.
//!
//! This crate is compiled to WebAssembly and runs in the browser as a
//! progressive-enhancement layer: the host page keeps all of its
//! server-rendered markup, and this crate wires behavior onto the elements
//! the page already provides. It covers the recurring page chrome:
//! light/dark theme switching backed by a persisted preference,
//! opportunistic notification permission requests, and timed dismissal of
//! transient flash alerts.
//!
//! Behavior logic is written against injected capabilities ([`page::Page`],
//! [`prefs::PreferenceStore`], [`timers::Timers`]) so it runs under plain
//! `cargo test` without a browser; the web-sys-backed implementations live
//! in the thin glue modules and are only exercised in the WASM build.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | WASM entry point and document-ready wiring |
//! | [`consts`] | Storage key, attribute/class names, dismiss timings |
//! | [`dom`] | Browser-backed [`page::Page`] implementation |
//! | [`flash`] | Two-phase alert auto-dismissal with cancel-on-drop guards |
//! | [`notify`] | Notification permission capability check and request |
//! | [`page`] | Page-environment capability consumed by the behaviors |
//! | [`prefs`] | Preference store capability and its implementations |
//! | [`theme`] | Theme model, icon mapping, initialize/toggle operations |
//! | [`timers`] | One-shot timer capability with cancellable tokens |

pub mod boot;
pub mod consts;
pub mod dom;
pub mod flash;
pub mod notify;
pub mod page;
pub mod prefs;
pub mod theme;
pub mod timers;
