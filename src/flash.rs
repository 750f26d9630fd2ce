//! Timed auto-dismissal of flash alert banners.
//!
//! DESIGN
//! ======
//! Every dismissable alert runs the same two-phase schedule, independently
//! of the others: after [`ALERT_DWELL_MS`] the opacity fade starts, and at
//! [`ALERT_DWELL_MS`] + [`ALERT_FADE_MS`] the element is removed. Both
//! phases are armed up front as separate timers owned by a [`DismissGuard`];
//! dropping the guard cancels whatever has not fired, which ties the timers
//! to the alert's lifecycle instead of leaving them to fire into a detached
//! node. The page implementation additionally skips alerts that are no
//! longer connected when a phase does fire.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::rc::Rc;

use crate::consts::{ALERT_DWELL_MS, ALERT_FADE_MS};
use crate::page::{AlertId, Page};
use crate::timers::{TimerToken, Timers};

/// Lifecycle of one dismissable alert. Transitions are one-way and
/// time-gated: Visible → FadingOut → Removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissPhase {
    Visible,
    FadingOut,
    Removed,
}

/// Phase an alert is in `elapsed_ms` milliseconds after scheduling.
#[must_use]
pub fn phase_at(elapsed_ms: u32) -> DismissPhase {
    if elapsed_ms < ALERT_DWELL_MS {
        DismissPhase::Visible
    } else if elapsed_ms < ALERT_DWELL_MS + ALERT_FADE_MS {
        DismissPhase::FadingOut
    } else {
        DismissPhase::Removed
    }
}

/// Owner of one alert's pending phase timers.
///
/// Dropping the guard cancels any phase that has not fired yet; a guard
/// dropped between phases cancels only the removal.
#[must_use]
pub struct DismissGuard {
    alert: AlertId,
    _fade: TimerToken,
    _remove: TimerToken,
}

impl DismissGuard {
    /// The alert this guard is tied to.
    #[must_use]
    pub fn alert(&self) -> AlertId {
        self.alert
    }
}

/// Arm the fade/remove schedule for every dismissable alert on the page,
/// returning one guard per alert. Alerts marked permanent are never
/// selected (the page only reports dismissable ones).
#[must_use]
pub fn schedule_dismissals(page: &Rc<dyn Page>, timers: &dyn Timers) -> Vec<DismissGuard> {
    page.alerts()
        .into_iter()
        .map(|alert| schedule_one(page, timers, alert))
        .collect()
}

fn schedule_one(page: &Rc<dyn Page>, timers: &dyn Timers, alert: AlertId) -> DismissGuard {
    let fade_page = Rc::clone(page);
    let fade = timers.once(ALERT_DWELL_MS, Box::new(move || fade_page.fade_alert(alert)));

    let remove_page = Rc::clone(page);
    let remove = timers.once(
        ALERT_DWELL_MS + ALERT_FADE_MS,
        Box::new(move || remove_page.remove_alert(alert)),
    );

    DismissGuard { alert, _fade: fade, _remove: remove }
}
