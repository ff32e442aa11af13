use chrono::NaiveDateTime;
use contracts::domain::a001_invoice::InvoiceData;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::print_surface::{BrowserPrintSurface, PrintSurface};
use super::registry::{CloseOutcome, InvoiceHandle, OverlayEntry, OverlayPhase, OverlayRegistry};
use crate::shared::config::InvoiceConfig;
use crate::shared::date_utils::now_local;
use crate::shared::error::InvoiceError;

/// Pause between mounting an overlay and making it visible, so the opacity
/// transition has a hidden frame to start from.
const ENTER_DELAY_MS: u32 = 20;

/// Build the print document for `handle` and hand it to `surface`.
///
/// Nothing reaches the surface when the overlay is missing or closing.
pub fn print_overlay(
    registry: &OverlayRegistry,
    handle: InvoiceHandle,
    printed_at: &NaiveDateTime,
    surface: &impl PrintSurface,
) -> Result<(), InvoiceError> {
    let document = registry.print_document(handle, printed_at)?;
    surface.print_document(&document)
}

/// Runs the deferred removal of a hidden overlay
pub trait RemovalScheduler {
    fn schedule_removal(&self, handle: InvoiceHandle, delay_ms: u32);
}

/// Removes overlays from the presenter's registry once a browser timer fires.
#[derive(Clone, Copy)]
struct TimedRemoval {
    overlays: RwSignal<OverlayRegistry>,
}

impl RemovalScheduler for TimedRemoval {
    fn schedule_removal(&self, handle: InvoiceHandle, delay_ms: u32) {
        let overlays = self.overlays;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if overlays.try_update(|reg| reg.remove(handle)).unwrap_or(false) {
                log::debug!("invoice {}: removed", handle.id());
            }
        });
    }
}

/// Start hiding `handle` and schedule its removal after `delay_ms`.
///
/// The overlay stays registered until the scheduler fires. A second close
/// while it is hiding schedules nothing.
pub fn close_overlay(
    registry: &mut OverlayRegistry,
    handle: InvoiceHandle,
    delay_ms: u32,
    scheduler: &impl RemovalScheduler,
) -> Result<(), InvoiceError> {
    if registry.begin_close(handle)? == CloseOutcome::Started {
        scheduler.schedule_removal(handle, delay_ms);
        log::debug!("invoice {}: closing", handle.id());
    }
    Ok(())
}

/// Shows invoices as modal overlays and prints them.
///
/// Provide it once in the app root and mount `InvoiceHost` next to it.
/// Every `show` returns its own handle, so several invoices can be open.
#[derive(Clone, Copy)]
pub struct InvoicePresenter {
    overlays: RwSignal<OverlayRegistry>,
    config: StoredValue<InvoiceConfig>,
}

impl InvoicePresenter {
    pub fn new(config: InvoiceConfig) -> Self {
        Self {
            overlays: RwSignal::new(OverlayRegistry::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> InvoiceConfig {
        self.config.get_value()
    }

    /// Render `data` into a new overlay and fade it in.
    pub fn show(&self, data: InvoiceData) -> InvoiceHandle {
        let cfg = self.config.get_value();
        let handle = self.overlays.write().open(&data, now_local(), &cfg);
        log::debug!("invoice {}: shown", handle.id());

        let overlays = self.overlays;
        spawn_local(async move {
            TimeoutFuture::new(ENTER_DELAY_MS).await;
            overlays.update(|reg| reg.reveal(handle));
        });

        handle
    }

    /// Fade the overlay out, then remove it after `close_delay_ms`.
    ///
    /// Closing an overlay that is already fading out is a no-op.
    pub fn close(&self, handle: InvoiceHandle) -> Result<(), InvoiceError> {
        let delay = self.config.with_value(|cfg| cfg.close_delay_ms);
        let scheduler = TimedRemoval {
            overlays: self.overlays,
        };
        self.overlays
            .try_update(|reg| close_overlay(reg, handle, delay, &scheduler))
            .unwrap_or(Err(InvoiceError::OverlayNotFound(handle.id())))
    }

    /// Close the most recently opened visible overlay, if any.
    pub fn close_topmost(&self) -> Result<(), InvoiceError> {
        match self.overlays.with_untracked(|reg| reg.topmost_visible()) {
            Some(handle) => self.close(handle),
            None => Ok(()),
        }
    }

    /// Print through a new browser window.
    pub fn print(&self, handle: InvoiceHandle) -> Result<(), InvoiceError> {
        self.print_with(handle, &BrowserPrintSurface)
    }

    pub fn print_with(
        &self,
        handle: InvoiceHandle,
        surface: &impl PrintSurface,
    ) -> Result<(), InvoiceError> {
        let printed_at = now_local();
        self.overlays
            .with_untracked(|reg| print_overlay(reg, handle, &printed_at, surface))?;
        log::debug!("invoice {}: sent to print", handle.id());
        Ok(())
    }

    /// Tracked phase lookup for views
    pub fn phase(&self, handle: InvoiceHandle) -> Option<OverlayPhase> {
        self.overlays.with(|reg| reg.get(handle).map(|e| e.phase))
    }

    pub fn entries(&self) -> Vec<OverlayEntry> {
        self.overlays.with(|reg| reg.entries().to_vec())
    }

    pub fn has_visible(&self) -> bool {
        self.overlays
            .with_untracked(|reg| reg.topmost_visible().is_some())
    }
}
