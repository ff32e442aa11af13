//! Bookkeeping for open invoice overlays.
//!
//! Plain data, no DOM access: the presenter keeps one registry inside a
//! signal and the host component renders whatever it contains.

use std::sync::Arc;

use chrono::NaiveDateTime;
use contracts::domain::a001_invoice::InvoiceData;

use super::content::format_content;
use super::document::build_print_document;
use crate::shared::config::InvoiceConfig;
use crate::shared::error::InvoiceError;

/// Handle returned by `InvoicePresenter::show`.
///
/// Identifies exactly one overlay; ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvoiceHandle(u64);

impl InvoiceHandle {
    pub fn id(&self) -> u64 {
        self.0
    }

    /// DOM id of the overlay container
    pub fn overlay_dom_id(&self) -> String {
        format!("invoice-overlay-{}", self.0)
    }

    /// DOM id of the content node inside the overlay
    pub fn content_dom_id(&self) -> String {
        format!("invoice-content-{}", self.0)
    }
}

/// Lifecycle of a single overlay:
/// `Entering` (mounted, hidden) -> `Visible` -> `Hiding` -> removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Entering,
    Visible,
    Hiding,
}

impl OverlayPhase {
    pub fn is_shown(self) -> bool {
        self == OverlayPhase::Visible
    }
}

/// Result of a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Overlay started hiding; caller must schedule `remove`
    Started,
    /// Overlay was already hiding; its removal is already scheduled
    AlreadyHiding,
}

#[derive(Debug, Clone)]
pub struct OverlayEntry {
    pub handle: InvoiceHandle,
    /// Rendered body fragment, reused verbatim by the print document
    pub content: Arc<str>,
    pub issued_at: NaiveDateTime,
    pub phase: OverlayPhase,
}

#[derive(Debug, Clone)]
pub struct OverlayRegistry {
    entries: Vec<OverlayEntry>,
    next_id: u64,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn get(&self, handle: InvoiceHandle) -> Option<&OverlayEntry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    /// Topmost overlay that is currently shown
    pub fn topmost_visible(&self) -> Option<InvoiceHandle> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.phase.is_shown())
            .map(|e| e.handle)
    }

    /// Format `data` and register a new hidden overlay for it.
    pub fn open(
        &mut self,
        data: &InvoiceData,
        issued_at: NaiveDateTime,
        cfg: &InvoiceConfig,
    ) -> InvoiceHandle {
        let handle = InvoiceHandle(self.next_id);
        self.next_id += 1;

        let content: Arc<str> = format_content(data, cfg).into();
        self.entries.push(OverlayEntry {
            handle,
            content,
            issued_at,
            phase: OverlayPhase::Entering,
        });

        handle
    }

    /// Entering -> Visible. Ignored for overlays already hiding or gone.
    pub fn reveal(&mut self, handle: InvoiceHandle) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.handle == handle) {
            if entry.phase == OverlayPhase::Entering {
                entry.phase = OverlayPhase::Visible;
            }
        }
    }

    /// Start hiding an overlay. The entry stays registered until `remove`.
    pub fn begin_close(&mut self, handle: InvoiceHandle) -> Result<CloseOutcome, InvoiceError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(InvoiceError::OverlayNotFound(handle.id()))?;

        if entry.phase == OverlayPhase::Hiding {
            return Ok(CloseOutcome::AlreadyHiding);
        }
        entry.phase = OverlayPhase::Hiding;
        Ok(CloseOutcome::Started)
    }

    /// Drop the overlay entirely. Returns whether anything was removed.
    pub fn remove(&mut self, handle: InvoiceHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Print document for an overlay that is still on screen.
    pub fn print_document(
        &self,
        handle: InvoiceHandle,
        printed_at: &NaiveDateTime,
    ) -> Result<String, InvoiceError> {
        let entry = self
            .get(handle)
            .ok_or(InvoiceError::OverlayNotFound(handle.id()))?;
        if entry.phase == OverlayPhase::Hiding {
            return Err(InvoiceError::OverlayClosing(handle.id()));
        }
        Ok(build_print_document(&entry.content, printed_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::content::tests::{sample_invoice, test_config};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_open_registers_one_hidden_overlay() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());

        assert_eq!(reg.entries().len(), 1);
        assert_eq!(reg.get(handle).unwrap().phase, OverlayPhase::Entering);
        assert_eq!(reg.topmost_visible(), None);

        reg.reveal(handle);
        assert_eq!(reg.get(handle).unwrap().phase, OverlayPhase::Visible);
        assert_eq!(reg.topmost_visible(), Some(handle));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut reg = OverlayRegistry::new();
        let a = reg.open(&sample_invoice(), now(), &test_config());
        let b = reg.open(&sample_invoice(), now(), &test_config());
        assert_ne!(a, b);
        assert_ne!(a.overlay_dom_id(), b.overlay_dom_id());
        assert_eq!(reg.entries().len(), 2);

        reg.remove(a);
        let c = reg.open(&sample_invoice(), now(), &test_config());
        assert_ne!(a, c);
    }

    #[test]
    fn test_close_then_remove() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());
        reg.reveal(handle);

        assert_eq!(reg.begin_close(handle), Ok(CloseOutcome::Started));
        // still mounted while the hide transition runs
        assert_eq!(reg.entries().len(), 1);
        assert_eq!(reg.get(handle).unwrap().phase, OverlayPhase::Hiding);
        assert_eq!(reg.topmost_visible(), None);

        assert!(reg.remove(handle));
        assert!(reg.entries().is_empty());
    }

    #[test]
    fn test_close_missing_overlay() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());
        reg.remove(handle);

        assert_eq!(
            reg.begin_close(handle),
            Err(InvoiceError::OverlayNotFound(handle.id()))
        );
        assert!(!reg.remove(handle));
        assert!(reg.entries().is_empty());
    }

    #[test]
    fn test_second_close_while_hiding_is_idempotent() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());

        assert_eq!(reg.begin_close(handle), Ok(CloseOutcome::Started));
        assert_eq!(reg.begin_close(handle), Ok(CloseOutcome::AlreadyHiding));
    }

    #[test]
    fn test_reveal_does_not_resurrect_hiding_overlay() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());
        reg.begin_close(handle).unwrap();
        reg.reveal(handle);
        assert_eq!(reg.get(handle).unwrap().phase, OverlayPhase::Hiding);
    }

    #[test]
    fn test_print_document_rules() {
        let mut reg = OverlayRegistry::new();
        let handle = reg.open(&sample_invoice(), now(), &test_config());
        reg.reveal(handle);

        let doc = reg.print_document(handle, &now()).unwrap();
        assert!(doc.contains(&*reg.get(handle).unwrap().content));

        reg.begin_close(handle).unwrap();
        assert_eq!(
            reg.print_document(handle, &now()),
            Err(InvoiceError::OverlayClosing(handle.id()))
        );

        reg.remove(handle);
        assert_eq!(
            reg.print_document(handle, &now()),
            Err(InvoiceError::OverlayNotFound(handle.id()))
        );
    }
}
