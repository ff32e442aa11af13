use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use crate::shared::error::InvoiceError;

/// Destination for a finished print document
pub trait PrintSurface {
    /// Show `html` and run the environment's print dialog on it.
    fn print_document(&self, html: &str) -> Result<(), InvoiceError>;
}

/// Prints through a secondary browser window.
///
/// Opens `about:blank` in a new tab, writes the document, calls
/// `window.print()` and closes the tab once the dialog returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrintSurface;

impl PrintSurface for BrowserPrintSurface {
    fn print_document(&self, html: &str) -> Result<(), InvoiceError> {
        let window = web_sys::window().ok_or_else(|| InvoiceError::Dom("No window object".into()))?;

        // `open` resolves to null when a popup blocker intervenes
        let print_window = window
            .open_with_url_and_target("", "_blank")
            .map_err(|e| InvoiceError::dom("Failed to open print window", e))?
            .ok_or(InvoiceError::PrintSurfaceBlocked)?;

        let document = print_window
            .document()
            .ok_or_else(|| InvoiceError::Dom("Print window has no document".into()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|e| InvoiceError::dom("Failed to cast to HtmlDocument", e))?;

        let chunks = js_sys::Array::of1(&JsValue::from_str(html));
        document
            .write(&chunks)
            .map_err(|e| InvoiceError::dom("Failed to write print document", e))?;
        document
            .close()
            .map_err(|e| InvoiceError::dom("Failed to close print document", e))?;

        let printed = print_window
            .print()
            .map_err(|e| InvoiceError::dom("Failed to print", e));

        // The tab is closed even when print() failed
        print_window
            .close()
            .map_err(|e| InvoiceError::dom("Failed to close print window", e))?;

        printed
    }
}
