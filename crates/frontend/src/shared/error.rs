use thiserror::Error;

/// Ошибки презентера счетов
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvoiceError {
    #[error("Invoice overlay {0} not found")]
    OverlayNotFound(u64),

    #[error("Invoice overlay {0} is closing")]
    OverlayClosing(u64),

    #[error("Print window was blocked by the browser")]
    PrintSurfaceBlocked,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl InvoiceError {
    /// Обёртка для ошибок `web_sys`, которые приходят как `JsValue`
    pub fn dom(context: &str, err: impl std::fmt::Debug) -> Self {
        InvoiceError::Dom(format!("{}: {:?}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvoiceError::OverlayNotFound(7).to_string(),
            "Invoice overlay 7 not found"
        );
        assert_eq!(
            InvoiceError::PrintSurfaceBlocked.to_string(),
            "Print window was blocked by the browser"
        );
        assert_eq!(
            InvoiceError::dom("Failed to print", "denied").to_string(),
            "DOM error: Failed to print: \"denied\""
        );
    }
}
