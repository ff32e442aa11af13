//! Self-contained print document.
//!
//! The print window must not depend on the host page's stylesheet, so every
//! utility class used by the invoice fragment is restated here.

use chrono::NaiveDateTime;

use super::content::{SUBTITLE, TITLE};
use crate::shared::date_utils::{format_date_fr, format_time_fr};

pub const PRINT_TITLE: &str = "Facture de Transport";

/// Style rules for the invoice fragment, shared by the print window and the
/// on-screen overlay.
pub const INVOICE_STYLES: &str = r#"
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; }
.mb-8 { margin-bottom: 2rem; }
.mb-4 { margin-bottom: 1rem; }
.mt-2 { margin-top: 0.5rem; }
.p-3 { padding: 0.75rem; }
.p-4 { padding: 1rem; }
.px-2 { padding-left: 0.5rem; padding-right: 0.5rem; }
.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.rounded { border-radius: 0.375rem; }
.rounded-lg { border-radius: 0.5rem; }
.bg-blue-50 { background-color: #eff6ff; }
.bg-green-50 { background-color: #f0fdf4; }
.bg-purple-50 { background-color: #faf5ff; }
.bg-orange-50 { background-color: #fff7ed; }
.bg-gray-50 { background-color: #f9fafb; }
.bg-blue-100 { background-color: #dbeafe; }
.bg-yellow-100 { background-color: #fef9c3; }
.text-blue-800 { color: #1e40af; }
.text-yellow-800 { color: #854d0e; }
.text-gray-700 { color: #374151; }
.text-gray-800 { color: #1f2937; }
.text-sm { font-size: 0.875rem; }
.text-lg { font-size: 1.125rem; }
.border-l-4 { border-left: 4px solid; }
.border-blue-500 { border-color: #3b82f6; }
.text-green-600 { color: #059669; }
.font-bold { font-weight: bold; }
.font-semibold { font-weight: 600; }
"#;

const PAGE_STYLES: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; }
h2 { color: #1f2937; margin-bottom: 1rem; }
h3 { color: #374151; margin-bottom: 1rem; }
"#;

/// Build the full HTML document written into the print window.
///
/// `content` is the fragment produced by `format_content`; `issued_at` is the
/// moment the print action was triggered.
pub fn build_print_document(content: &str, issued_at: &NaiveDateTime) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{page}{styles}</style>\n\
         </head>\n\
         <body>\n\
         <h2>{heading} - {subtitle}</h2>\n\
         <p>Date: {date} - Heure: {time}</p>\n\
         {content}\n\
         </body>\n\
         </html>\n",
        title = PRINT_TITLE,
        page = PAGE_STYLES,
        styles = INVOICE_STYLES,
        heading = TITLE,
        subtitle = SUBTITLE,
        date = format_date_fr(issued_at),
        time = format_time_fr(issued_at),
        content = content,
    )
}
