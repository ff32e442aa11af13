pub mod content;
pub mod document;
pub mod print_surface;
pub mod registry;
pub mod service;
pub mod ui;

pub use registry::{InvoiceHandle, OverlayPhase};
pub use service::InvoicePresenter;
pub use ui::InvoiceHost;
