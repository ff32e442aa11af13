pub mod host;

pub use host::InvoiceHost;
