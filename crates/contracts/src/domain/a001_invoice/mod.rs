pub mod aggregate;

pub use aggregate::{
    InvoiceData, PackageSummary, Place, RecipientInfo, SenderInfo, ShipmentSummary,
};
