//! Shared data contracts for the invoice presenter.
//!
//! Types here are plain serializable records: the frontend only reads them.

pub mod domain;
