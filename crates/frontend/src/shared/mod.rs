pub mod config;
pub mod date_utils;
pub mod error;
pub mod html;
pub mod number_format;
