//! wxr-export - WordPress eXtended RSS export builder
//!
//! This library turns a typed blog content model into a WXR document: an
//! RSS 2.0 feed extended with the `content`, `wfw`, `dc` and `wp` namespaces.

pub mod config;
pub mod delivery;
pub mod error;
pub mod models;
pub mod services;
pub mod wxr;

pub use error::ExportError;
