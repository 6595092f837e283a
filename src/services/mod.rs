//! Services layer
//!
//! Coordinates configuration, document assembly and delivery for one export.

pub mod export;

pub use export::ExportService;
