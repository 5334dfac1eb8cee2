//! Application services - Use case implementations
//!
//! Services accept the game context they need and return domain values; the
//! HTTP layer converts those into DTOs.

pub mod sheet_service;

pub use sheet_service::SheetService;
