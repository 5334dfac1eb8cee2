//! Inbound ports - Interfaces that the application exposes to the outside world

mod sheet_data_provider;

pub use sheet_data_provider::SheetDataProvider;
