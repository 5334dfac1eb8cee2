//! Domain services - Pure sheet and roll logic

pub mod dice_pool;
pub mod inventory;
pub mod modifier_aggregator;
pub mod modifier_report;
pub mod roll_preparation;

pub use inventory::SheetItems;
pub use modifier_report::ModifierReport;
pub use roll_preparation::RollDialogDefaults;
