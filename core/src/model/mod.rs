pub mod entry;
pub mod totals;
