pub mod aggregator;
pub mod backup;
pub mod entry_store;
pub mod progress;

mod entry_store_test;
