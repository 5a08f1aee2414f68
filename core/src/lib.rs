pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod repository;
pub mod service;
pub mod service_year;
pub mod time;

pub use config::Config;
pub use error::StoreError;
pub use i18n::{translate, Language, Message};
pub use model::entry::{DailyEntry, NewEntry};
pub use model::totals::{MonthTotal, Totals, YearTotal};
pub use repository::{EntryRepository, FileEntryRepository, MemoryEntryRepository};
pub use service::aggregator::{aggregate, daily_hours};
pub use service::entry_store::EntryStore;
pub use service::progress::{classify_pace, Pace, ProgressReport};
pub use service_year::{months_of_service_year, months_passed, service_year_of};
pub use time::{format_hours_minutes, month_key, parse_local_date, to_local_date_string};
