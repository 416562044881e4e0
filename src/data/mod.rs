pub mod catalog_csv;
pub mod eclipses;

pub use catalog_csv::load_catalog_csv;
pub use eclipses::{builtin_events, builtin_position};
