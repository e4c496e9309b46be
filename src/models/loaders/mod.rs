pub mod toml_loader;

pub use toml_loader::{load_threshold_table, parse_threshold_table};
