//! Crawl output
//!
//! - `config` - output configuration and colors
//! - `console` - indented, colored tree on a terminal
//! - `export` - CSV export of discovered files

mod config;
mod console;
mod export;

pub use config::{OutputConfig, Palette};
pub use console::ConsolePresenter;
pub use export::{FileRecord, csv_filename, write_csv, write_records};
