//! Result formatting
//!
//! - `config` - output configuration
//! - `utils` - number, byte and timestamp formatting
//! - `text` - line-oriented console output
//! - `json` - JSON output

mod config;
mod json;
mod text;
mod utils;

pub use config::OutputConfig;
pub use json::{JsonEntry, JsonReport, print_json};
pub use text::TextFormatter;
pub use utils::{format_bytes, format_number, format_timestamp, ranked_value};
