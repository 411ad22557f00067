//! Loading page and post records from files with YAML front matter.

pub mod front_matter;
mod deserializers;
pub mod loader;

pub use loader::{load_page, parse_date};
