mod types;
mod loader;
mod deserializers;

pub use types::*;
pub use loader::load_config;
