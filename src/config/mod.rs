mod apply;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::load_config;
pub use types::ConfigFile;
