//! `parcelflow-cli`: replay a JSON command script against a fresh delivery.

pub mod config;
pub mod script;

pub use config::CliConfig;
