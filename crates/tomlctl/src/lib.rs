//! `tomlctl` — script-friendly TOML management from the command line.
//!
//! Command logic lives in [`cli`] as pure functions; the binary entry point
//! is a thin dispatcher around them. [`file`] owns loading and atomically
//! saving the backing TOML file, and [`codec`] converts between the engine's
//! value model and the `toml` / `serde_json` representations.

pub mod cli;
pub mod codec;
pub mod file;
