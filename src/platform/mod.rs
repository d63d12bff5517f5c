// FirmLens - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and
// config.toml loading.

pub mod config;
