//! Configuration file management.

mod manager;

pub use manager::{
    CommandConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, ServiceConfig,
    TboxConfig, TranslateOnConfig, resolve_config,
};
