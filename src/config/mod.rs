//! Configuration module for images-readme
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (IMAGES_README_*)
//! 3. Project config (<root>/.images-readme.toml)
//! 4. User config (~/.config/images-readme/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, env_root, load_layered, user_config_path, ConfigWarning, LoadedConfig,
    CONFIG_DIR_VAR, ENV_FORMAT, ENV_REGISTRY, ENV_ROOT, ENV_SCRATCH_DIR, ENV_VERBOSITY,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, OutputFormat, PathsConfig, TemplateConfig, Verbosity};
