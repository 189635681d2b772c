//! Use Case Factory
//!
//! Merges CLI flags with the config hierarchy and creates use cases with
//! infrastructure dependencies wired up.

use std::path::PathBuf;

use crate::application::{LoadOptions, ReadReadmeUseCase, ReadmeLoader};
use crate::config::{self, Config, LoadedConfig, OutputFormat, Verbosity};
use crate::infrastructure::{HclDescriptorRepository, LocalFs};

use super::cli::Cli;

/// Type alias for the concrete ReadReadmeUseCase with all dependencies
pub type ConcreteReadUseCase = ReadReadmeUseCase<HclDescriptorRepository<LocalFs>, LocalFs>;

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub scratch_dir: PathBuf,
    pub registry: String,
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Resolve the component root, walk the config hierarchy, apply CLI flags.
    ///
    /// Returns the loaded config too so its warnings can be reported once
    /// logging is up.
    pub fn load(cli: &Cli) -> (Self, LoadedConfig) {
        let root = cli
            .root
            .clone()
            .or_else(config::env_root)
            .unwrap_or_else(|| PathBuf::from("."));
        let loaded = config::load_layered(Some(&root));
        let settings = Self::from_config(&loaded.config, root).with_cli_overrides(cli);
        (settings, loaded)
    }

    pub fn from_config(config: &Config, root: PathBuf) -> Self {
        Self {
            root,
            scratch_dir: config.paths.scratch_dir.clone(),
            registry: config.template.registry.clone(),
            format: config.output.format,
            verbosity: config.output.verbosity,
        }
    }

    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.scratch_dir {
            self.scratch_dir = dir.clone();
        }
        if let Some(registry) = &cli.registry {
            self.registry = registry.clone();
        }
        if cli.json {
            self.format = OutputFormat::Json;
        }
        self
    }

    /// Default `EnvFilter` directive: `-v` flags win over configured verbosity
    pub fn log_directive(&self, verbose: u8) -> &'static str {
        match verbose {
            0 => self.verbosity.filter_directive(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new(self.root.clone()).with_scratch_dir(self.scratch_dir.clone())
    }
}

/// Create a read use case with all dependencies wired up
pub fn create_read_use_case(settings: &Settings) -> ConcreteReadUseCase {
    let file_system = LocalFs::new();
    let repo = HclDescriptorRepository::new(file_system);
    let loader = ReadmeLoader::new(repo, settings.load_options());

    ReadReadmeUseCase::new(loader, file_system).with_registry(settings.registry.clone())
}
