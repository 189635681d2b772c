//! images-readme CLI
//!
//! Usage: images-readme <COMMAND>
//!
//! Commands:
//!   read      Load a component's README descriptor
//!   resolve   Show where a component's descriptor is expected
//!   template  Print a starter descriptor for a component

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use images_readme::config::OutputFormat;
use images_readme::presentation::{renderer_for, Cli, Commands, Renderer, Settings};
use images_readme::ReadmeError;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (settings, loaded) = Settings::load(&cli);
    init_tracing(&settings, cli.verbose);
    loaded.report();

    let renderer = renderer_for(settings.format);

    let result = match cli.command {
        Commands::Read { name, request } => {
            commands::cmd_read(&settings, renderer.as_ref(), name, request)
        }
        Commands::Resolve { name } => commands::cmd_resolve(&settings, renderer.as_ref(), &name),
        Commands::Template { name } => commands::cmd_template(&settings, &name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, renderer.as_ref(), settings.format);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(settings: &Settings, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// JSON goes to stdout so scripts see exactly one object; text goes to stderr.
fn print_error(err: &anyhow::Error, renderer: &dyn Renderer, format: OutputFormat) {
    let rendered = match err.downcast_ref::<ReadmeError>() {
        Some(readme_err) => renderer.error(readme_err),
        None => match format {
            OutputFormat::Json => serde_json::json!({
                "event": "error",
                "kind": "other",
                "summary": "Error",
                "detail": format!("{:#}", err),
            })
            .to_string(),
            OutputFormat::Text => format!("[ERROR] {:#}\n", err),
        },
    };

    match format {
        OutputFormat::Json => println!("{}", rendered.trim_end()),
        OutputFormat::Text => eprint!("{}", rendered),
    }
}
