use anyhow::Result;

use images_readme::config::OutputFormat;
use images_readme::domain::services::starter_descriptor;
use images_readme::presentation::Settings;
use images_readme::{synthesize_template, ComponentName};

/// Print the starter descriptor; nothing is written to disk.
pub fn cmd_template(settings: &Settings, name: &str) -> Result<()> {
    let name = ComponentName::new(name);

    match settings.format {
        OutputFormat::Json => {
            let descriptor = starter_descriptor(&name, &settings.registry);
            println!("{}", serde_json::to_string(&descriptor)?);
        }
        OutputFormat::Text => {
            print!("{}", synthesize_template(&name, &settings.registry)?);
        }
    }
    Ok(())
}
