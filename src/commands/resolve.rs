use anyhow::Result;

use images_readme::presentation::{Renderer, Settings};
use images_readme::{ComponentName, ResolvedPath};

use super::read::with_newline;

pub fn cmd_resolve(settings: &Settings, renderer: &dyn Renderer, name: &str) -> Result<()> {
    let path = ResolvedPath::resolve(&ComponentName::new(name));
    let full_path = settings.load_options().root.join(path.relative_path());

    print!("{}", with_newline(renderer.resolved(name, &path, &full_path)));
    Ok(())
}
