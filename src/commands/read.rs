use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use images_readme::presentation::{create_read_use_case, Renderer, Settings};
use images_readme::ReadmeRequest;

pub fn cmd_read(
    settings: &Settings,
    renderer: &dyn Renderer,
    name: Option<String>,
    request: Option<PathBuf>,
) -> Result<()> {
    let request = match (name, request) {
        (_, Some(path)) => read_request(&path)?,
        (Some(name), None) => ReadmeRequest::new(name),
        (None, None) => bail!("a component name or --request is required"),
    };

    let use_case = create_read_use_case(settings);
    let readme = use_case.execute(&request)?;

    print!("{}", with_newline(renderer.readme(&readme)));
    Ok(())
}

fn read_request(path: &Path) -> Result<ReadmeRequest> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request {}", path.display()))?
    };

    Ok(ReadmeRequest::from_json(&content)?)
}

pub(crate) fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
