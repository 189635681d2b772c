//! Output Rendering
//!
//! Provides a unified interface for rendering output to different formats.

use std::fmt::Write as _;
use std::path::Path;

use crate::config::OutputFormat;
use crate::domain::entities::Readme;
use crate::domain::value_objects::ResolvedPath;
use crate::error::ReadmeError;

/// Trait for rendering command results
pub trait Renderer {
    /// Render a loaded readme
    fn readme(&self, readme: &Readme) -> String;

    /// Render a resolved descriptor location
    fn resolved(&self, name: &str, path: &ResolvedPath, full_path: &Path) -> String;

    /// Render a failure: short summary plus detail
    fn error(&self, err: &ReadmeError) -> String;
}

/// Pick the renderer for an output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Human-readable text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

const LABEL_WIDTH: usize = 12;

fn field(out: &mut String, label: &str, value: &str) {
    let line = format!("{:<width$} {}", format!("{}:", label), value, width = LABEL_WIDTH);
    let _ = writeln!(out, "{}", line.trim_end());
}

fn block(out: &mut String, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}:", label);
    for line in text.lines() {
        let _ = writeln!(out, "  {}", line);
    }
}

impl Renderer for TextRenderer {
    fn readme(&self, readme: &Readme) -> String {
        let mut out = String::new();
        field(&mut out, "name", &readme.name);
        field(&mut out, "image", &readme.image);
        field(&mut out, "image_path", &readme.image_path);
        field(&mut out, "file_name", &readme.file_name);
        field(&mut out, "description", &readme.description);
        block(&mut out, "intro", &readme.intro);
        block(&mut out, "body", &readme.body);
        out
    }

    fn resolved(&self, name: &str, path: &ResolvedPath, full_path: &Path) -> String {
        let mut out = String::new();
        field(&mut out, "name", name);
        field(&mut out, "directory", &path.directory);
        field(&mut out, "filename", &path.filename);
        field(&mut out, "path", &full_path.display().to_string());
        field(&mut out, "document", &path.document_file_name());
        out
    }

    fn error(&self, err: &ReadmeError) -> String {
        format!("[ERROR] {}\n{}\n", err.summary(), err.detail())
    }
}

/// JSON renderer, one object per invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn readme(&self, readme: &Readme) -> String {
        serde_json::to_string(readme).unwrap_or_else(|_| "{}".to_string())
    }

    fn resolved(&self, name: &str, path: &ResolvedPath, full_path: &Path) -> String {
        serde_json::json!({
            "name": name,
            "directory": path.directory,
            "filename": path.filename,
            "path": full_path.display().to_string(),
            "document": path.document_file_name(),
        })
        .to_string()
    }

    fn error(&self, err: &ReadmeError) -> String {
        serde_json::json!({
            "event": "error",
            "kind": err.kind(),
            "summary": err.summary(),
            "detail": err.detail(),
        })
        .to_string()
    }
}
