//! HCL Descriptor Repository
//!
//! Reads `README*.hcl` files through the FileSystem port and decodes them
//! with `hcl-rs`.
//!
//! Attribute expressions are evaluated against an empty context, so a
//! reference to any variable or function is a decode error. Numbers and
//! bools convert to their string form; every other value type is rejected.

use std::path::Path;

use hcl::eval::{Context, Evaluate};
use hcl::{Structure, Value};

use crate::domain::entities::Descriptor;
use crate::domain::ports::{DescriptorRepository, FileSystem};
use crate::error::{ReadmeError, ReadmeResult};

/// Descriptor repository backed by HCL files
pub struct HclDescriptorRepository<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> HclDescriptorRepository<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Decode descriptor content that has already been read
    pub fn decode(path: &Path, content: &str) -> ReadmeResult<Descriptor> {
        let malformed = |message: String| ReadmeError::Malformed {
            path: path.to_path_buf(),
            message,
        };

        let body = hcl::parse(content).map_err(|e| malformed(e.to_string()))?;
        let ctx = Context::new();
        let mut fields = serde_json::Map::new();

        for structure in body {
            let attr = match structure {
                Structure::Attribute(attr) => attr,
                Structure::Block(block) => {
                    return Err(malformed(format!(
                        "unexpected block `{}`",
                        block.identifier()
                    )));
                }
            };

            let value = attr
                .expr
                .evaluate(&ctx)
                .map_err(|e| malformed(e.to_string()))?;
            let text = string_value(attr.key(), value).map_err(malformed)?;

            if fields
                .insert(attr.key().to_string(), serde_json::Value::String(text))
                .is_some()
            {
                return Err(malformed(format!("attribute `{}` redefined", attr.key())));
            }
        }

        serde_json::from_value(serde_json::Value::Object(fields)).map_err(|e| malformed(e.to_string()))
    }
}

fn string_value(key: &str, value: Value) -> Result<String, String> {
    let found = match value {
        Value::String(text) => return Ok(text),
        Value::Number(number) => return Ok(number.to_string()),
        Value::Bool(flag) => return Ok(flag.to_string()),
        Value::Null => "null",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    };
    Err(format!("attribute `{}`: expected a string, found {}", key, found))
}

impl<FS: FileSystem> DescriptorRepository for HclDescriptorRepository<FS> {
    fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    fn load(&self, path: &Path) -> ReadmeResult<Descriptor> {
        let content = self.fs.read(path).map_err(|e| ReadmeError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let descriptor = Self::decode(path, &content)?;
        tracing::trace!(path = %path.display(), "decoded descriptor");
        Ok(descriptor)
    }
}
