//! Command handlers for the `images-readme` binary

mod read;
mod resolve;
mod template;

pub use read::cmd_read;
pub use resolve::cmd_resolve;
pub use template::cmd_template;
