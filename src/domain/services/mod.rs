//! Domain Services
//!
//! Stateless operations over domain types.

pub mod template;

pub use template::{
    starter_descriptor, synthesize_template, synthetic_image, DEFAULT_REGISTRY,
};
