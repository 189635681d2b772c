//! Repository Implementations
//!
//! Concrete implementations of the repository ports.

mod hcl_descriptor;

pub use hcl_descriptor::HclDescriptorRepository;
