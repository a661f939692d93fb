//! Persistence layer - The instance registry file

mod registry;

pub use registry::{next_id, InstanceStore};
