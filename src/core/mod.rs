//! Core module - Instance registry, lifecycle management and the OS seams it drives

mod error;
mod instance;
mod manager;
pub mod matcher;
pub mod port;
pub mod process;
pub mod provision;
pub mod settings;

pub use error::{ErrorKind, ManagerError};
pub use instance::{InstanceId, InstanceRecord, InstanceView};
pub use manager::{Health, InstanceManager, StartOutcome};
pub use process::StopOutcome;
pub use settings::Settings;
