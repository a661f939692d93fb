//! Manager settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use super::instance::InstanceId;

/// Prefix of the environment variables read by [`Settings::from_env`]
pub const ENV_PREFIX: &str = "INSTANCE_MANAGER_";

/// Manager settings, passed explicitly to the lifecycle manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Paths
    /// Installation cloned for every new instance
    pub template_dir: PathBuf,
    /// Parent of all `instance_<id>` folders
    pub instances_dir: PathBuf,
    /// Where the registry file lives
    pub state_dir: PathBuf,

    // Managed application
    /// Substring matched against process names
    pub app_name: String,
    /// Executable file name inside an instance folder
    pub executable_name: String,

    // Server
    /// Interface the HTTP endpoint binds to
    pub bind_host: String,
    /// First port tried by the allocator
    pub start_port: u16,
    /// Number of consecutive ports tried
    pub port_attempts: u16,
    /// Open the UI in a browser once the server is up
    pub open_browser: bool,

    // Lifecycle
    /// Grace period between terminate and force-kill
    pub stop_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            // Paths
            template_dir: data_dir.join("Telegram Desktop"),
            instances_dir: data_dir.join("Telegram_Instances"),
            state_dir: data_dir.join("InstanceManager"),

            // Managed application
            app_name: "telegram".to_string(),
            executable_name: default_executable_name().to_string(),

            // Server
            bind_host: "127.0.0.1".to_string(),
            start_port: 8080,
            port_attempts: 100,
            open_browser: true,

            // Lifecycle
            stop_timeout_secs: 5,
        }
    }
}

fn default_executable_name() -> &'static str {
    if cfg!(windows) {
        "Telegram.exe"
    } else {
        "Telegram"
    }
}

impl Settings {
    /// Load settings from `INSTANCE_MANAGER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load settings from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings: Settings = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .with_context(|| format!("invalid {}* environment variables", ENV_PREFIX))?;
        settings.validate();
        Ok(settings)
    }

    /// Registry file path
    pub fn registry_path(&self) -> PathBuf {
        self.state_dir.join("instances.json")
    }

    /// Folder assigned to the instance with the given id
    pub fn instance_folder(&self, id: InstanceId) -> PathBuf {
        self.instances_dir.join(format!("instance_{}", id))
    }

    /// Executable expected inside an instance folder
    pub fn executable_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.executable_name)
    }

    pub fn stop_timeout(&self) -> Duration {
        Duration::from_secs(self.stop_timeout_secs)
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.port_attempts = self.port_attempts.max(1);
        self.stop_timeout_secs = self.stop_timeout_secs.max(1);
        self.app_name = self.app_name.trim().to_string();
    }
}
