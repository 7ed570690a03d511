use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ymx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YmxConfig {
    /// Base URL of the extraction backend.
    pub backend_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Optional overall request timeout in seconds. Extraction jobs can run
    /// for minutes; None leaves them bounded only by the backend itself.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Seconds to wait before deleting a remote artifact in `save --delete`.
    pub delete_delay_secs: u64,
}

impl Default for YmxConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: None,
            delete_delay_secs: 10,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ymx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Path of the control socket a running session listens on.
pub fn control_socket_path() -> Result<PathBuf> {
    let dir = xdg::BaseDirectories::with_prefix("ymx")?.get_state_home();
    Ok(dir.join("control.sock"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YmxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YmxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: YmxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
