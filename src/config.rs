//! Project configuration handling.
//! Loads the per-project config file from the hidden project directory,
//! synthesizing and persisting a default derived from the working directory
//! name when none exists.

use crate::error::{Error, Result};
use crate::paths;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file name inside the hidden project directory.
pub const CONFIG_FILE: &str = "config.json";

/// Per-project build configuration.
///
/// Loaded once per invocation and passed by reference into the orchestrator
/// and its collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Full addon name used in log output
    pub addon_name: String,
    /// Behavior pack directory name, both in sources and in published output
    pub behavior_pack_dir: String,
    /// Resource pack directory name
    pub resource_pack_dir: String,
    /// Path to the local Minecraft `com.mojang` directory
    pub com_mojang_dir: String,
    /// Directory that receives the published packs
    pub output_dir: String,
    /// Module name prefixes resolved externally by the bundler
    pub external_modules: Vec<String>,
    /// Entry point script file name, without extension
    pub entry_script_name: String,
    /// Glob patterns excluded when staging pack sources
    pub ignore_patterns: Vec<String>,
    /// Minify the bundle when bundling is enabled
    pub minify_bundle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_for_name("addon")
    }
}

impl Config {
    /// Builds the default configuration for a project directory name.
    ///
    /// Pack directory names take the first five characters of the project
    /// name as their prefix.
    pub fn default_for_name(project_name: &str) -> Self {
        let prefix: String = project_name.chars().take(5).collect();
        Self {
            addon_name: project_name.to_string(),
            behavior_pack_dir: format!("{}_BP", prefix),
            resource_pack_dir: format!("{}_RP", prefix),
            com_mojang_dir: default_com_mojang_dir(),
            output_dir: "dist".to_string(),
            external_modules: vec!["@minecraft".to_string()],
            entry_script_name: "main".to_string(),
            ignore_patterns: [
                "**/.git",
                "**/.gitignore",
                "**/.gitkeep",
                "**/node_modules",
                "**/*.bbmodel",
                "**/*.psd",
                "**/*.gif",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            minify_bundle: false,
        }
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        fs::write(config_path, json + "\n")?;
        Ok(())
    }
}

/// Default `com.mojang` location of the UWP Minecraft client.
fn default_com_mojang_dir() -> String {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .unwrap_or_default();
    Path::new(&home)
        .join("AppData")
        .join("Local")
        .join("Packages")
        .join("Microsoft.MinecraftUWP_8wekyb3d8bbwe")
        .join("LocalState")
        .join("games")
        .join("com.mojang")
        .display()
        .to_string()
}

/// Loads the project configuration, creating a default one when absent.
///
/// # Arguments
/// * `project_root` - Project directory containing the hidden project dir
///
/// # Returns
/// * `Result<Config>` - The loaded or newly synthesized configuration
///
/// # Notes
/// - A missing config file is non-fatal: the default, derived from the
///   project directory name, is written to disk and returned
/// - An unreadable or unparsable config file is a `Error::Config`
pub fn load_config<P: AsRef<Path>>(project_root: P) -> Result<Config> {
    let project_root = project_root.as_ref();
    let config_path = project_root.join(paths::PROJECT_DIR).join(CONFIG_FILE);

    if !config_path.exists() {
        let name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "addon".to_string());
        let config = Config::default_for_name(&name);

        warn!(
            "Config file does not exist at {}. Using default options.",
            config_path.display()
        );
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        config.save(&config_path)?;

        return Ok(config);
    }

    let contents = fs::read_to_string(&config_path)?;
    let config: Config = serde_json::from_str(&contents)
        .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;

    info!("Loaded config file at {}", config_path.display());

    Ok(config)
}
