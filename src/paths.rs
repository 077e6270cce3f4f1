//! Project path layout.
//! Every location the pipeline touches is derived once from the project root
//! and the loaded configuration.

use crate::config::Config;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Hidden project directory holding config and manifest templates.
pub const PROJECT_DIR: &str = ".packsmith";

/// Manifest template directory name inside the project directory.
pub const TEMPLATES_DIR: &str = "manifest_templates";

/// Scratch workspace directory name inside the project root.
pub const SCRATCH_DIR: &str = "temp";

/// Resolved filesystem layout for one build invocation.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Project root the build runs in
    pub root: PathBuf,
    /// Hidden project directory (`.packsmith`)
    pub project_dir: PathBuf,
    /// Manifest template directory
    pub templates_dir: PathBuf,
    /// Scratch workspace root, cleared at build start
    pub scratch_dir: PathBuf,
    /// Behavior pack staging dir inside the scratch workspace
    pub scratch_bp_dir: PathBuf,
    /// `scripts` subdirectory of the staged behavior pack
    pub scratch_bp_scripts_dir: PathBuf,
    /// Resource pack staging dir inside the scratch workspace
    pub scratch_rp_dir: PathBuf,
    /// Compiler output directory inside the scratch workspace
    pub scratch_compiled_dir: PathBuf,
    /// Behavior pack source tree
    pub src_bp_dir: PathBuf,
    /// Resource pack source tree
    pub src_rp_dir: PathBuf,
    /// Published behavior pack location under the output directory
    pub out_bp_dir: PathBuf,
    /// Published resource pack location under the output directory
    pub out_rp_dir: PathBuf,
    /// Behavior pack target inside the local Minecraft installation
    pub mc_bp_dir: PathBuf,
    /// Resource pack target inside the local Minecraft installation
    pub mc_rp_dir: PathBuf,
}

impl ProjectPaths {
    /// Resolves the full layout and ensures the hidden project directory
    /// exists (including its `.gitignore` shielding the log directory).
    pub fn new<P: AsRef<Path>>(project_root: P, config: &Config) -> Result<Self> {
        let root = project_root.as_ref().to_path_buf();
        let project_dir = root.join(PROJECT_DIR);
        let templates_dir = project_dir.join(TEMPLATES_DIR);
        let scratch_dir = root.join(SCRATCH_DIR);

        let scratch_bp_dir = scratch_dir.join(&config.behavior_pack_dir);
        let scratch_rp_dir = scratch_dir.join(&config.resource_pack_dir);
        let output_dir = root.join(&config.output_dir);
        let com_mojang = PathBuf::from(&config.com_mojang_dir);

        let paths = Self {
            scratch_bp_scripts_dir: scratch_bp_dir.join("scripts"),
            scratch_compiled_dir: scratch_dir
                .join(format!("{}_scripts", config.behavior_pack_dir)),
            src_bp_dir: root.join(&config.behavior_pack_dir),
            src_rp_dir: root.join(&config.resource_pack_dir),
            out_bp_dir: output_dir.join(&config.behavior_pack_dir),
            out_rp_dir: output_dir.join(&config.resource_pack_dir),
            mc_bp_dir: com_mojang
                .join("development_behavior_packs")
                .join(&config.behavior_pack_dir),
            mc_rp_dir: com_mojang
                .join("development_resource_packs")
                .join(&config.resource_pack_dir),
            root,
            project_dir,
            templates_dir,
            scratch_dir,
            scratch_bp_dir,
            scratch_rp_dir,
        };

        fs::create_dir_all(&paths.templates_dir)?;

        let gitignore = paths.project_dir.join(".gitignore");
        if !gitignore.exists() {
            fs::write(&gitignore, "logs/\n")?;
        }

        Ok(paths)
    }
}
