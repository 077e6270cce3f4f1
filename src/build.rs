//! Build orchestration.
//! Drives the whole pipeline in strict sequence: stage pack sources into the
//! scratch workspace, compile scripts, bundle or copy the compiled output,
//! render and write manifests, then publish the finished packs. The scratch
//! workspace is removed on every exit path.

use crate::config::Config;
use crate::copy::{copy_dir, copy_dir_filtered};
use crate::error::{Error, Result};
use crate::ignore::build_ignore_set;
use crate::manifest::{self, ManifestSet};
use crate::paths::ProjectPaths;
use crate::toolchain::Toolchain;
use crate::version::ReleaseVersion;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Options of one build invocation, merged from the project config and the
/// command-line flags. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub bundle_scripts: bool,
    pub minify_bundle: bool,
    pub copy_to_output: bool,
    pub copy_to_mc: bool,
    pub external_modules: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub entry_script_name: String,
}

impl BuildOptions {
    /// Merges config defaults with command-line overrides. The minify flag
    /// is an OR: either the config or the flag can turn it on.
    pub fn from_config(
        config: &Config,
        bundle_scripts: bool,
        minify_bundle: bool,
        copy_to_mc: bool,
    ) -> Self {
        Self {
            bundle_scripts,
            minify_bundle: minify_bundle || config.minify_bundle,
            copy_to_output: true,
            copy_to_mc,
            external_modules: config.external_modules.clone(),
            ignore_patterns: config.ignore_patterns.clone(),
            entry_script_name: config.entry_script_name.clone(),
        }
    }
}

/// Build flavor: dev builds keep a persisted pack identity and a fixed
/// version label, release builds are tagged with an explicit version.
#[derive(Debug, Clone)]
pub enum BuildMode {
    Dev,
    Release(ReleaseVersion),
}

impl BuildMode {
    fn label(&self) -> String {
        match self {
            BuildMode::Dev => "DEV".to_string(),
            BuildMode::Release(version) => format!("RELEASE {}", version),
        }
    }
}

/// Scratch workspace guard.
///
/// Creation clears any stale tree and recreates the root; dropping the guard
/// removes the tree again, so cleanup runs on success and on every error
/// path.
struct ScratchWorkspace {
    root: PathBuf,
}

impl ScratchWorkspace {
    fn create(root: &Path) -> Result<Self> {
        if root.exists() {
            fs::remove_dir_all(root)?;
        }
        fs::create_dir_all(root)?;
        Ok(Self { root: root.to_path_buf() })
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        if self.root.exists() {
            if let Err(e) = fs::remove_dir_all(&self.root) {
                warn!(
                    "Failed to remove scratch workspace {}: {}",
                    self.root.display(),
                    e
                );
            }
        }
    }
}

fn validate_sources(paths: &ProjectPaths) -> Result<()> {
    for (dir, what) in [
        (&paths.src_bp_dir, "behavior pack"),
        (&paths.src_rp_dir, "resource pack"),
    ] {
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "{} source directory {} does not exist",
                what,
                dir.display()
            )));
        }
    }
    Ok(())
}

/// Removes any previous copy of a published pack, then mirrors the staged
/// pack into place. The staged tree is already filtered, so no ignore
/// patterns apply here.
fn publish_pack(staged: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    copy_dir(staged, dest)
}

fn write_manifests(paths: &ProjectPaths, manifests: &ManifestSet) -> Result<()> {
    fs::write(paths.scratch_bp_dir.join("manifest.json"), &manifests.behavior_pack)?;
    fs::write(paths.scratch_rp_dir.join("manifest.json"), &manifests.resource_pack)?;
    Ok(())
}

/// Runs one full build.
///
/// The pipeline is strictly sequential; the first failing step aborts the
/// build and the scratch workspace is removed regardless of the outcome.
pub fn run_build(
    paths: &ProjectPaths,
    options: &BuildOptions,
    toolchain: &Toolchain,
    mode: &BuildMode,
) -> Result<()> {
    warn!("Build started... ({})", mode.label());

    let ignore_set = build_ignore_set(&options.ignore_patterns)?;
    validate_sources(paths)?;

    let _scratch = ScratchWorkspace::create(&paths.scratch_dir)?;

    // Stage pack sources
    fs::create_dir_all(&paths.scratch_bp_dir)?;
    copy_dir_filtered(&paths.src_bp_dir, &paths.scratch_bp_dir, &ignore_set)?;
    fs::create_dir_all(&paths.scratch_rp_dir)?;
    copy_dir_filtered(&paths.src_rp_dir, &paths.scratch_rp_dir, &ignore_set)?;

    toolchain.compile_scripts(&paths.root, &paths.scratch_compiled_dir)?;

    let entry_file = format!("{}.js", options.entry_script_name);
    if options.bundle_scripts {
        toolchain.bundle_scripts(
            &paths.root,
            &paths.scratch_compiled_dir.join(&entry_file),
            &paths.scratch_bp_scripts_dir.join(&entry_file),
            &options.external_modules,
            options.minify_bundle,
        )?;
    } else {
        info!("Copying compiled scripts...");
        copy_dir(&paths.scratch_compiled_dir, &paths.scratch_bp_scripts_dir)?;
    }

    info!("Generating manifests...");
    let manifests = match mode {
        BuildMode::Dev => manifest::render_dev(&paths.templates_dir)?,
        BuildMode::Release(version) => manifest::render_release(&paths.templates_dir, version)?,
    };
    write_manifests(paths, &manifests)?;

    if options.copy_to_output {
        info!("Copying packs to the output directory...");
        publish_pack(&paths.scratch_bp_dir, &paths.out_bp_dir)?;
        publish_pack(&paths.scratch_rp_dir, &paths.out_rp_dir)?;
    }

    if options.copy_to_mc {
        info!("Copying packs to the local Minecraft installation...");
        publish_pack(&paths.scratch_bp_dir, &paths.mc_bp_dir)?;
        publish_pack(&paths.scratch_rp_dir, &paths.mc_rp_dir)?;
    }

    info!("Build finished!");
    Ok(())
}
