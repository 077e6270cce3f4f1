#![cfg(unix)]

use packsmith::build::{run_build, BuildMode, BuildOptions};
use packsmith::config::Config;
use packsmith::error::Error;
use packsmith::paths::ProjectPaths;
use packsmith::toolchain::Toolchain;
use packsmith::version::{ReleaseStage, ReleaseVersion};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Writes an executable stub script and returns its path.
fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// A compiler stub that accepts `--noEmit false --outDir <dir>` and emits a
/// single compiled script.
fn working_compiler(dir: &Path) -> PathBuf {
    write_stub(dir, "fake-tsc", r#"mkdir -p "$4" && echo "export {};" > "$4/main.js""#)
}

struct TestProject {
    _temp: TempDir,
    root: PathBuf,
    config: Config,
    paths: ProjectPaths,
}

fn setup_project() -> TestProject {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(&root).unwrap();

    let config = Config::default_for_name("proj");

    write_file(&root.join("proj_BP/blocks/stone.json"), "{}");
    write_file(&root.join("proj_BP/node_modules/pkg/index.js"), "skip me");
    write_file(&root.join("proj_RP/textures/art.png"), "png");
    write_file(&root.join("proj_RP/textures/art.psd"), "psd");

    let paths = ProjectPaths::new(&root, &config).unwrap();

    TestProject { _temp: temp, root, config, paths }
}

fn dev_options(config: &Config, bundle_scripts: bool) -> BuildOptions {
    BuildOptions::from_config(config, bundle_scripts, false, false)
}

#[test]
fn test_dev_build_publishes_filtered_packs() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    let toolchain = Toolchain {
        compiler: working_compiler(&tools_dir).display().to_string(),
        bundler: "unused".to_string(),
    };

    let options = dev_options(&project.config, false);
    run_build(&project.paths, &options, &toolchain, &BuildMode::Dev).unwrap();

    // Published packs carry the staged sources, minus ignored entries
    let out_bp = &project.paths.out_bp_dir;
    assert!(out_bp.join("blocks/stone.json").exists());
    assert!(!out_bp.join("node_modules").exists());

    let out_rp = &project.paths.out_rp_dir;
    assert!(out_rp.join("textures/art.png").exists());
    assert!(!out_rp.join("textures/art.psd").exists());

    // Compiled scripts were copied verbatim (bundling disabled)
    assert!(out_bp.join("scripts/main.js").exists());

    // Manifests were rendered and written
    let bp_manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_bp.join("manifest.json")).unwrap()).unwrap();
    let rp_manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_rp.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(bp_manifest["dependencies"][0]["uuid"], rp_manifest["header"]["uuid"]);

    // Scratch workspace is gone after a successful build
    assert!(!project.paths.scratch_dir.exists());
}

#[test]
fn test_failed_compilation_aborts_and_cleans_up() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    let failing = write_stub(&tools_dir, "failing-tsc", r#"echo "syntax error"; exit 2"#);
    let toolchain = Toolchain {
        compiler: failing.display().to_string(),
        bundler: "unused".to_string(),
    };

    let options = dev_options(&project.config, false);
    let result = run_build(&project.paths, &options, &toolchain, &BuildMode::Dev);

    match result {
        Err(Error::Compilation { output }) => assert!(output.contains("syntax error")),
        other => panic!("Expected Compilation error, got {:?}", other),
    }

    assert!(!project.paths.scratch_dir.exists());
    assert!(!project.paths.out_bp_dir.exists());
}

#[test]
fn test_failed_bundling_aborts_and_cleans_up() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    let toolchain = Toolchain {
        compiler: working_compiler(&tools_dir).display().to_string(),
        bundler: write_stub(&tools_dir, "failing-esbuild", r#"echo "bundle boom"; exit 1"#)
            .display()
            .to_string(),
    };

    let options = dev_options(&project.config, true);
    let result = run_build(&project.paths, &options, &toolchain, &BuildMode::Dev);

    match result {
        Err(Error::Bundling { output }) => assert!(output.contains("bundle boom")),
        other => panic!("Expected Bundling error, got {:?}", other),
    }

    assert!(!project.paths.scratch_dir.exists());
}

#[test]
fn test_bundler_receives_entry_and_outfile() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    // Stub bundler writes its outfile argument like esbuild would
    let bundler = write_stub(
        &tools_dir,
        "fake-esbuild",
        r#"for arg in "$@"; do
  case "$arg" in
    --outfile=*)
      out="${arg#--outfile=}"
      mkdir -p "$(dirname "$out")"
      echo "bundled" > "$out"
      ;;
  esac
done"#,
    );

    let toolchain = Toolchain {
        compiler: working_compiler(&tools_dir).display().to_string(),
        bundler: bundler.display().to_string(),
    };

    let options = dev_options(&project.config, true);
    run_build(&project.paths, &options, &toolchain, &BuildMode::Dev).unwrap();

    let bundle = project.paths.out_bp_dir.join("scripts/main.js");
    assert_eq!(fs::read_to_string(bundle).unwrap().trim(), "bundled");
}

#[test]
fn test_release_build_writes_versioned_manifest() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    let toolchain = Toolchain {
        compiler: working_compiler(&tools_dir).display().to_string(),
        bundler: "unused".to_string(),
    };

    let version = ReleaseVersion::new(1, 2, 3, ReleaseStage::Beta, 2);
    let options = dev_options(&project.config, false);
    run_build(&project.paths, &options, &toolchain, &BuildMode::Release(version)).unwrap();

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(project.paths.out_bp_dir.join("manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["header"]["version"], serde_json::json!([1, 2, 3]));
    assert!(manifest["header"]["name"].as_str().unwrap().contains("1.2.3-beta2"));
}

#[test]
fn test_missing_pack_source_aborts_before_compiling() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(&root).unwrap();

    let config = Config::default_for_name("proj");
    let paths = ProjectPaths::new(&root, &config).unwrap();

    let toolchain = Toolchain::default();
    let options = dev_options(&config, false);
    let result = run_build(&paths, &options, &toolchain, &BuildMode::Dev);

    assert!(matches!(result, Err(Error::Config(_))));
    assert!(!paths.scratch_dir.exists());
}

#[test]
fn test_copy_to_mc_publishes_into_development_packs() {
    let project = setup_project();
    let tools_dir = project.root.join("tools");
    fs::create_dir_all(&tools_dir).unwrap();

    // Point com.mojang at a temp location
    let mut config = project.config.clone();
    config.com_mojang_dir = project.root.join("com.mojang").display().to_string();
    let paths = ProjectPaths::new(&project.root, &config).unwrap();

    let toolchain = Toolchain {
        compiler: working_compiler(&tools_dir).display().to_string(),
        bundler: "unused".to_string(),
    };

    let options = BuildOptions::from_config(&config, false, false, true);
    run_build(&paths, &options, &toolchain, &BuildMode::Dev).unwrap();

    assert!(paths
        .mc_bp_dir
        .join("manifest.json")
        .exists());
    assert!(paths
        .mc_rp_dir
        .join("textures/art.png")
        .exists());
}
