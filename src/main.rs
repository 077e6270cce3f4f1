//! packsmith's main application entry point.
//! Parses command-line arguments, loads the project configuration, and runs
//! the build orchestrator in dev or release mode.

use packsmith::{
    build::{run_build, BuildMode, BuildOptions},
    cli::{get_args, Args, Command},
    config::load_config,
    error::{default_error_handler, Result},
    paths::ProjectPaths,
    toolchain::Toolchain,
    version::ReleaseVersion,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads (or synthesizes) the project configuration
/// 2. Resolves the project path layout
/// 3. Merges config and command-line flags into build options
/// 4. Runs the build pipeline in the requested mode
fn run(args: Args) -> Result<()> {
    let root = std::env::current_dir()?;
    let config = load_config(&root)?;
    let paths = ProjectPaths::new(&root, &config)?;
    let toolchain = Toolchain::default();

    let (options, mode) = match args.command {
        Command::Dev { bundle_scripts, minify_bundle, copy_to_mc } => (
            BuildOptions::from_config(&config, bundle_scripts, minify_bundle, copy_to_mc),
            BuildMode::Dev,
        ),
        Command::Release {
            release_version,
            release_stage,
            release_iteration,
            bundle_scripts,
            minify_bundle,
            copy_to_mc,
        } => {
            let version = ReleaseVersion::new(
                release_version[0],
                release_version[1],
                release_version[2],
                release_stage,
                release_iteration,
            );
            log::info!("Building release version {}", version);
            (
                BuildOptions::from_config(&config, bundle_scripts, minify_bundle, copy_to_mc),
                BuildMode::Release(version),
            )
        }
    };

    run_build(&paths, &options, &toolchain, &mode)
}
