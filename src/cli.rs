//! Command-line interface implementation for packsmith.
//! Provides argument parsing and help text formatting using clap.

use crate::version::ReleaseStage;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::str::FromStr;

/// Command-line arguments structure for packsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "packsmith: build pipeline for Minecraft Bedrock addons", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build packs in dev mode
    Dev {
        /// Bundle scripts into a single file
        #[arg(long)]
        bundle_scripts: bool,

        /// Minify scripts when --bundle-scripts is set
        #[arg(long)]
        minify_bundle: bool,

        /// Copy the built packs to the local Minecraft installation
        #[arg(long)]
        copy_to_mc: bool,
    },

    /// Build packs in release mode
    Release {
        /// Release version as three numbers: MAJOR MINOR PATCH
        #[arg(long, required = true, num_args = 3, value_names = ["MAJOR", "MINOR", "PATCH"])]
        release_version: Vec<u32>,

        /// Release stage of the addon: prealpha, alpha, beta, rc or stable
        #[arg(long, value_name = "STAGE", value_parser = ReleaseStage::from_str)]
        release_stage: ReleaseStage,

        /// Iteration index of the release
        #[arg(long, default_value_t = 1)]
        release_iteration: u32,

        /// Bundle scripts into a single file
        #[arg(long)]
        bundle_scripts: bool,

        /// Minify scripts when --bundle-scripts is set
        #[arg(long)]
        minify_bundle: bool,

        /// Copy the built packs to the local Minecraft installation
        #[arg(long)]
        copy_to_mc: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
