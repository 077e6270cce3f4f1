//! External compiler and bundler invocation.
//! The TypeScript compiler and the esbuild bundler are consumed as opaque
//! command-line tools; each invocation fully drains the subprocess output
//! before resolving.

use crate::error::{Error, Result};
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Commands used for the external build tools.
///
/// The defaults resolve `tsc` and `esbuild` from `PATH`; tests substitute
/// stub commands here.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub compiler: String,
    pub bundler: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self { compiler: "tsc".to_string(), bundler: "esbuild".to_string() }
    }
}

/// Runs a command, capturing stdout and stderr completely.
///
/// Returns the combined output on success, or the combined output and exit
/// status description on a non-zero exit.
fn run_command(
    program: &str,
    args: &[String],
    cwd: &Path,
) -> std::result::Result<String, String> {
    debug!("Running: {} {}", program, args.join(" "));

    let output = match Command::new(program).args(args).current_dir(cwd).output() {
        Ok(output) => output,
        Err(e) => return Err(format!("failed to start '{}': {}", program, e)),
    };

    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(combined)
    } else {
        Err(format!("Command exited with {}: {}", output.status, combined))
    }
}

impl Toolchain {
    /// Compiles the project's TypeScript sources into `out_dir`.
    ///
    /// # Errors
    /// * `Error::Compilation` with the captured combined output on a
    ///   non-zero exit
    pub fn compile_scripts(&self, project_root: &Path, out_dir: &Path) -> Result<()> {
        info!("Compiling scripts...");

        let args = vec![
            "--noEmit".to_string(),
            "false".to_string(),
            "--outDir".to_string(),
            out_dir.display().to_string(),
        ];

        run_command(&self.compiler, &args, project_root)
            .map(|_| ())
            .map_err(|output| Error::Compilation { output })
    }

    /// Bundles the compiled entry script into a single output file.
    ///
    /// Configured external module prefixes are left unresolved in the bundle.
    ///
    /// # Errors
    /// * `Error::Bundling` with the captured combined output on a non-zero
    ///   exit
    pub fn bundle_scripts(
        &self,
        project_root: &Path,
        entry_script: &Path,
        outfile: &Path,
        external_modules: &[String],
        minify: bool,
    ) -> Result<()> {
        info!("Bundling compiled scripts...");

        let mut args = vec![
            entry_script.display().to_string(),
            "--bundle".to_string(),
            "--format=esm".to_string(),
            format!("--outfile={}", outfile.display()),
        ];
        for module in external_modules {
            args.push(format!("--external:{}", module));
        }
        if minify {
            args.push("--minify".to_string());
        }

        run_command(&self.bundler, &args, project_root)
            .map(|_| ())
            .map_err(|output| Error::Bundling { output })
    }
}
