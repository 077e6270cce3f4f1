//! Pack manifest templating.
//! Renders the behavior and resource pack manifests from placeholder
//! templates stored in the hidden project directory, generating fresh
//! identifiers for release builds and persisting stable identifiers for dev
//! builds.

use crate::error::{Error, Result};
use crate::identifier::new_identifier;
use crate::version::ReleaseVersion;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Template file names inside the manifest template directory.
pub const DEV_BP_TEMPLATE_FILE: &str = "dev-bp.json";
pub const DEV_RP_TEMPLATE_FILE: &str = "dev-rp.json";
pub const RELEASE_BP_TEMPLATE_FILE: &str = "release-bp.json";
pub const RELEASE_RP_TEMPLATE_FILE: &str = "release-rp.json";

/// Built-in behavior pack manifest template.
pub const DEFAULT_BP_TEMPLATE: &str = r#"{
  "format_version": 2,
  "header": {
    "description": "Pack description",
    "name": "Pack name §eBP §6<<<VERSION_HUMAN>>>§r",
    "uuid": "<<<UUID_HEADER>>>",
    "version": [<<<VERSION_SYSTEM>>>],
    "min_engine_version": [1, 21, 0]
  },
  "modules": [
    {
      "description": "Behavior pack",
      "type": "data",
      "uuid": "<<<UUID_MODULE>>>",
      "version": [<<<VERSION_SYSTEM>>>]
    },
    {
      "description": "Scripts",
      "language": "javascript",
      "type": "script",
      "uuid": "<<<UUID_SCRIPT>>>",
      "version": [<<<VERSION_SYSTEM>>>],
      "entry": "scripts/main.js"
    }
  ],
  "dependencies": [
    {
      "uuid": "<<<UUID_RP_HEADER>>>",
      "version": [<<<VERSION_SYSTEM>>>]
    },
    {
      "module_name": "@minecraft/server",
      "version": "1.11.0"
    },
    {
      "module_name": "@minecraft/server-ui",
      "version": "1.1.0"
    }
  ]
}
"#;

/// Built-in resource pack manifest template.
pub const DEFAULT_RP_TEMPLATE: &str = r#"{
  "format_version": 2,
  "header": {
    "description": "Pack description",
    "name": "Pack name §eRP §6<<<VERSION_HUMAN>>>§r",
    "uuid": "<<<UUID_HEADER>>>",
    "version": [<<<VERSION_SYSTEM>>>],
    "min_engine_version": [1, 21, 0]
  },
  "modules": [
    {
      "description": "Resource pack",
      "type": "resources",
      "uuid": "<<<UUID_MODULE>>>",
      "version": [<<<VERSION_SYSTEM>>>]
    }
  ]
}
"#;

/// Version placeholder values of a dev build.
const DEV_VERSION_SYSTEM: &str = "1,0,0";
const DEV_VERSION_HUMAN: &str = "DEV";

/// A rendered pair of pack manifests.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSet {
    pub behavior_pack: String,
    pub resource_pack: String,
}

/// Applies a substitution map to a template in a single pass.
///
/// Every occurrence of every key is replaced. Any `<<<`/`>>>` marker left in
/// the output afterwards means an unrecognized placeholder and is an error.
pub fn render_template(template: &str, substitutions: &[(&str, &str)]) -> Result<String> {
    let mut rendered = template.to_string();
    for (token, value) in substitutions {
        rendered = rendered.replace(token, value);
    }

    if let Some(pos) = rendered.find("<<<").or_else(|| rendered.find(">>>")) {
        let tail: String = rendered[pos..].chars().take(32).collect();
        return Err(Error::Template(format!(
            "unrecognized placeholder left in rendered manifest near '{}'",
            tail
        )));
    }

    Ok(rendered)
}

fn read_template_or_default(path: &Path, default: &str) -> Result<String> {
    if path.exists() {
        Ok(fs::read_to_string(path)?)
    } else {
        warn!(
            "Manifest template {} is missing, falling back to the built-in default",
            path.display()
        );
        Ok(default.to_string())
    }
}

/// Creates any missing manifest template file.
///
/// Release templates are saved with their placeholders intact and are
/// re-rendered with fresh identifiers on every release build. Dev templates
/// are saved fully rendered, so a dev pack keeps the same identity across
/// builds; the resource pack header identifier is shared with the behavior
/// pack's dependency entry.
pub fn ensure_template_files<P: AsRef<Path>>(templates_dir: P) -> Result<()> {
    let templates_dir = templates_dir.as_ref();
    fs::create_dir_all(templates_dir)?;

    let dev_bp_path = templates_dir.join(DEV_BP_TEMPLATE_FILE);
    let dev_rp_path = templates_dir.join(DEV_RP_TEMPLATE_FILE);

    if !dev_bp_path.exists() || !dev_rp_path.exists() {
        let uuid_bp_header = new_identifier();
        let uuid_bp_module = new_identifier();
        let uuid_bp_script = new_identifier();
        let uuid_rp_header = new_identifier();
        let uuid_rp_module = new_identifier();

        let dev_bp = render_template(
            DEFAULT_BP_TEMPLATE,
            &[
                ("<<<UUID_HEADER>>>", uuid_bp_header.as_str()),
                ("<<<UUID_MODULE>>>", uuid_bp_module.as_str()),
                ("<<<UUID_SCRIPT>>>", uuid_bp_script.as_str()),
                ("<<<UUID_RP_HEADER>>>", uuid_rp_header.as_str()),
                ("<<<VERSION_SYSTEM>>>", DEV_VERSION_SYSTEM),
                ("<<<VERSION_HUMAN>>>", DEV_VERSION_HUMAN),
            ],
        )?;

        let dev_rp = render_template(
            DEFAULT_RP_TEMPLATE,
            &[
                ("<<<UUID_HEADER>>>", uuid_rp_header.as_str()),
                ("<<<UUID_MODULE>>>", uuid_rp_module.as_str()),
                ("<<<VERSION_SYSTEM>>>", DEV_VERSION_SYSTEM),
                ("<<<VERSION_HUMAN>>>", DEV_VERSION_HUMAN),
            ],
        )?;

        if !dev_bp_path.exists() {
            fs::write(&dev_bp_path, dev_bp)?;
            info!("Saved DEV behavior pack manifest template at {}", dev_bp_path.display());
        }

        if !dev_rp_path.exists() {
            fs::write(&dev_rp_path, dev_rp)?;
            info!("Saved DEV resource pack manifest template at {}", dev_rp_path.display());
        }
    }

    let release_bp_path = templates_dir.join(RELEASE_BP_TEMPLATE_FILE);
    if !release_bp_path.exists() {
        fs::write(&release_bp_path, DEFAULT_BP_TEMPLATE)?;
        info!(
            "Saved RELEASE behavior pack manifest template at {}",
            release_bp_path.display()
        );
    }

    let release_rp_path = templates_dir.join(RELEASE_RP_TEMPLATE_FILE);
    if !release_rp_path.exists() {
        fs::write(&release_rp_path, DEFAULT_RP_TEMPLATE)?;
        info!(
            "Saved RELEASE resource pack manifest template at {}",
            release_rp_path.display()
        );
    }

    Ok(())
}

/// Renders the dev manifest pair.
///
/// Identifiers come from the persisted dev templates, so they stay stable
/// across dev builds; a missing dev template is regenerated and persisted by
/// the ensure pass before reading. Version placeholders a user may have
/// reintroduced are filled with the fixed dev values (`1,0,0` / `DEV`).
pub fn render_dev<P: AsRef<Path>>(templates_dir: P) -> Result<ManifestSet> {
    let templates_dir = templates_dir.as_ref();
    ensure_template_files(templates_dir)?;

    let dev_substitutions = [
        ("<<<VERSION_SYSTEM>>>", DEV_VERSION_SYSTEM),
        ("<<<VERSION_HUMAN>>>", DEV_VERSION_HUMAN),
    ];

    let bp_template = fs::read_to_string(templates_dir.join(DEV_BP_TEMPLATE_FILE))?;
    let rp_template = fs::read_to_string(templates_dir.join(DEV_RP_TEMPLATE_FILE))?;

    Ok(ManifestSet {
        behavior_pack: render_template(&bp_template, &dev_substitutions)?,
        resource_pack: render_template(&rp_template, &dev_substitutions)?,
    })
}

/// Renders the release manifest pair for a tagged version.
///
/// Every identifier is freshly generated on every call; the resource pack
/// header identifier is embedded as the behavior pack's dependency entry.
/// A release template file that is absent falls back to the built-in
/// default with a warning; the files themselves are seeded by the ensure
/// pass, not here.
pub fn render_release<P: AsRef<Path>>(
    templates_dir: P,
    version: &ReleaseVersion,
) -> Result<ManifestSet> {
    let templates_dir = templates_dir.as_ref();

    let uuid_bp_header = new_identifier();
    let uuid_bp_module = new_identifier();
    let uuid_bp_script = new_identifier();
    let uuid_rp_header = new_identifier();
    let uuid_rp_module = new_identifier();

    let version_system = version.to_system_string();
    let version_human = version.to_string();

    let bp_template = read_template_or_default(
        &templates_dir.join(RELEASE_BP_TEMPLATE_FILE),
        DEFAULT_BP_TEMPLATE,
    )?;
    let rp_template = read_template_or_default(
        &templates_dir.join(RELEASE_RP_TEMPLATE_FILE),
        DEFAULT_RP_TEMPLATE,
    )?;

    let behavior_pack = render_template(
        &bp_template,
        &[
            ("<<<UUID_HEADER>>>", uuid_bp_header.as_str()),
            ("<<<UUID_MODULE>>>", uuid_bp_module.as_str()),
            ("<<<UUID_SCRIPT>>>", uuid_bp_script.as_str()),
            ("<<<UUID_RP_HEADER>>>", uuid_rp_header.as_str()),
            ("<<<VERSION_SYSTEM>>>", version_system.as_str()),
            ("<<<VERSION_HUMAN>>>", version_human.as_str()),
        ],
    )?;

    let resource_pack = render_template(
        &rp_template,
        &[
            ("<<<UUID_HEADER>>>", uuid_rp_header.as_str()),
            ("<<<UUID_MODULE>>>", uuid_rp_module.as_str()),
            ("<<<VERSION_SYSTEM>>>", version_system.as_str()),
            ("<<<VERSION_HUMAN>>>", version_human.as_str()),
        ],
    )?;

    Ok(ManifestSet { behavior_pack, resource_pack })
}
