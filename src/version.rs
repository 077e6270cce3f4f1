//! Release version handling for tagged builds.
//! A release is a three-component numeric version plus a release stage and
//! an optional iteration index (`1.2.3-beta2`).

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Release stage of a tagged build.
///
/// `stable` is the terminal stage and is omitted from the human-readable
/// version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStage {
    Prealpha,
    Alpha,
    Beta,
    Rc,
    Stable,
}

impl ReleaseStage {
    /// Stage suffix as it appears in the human-readable version string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStage::Prealpha => "prealpha",
            ReleaseStage::Alpha => "alpha",
            ReleaseStage::Beta => "beta",
            ReleaseStage::Rc => "rc",
            ReleaseStage::Stable => "stable",
        }
    }
}

impl FromStr for ReleaseStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prealpha" => Ok(ReleaseStage::Prealpha),
            "alpha" => Ok(ReleaseStage::Alpha),
            "beta" => Ok(ReleaseStage::Beta),
            "rc" => Ok(ReleaseStage::Rc),
            "stable" => Ok(ReleaseStage::Stable),
            other => Err(Error::InvalidReleaseStage(other.to_string())),
        }
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable release version.
///
/// The iteration index is coerced to 1 when a caller passes 0, so every
/// constructed value satisfies `iteration >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub stage: ReleaseStage,
    pub iteration: u32,
}

impl ReleaseVersion {
    pub fn new(major: u32, minor: u32, patch: u32, stage: ReleaseStage, iteration: u32) -> Self {
        Self { major, minor, patch, stage, iteration: iteration.max(1) }
    }

    /// Numeric `[major, minor, patch]` triple as Minecraft expects it.
    pub fn to_array(&self) -> [u32; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Comma-joined triple for the `<<<VERSION_SYSTEM>>>` placeholder,
    /// e.g. `1,2,3`.
    pub fn to_system_string(&self) -> String {
        format!("{},{},{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for ReleaseVersion {
    /// Human-readable version string: `major.minor.patch`, with `-{stage}`
    /// appended unless the stage is stable, and the iteration appended with
    /// no separator when it is greater than 1 (`1.2.0-beta3`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if self.stage != ReleaseStage::Stable {
            write!(f, "-{}", self.stage)?;

            if self.iteration > 1 {
                write!(f, "{}", self.iteration)?;
            }
        }

        Ok(())
    }
}
