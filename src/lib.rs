//! packsmith is a build pipeline for Minecraft Bedrock addons.
//! It stages pack sources into a scratch workspace, drives the external
//! script compiler and bundler, renders pack manifests from placeholder
//! templates, and publishes the finished behavior and resource packs.

/// Command-line interface module for the packsmith application
pub mod cli;

/// Project configuration, synthesized from the working directory name when
/// no config file exists yet
pub mod config;

/// Error types and handling for the packsmith application
pub mod error;

/// Compilation ignore patterns applied while staging pack sources
pub mod ignore;

/// Directory tree copying for staging and publishing
pub mod copy;

/// Unique identifier generation for pack manifests
pub mod identifier;

/// Release version and stage handling
pub mod version;

/// Pack manifest templating
pub mod manifest;

/// Filesystem layout derived from the project root and config
pub mod paths;

/// External compiler and bundler invocation
pub mod toolchain;

/// Build orchestration
/// Combines all components to produce the published packs
pub mod build;
