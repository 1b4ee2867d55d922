//! Configuration types for jitlog.
//!
//! [`Config::load`] layers an optional TOML file over the built-in defaults:
//! an explicit `--config` path (must exist) or
//! `$XDG_CONFIG_HOME/jitlog/config.toml` (used only if present).
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use crate::error::AnalysisError;
use crate::reconcile::CrossSourceMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
dir              = "."
warmup_chart     = "java_warmup_analysis"
comparison_chart = "java_kotlin_inline_comparison"
inline_chart     = "kotlin_performance_analysis"

[chart]
width  = 1200
height = 1000

# Java combined-results label -> Kotlin summary label, in chart order.
[[translation]]
java   = "Simple Arithmetic"
kotlin = "Simple Arithmetic"

[[translation]]
java   = "High-Order Function"
kotlin = "Higher-Order Func"

[[translation]]
java   = "Recursive Call"
kotlin = "Recursive Call"

[[translation]]
java   = "Calls Within Loops"
kotlin = "Calls Within Loops"

[[translation]]
java   = "Nested Call"
kotlin = "Nested Inline"

[[translation]]
java   = "Complex Condition"
kotlin = "Complex Condition"

[[translation]]
java   = "Generic Function"
kotlin = "Generic Function"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Ordered pairs; the defaults live in `DEFAULT_CONFIG`.
    #[serde(default)]
    pub translation: Vec<TranslationPair>,
}

/// `[output]` section: where charts go and what they are called (without
/// extension).
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_warmup_chart")]
    pub warmup_chart: String,
    #[serde(default = "default_comparison_chart")]
    pub comparison_chart: String,
    #[serde(default = "default_inline_chart")]
    pub inline_chart: String,
}

fn default_dir() -> PathBuf { PathBuf::from(".") }
fn default_warmup_chart() -> String { "java_warmup_analysis".to_string() }
fn default_comparison_chart() -> String { "java_kotlin_inline_comparison".to_string() }
fn default_inline_chart() -> String { "kotlin_performance_analysis".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            warmup_chart: default_warmup_chart(),
            comparison_chart: default_comparison_chart(),
            inline_chart: default_inline_chart(),
        }
    }
}

/// `[chart]` section: canvas size in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 { 1200 }
fn default_height() -> u32 { 1000 }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// One `[[translation]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationPair {
    pub java: String,
    pub kotlin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `explicit` if given, else the XDG config file if it exists,
    /// layered on top of the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AnalysisError> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The translation table as a [`CrossSourceMap`].
    pub fn cross_source_map(&self) -> CrossSourceMap {
        CrossSourceMap::from(self.translation.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jitlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
