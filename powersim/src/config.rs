//! Configuration loading from powersim.toml
//!
//! Analysis settings can be specified in a `powersim.toml` file in the
//! project root. The file is discovered by walking up from the current
//! directory; every field has a default so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// PowerSim configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PowerConfig {
    /// Sweep configuration
    #[serde(default)]
    pub sweep: SweepSection,
    /// Design grid configuration
    #[serde(default)]
    pub grid: GridSection,
    /// Experimental design parameters
    #[serde(default)]
    pub design: DesignSection,
    /// Chart configuration
    #[serde(default)]
    pub visuals: VisualsSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Sweep settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSection {
    /// Replicates per scenario
    #[serde(default = "default_replicates")]
    pub replicates: usize,
    /// Base RNG seed; the binary sweep uses seed + 1
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Significance threshold
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            replicates: default_replicates(),
            seed: default_seed(),
            alpha: default_alpha(),
        }
    }
}

fn default_replicates() -> usize {
    powersim_core::DEFAULT_REPLICATES
}
fn default_seed() -> u64 {
    powersim_core::DEFAULT_SEED
}
fn default_alpha() -> f64 {
    powersim_core::DEFAULT_ALPHA
}

/// An evenly spaced parameter range with inclusive endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// First value
    pub start: f64,
    /// Last value
    pub stop: f64,
    /// Number of grid points
    pub steps: usize,
}

/// Design grids for the two sweeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Effect-size grid for the continuous sweep
    #[serde(default = "default_effect_size_range")]
    pub effect_size: RangeSpec,
    /// Group 2 event-probability grid for the binary sweep
    #[serde(default = "default_proportion_range")]
    pub proportion: RangeSpec,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            effect_size: default_effect_size_range(),
            proportion: default_proportion_range(),
        }
    }
}

fn default_effect_size_range() -> RangeSpec {
    RangeSpec {
        start: 0.0,
        stop: 2.0,
        steps: 9,
    }
}
fn default_proportion_range() -> RangeSpec {
    RangeSpec {
        start: 0.3,
        stop: 0.95,
        steps: 14,
    }
}

/// Fixed parameters of the two experimental designs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSection {
    /// Observations per group in the continuous design
    #[serde(default = "default_continuous_group_size")]
    pub continuous_group_size: usize,
    /// Subjects per group in the binary design
    #[serde(default = "default_binary_group_size")]
    pub binary_group_size: u64,
    /// Group 1 event probability in the binary design
    #[serde(default = "default_baseline_rate")]
    pub baseline_rate: f64,
}

impl Default for DesignSection {
    fn default() -> Self {
        Self {
            continuous_group_size: default_continuous_group_size(),
            binary_group_size: default_binary_group_size(),
            baseline_rate: default_baseline_rate(),
        }
    }
}

fn default_continuous_group_size() -> usize {
    10
}
fn default_binary_group_size() -> u64 {
    25
}
fn default_baseline_rate() -> f64 {
    0.3
}

/// Chart settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualsSection {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Target power marked with a reference line
    #[serde(default = "default_target_power")]
    pub target_power: f64,
}

impl Default for VisualsSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            target_power: default_target_power(),
        }
    }
}

fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_target_power() -> f64 {
    powersim_report::DEFAULT_TARGET_POWER
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory for emitted artifacts
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Write the JSON report
    #[serde(default = "default_true")]
    pub write_json: bool,
    /// Write the CSV report
    #[serde(default = "default_true")]
    pub write_csv: bool,
    /// Render one PNG chart per curve
    #[serde(default = "default_true")]
    pub write_charts: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            write_json: true,
            write_csv: true,
            write_charts: true,
        }
    }
}

fn default_output_dir() -> String {
    "target/powersim".to_string()
}
fn default_true() -> bool {
    true
}

impl PowerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("powersim.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Check that the configured parameters are usable before sweeping
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.sweep.replicates >= 1, "replicates must be at least 1");
        anyhow::ensure!(
            self.sweep.alpha > 0.0 && self.sweep.alpha < 1.0,
            "alpha must be within (0, 1), got {}",
            self.sweep.alpha
        );
        anyhow::ensure!(
            self.design.continuous_group_size >= 2,
            "continuous groups need at least 2 observations for the t-test"
        );
        anyhow::ensure!(
            self.design.binary_group_size >= 1,
            "binary groups need at least 1 subject"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.design.baseline_rate),
            "baseline rate must be within [0, 1], got {}",
            self.design.baseline_rate
        );
        for (name, range) in [
            ("proportion", &self.grid.proportion),
            ("effect_size", &self.grid.effect_size),
        ] {
            anyhow::ensure!(
                range.steps >= 1,
                "{} grid needs at least 1 step",
                name
            );
        }
        for p in [self.grid.proportion.start, self.grid.proportion.stop] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&p),
                "proportion grid must stay within [0, 1], got {}",
                p
            );
        }
        Ok(())
    }

    /// Generate a default configuration as a TOML string
    pub fn default_toml() -> String {
        r#"# PowerSim Configuration

[sweep]
# Replicates per scenario
replicates = 500
# Base RNG seed (the binary sweep uses seed + 1)
seed = 42
# Significance threshold
alpha = 0.05

[grid]
# Effect-size grid for the continuous sweep
effect_size = { start = 0.0, stop = 2.0, steps = 9 }
# Group 2 event-probability grid for the binary sweep
proportion = { start = 0.3, stop = 0.95, steps = 14 }

[design]
# Observations per group, continuous design
continuous_group_size = 10
# Subjects per group, binary design
binary_group_size = 25
# Group 1 event probability, binary design
baseline_rate = 0.3

[visuals]
# Chart dimensions in pixels
width = 1280
height = 720
# Reference line on power charts
target_power = 0.8

[output]
# Directory for emitted artifacts
directory = "target/powersim"
# Which artifacts to write
write_json = true
write_csv = true
write_charts = true
"#
        .to_string()
    }
}
