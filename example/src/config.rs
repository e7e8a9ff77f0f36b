use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tessera_circular_progress::{
    CircularProgressArgs, CircularProgressArgsBuilder, CircularState, Color, Size,
};

#[derive(Parser, Debug)]
#[command(name = "example")]
#[command(version, about = "Replays a scripted circular progress session", long_about = None)]
pub struct Cli {
    /// TOML file with demo settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Diameter of the control
    #[arg(long)]
    pub size: Option<f32>,
    /// Stroke width of the ring
    #[arg(long)]
    pub line_width: Option<f32>,
    /// Ring color as #RRGGBB or #RRGGBBAA
    #[arg(long)]
    pub progress_color: Option<String>,
    /// Delay between progress steps in milliseconds
    #[arg(long)]
    pub step_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct FileConfig {
    pub size: Option<f32>,
    pub line_width: Option<f32>,
    pub progress_color: Option<String>,
    pub tick_color: Option<String>,
    pub initial_state: Option<CircularState>,
    pub timing: Timing,
}

/// Pauses between the steps of the scripted session.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct Timing {
    pub spin_ms: u64,
    pub step_ms: u64,
    pub reset_ms: u64,
    pub stop_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            spin_ms: 2500,
            step_ms: 10,
            reset_ms: 2000,
            stop_ms: 3000,
        }
    }
}

impl Timing {
    pub fn spin(&self) -> Duration {
        Duration::from_millis(self.spin_ms)
    }

    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn reset(&self) -> Duration {
        Duration::from_millis(self.reset_ms)
    }

    pub fn stop(&self) -> Duration {
        Duration::from_millis(self.stop_ms)
    }
}

#[derive(Debug)]
pub struct DemoConfig {
    pub args: CircularProgressArgs,
    pub timing: Timing,
}

impl DemoConfig {
    pub fn load(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str::<FileConfig>(&content)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: Cli, file: FileConfig) -> Result<Self> {
        let mut builder = CircularProgressArgsBuilder::default();

        if let Some(diameter) = cli.size.or(file.size) {
            builder = builder.size(Size::new(diameter, diameter));
        }
        if let Some(line_width) = cli.line_width.or(file.line_width) {
            builder = builder.line_width(line_width);
        }
        if let Some(hex) = cli.progress_color.or(file.progress_color) {
            let color: Color = hex
                .parse()
                .with_context(|| format!("invalid progress color {hex:?}"))?;
            builder = builder.progress_color(color);
        }
        if let Some(hex) = file.tick_color {
            let color: Color = hex
                .parse()
                .with_context(|| format!("invalid tick color {hex:?}"))?;
            builder = builder.tick_color(color);
        }
        if let Some(state) = file.initial_state {
            builder = builder.state(state);
        }

        let mut timing = file.timing;
        if let Some(step_ms) = cli.step_ms {
            timing.step_ms = step_ms;
        }

        Ok(Self {
            args: builder.build()?,
            timing,
        })
    }
}
