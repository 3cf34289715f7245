//! Heatmap command implementation

use anyhow::Context;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::data::Period;
use crate::heatmap::{build_heatmap, render, HeatmapMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeatmapFormat {
    /// Colour-coded terminal grid
    Grid,
    Json,
    /// Semicolon separated, one row per populated cell
    Csv,
}

#[derive(Args, Debug)]
pub struct HeatmapArgs {
    /// Bet history export (delimited text with a header row)
    pub input: PathBuf,

    /// Window to analyse: "all" or a number of days such as "30days"
    #[arg(long)]
    pub period: Option<Period>,

    /// Output format
    #[arg(long, value_enum, default_value_t = HeatmapFormat::Grid)]
    pub format: HeatmapFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl HeatmapArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let period = self.period.unwrap_or(config.heatmap.period);
        let now = chrono::Local::now().naive_local();
        let records = super::load_window(&self.input, period, &config.ingest, now)?;

        let matrix = build_heatmap(&records);
        tracing::info!(
            cells = matrix.cells.len(),
            bets = matrix.sample_size(),
            "Heatmap built"
        );

        match &self.output {
            Some(path) => {
                // No escape codes in files
                colored::control::set_override(false);
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.write(&matrix, file)?;
                tracing::info!(path = %path.display(), "Heatmap written");
            }
            None => self.write(&matrix, std::io::stdout().lock())?,
        }
        Ok(())
    }

    fn write<W: Write>(&self, matrix: &HeatmapMatrix, mut out: W) -> anyhow::Result<()> {
        match self.format {
            HeatmapFormat::Grid => write!(out, "{}", render::render_grid(matrix))?,
            HeatmapFormat::Json => writeln!(out, "{}", render::to_json(matrix)?)?,
            HeatmapFormat::Csv => render::write_csv(matrix, &mut out)?,
        }
        out.flush()?;
        Ok(())
    }
}
