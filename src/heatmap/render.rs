//! Terminal and CSV output for the heatmap

use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use super::color::roi_to_color;
use super::matrix::{HeatmapCell, HeatmapMatrix, RoiRow};

const MARKET_WIDTH: usize = 22;
const CELL_WIDTH: usize = 14;
/// Backgrounds darker than this get white text
const DARK_LUMA: u8 = 140;

fn cell_text(cell: &HeatmapCell) -> String {
    format!("{:+}% ({})", cell.roi.round_dp(0), cell.total)
}

fn paint(cell: &HeatmapCell) -> String {
    let bg = roi_to_color(cell.roi);
    let text = format!("{:^width$}", cell_text(cell), width = CELL_WIDTH);
    let painted = text.on_truecolor(bg.r, bg.g, bg.b);
    if bg.luma() < DARK_LUMA {
        painted.white().to_string()
    } else {
        painted.black().to_string()
    }
}

/// Render the matrix as a colour-coded grid
///
/// Rows follow the market order, columns the odds order. Each populated cell
/// shows ROI and sample size on an ROI-coloured background.
pub fn render_grid(matrix: &HeatmapMatrix) -> String {
    let mut out = String::new();

    let corner = format!("{:<width$}", "Market \\ Odds", width = MARKET_WIDTH);
    out.push_str(&corner.bold().to_string());
    for range in &matrix.odds_order {
        let header = format!("{:^width$}", range.label(), width = CELL_WIDTH);
        out.push_str(&header.bold().to_string());
    }
    out.push('\n');
    out.push_str(&"-".repeat(MARKET_WIDTH + CELL_WIDTH * matrix.odds_order.len()));
    out.push('\n');

    for &market in &matrix.market_order {
        out.push_str(&format!("{:<width$}", market.label(), width = MARKET_WIDTH));
        for &range in &matrix.odds_order {
            match matrix.get(market, range) {
                Some(cell) => out.push_str(&paint(cell)),
                None => out.push_str(
                    &format!("{:^width$}", "no data", width = CELL_WIDTH)
                        .dimmed()
                        .to_string(),
                ),
            }
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "ROI % (settled bets) | {} bets | red = loss, amber = break-even, green = profit\n",
        matrix.sample_size()
    ));
    out
}

/// Write one CSV row per populated cell
pub fn write_csv<W: Write>(matrix: &HeatmapMatrix, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    wtr.write_record(["market", "odds_range", "win_rate", "roi", "note", "sample"])?;
    for cell in &matrix.cells {
        wtr.write_record([
            cell.market.label().to_string(),
            cell.odds_range.label().to_string(),
            format!("{:.1}%", cell.win_rate.round_dp(1)),
            format!("{:+.1}%", cell.roi.round_dp(1)),
            cell.note.to_string(),
            cell.total.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    matrix: &'a HeatmapMatrix,
    roi_table: Vec<RoiRow>,
}

/// Pretty JSON of the cells plus the market x odds ROI pivot
pub fn to_json(matrix: &HeatmapMatrix) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        matrix,
        roi_table: matrix.roi_table(),
    })
}
