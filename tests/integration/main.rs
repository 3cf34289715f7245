//! Integration tests

mod backtest_test;
mod e2e_test;
mod heatmap_test;
mod ingest_test;
mod kelly_test;

use std::io::Write;
use tempfile::NamedTempFile;

/// Six winning Over bets followed by four losing 1X2 bets, one per day
pub const TEN_BET_EXPORT: &str = "\
Data;Puntata;Quote;Profitto;Stato;Titolo della scommessa
01/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
02/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
03/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
04/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
05/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
06/01/2024 20:00;10,00;2,00;10,00;Vinto;Over 2.5
07/01/2024 20:00;10,00;2,00;-10,00;Perso;Inter - Milan 1X2
08/01/2024 20:00;10,00;2,00;-10,00;Perso;Inter - Milan 1X2
09/01/2024 20:00;10,00;2,00;-10,00;Perso;Inter - Milan 1X2
10/01/2024 20:00;10,00;2,00;-10,00;Perso;Inter - Milan 1X2
";

pub fn write_export(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
