//! Heatmap construction and output

use bet_analytix::data::BetCsvReader;
use bet_analytix::heatmap::{
    build_heatmap, classify_market, classify_odds_range, render, roi_to_color, MarketCategory,
    OddsRange, PerformanceNote, Rgb,
};
use rust_decimal_macros::dec;

use crate::{write_export, TEN_BET_EXPORT};

#[test]
fn test_heatmap_from_export() {
    let file = write_export(TEN_BET_EXPORT);
    let records = BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records;
    let matrix = build_heatmap(&records);

    assert_eq!(matrix.cells.len(), 2);
    assert_eq!(matrix.cells[0].market, MarketCategory::OneXTwo);

    let one_x_two = matrix
        .get(MarketCategory::OneXTwo, OddsRange::From1_8To2_5)
        .unwrap();
    assert_eq!(one_x_two.total, 4);
    assert_eq!(one_x_two.win_rate, dec!(0));
    assert_eq!(one_x_two.roi, dec!(-100));
    assert_eq!(one_x_two.note, PerformanceNote::InsufficientSample);

    let over = matrix
        .get(MarketCategory::OverUnder, OddsRange::From1_8To2_5)
        .unwrap();
    assert_eq!(over.total, 6);
    assert_eq!(over.win_rate, dec!(100));
    assert_eq!(over.roi, dec!(100));
    assert_eq!(over.note.to_string(), "Excellent (reduced sample)");
    assert_eq!(roi_to_color(over.roi), Rgb::new(76, 175, 80));
}

#[test]
fn test_classification_properties() {
    assert_eq!(classify_market(Some("Over 2.5 Goals")), MarketCategory::OverUnder);
    assert_eq!(classify_market(Some("")), MarketCategory::Other);
    assert_eq!(classify_market(None), MarketCategory::Other);
    assert_eq!(classify_odds_range(Some(dec!(1.49))).label(), "< 1.5");
    assert_eq!(classify_odds_range(Some(dec!(1.5))).label(), "1.5-1.8");
}

#[test]
fn test_colour_scale_ends() {
    assert_eq!(roi_to_color(dec!(0)), Rgb::new(255, 193, 7));
    assert_eq!(roi_to_color(dec!(300)), Rgb::new(0, 200, 83));
    assert_eq!(roi_to_color(dec!(-250)), Rgb::new(220, 50, 47));
}

#[test]
fn test_csv_export() {
    let file = write_export(TEN_BET_EXPORT);
    let records = BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records;
    let mut out = Vec::new();
    render::write_csv(&build_heatmap(&records), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "1X2;1.8-2.5;0.0%;-100.0%;Insufficient sample;4");
    assert_eq!(
        lines[2],
        "Over/Under;1.8-2.5;100.0%;+100.0%;Excellent (reduced sample);6"
    );
}

#[test]
fn test_json_export_uses_labels() {
    let file = write_export(TEN_BET_EXPORT);
    let records = BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records;
    let json = serde_json::to_value(build_heatmap(&records)).unwrap();
    assert_eq!(json["cells"][0]["odds_range"], "1.8-2.5");
    assert_eq!(json["cells"][0]["market"], "one_x_two");
    assert_eq!(json["cells"][0]["note"]["kind"], "insufficient_sample");
}

#[test]
fn test_json_report_carries_roi_pivot() {
    let file = write_export(TEN_BET_EXPORT);
    let records = BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records;
    let json: serde_json::Value =
        serde_json::from_str(&render::to_json(&build_heatmap(&records)).unwrap()).unwrap();

    let rows = json["roi_table"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["market"], "one_x_two");
    assert_eq!(rows[1]["market"], "over_under");
    assert_eq!(json["market_order"].as_array().unwrap().len(), 7);
}
