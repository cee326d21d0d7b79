// tests/report_output.rs
use std::fs;
use std::path::PathBuf;

use rigcheck::{
    advise::{advise, GameRequirements},
    compare::UserHardware,
    config::options::{CheckOptions, Language, OutputFormat, OutputOptions},
    file, report,
};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("rigcheck_report_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_advice() -> rigcheck::advise::Advice {
    let game = GameRequirements::from_texts(
        Some("Processor: i5-8400, Graphics: GTX 1060, Memory: 8 GB RAM"),
        Some("Processor: i7-9700K, Graphics: RTX 2070, Memory: 16 GB RAM"),
    );
    let user = UserHardware::new("i5-8400", "GTX 1050", "8");
    advise(&user, &game, &CheckOptions { language: Language::English })
}

#[test]
fn tsv_without_headers_has_three_rows() {
    let opts = OutputOptions { format: OutputFormat::Tsv, ..Default::default() };
    let out = report::render_advice(&sample_advice(), Language::English, &opts).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("CPU\ti5-8400\t450\t"));
    assert!(lines[1].contains("\tinsufficient\t"));
    assert_eq!(lines[2].split('\t').count(), report::comparison_headers().len());
}

#[test]
fn text_leads_with_overall_verdict() {
    let opts = OutputOptions::default();
    let out = report::render_advice(&sample_advice(), Language::English, &opts).unwrap();
    assert!(out.starts_with("Does not meet the minimum requirements."));
    assert!(out.contains("Your GPU (GTX 1050) is below the minimum requirements."));
}

#[test]
fn pretty_json_round_trips_through_serde_json() {
    let opts = OutputOptions { format: OutputFormat::Json, pretty: true, ..Default::default() };
    let out = report::render_advice(&sample_advice(), Language::English, &opts).unwrap();
    assert!(out.contains("\n  \"game\""));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["comparison"]["can_run_minimum"], false);
    assert_eq!(v["comparison"]["details"]["gpu"]["status"], "insufficient");
}

#[test]
fn dir_hint_writes_default_file_name() {
    let dir = tmp_dir("dirhint");
    let mut hint = dir.to_string_lossy().into_owned();
    hint.push('/');

    let opts = OutputOptions {
        format: OutputFormat::Csv,
        include_headers: true,
        out_path: Some(PathBuf::from(hint)),
        ..Default::default()
    };
    let out = report::render_advice(&sample_advice(), Language::English, &opts).unwrap();
    let path = file::write_output(&opts, &out).unwrap().unwrap();

    assert!(path.to_string_lossy().ends_with("verdict.csv"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Axis,Yours,Score,Minimum"));
    assert_eq!(written.lines().count(), 4);
}
