// src/report.rs
//
// Presentation of parsed requirements and verdicts: text, JSON (wire shape),
// CSV/TSV (one row per axis or field). Nothing here mutates the results.

use serde::Serialize;

use crate::{
    advise::{Advice, GameRequirements},
    compare::{messages, Axis, ComparisonResult, HardwareKind},
    config::options::{Language, OutputFormat, OutputOptions},
    csv::rows_to_string,
    specs::requirements::{Field, ParsedRequirements},
};

pub fn comparison_headers() -> Vec<String> {
    strings![
        "Axis", "Yours", "Score", "Minimum", "Min score", "Recommended", "Rec score",
        "Meets min", "Meets rec", "Status", "Message",
    ]
}

fn opt_num(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn yes_no(b: bool) -> String {
    s!(if b { "yes" } else { "no" })
}

/// One row per axis, columns as in `comparison_headers`.
pub fn comparison_rows(result: &ComparisonResult) -> Vec<Vec<String>> {
    result
        .axes()
        .map(|(axis, d)| {
            vec![
                s!(axis.label()),
                d.user_input.clone(),
                d.user_score.to_string(),
                d.min_required.clone().unwrap_or_default(),
                opt_num(d.min_score),
                d.rec_required.clone().unwrap_or_default(),
                opt_num(d.rec_score),
                yes_no(d.meets_minimum),
                yes_no(d.meets_recommended),
                s!(d.status.as_str()),
                d.message.clone(),
            ]
        })
        .collect()
}

pub fn requirements_headers() -> Vec<String> {
    strings!["Field", "Minimum", "Recommended"]
}

/// One row per field; blank cell = not found.
pub fn requirements_rows(minimum: &ParsedRequirements, recommended: &ParsedRequirements) -> Vec<Vec<String>> {
    Field::ALL
        .iter()
        .map(|f| {
            vec![
                s!(f.key()),
                s!(minimum.get(*f).unwrap_or_default()),
                s!(recommended.get(*f).unwrap_or_default()),
            ]
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    let mut out = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    out.push('\n');
    Ok(out)
}

fn table(opts: &OutputOptions, headers: Vec<String>, rows: &[Vec<String>], sep: char) -> String {
    let headers = opts.include_headers.then_some(headers);
    rows_to_string(headers.as_deref(), rows, sep)
}

/* ---------------- Text ---------------- */

fn score_note(axis: Axis, input: &str) -> String {
    let kind = match axis {
        Axis::Cpu => HardwareKind::Cpu,
        Axis::Gpu => HardwareKind::Gpu,
        Axis::Ram => return s!(" GB"),
    };
    match kind.matched_key(input) {
        Some(key) => format!(" [{key}]"),
        None if input.is_empty() => s!(" [none given]"),
        None => s!(" [unranked]"),
    }
}

pub fn comparison_text(result: &ComparisonResult, lang: Language) -> String {
    let mut out = String::new();
    out.push_str(messages::overall_message(lang, result.can_run_minimum, result.can_run_recommended));
    out.push('\n');
    out.push_str(&format!(
        "  minimum: {}  recommended: {}\n",
        yes_no(result.can_run_minimum),
        yes_no(result.can_run_recommended)
    ));

    for (axis, d) in result.axes() {
        out.push('\n');
        out.push_str(&format!(
            "{:<4}{:<13}{} = {}{}\n",
            axis.label(),
            d.status.as_str(),
            if d.user_input.is_empty() { "-" } else { d.user_input.as_str() },
            d.user_score,
            score_note(axis, &d.user_input),
        ));
        if let (Some(text), Some(score)) = (&d.min_required, d.min_score) {
            out.push_str(&format!("    min {score:>5}  {text}\n"));
        }
        if let (Some(text), Some(score)) = (&d.rec_required, d.rec_score) {
            out.push_str(&format!("    rec {score:>5}  {text}\n"));
        }
        out.push_str(&format!("    {}\n", d.message));
    }
    out
}

pub fn parsed_text(parsed: &ParsedRequirements) -> String {
    let mut out = String::new();
    for f in Field::ALL {
        out.push_str(&format!("{:<8}{}\n", f.key(), parsed.get(f).unwrap_or("-")));
    }
    out
}

fn game_text(game: &GameRequirements) -> String {
    let mut out = String::new();
    if let Some(name) = &game.name {
        out.push_str(&join!(name, "\n"));
    }
    if let Some(size) = &game.file_size {
        out.push_str(&format!("Install size: {size}\n"));
    }
    out
}

/* ---------------- Entry points ---------------- */

pub fn render_comparison(
    result: &ComparisonResult,
    lang: Language,
    opts: &OutputOptions,
) -> Result<String, serde_json::Error> {
    Ok(match opts.format {
        OutputFormat::Text => comparison_text(result, lang),
        OutputFormat::Json => to_json(result, opts.pretty)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            table(opts, comparison_headers(), &comparison_rows(result), sep)
        }
    })
}

pub fn render_advice(advice: &Advice, lang: Language, opts: &OutputOptions) -> Result<String, serde_json::Error> {
    Ok(match opts.format {
        OutputFormat::Text => {
            let mut out = game_text(&advice.game);
            if !out.is_empty() { out.push('\n'); }
            out.push_str(&comparison_text(&advice.comparison, lang));
            out
        }
        OutputFormat::Json => to_json(advice, opts.pretty)?,
        OutputFormat::Csv | OutputFormat::Tsv => render_comparison(&advice.comparison, lang, opts)?,
    })
}

pub fn render_parsed(parsed: &ParsedRequirements, opts: &OutputOptions) -> Result<String, serde_json::Error> {
    Ok(match opts.format {
        OutputFormat::Text => parsed_text(parsed),
        OutputFormat::Json => to_json(parsed, opts.pretty)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            let rows: Vec<Vec<String>> = Field::ALL
                .iter()
                .map(|f| vec![s!(f.key()), s!(parsed.get(*f).unwrap_or_default())])
                .collect();
            table(opts, strings!["Field", "Value"], &rows, sep)
        }
    })
}
