// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    advise::{self, GameRequirements},
    compare::{HardwareKind, UserHardware},
    config::options::{AppOptions, Language, OutputFormat, OutputOptions},
    file, report,
    specs::requirements,
};

/// Requirement text given inline or as a path to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
}

impl TextSource {
    fn load(&self) -> Result<String, Box<dyn Error>> {
        match self {
            TextSource::Inline(t) => Ok(t.clone()),
            TextSource::File(p) => advise::load_text_file(p),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseArgs {
    pub source: Option<TextSource>,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckArgs {
    pub user: UserHardware,
    pub minimum: Option<TextSource>,
    pub recommended: Option<TextSource>,
    pub game: Option<PathBuf>,
    pub options: AppOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Parse(ParseArgs),
    Check(CheckArgs),
    ListCpus,
    ListGpus,
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    logf!("CLI: {:?}", cmd);

    if matches!(cmd, Command::Help) {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let output = match &cmd {
        Command::Parse(p) => p.output.clone(),
        Command::Check(c) => c.options.output.clone(),
        _ => OutputOptions::default(),
    };
    let text = execute(&cmd)?;

    match file::write_output(&output, &text)? {
        Some(path) => {
            logf!("CLI: wrote {}", path.display());
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Produce the rendered output for a command.
pub fn execute(cmd: &Command) -> Result<String, Box<dyn Error>> {
    match cmd {
        Command::Parse(args) => {
            let text = match &args.source {
                Some(src) => src.load()?,
                None => return Err("parse needs --text or --file".into()),
            };
            let parsed = requirements::parse_str(&text);
            logd!("Parse: found {} field(s)", parsed.found().count());
            Ok(report::render_parsed(&parsed, &args.output)?)
        }
        Command::Check(args) => {
            let game = check_requirements(args)?;
            if !game.has_any_requirement() {
                logd!("Check: no requirements stated; every axis passes");
            }
            let advice = advise::advise(&args.user, &game, &args.options.check);
            logf!(
                "Check: min={} rec={}",
                advice.comparison.can_run_minimum,
                advice.comparison.can_run_recommended
            );
            Ok(report::render_advice(&advice, args.options.check.language, &args.options.output)?)
        }
        Command::ListCpus => Ok(list_table(HardwareKind::Cpu)),
        Command::ListGpus => Ok(list_table(HardwareKind::Gpu)),
        Command::Help => Ok(s!(include_str!("cli_help.txt"))),
    }
}

/// Game document first, then explicit tiers on top.
fn check_requirements(args: &CheckArgs) -> Result<GameRequirements, Box<dyn Error>> {
    let mut game = match &args.game {
        Some(path) => advise::load_game_file(path)?,
        None => GameRequirements::default(),
    };

    let minimum = args.minimum.as_ref().map(TextSource::load).transpose()?;
    let recommended = args.recommended.as_ref().map(TextSource::load).transpose()?;
    if minimum.is_some() || recommended.is_some() {
        let texts = GameRequirements::from_texts(minimum.as_deref(), recommended.as_deref());
        if minimum.is_some() { game.minimum = texts.minimum; }
        if recommended.is_some() { game.recommended = texts.recommended; }
        game.file_size = game.minimum.storage.clone().or_else(|| game.recommended.storage.clone());
    }
    Ok(game)
}

fn list_table(kind: HardwareKind) -> String {
    kind.table()
        .entries()
        .iter()
        .map(|(name, score)| format!("{},{}\n", name, score))
        .collect()
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut args = args.into_iter();

    let Some(first) = args.next() else { return Ok(Command::Help) };
    match first.as_str() {
        "parse" => {}
        "check" => {}
        "--list-cpus" => return Ok(Command::ListCpus),
        "--list-gpus" => return Ok(Command::ListGpus),
        "-h" | "--help" => return Ok(Command::Help),
        other => return Err(format!("Unknown command: {}", other).into()),
    }

    let mut source: Option<TextSource> = None;
    let mut check = CheckArgs::default();
    let (mut cpu, mut gpu, mut ram) = (None, None, None);

    while let Some(a) = args.next() {
        let mut value = |name: &str| -> Result<String, Box<dyn Error>> {
            args.next().ok_or_else(|| format!("Missing value for {}", name).into())
        };
        let output = &mut check.options.output;

        match (first.as_str(), a.as_str()) {
            ("parse", "--text") => source = Some(TextSource::Inline(value("--text")?)),
            ("parse", "--file") => source = Some(TextSource::File(PathBuf::from(value("--file")?))),
            ("check", "--cpu") => cpu = Some(value("--cpu")?),
            ("check", "--gpu") => gpu = Some(value("--gpu")?),
            ("check", "--ram") => ram = Some(value("--ram")?),
            ("check", "--min") => check.minimum = Some(TextSource::Inline(value("--min")?)),
            ("check", "--min-file") => check.minimum = Some(TextSource::File(PathBuf::from(value("--min-file")?))),
            ("check", "--rec") => check.recommended = Some(TextSource::Inline(value("--rec")?)),
            ("check", "--rec-file") => check.recommended = Some(TextSource::File(PathBuf::from(value("--rec-file")?))),
            ("check", "--game") => check.game = Some(PathBuf::from(value("--game")?)),
            ("check", "--lang") => {
                let v = value("--lang")?;
                check.options.check.language = Language::from_code(&v)
                    .ok_or_else(|| format!("Unknown language: {}", v))?;
            }
            (_, "--format") => {
                let v = value("--format")?;
                output.format = OutputFormat::from_name(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            (_, "--include-headers") => output.include_headers = true,
            (_, "--pretty") => output.pretty = true,
            (_, "-o") | (_, "--out") => {
                output.out_path = Some(PathBuf::from(file::normalize_separators(&value("-o")?)));
            }
            (_, "-h") | (_, "--help") => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if first == "parse" {
        return Ok(Command::Parse(ParseArgs { source, output: check.options.output }));
    }

    check.user = UserHardware::new(
        cpu.ok_or("check needs --cpu")?,
        gpu.ok_or("check needs --gpu")?,
        ram.ok_or("check needs --ram")?,
    );
    Ok(Command::Check(check))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| s!(*x)).collect()
    }

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse_args(argv(&[])).unwrap(), Command::Help);
    }

    #[test]
    fn parse_command_reads_flags() {
        let cmd = parse_args(argv(&["parse", "--text", "CPU: i5", "--format", "tsv", "--include-headers"])).unwrap();
        let Command::Parse(p) = cmd else { panic!("expected parse") };
        assert_eq!(p.source, Some(TextSource::Inline(s!("CPU: i5"))));
        assert_eq!(p.output.format, OutputFormat::Tsv);
        assert!(p.output.include_headers);
    }

    #[test]
    fn check_requires_hardware() {
        let err = parse_args(argv(&["check", "--cpu", "i5-8400", "--gpu", "GTX 1060"])).unwrap_err();
        assert!(err.to_string().contains("--ram"));
    }

    #[test]
    fn check_options() {
        let cmd = parse_args(argv(&[
            "check", "--cpu", "Ryzen 5 5600", "--gpu", "RTX 3060", "--ram", "16",
            "--min", "CPU: Ryzen 5 3600", "--lang", "en", "--format", "json", "--pretty",
        ]))
        .unwrap();
        let Command::Check(c) = cmd else { panic!("expected check") };
        assert_eq!(c.user, UserHardware::new("Ryzen 5 5600", "RTX 3060", "16"));
        assert_eq!(c.options.check.language, Language::English);
        assert_eq!(c.options.output.format, OutputFormat::Json);
        assert!(c.options.output.pretty);
        assert_eq!(c.recommended, None);
    }

    #[test]
    fn unknown_and_missing_values_are_errors() {
        assert!(parse_args(argv(&["check", "--bogus"])).is_err());
        assert!(parse_args(argv(&["check", "--cpu"])).is_err());
        assert!(parse_args(argv(&["parse", "--cpu", "x"])).is_err());
        assert!(parse_args(argv(&["check", "--lang", "xx"])).is_err());
        assert!(parse_args(argv(&["frobnicate"])).is_err());
    }

    #[test]
    fn execute_check_text() {
        let cmd = parse_args(argv(&[
            "check", "--cpu", "i7-8700K", "--gpu", "GTX 1080", "--ram", "16",
            "--min", "Processor: i5-8400, Graphics: GTX 1060, Memory: 8 GB",
            "--rec", "Processor: i7-9700K, Graphics: RTX 2070, Memory: 16 GB",
            "--lang", "en",
        ]))
        .unwrap();
        let out = execute(&cmd).unwrap();
        assert!(out.starts_with("Runs at minimum settings."));
        assert!(out.contains("Your CPU"));
    }

    #[test]
    fn list_tables_are_csv_lines() {
        let out = execute(&Command::ListGpus).unwrap();
        assert!(out.starts_with("rtx 4090,1000\n"));
        assert_eq!(out.lines().count(), HardwareKind::Gpu.table().entries().len());
    }
}
