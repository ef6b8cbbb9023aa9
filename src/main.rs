use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, CommandFactory, Parser};
use crcgen::{
    generate_to, parse_int_literal, ErrorKind, GeneratorConfig, OutputMode, PolySelection, Preset,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "crcgen",
    version,
    about = "Parallel CRC HDL implementation generator"
)]
struct Cli {
    /// Predefined CRC polynomial to use
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(Preset::names()),
        conflicts_with_all = ["poly", "length"]
    )]
    preset: Option<String>,

    /// CRC polynomial in normal (non-reversed, non-reciprocal) form
    #[arg(short, long, value_parser = parse_poly_value)]
    poly: Option<u64>,

    /// Length of the CRC polynomial in bits
    #[arg(short, long)]
    length: Option<usize>,

    /// Parallel data width to implement the CRC for
    #[arg(short, long)]
    width: usize,

    /// Reflect input data before processing (default)
    #[arg(short = 'r', long, overrides_with = "no_reflect_input")]
    reflect_input: bool,

    /// Do not reflect input data before processing
    #[arg(short = 'R', long, overrides_with = "reflect_input")]
    no_reflect_input: bool,

    /// Type of output file to write
    #[arg(short, long, value_enum, default_value_t = OutputMode::VhdlPackage)]
    mode: OutputMode,

    /// Name of the generated function/package
    #[arg(long)]
    name: Option<String>,

    /// Output filename (default stdout)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn reflect_input(&self) -> bool {
        self.reflect_input || !self.no_reflect_input
    }
}

fn parse_poly_value(text: &str) -> Result<u64, String> {
    parse_int_literal(text).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) if err.kind() == ErrorKind::Configuration => Cli::command()
            .error(clap::error::ErrorKind::ValueValidation, err)
            .exit(),
        Err(err) => return Err(err.into()),
    };
    info!(
        name = %config.name,
        degree = config.polynomial.degree(),
        width = config.width,
        reflect_input = config.reflect_input,
        "generating parallel CRC"
    );

    match &cli.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            write_output(BufWriter::new(file), &config)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => write_output(io::stdout().lock(), &config).context("failed to write to stdout")?,
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<GeneratorConfig, crcgen::CrcGenError> {
    let selection = PolySelection::from_options(cli.preset.as_deref(), cli.poly, cli.length)?;
    let invocation = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    let mut config = GeneratorConfig::new(&selection, cli.width)?
        .with_reflect_input(cli.reflect_input())
        .with_mode(cli.mode)
        .with_invocation(invocation);
    if let Some(name) = &cli.name {
        config = config.with_name(name.as_str());
    }
    config.validate()?;
    Ok(config)
}

fn write_output<W: Write>(mut writer: W, config: &GeneratorConfig) -> Result<()> {
    generate_to(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
                format!("{app_name}={level}").into()
            }),
        )
        .with_writer(io::stderr)
        .init();
}
