use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use fundqif_core::{DateFilter, parse_bound_date};
use fundqif_ingest::{encoding::decode_latin1, parse_export};
use fundqif_qif::{QIF_HEADER, convert, render_record, write_qif};
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

mod config;

const OUTPUT_SUFFIX: &str = ".qif";

/// Convert a DWS depot transaction export into a QIF investment ledger
#[derive(Parser, Debug)]
#[command(name = "fundqif", disable_version_flag = true, disable_help_flag = true)]
struct Cli {
    /// Export file to convert (`;` separated, ISO-8859-1)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Convert transactions on or after this date (dd.mm.yyyy or yyyy-mm-dd); also -df
    #[arg(long = "datefrom", value_parser = parse_bound_date)]
    date_from: Option<NaiveDate>,

    /// Convert transactions on or before this date (dd.mm.yyyy or yyyy-mm-dd); also -dt
    #[arg(long = "dateto", value_parser = parse_bound_date)]
    date_to: Option<NaiveDate>,

    /// Print the version number
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Print this help
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// Log processing details
    #[arg(short = 'i', long = "inspect")]
    inspect: bool,

    /// TOML file overriding ledger category labels
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(expand_short_aliases(std::env::args_os()));
    init_logging(cli.inspect);

    if cli.version {
        println!("fundqif version {}", env!("CARGO_PKG_VERSION"));
    }
    if cli.help {
        println!("{}", Cli::command().render_help());
    }

    let Some(input) = cli.file.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let cfg = config::load_config(cli.config.as_deref())?;
    let filter = DateFilter::new(cli.date_from, cli.date_to);
    if !filter.is_unbounded() {
        info!("date filter: from {:?} to {:?}", filter.from, filter.to);
    }

    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    if log::log_enabled!(log::Level::Debug) {
        debug!("read {}:", input.display());
        for line in decode_latin1(&bytes).lines() {
            debug!("{line}");
        }
    }

    let records =
        parse_export(bytes.as_slice()).with_context(|| format!("parsing {}", input.display()))?;
    let conversion = convert(&records, &filter, &cfg.labels)
        .with_context(|| format!("converting {}", input.display()))?;

    if log::log_enabled!(log::Level::Debug) {
        debug!("{QIF_HEADER}");
        for record in &conversion.records {
            for line in render_record(record).lines() {
                debug!("{line}");
            }
        }
    }

    let output = output_path(input);
    let file = File::create(&output).with_context(|| format!("creating {}", output.display()))?;
    let written = write_qif(BufWriter::new(file), &conversion.records)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {}", output.display());

    println!("DONE");
    println!("Read {} records", conversion.read);
    println!("Wrote {written} records");

    Ok(())
}

fn init_logging(inspect: bool) {
    let default_filter = if inspect { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// clap only knows single-character short flags; map the two-letter date flags to their long
/// forms before parsing.
fn expand_short_aliases(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-df" {
                OsString::from("--datefrom")
            } else if arg == "-dt" {
                OsString::from("--dateto")
            } else {
                arg
            }
        })
        .collect()
}

/// The ledger is written next to the export: `<input>.qif`.
fn output_path(input: &Path) -> PathBuf {
    let mut out = input.as_os_str().to_owned();
    out.push(OUTPUT_SUFFIX);
    PathBuf::from(out)
}
