//! MIPS I disassembler CLI.

use clap::{Parser, ValueEnum};
use log::debug;
use std::io::{self, Write};
use std::process;

use mipsdis::config::{Config, OutputFormat};
use mipsdis::listing;
use mipsdis::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "Disassembles a big-endian MIPS I binary, one instruction per word",
    long_about = None,
)]
struct Cli {
    /// Raw binary to disassemble.
    file: String,

    /// JSON file with listing settings.
    #[arg(short, long)]
    config: Option<String>,

    /// Listing format (overrides the config file).
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| fatal(&e)),
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.format = format.into();
    }

    let bytes = loader::load_binary(&cli.file).unwrap_or_else(|e| fatal(&e));
    let lines = listing::listing(&bytes);
    debug!("decoded {} word(s) from {}", lines.len(), cli.file);

    let out = listing::render(&lines, config.format).unwrap_or_else(|e| fatal(&e));

    match write_listing(&mut io::stdout().lock(), &out, config.format) {
        Ok(()) => {}
        // Reader went away (`mipsdis f.bin | head`); nothing left to report.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
        }
        Err(e) => fatal(&e),
    }
}

fn write_listing(w: &mut impl Write, out: &str, format: OutputFormat) -> io::Result<()> {
    w.write_all(out.as_bytes())?;
    if format == OutputFormat::Json {
        writeln!(w)?;
    }
    w.flush()
}

fn fatal(e: &dyn std::fmt::Display) -> ! {
    eprintln!("\n\x1b[1;31m[!] FATAL:\x1b[0m {}", e);
    process::exit(1);
}
