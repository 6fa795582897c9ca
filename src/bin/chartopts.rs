//! Command-line front end for chart option documents.
//!
//! `check` validates and decodes documents, `fmt` re-encodes them sparsely,
//! `inspect` reports how a value at a JSON pointer decodes, and `compose`
//! folds layered fragments into one document. Documents go to stdout; logs go
//! to stderr.

use anyhow::{Context, Result, bail};
use chartopts::{
    ArrayOrSingle, Codec, CodecOptions, DocumentError, JsonKind, OverlayBuilder, StringOrBool,
    StringOrNumber, is_array_stream, split_document_stream,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error, info};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Parser)]
#[command(author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log decode steps and schema details.
    #[arg(long, global = true)]
    verbose: bool,
    /// Disable colored logging, useful when piping output to files.
    #[arg(long, global = true)]
    no_colors: bool,
    /// Decode without validating against the option schema first.
    #[arg(long, global = true)]
    no_validate: bool,
    /// Schema file to validate against instead of the bundled one.
    #[arg(long, global = true, value_name = "PATH")]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validates and decodes one document, a JSON array of documents, or NDJSON.
    Check {
        /// Input file, or `-` for stdin.
        file: PathBuf,
    },
    /// Decodes documents and writes them back without unset fields.
    ///
    /// A JSON array input is written back as an array. Other input is written
    /// one document after another, one per line when compact.
    Fmt {
        /// Input file, or `-` for stdin.
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
        /// Output file, or `-` for stdout.
        #[arg(long, short, default_value = "-")]
        output: PathBuf,
    },
    /// Reports the JSON type at a pointer and how a wrapper decodes it.
    Inspect {
        /// Input file, or `-` for stdin.
        file: PathBuf,
        /// JSON pointer such as `/grid/left`; empty for the whole document.
        #[arg(long, default_value = "")]
        pointer: String,
        #[arg(long = "as", value_enum)]
        wrapper: Option<WrapperKind>,
    },
    /// Builds a document from base files and assignments, then decodes it.
    ///
    /// Bases are merged in order, then `--set` assignments, then `--set-str`.
    Compose {
        #[arg(long = "base", value_name = "FILE")]
        bases: Vec<PathBuf>,
        /// `PATH=JSON`, e.g. `grid.left="20%"`.
        #[arg(long = "set", value_name = "PATH=JSON")]
        sets: Vec<String>,
        /// `PATH=TEXT`; TEXT is stored as a JSON string.
        #[arg(long = "set-str", value_name = "PATH=TEXT")]
        string_sets: Vec<String>,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WrapperKind {
    StringOrNumber,
    ArrayOrSingle,
    StringOrBool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = setup_logging(cli.verbose, cli.no_colors) {
        eprintln!("failed to configure log: {err}");
        process::exit(3);
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{err:#}");
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool, no_colors: bool) -> Result<()> {
    let filter = if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    let prefix = |level| match level {
        log::Level::Error => "error: ",
        log::Level::Warn => "warning: ",
        log::Level::Info => "",
        log::Level::Debug => "debug: ",
        log::Level::Trace => "trace: ",
    };
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(fern::colors::Color::Red)
        .warn(fern::colors::Color::Yellow)
        .trace(fern::colors::Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let prefix = prefix(record.level());
            if no_colors {
                out.finish(format_args!("{prefix}{message}"))
            } else {
                let color = colors.get_color(&record.level());
                out.finish(format_args!(
                    "\x1B[{}m{}{}\x1B[0m",
                    color.to_fg_str(),
                    prefix,
                    message
                ))
            }
        })
        .level(filter)
        .chain(io::stderr())
        .apply()
        .context("installing logger")
}

fn run(cli: &Cli) -> Result<bool> {
    let mut options = CodecOptions::from_env();
    if cli.no_validate {
        options.validate = false;
    }
    if let Some(schema) = &cli.schema {
        options.schema_path = Some(schema.clone());
    }

    match &cli.command {
        Command::Check { file } => exec_check(&Codec::new(&options)?, file),
        Command::Fmt {
            file,
            pretty,
            output,
        } => {
            options.pretty |= *pretty;
            exec_fmt(&Codec::new(&options)?, file, output)
        }
        Command::Inspect {
            file,
            pointer,
            wrapper,
        } => exec_inspect(file, pointer, *wrapper),
        Command::Compose {
            bases,
            sets,
            string_sets,
            pretty,
        } => {
            options.pretty |= *pretty;
            exec_compose(&Codec::new(&options)?, bases, sets, string_sets)
        }
    }
}

fn exec_check(codec: &Codec, file: &Path) -> Result<bool> {
    let input = read_input(file)?;
    let documents = split_document_stream(&input)?;
    let total = documents.len();
    let mut failures = 0;
    for (idx, document) in documents.into_iter().enumerate() {
        let label = format!("document {}", idx + 1);
        match codec.decode_value(document) {
            Ok(option) => debug!("{label}: ok ({} series)", option.series().count()),
            Err(err) => {
                failures += 1;
                report_document_error(&label, &err);
            }
        }
    }

    if failures == 0 {
        info!("{total} document(s) ok");
    } else {
        error!("{failures} of {total} document(s) failed");
    }
    Ok(failures == 0)
}

fn exec_fmt(codec: &Codec, file: &Path, output: &Path) -> Result<bool> {
    let input = read_input(file)?;
    let documents = match codec.parse_stream(&input) {
        Ok(documents) => documents,
        Err(err) => {
            report_document_error(&file.display().to_string(), &err);
            return Ok(false);
        }
    };
    let text = if is_array_stream(&input) {
        codec.encode_array_string(&documents)?
    } else {
        documents
            .iter()
            .map(|option| codec.encode_string(option))
            .collect::<Result<Vec<_>, _>>()?
            .join("\n")
    };
    write_output(output, &text)?;
    Ok(true)
}

fn exec_inspect(file: &Path, pointer: &str, wrapper: Option<WrapperKind>) -> Result<bool> {
    let input = read_input(file)?;
    let value: Value = serde_json::from_str(&input).context("failed to parse JSON input")?;
    let Some(selected) = value.pointer(pointer) else {
        bail!("pointer {pointer} not found in input");
    };
    let field = if pointer.is_empty() { "/" } else { pointer };
    let kind = JsonKind::of(selected);

    let decoded = match wrapper {
        None => {
            println!("{kind}");
            return Ok(true);
        }
        Some(WrapperKind::StringOrNumber) => {
            StringOrNumber::decode(field, selected).map(|v| v.alternative().to_string())
        }
        Some(WrapperKind::StringOrBool) => {
            StringOrBool::decode(field, selected).map(|v| v.alternative().to_string())
        }
        Some(WrapperKind::ArrayOrSingle) => {
            ArrayOrSingle::<Value>::decode(field, selected).map(|v| match v {
                ArrayOrSingle::Single(_) => v.alternative().to_string(),
                ArrayOrSingle::Array(ref items) => format!("{} of {}", v.alternative(), items.len()),
            })
        }
    };

    match decoded {
        Ok(alternative) => {
            println!("{kind} -> {alternative}");
            Ok(true)
        }
        Err(err) => {
            error!("{err}");
            Ok(false)
        }
    }
}

fn exec_compose(
    codec: &Codec,
    bases: &[PathBuf],
    sets: &[String],
    string_sets: &[String],
) -> Result<bool> {
    let mut builder = OverlayBuilder::new();
    for base in bases {
        builder.merge_json_file(base)?;
    }
    for assignment in sets {
        builder.assign(assignment)?;
    }
    for assignment in string_sets {
        builder.assign_string(assignment)?;
    }
    if builder.is_empty() {
        bail!("nothing to compose; pass --base, --set or --set-str");
    }

    let document = builder.build()?;
    match codec.decode_value(document) {
        Ok(option) => {
            write_output(Path::new("-"), &codec.encode_string(&option)?)?;
            Ok(true)
        }
        Err(err) => {
            report_document_error("composed document", &err);
            Ok(false)
        }
    }
}

fn report_document_error(label: &str, err: &DocumentError) {
    let problems = err.decode_errors();
    if problems.is_empty() {
        error!("{label}: {err}");
        return;
    }
    for problem in problems {
        error!("{label}: {problem}");
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    if !path.is_file() {
        bail!("input file not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        println!("{text}");
        return Ok(());
    }
    fs::write(path, format!("{text}\n")).with_context(|| format!("writing {}", path.display()))
}
