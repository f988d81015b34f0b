//! Command-line front end.
//!
//! Reads the input image, resolves configuration, runs the conversion, and
//! writes the tileset document to a file or standard output.

use std::fs;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use miette::Diagnostic;

use crate::config::{parse_author, parse_tiles, ConvertConfig};
use crate::error::{Result, TscError, Warning};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::convert;
use crate::serialize::write_tileset;

/// tscproc - Tileset collision rectangle extractor
#[derive(Parser, Debug)]
#[command(name = "tscproc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tileset PNG to process (standard input when omitted or "-")
    pub input: Option<PathBuf>,

    /// Tile grid as COLSxROWS (e.g. 8x4)
    #[arg(long, short)]
    pub tiles: Option<String>,

    /// Author credit as NAME:DETAIL (repeatable, kept in order)
    #[arg(long = "author", short = 'a', value_name = "NAME:DETAIL")]
    pub authors: Vec<String>,

    /// Output file (standard output when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// YAML configuration file with columns, rows, authors and output
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

/// Merge the configuration file (if any) with command-line values.
///
/// `--tiles` replaces the grid shape, any `--author` replaces the whole
/// author list, and `--output` replaces the destination.
pub fn resolve_config(cli: &Cli) -> Result<ConvertConfig> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };

    if let Some(tiles) = &cli.tiles {
        let (columns, rows) = parse_tiles(tiles)?;
        config.columns = columns;
        config.rows = rows;
    }

    if !cli.authors.is_empty() {
        config.authors = cli
            .authors
            .iter()
            .map(|a| parse_author(a))
            .collect::<Result<Vec<_>>>()?;
    }

    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }

    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let printer = Printer::new().quiet(cli.quiet);
    let config = resolve_config(&cli)?;

    let bytes = read_input(cli.input.as_deref(), &printer)?;

    let conversion = convert(&bytes, &config)?;

    if let Some((w, h)) = conversion.image_size {
        printer.info("Decoded", &format!("{}x{} image", w, h));
    }
    printer.info(
        "Extracted",
        &format!(
            "{} ({} with collision rectangles)",
            plural(conversion.tileset.tiles.len(), "tile", "tiles"),
            conversion.tileset.collision_count()
        ),
    );

    for warning in &conversion.warnings {
        printer.warning("Warning", &warning_line(warning));
    }

    match &config.output {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| TscError::Io {
                path: path.clone(),
                message: format!("Failed to create output file: {}", e),
            })?;
            write_tileset(&conversion.tileset, BufWriter::new(file)).map_err(|e| {
                TscError::Io {
                    path: path.clone(),
                    message: format!("Failed to write tileset: {}", e),
                }
            })?;
            printer.status("Wrote", &display_path(path));
        }
        None => {
            write_tileset(&conversion.tileset, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Warning text with its help hint appended, e.g.
/// "No authors given. Pass at least one --author option".
fn warning_line(warning: &Warning) -> String {
    match warning.help() {
        Some(help) => format!("{}. {}", warning, help),
        None => warning.to_string(),
    }
}

fn read_input(input: Option<&Path>, printer: &Printer) -> Result<Vec<u8>> {
    match input {
        Some(path) if path != Path::new("-") => {
            printer.status("Reading", &display_path(path));
            fs::read(path).map_err(|e| TscError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to open input file: {}", e),
            })
        }
        _ => {
            printer.status("Reading", "standard input");
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}
