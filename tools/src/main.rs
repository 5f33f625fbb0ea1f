use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use catalog::{catalog_hash, flight_catalog, Catalog};
use clap::{Parser, Subcommand, ValueEnum};
use uplink_tools::{
    encode_command, format_breakdown, format_catalog_pretty, format_hex, parse_field_arg,
};

#[derive(Parser)]
#[command(
    name = "uplink-tools",
    version,
    about = "uplink catalog listing and packet encoding tools"
)]
struct Cli {
    /// Catalog JSON to use instead of the built-in flight table.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the command catalog and its digest.
    Catalog {
        /// Emit the catalog as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Encode one command packet.
    Encode {
        /// Command code, e.g. 0x42.
        apid: String,
        /// Field value as NAME=VALUE; repeat per field.
        #[arg(long = "field", value_parser = parse_field_arg)]
        fields: Vec<(String, String)>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = EncodeFormat::Breakdown)]
        format: EncodeFormat,
        /// Also write the raw packet bytes to a file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodeFormat {
    /// Labeled sync / header / data / crc sections.
    Breakdown,
    /// Space-separated hex bytes.
    Hex,
    /// The operator console's decimal byte list.
    List,
    /// The full boundary response as JSON.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path).context("load catalog")?,
        None => flight_catalog(),
    };

    match cli.command {
        Command::Catalog { json } => {
            if json {
                let export = encoder::catalog_export(&catalog);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&export).context("serialize catalog json")?
                );
            } else {
                print!("{}", format_catalog_pretty(&catalog));
                println!("catalog hash: 0x{:016x}", catalog_hash(&catalog));
            }
        }
        Command::Encode {
            apid,
            fields,
            format,
            output,
        } => {
            let response = match encode_command(&catalog, &apid, &fields) {
                Ok(response) => response,
                Err(report) => bail!("{}: {}", report.kind, report.message),
            };

            if let Some(path) = output {
                fs::write(&path, &response.bytes)
                    .with_context(|| format!("write packet {}", path.display()))?;
            }

            match format {
                EncodeFormat::Breakdown => println!("{}", format_breakdown(&response.bytes)),
                EncodeFormat::Hex => println!("{}", format_hex(&response.bytes)),
                EncodeFormat::List => println!("{}", response.hex),
                EncodeFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&response).context("serialize response json")?
                ),
            }
        }
    }
    Ok(())
}

fn load_catalog(path: &PathBuf) -> Result<Catalog> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&contents).context("parse catalog json")?;
    catalog
        .validate()
        .map_err(|err| anyhow::anyhow!("catalog validation failed: {err}"))?;
    Ok(catalog)
}
