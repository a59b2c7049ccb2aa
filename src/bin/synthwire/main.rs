//! synthwire - encode wire messages, inspect Juno patches, drive an engine
//!
//! Run with: cargo run -- --help

mod demo;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, WrapErr};
use synthwire::{
    juno::{JunoPatch, FACTORY_PATCH_COUNT, SYSEX_LEN},
    wire::Value,
};

#[derive(Parser)]
#[command(name = "synthwire")]
#[command(about = "Wire-message tools for a line-oriented synthesis engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode fields into one wire message, e.g. `osc=0 wave=1 note=60`
    Encode {
        /// name=value pairs; `none` leaves a nullable field unset
        fields: Vec<String>,
    },

    /// Decode a Juno-106 patch by factory index (0-127) or 36 hex digits
    Juno {
        patch: String,
    },

    /// Play a short arpeggio through a voice pool
    Demo {
        /// Number of voices in the pool
        #[arg(short, long, default_value = "4")]
        voices: usize,

        /// Send to a UDP engine instead of printing
        #[arg(long)]
        udp: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Commands::Encode { fields } => {
            let pairs = fields
                .iter()
                .map(|pair| {
                    pair.split_once('=')
                        .map(|(name, value)| (name, parse_value(value)))
                        .ok_or_else(|| eyre!("expected name=value, got {:?}", pair))
                })
                .collect::<color_eyre::Result<Vec<_>>>()?;
            let wire = synthwire::encode(pairs).wrap_err("cannot encode message")?;
            println!("{}", wire);
        }
        Commands::Juno { patch } => {
            let patch = load_juno(&patch)?;
            println!("{:#?}", patch);
            println!("{}", to_hex(&patch.to_sysex()));
        }
        Commands::Demo { voices, udp } => demo::run(voices, udp.as_deref())?,
    }
    Ok(())
}

fn parse_value(text: &str) -> Value {
    if text == "none" {
        Value::Absent
    } else if let Ok(int) = text.parse::<i64>() {
        Value::Int(int)
    } else if let Ok(float) = text.parse::<f64>() {
        Value::Float(float)
    } else {
        Value::Text(text.to_string())
    }
}

fn load_juno(arg: &str) -> color_eyre::Result<JunoPatch> {
    // A full dump can be all decimal digits, so it is tried before an index.
    if arg.len() == SYSEX_LEN * 2 {
        if !arg.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("patch is not valid hex: {:?}", arg);
        }
        let bytes = (0..arg.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&arg[i..i + 2], 16))
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("patch is not valid hex")?;
        return Ok(JunoPatch::from_sysex(&bytes)?);
    }
    let index = arg
        .parse::<usize>()
        .wrap_err_with(|| format!("expected a factory index or {} hex digits", SYSEX_LEN * 2))?;
    match JunoPatch::from_factory(index) {
        Some(patch) => Ok(patch?),
        None => bail!("factory index must be below {}", FACTORY_PATCH_COUNT),
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
