// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info, warn};

use copasi_graph::common::{Error, ErrorCode, ErrorKind};
use copasi_graph::datamodel::EntityKind;
use copasi_graph::sniff::is_copasi_document;
use copasi_graph::{
    CollisionPolicy, Conversion, ConversionConfig, Result, convert_with_config, open_json, to_json,
};

const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "copasi-graph")]
#[command(about = "Convert COPASI reaction networks into attributed graphs", long_about = None)]
struct Args {
    /// Show conversion progress (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Convert a model to a network and write it as JSON
    Convert {
        /// JSON rendering of the parsed model
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Document label used to name the network when the model has no id
        #[arg(short, long)]
        label: Option<String>,
        /// Path to write the network to (defaults to stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Report duplicate canonical names as warnings
        #[arg(long)]
        warn_collisions: bool,
    },

    /// Report whether a file looks like a COPASI document
    Sniff {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print node, edge and warning counts for a converted model
    Summary {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(short, long)]
        label: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| {
        Error::new(
            ErrorKind::Import,
            ErrorCode::Io,
            Some(format!("{}: {}", path.display(), err)),
        )
    })
}

fn load_and_convert(
    path: &Path,
    label: Option<String>,
    config: &ConversionConfig,
) -> Result<Conversion> {
    let mut reader = BufReader::new(open_file(path)?);
    let model = open_json(&mut reader)?;
    let label = label.unwrap_or_else(|| path.display().to_string());
    let conversion = convert_with_config(Some(&model), &label, config)?;
    for warning in &conversion.warnings {
        warn!("{warning}");
    }
    Ok(conversion)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert {
            file,
            label,
            output,
            pretty,
            warn_collisions,
        } => {
            let config = ConversionConfig {
                collision_policy: if warn_collisions {
                    CollisionPolicy::Warn
                } else {
                    CollisionPolicy::Overwrite
                },
                ..Default::default()
            };
            let conversion = load_and_convert(&file, label, &config)?;
            let json = to_json(&conversion.network, pretty)?;
            match output {
                Some(path) => {
                    let mut out = File::create(&path)?;
                    writeln!(out, "{json}")?;
                    info!("wrote '{}' to {}", conversion.network.name, path.display());
                }
                None => println!("{json}"),
            }
        }
        Command::Sniff { file } => {
            let mut reader = BufReader::new(open_file(&file)?);
            let kind = if is_copasi_document(&mut reader) {
                "copasi"
            } else {
                "unknown"
            };
            println!("{kind}");
        }
        Command::Summary { file, label } => {
            let conversion = load_and_convert(&file, label, &ConversionConfig::default())?;
            let network = &conversion.network;
            println!("network:    {}", network.name);
            println!("collection: {}", network.collection_name);
            for kind in [
                EntityKind::Compartment,
                EntityKind::Quantity,
                EntityKind::Species,
                EntityKind::Reaction,
            ] {
                let tag = kind.tag();
                println!("{:<11} {}", format!("{tag}:"), network.nodes_of_type(tag).count());
            }
            println!("edges:      {}", network.edge_count());
            println!("warnings:   {}", conversion.warnings.len());
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args.command) {
        error!("{err}");
        std::process::exit(EXIT_FAILURE);
    }
}
