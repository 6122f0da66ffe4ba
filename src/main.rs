// stepviz: run a sorting or graph algorithm and print its recorded steps as JSON

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stepviz::config::EngineConfig;
use stepviz::errors::Family;
use stepviz::request::{catalog, GraphRequest, SortRequest};
use stepviz::{graph, sorting};

/// Step-recording sorting and graph algorithms
#[derive(Parser)]
#[command(name = "stepviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Only report counters and results, without the step list
    #[arg(long, global = true)]
    summary: bool,

    /// Memory ceiling for the step history, in megabytes
    #[arg(long, global = true, value_name = "MB")]
    history_limit_mb: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a sequence of integers
    Sort {
        /// Algorithm key, e.g. bubble or quick
        #[arg(short, long, default_value = "bubble")]
        algorithm: String,

        /// Read a sort request document instead of positional values
        #[arg(short, long, conflicts_with = "values")]
        request: Option<PathBuf>,

        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Run a graph algorithm from a request document
    Graph {
        /// Path to the request JSON, or - for stdin
        request: String,
    },

    /// List the available algorithms
    List {
        /// Only list one family
        #[arg(value_enum)]
        family: Option<FamilyArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Sorting,
    Graph,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Sorting => Family::Sorting,
            FamilyArg::Graph => Family::Graph,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = engine_config(&cli);

    match cli.command {
        Commands::Sort {
            algorithm,
            request,
            values,
        } => {
            let request = match request {
                Some(path) => serde_json::from_str::<SortRequest>(&read_input(&path)?)
                    .with_context(|| format!("Invalid sort request in {}", path.display()))?,
                None => {
                    if values.is_empty() {
                        bail!("No values given; pass integers or --request <file>");
                    }
                    SortRequest { values, algorithm }
                }
            };
            info!(algorithm = %request.algorithm, len = request.values.len(), "sorting");
            let response = sorting::run(&request, &config).context("Sort failed")?;
            print_json(&response, cli.pretty)
        }
        Commands::Graph { request } => {
            let source = if request == "-" {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read request from stdin")?;
                buf
            } else {
                read_input(Path::new(&request))?
            };
            let request: GraphRequest =
                serde_json::from_str(&source).context("Invalid graph request")?;
            info!(algorithm = %request.algorithm, nodes = request.graph.nodes.len(), "running graph algorithm");
            let response = graph::run(&request, &config).context("Graph run failed")?;
            print_json(&response, cli.pretty)
        }
        Commands::List { family } => match family {
            Some(family) => print_json(&catalog(family.into()), cli.pretty),
            None => {
                #[derive(Serialize)]
                struct Listing {
                    sorting: Vec<stepviz::request::AlgorithmInfo>,
                    graph: Vec<stepviz::request::AlgorithmInfo>,
                }
                let listing = Listing {
                    sorting: catalog(Family::Sorting),
                    graph: catalog(Family::Graph),
                };
                print_json(&listing, cli.pretty)
            }
        },
    }
}

fn engine_config(cli: &Cli) -> EngineConfig {
    let mut config = if cli.summary {
        EngineConfig::summary()
    } else {
        EngineConfig::default()
    };
    if let Some(mb) = cli.history_limit_mb {
        config.history_limit = mb.saturating_mul(1024 * 1024);
    }
    config
}

/// Logs go to stderr so stdout stays a clean JSON document
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("File '{}' not found", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
