#![warn(clippy::all, clippy::pedantic)]

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use flowcap::{
    flow_table, run_queries, sink_summary, to_dot, CapacityMatrix, FlowQuery, Link,
};

/// Max-flow capacity analysis over a logistics network.
#[derive(Debug, Parser)]
#[command(name = "flowcap-cli", version)]
struct Args {
    /// CSV of capacitated links (columns: from,to,capacity)
    #[arg(long)]
    links: PathBuf,

    /// Number of nodes in the network
    #[arg(long)]
    nodes: usize,

    /// CSV of flow queries (columns: source,sink)
    #[arg(long)]
    queries: PathBuf,

    /// Markdown report output path
    #[arg(long)]
    report: PathBuf,

    /// Optional Graphviz DOT output path
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Log every per-query result
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn read_links(path: &Path) -> Result<Vec<Link<i64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let links = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(links)
}

fn read_queries(path: &Path) -> Result<Vec<FlowQuery>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let queries = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(queries)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.quiet {
        LevelFilter::Warn
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let links = read_links(&args.links)?;
    let network = CapacityMatrix::from_links(args.nodes, &links)?;
    let queries = read_queries(&args.queries)?;

    let outcomes = run_queries(&network, &queries);
    let failed = outcomes.iter().filter(|o| o.flow.is_err()).count();

    log::info!("----------------------------------");
    log::info!("      nodes = {}", network.nodes());
    log::info!("      links = {}", network.edge_count());
    log::info!("    queries = {}", outcomes.len());
    log::info!("     failed = {failed}");

    let mut md = String::from("## Flows between sources and sinks\n\n");
    md.push_str(&flow_table(&outcomes));
    md.push_str("\n## Best-achievable flow per sink\n\n");
    md.push_str(&sink_summary(&outcomes));
    fs::write(&args.report, md)?;
    log::info!("report written to {}", args.report.display());

    if let Some(dot_path) = &args.dot {
        fs::write(dot_path, to_dot(&network))?;
        log::info!("network graph written to {}", dot_path.display());
    }

    Ok(())
}
