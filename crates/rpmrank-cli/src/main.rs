use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use clap_verbosity_flag::Verbosity;
use rpmrank_core::{validate_records, PackageRecord, ProviderIndex};
use rpmrank_graph::{break_cycles, build_graph, most_popular_packages, RankedPackage};

mod render;

#[derive(Debug, Parser)]
#[command(
    name = "rpmrank",
    about = "Rank installed RPM packages by transitive popularity",
    version
)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the most popular installed packages above the size threshold
    Rank {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Maximum number of packages to print
        #[arg(long, default_value_t = 125)]
        limit: usize,
        /// Minimum installed size in bytes for a package to qualify
        #[arg(long = "size-threshold", default_value_t = 5 * 1024 * 1024)]
        size_threshold: u64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Print the dependency edge list after cycle elimination
    Edges {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, clap::Args)]
struct CatalogArgs {
    /// Installation root whose rpm database to query
    #[arg(long, default_value = "/")]
    root: PathBuf,
    /// Read packages from a JSON snapshot file instead of an rpm database
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

fn main() {
    if let Err(err) = try_main() {
        render::error("error", err.to_string());
        err.chain()
            .skip(1)
            .for_each(|cause| eprintln!("caused by: {cause}"));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Commands::Rank {
            catalog,
            limit,
            size_threshold,
            format,
        } => {
            let records = load_records(&catalog)?;
            let index = ProviderIndex::build(&records);
            let ranked = most_popular_packages(
                &records,
                |requirement| Ok(index.providers_of(requirement)),
                limit,
                size_threshold,
            )?;
            render::ok(
                "Ranked",
                format!(
                    "selected {} of {} installed packages",
                    ranked.len(),
                    records.len()
                ),
            );
            match format {
                OutputFormat::Plain => {
                    for line in format_plain(&ranked) {
                        println!("{line}");
                    }
                }
                OutputFormat::Json => println!("{}", format_json(&ranked)?),
            }
        }
        Commands::Edges { catalog } => {
            let records = load_records(&catalog)?;
            validate_records(&records)?;
            let index = ProviderIndex::build(&records);
            let graph = break_cycles(build_graph(&records, |requirement| {
                Ok(index.providers_of(requirement))
            })?);
            for node in graph.nodes() {
                for dep in graph.dependencies(node) {
                    println!("{node} -> {dep}");
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "rpmrank", &mut io::stdout());
        }
    }

    Ok(())
}

fn load_records(args: &CatalogArgs) -> Result<Vec<PackageRecord>> {
    match &args.snapshot {
        Some(path) => rpmrank_catalog::load_snapshot(path),
        None => rpmrank_catalog::load_installed_from_root(&args.root),
    }
}

fn format_plain(ranked: &[RankedPackage]) -> Vec<String> {
    ranked
        .iter()
        .map(|pkg| format!("{}\t{}\t{}", pkg.name, pkg.score, pkg.size))
        .collect()
}

fn format_json(ranked: &[RankedPackage]) -> Result<String> {
    let entries: Vec<serde_json::Value> = ranked
        .iter()
        .map(|pkg| {
            serde_json::json!({
                "name": pkg.name,
                "score": pkg.score,
                "size": pkg.size,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests;
