mod ui;

use crate::ui::{
    create_spinner, log_error, log_success, print_banner, print_query_help, print_results,
    print_stat_names,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use coryn::{stat_names, suggest_stats, Catalog, CatalogHandle, ConfigManager, SearchEngine};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coryn")]
#[command(about = "Search items by name, category (all <type>) or stat (stat:<name>)")]
struct Cli {
    /// Directory holding coryn.toml
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query
    Search {
        query: Vec<String>,
        #[arg(short = 'k', long)]
        limit: Option<usize>,
        /// Lowest stat values first
        #[arg(long, action)]
        ascending: bool,
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Read queries from stdin until :quit
    Browse {
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// List stat names present in the dataset
    Stats {
        filter: Option<String>,
        #[arg(long)]
        min: Option<usize>,
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    Config {
        #[arg(long)]
        set_dataset: Option<PathBuf>,
        #[arg(long)]
        set_limit: Option<usize>,
        #[arg(long, action)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    print_banner();
    if let Err(e) = run().await {
        log_error(&format!("{:#}", e));
        exit(1);
    }
}

async fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let spinner = create_spinner(&format!("Loading items from {}...", path.display()));
    let owned = path.to_path_buf();
    let catalog = tokio::task::spawn_blocking(move || Catalog::load(&owned)).await?;
    spinner.finish_and_clear();
    catalog.with_context(|| format!("failed to load dataset {}", path.display()))
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_manager = ConfigManager::new(&cli.root);
    let mut config = config_manager.load().await?;
    let engine = SearchEngine::new(config.search.clone());

    match cli.command {
        Commands::Search {
            query,
            limit,
            ascending,
            dataset,
        } => {
            let catalog = load_catalog(&dataset.unwrap_or(config.dataset)).await?;
            let k = limit.unwrap_or(config.search.limit);
            let ascending = ascending || config.search.ascending;
            let results = engine.search(&query.join(" "), catalog.items(), k, ascending)?;
            println!("{}", "SEARCH RESULTS".bold().underline());
            print_results(&results);
        }
        Commands::Browse { dataset } => {
            let path = dataset.unwrap_or(config.dataset);
            let handle = CatalogHandle::new(load_catalog(&path).await?);
            browse(&engine, &handle, &path).await?;
        }
        Commands::Stats { filter, min, dataset } => {
            let catalog = load_catalog(&dataset.unwrap_or(config.dataset)).await?;
            let names = stat_names(catalog.items(), min.unwrap_or(config.stat_min_occurrence));
            print_stat_names(&suggest_stats(&names, filter.as_deref().unwrap_or_default()));
        }
        Commands::Config {
            set_dataset,
            set_limit,
            show,
        } => {
            if set_dataset.is_none() && set_limit.is_none() {
                if show {
                    println!("Current Configuration ({}):", config_manager.path().display());
                    println!("   Dataset:         {}", config.dataset.display());
                    println!("   Name cutoff:     {}", config.search.name_cutoff);
                    println!("   Category cutoff: {}", config.search.category_cutoff);
                    println!("   Limit:           {}", config.search.limit);
                } else {
                    println!("Use --show, --set-dataset <PATH> or --set-limit <N>");
                }
                return Ok(());
            }
            if let Some(path) = set_dataset {
                config.dataset = path;
            }
            if let Some(limit) = set_limit {
                config.search.limit = limit;
            }
            config_manager.save(&config).await?;
            log_success("Configuration updated.");
        }
    }

    Ok(())
}

/// Paging position for the last query, kept by the loop rather than globally.
struct Page {
    query: String,
    snapshot: Arc<Catalog>,
    shown: usize,
}

async fn browse(
    engine: &SearchEngine,
    handle: &CatalogHandle,
    path: &Path,
) -> anyhow::Result<()> {
    let page_size = engine.options().limit;
    let ascending = engine.options().ascending;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut page: Option<Page> = None;

    print_query_help();
    println!("Type a query, :more, :reload, :help or :quit");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            ":quit" | ":q" => break,
            ":help" => print_query_help(),
            ":reload" => match load_catalog(path).await {
                Ok(catalog) => {
                    handle.replace(catalog);
                    log_success(&format!("Reloaded {} items", handle.snapshot().len()));
                }
                Err(e) => log_error(&format!("{:#}", e)),
            },
            ":more" => match page.as_mut() {
                Some(p) => show_page(engine, p, page_size, ascending)?,
                None => println!("Nothing to page through yet"),
            },
            "" => {}
            query => {
                let mut p = Page {
                    query: query.to_string(),
                    snapshot: handle.snapshot(),
                    shown: 0,
                };
                show_page(engine, &mut p, page_size, ascending)?;
                page = Some(p);
            }
        }
    }

    Ok(())
}

fn show_page(
    engine: &SearchEngine,
    page: &mut Page,
    page_size: usize,
    ascending: bool,
) -> anyhow::Result<()> {
    let results = engine.search(
        &page.query,
        page.snapshot.items(),
        page.shown + page_size,
        ascending,
    )?;
    let end = results.len().min(page.shown + page_size);
    if page.shown >= end {
        if page.shown == 0 {
            print_results(&[]);
        } else {
            println!("No more results");
        }
        return Ok(());
    }

    print_results(&results[page.shown..end]);
    println!(
        "{}",
        format!("Showing {}-{} of {}+", page.shown + 1, end, results.len()).dimmed()
    );
    page.shown = end;
    Ok(())
}
