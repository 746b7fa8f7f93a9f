//! HPO Explorer - Binary Entry Point
//!
//! Loads the ontology once, then serves MCP over stdio (default), serves
//! the REST API, exports the terms, or answers a single query.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hpo_explorer::ontology::export;
use hpo_explorer::tools::register_all_tools;
use hpo_explorer::{ExplorerConfig, McpResult, McpServer, ServerInfo, TermSearchEngine};

#[derive(Parser, Debug)]
#[command(name = "hpo-server")]
#[command(version)]
#[command(about = "Search and ancestor lookup over OBO ontologies", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the OBO file (overrides HPO_ONTOLOGY_PATH)
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,

    /// Entries per query cache, 0 disables caching (overrides HPO_CACHE_CAPACITY)
    #[arg(long, global = true)]
    cache_capacity: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdio
    Serve,

    /// Serve the REST API
    Http {
        /// Listen address (overrides HPO_HTTP_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Export terms as JSON and/or JSONL (both when no flag is given)
    Export {
        /// Write the JSON dump
        #[arg(long, num_args = 0..=1, default_missing_value = "hp.json")]
        json: Option<PathBuf>,

        /// Write the JSONL prompt/completion file
        #[arg(long, num_args = 0..=1, default_missing_value = "hp.jsonl")]
        jsonl: Option<PathBuf>,
    },

    /// Search terms and print the results as JSON
    Search {
        query: String,

        #[arg(long, short = 'l')]
        limit: Option<usize>,
    },

    /// Print the ancestors of a term as JSON
    Superterms {
        term_id: String,

        #[arg(long, short = 'd')]
        distance: Option<usize>,
    },
}

fn main() -> McpResult<()> {
    // Logs go to stderr; stdout carries the MCP channel and query output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hpo_explorer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ExplorerConfig::from_env()?;
    if let Some(path) = cli.ontology {
        config = config.with_ontology_path(path);
    }
    if let Some(capacity) = cli.cache_capacity {
        config = config.with_cache_capacity(capacity);
    }
    if let Some(Command::Http { addr: Some(addr) }) = &cli.command {
        config = config.with_http_addr(addr.clone());
    }
    config.log_config();

    let engine = Arc::new(TermSearchEngine::from_config(&config)?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let server_info = ServerInfo::new("hpo".to_string(), hpo_explorer::VERSION.to_string());
            let mut server = McpServer::with_info(server_info);
            register_all_tools(&mut server, engine);
            server.run()
        }
        Command::Http { .. } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(hpo_explorer::api::serve(engine, &config.http_addr))?;
            Ok(())
        }
        Command::Export { json, jsonl } => {
            let (json, jsonl) = match (json, jsonl) {
                (None, None) => (Some(PathBuf::from("hp.json")), Some(PathBuf::from("hp.jsonl"))),
                paths => paths,
            };
            let ontology = engine.ontology();
            if let Some(path) = json {
                export::export_json(ontology, path)?;
            }
            if let Some(path) = jsonl {
                export::export_jsonl(ontology, path)?;
            }
            Ok(())
        }
        Command::Search { query, limit } => {
            let results = engine.find_terms(&query, limit);
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Command::Superterms { term_id, distance } => {
            let superterms = engine.get_superterms(&term_id, distance);
            println!("{}", serde_json::to_string_pretty(&superterms)?);
            Ok(())
        }
    }
}
