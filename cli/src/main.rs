// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! # tqa — translation quality assessment service
//!
//! - `tqa serve` runs the HTTP API in front of the selected model runtime.
//! - `tqa seed` loads the initial prompt records from a directory of prompt
//!   files (filename stem becomes the prompt id).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tqa_core::application::EvaluationService;
use tqa_core::infrastructure::backend::{BackendRegistry, HttpModelInvoker};
use tqa_core::infrastructure::prompt_store::{
    create_prompt_store, seed_from_dir, PromptStoreBackend,
};
use tqa_core::presentation::app;

/// Translation quality assessment service
#[derive(Parser)]
#[command(name = "tqa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TQA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Prompt store location
    #[arg(
        long,
        global = true,
        env = "TQA_STORE_PATH",
        default_value = "data/prompts.db",
        value_name = "DIR"
    )]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// HTTP API host
        #[arg(long, env = "TQA_HOST", default_value = "127.0.0.1")]
        host: String,

        /// HTTP API port
        #[arg(long, env = "TQA_PORT", default_value = "8000")]
        port: u16,

        /// Base URL of the model runtime
        #[arg(
            long,
            env = "TQA_MODEL_ENDPOINT",
            default_value = "http://127.0.0.1:8400"
        )]
        model_endpoint: String,
    },

    /// Seed the prompt store from a directory of prompt files
    Seed {
        /// Directory of prompt files
        #[arg(long, default_value = "prompts", value_name = "DIR")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let store = create_prompt_store(PromptStoreBackend::Sled {
        path: cli.store_path.clone(),
    })
    .with_context(|| format!("opening prompt store at {}", cli.store_path.display()))?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            model_endpoint,
        } => {
            let invoker = Arc::new(HttpModelInvoker::new(model_endpoint));
            let service = Arc::new(EvaluationService::new(
                store,
                invoker,
                BackendRegistry::with_defaults(),
            ));

            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .context("invalid host/port")?;
            info!(%addr, "starting tqa service");

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            axum::serve(listener, app(service))
                .await
                .context("serving HTTP API")?;
            Ok(())
        }
        Commands::Seed { dir } => {
            let seeded = seed_from_dir(store.as_ref(), &dir).await?;
            info!(seeded, dir = %dir.display(), "prompt store seeded");
            println!("Seeded {} prompt(s) from {}", seeded, dir.display());
            Ok(())
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{}'", level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
