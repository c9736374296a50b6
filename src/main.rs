use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use receipt_points::application::service::ReceiptService;
use receipt_points::config::ServerConfig;
use receipt_points::domain::points;
use receipt_points::domain::ports::{IdGeneratorBox, ScoreStoreBox};
use receipt_points::infrastructure::id_generator::UuidGenerator;
use receipt_points::infrastructure::in_memory::InMemoryScoreStore;
use receipt_points::interfaces::http::receipt_router;
use receipt_points::interfaces::json::receipt_reader::ReceiptReader;
use receipt_points::logging::init_logger;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Scores purchase receipts over HTTP", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        #[command(flatten)]
        server: ServerConfig,
    },

    /// Score a receipt JSON file without starting the server
    Score {
        /// Receipt JSON file
        input: PathBuf,

        /// Print the points awarded by each rule
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Serve { server } => serve(server).await,
        Command::Score { input, explain } => score(input, explain),
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    let store: ScoreStoreBox = Box::new(InMemoryScoreStore::new());
    let ids: IdGeneratorBox = Box::new(UuidGenerator::new());
    let service = Arc::new(ReceiptService::new(store, ids));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .into_diagnostic()?;
    info!("listening on http://{}", addr);

    axum::serve(listener, receipt_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("server stopped");
    Ok(())
}

fn score(input: PathBuf, explain: bool) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let receipt = ReceiptReader::new(file).receipt().into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if explain {
        for (rule, awarded) in points::breakdown(&receipt) {
            writeln!(out, "{rule}: {awarded}").into_diagnostic()?;
        }
        writeln!(out, "total: {}", points::score(&receipt)).into_diagnostic()?;
    } else {
        writeln!(out, "{}", points::score(&receipt)).into_diagnostic()?;
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
