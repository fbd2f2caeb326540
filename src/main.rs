use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use akta::cli::{Cli, Command, OutputFormat, render_table};
use akta::report::{ReportContext, render_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "akta=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => {
            akta::api::run_http_server(args.socket_addr())
                .await
                .context("HTTP server stopped")?;
        }
        Command::Allocate { budget, format } => {
            let request = budget.into_request()?;
            let breakdown = request.allocate();
            match format {
                OutputFormat::Table => print!("{}", render_table(&request, &breakdown)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&breakdown)?);
                }
            }
        }
        Command::Report { budget, output } => {
            let request = budget.into_request()?;
            let context = ReportContext::for_request(&request);
            let path = output.unwrap_or_else(|| context.file_name().into());
            let bytes = render_report(&context)?;
            std::fs::write(&path, &bytes)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "report written");
        }
    }
    Ok(())
}
