use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use devops_docs_codegen::generator::{self, ModelGenerator};
use devops_docs_codegen::scraper::devops_scraper::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use devops_docs_codegen::scraper::{DevopsScraper, ScraperConfig, write_result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "devops-docs-codegen")]
#[command(about = "Azure DevOps REST reference scraper and model generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the REST API reference into a JSON file
    Scrape {
        #[arg(short, long, default_value = "devopsApi.json")]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_API_VERSION)]
        api_version: String,
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Pause up to this many milliseconds (randomized) between pages
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Generate model source files from a scrape result
    Generate {
        #[arg(short, long, default_value = "devopsApi.json")]
        input: PathBuf,
        /// Directory holding ClassTemplate.txt and PropertyTemplate.txt
        #[arg(short, long, default_value = "templates")]
        templates: PathBuf,
        #[arg(short, long, default_value = "Models")]
        output: PathBuf,
        #[arg(long, default_value = generator::pipeline::DEFAULT_NAMESPACE)]
        namespace: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            output,
            api_version,
            base_url,
            delay_ms,
        } => {
            println!("Scraping Azure DevOps REST API reference ({})...", api_version);
            let scraper = DevopsScraper::new(ScraperConfig {
                base_url,
                api_version,
                delay: delay_ms.map(Duration::from_millis),
            });
            let (result, report) = scraper
                .scrape_all()
                .await
                .context("failed to fetch the table of contents")?;

            write_result(&output, &result)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(
                "Processed {} pages: {} endpoints, {} models, {} failed",
                report.total,
                result.endpoints.len(),
                result.models.len(),
                report.failed
            );
            println!("Documentation saved to: {}", output.display());
        }
        Commands::Generate {
            input,
            templates,
            output,
            namespace,
        } => {
            let result = generator::load_result(&input)?;
            let renderer = generator::load_renderer(&templates, &namespace)?;
            let written = ModelGenerator::new(result, renderer).generate(&output)?;
            println!("Generated {} models in {}", written, output.display());
        }
    }

    Ok(())
}
