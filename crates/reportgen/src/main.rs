use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reportgen_common::{logger, AppConfig};
use reportgen_report::{assemble, tier_requests, GenerateBody};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "reportgen")]
#[command(about = "reportgen - daily/weekly/monthly report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides SERVER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the prompt that would be sent for a request body
    Prompt {
        /// JSON request body file, `-` for stdin
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = AppConfig::from_env()?;
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;

            serve(config).await?;
        }
        Some(Commands::Prompt { file }) => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            print_prompt(&file)?;
        }
        None => {
            let config = AppConfig::from_env()?;
            serve(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    logger::init_logging(&config)?;

    tracing::info!("reportgen starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  LLM: {} ({})", config.llm_model, config.llm_base_url);

    println!("Server listening on http://{}", config.server_bind_address());

    reportgen_server::start_server(config).await?;
    Ok(())
}

fn read_body(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read request file {}", file.display()))
}

fn print_prompt(file: &Path) -> Result<()> {
    let body: GenerateBody =
        serde_json::from_str(&read_body(file)?).context("Invalid request JSON")?;
    let comparison = body.comparison;
    let request = body.into_request()?;

    if comparison {
        let (free_request, pro_request) = tier_requests(&request);
        let free = assemble(&free_request)?;
        let pro = assemble(&pro_request)?;
        println!("【免费版】\n{}\n\n【Pro版】\n{}", free.text, pro.text);
    } else {
        println!("{}", assemble(&request)?.text);
    }

    Ok(())
}
