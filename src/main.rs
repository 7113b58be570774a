use clap::{Parser, Subcommand};
use job_board::{client::HttpJobsClient, config::Config, tui, utils, JobsApi};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "job-board", about = "Browse and manage job listings from the terminal")]
struct Cli {
    /// Base URL of the listings API, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory for TUI log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive board (default)
    Tui {
        /// Path to open first
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print job listings as JSON
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one job as JSON
    Show { id: String },
    /// Delete a job
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, command line flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(log_dir) = cli.log_dir {
        config.logging.log_dir = log_dir;
    }

    let command = cli.command.unwrap_or(Command::Tui {
        path: "/".to_string(),
    });

    if let Command::Tui { path } = &command {
        let _guard = utils::init_file_logging(&config.logging.log_dir)?;
        info!("Logging to {}", config.logging.log_dir.display());
        return tui::run(config, path).await;
    }

    utils::init_stderr_logging()?;
    let api = HttpJobsClient::from_config(&config.api)?;

    match command {
        Command::List { limit } => {
            let jobs = api.list_jobs(limit).await?;
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        Command::Show { id } => {
            let job = api.get_job(&id).await?;
            println!("{}", serde_json::to_string_pretty(&job)?);
        }
        Command::Delete { id } => {
            api.delete_job(&id).await?;
            info!("Deleted job {}", id);
        }
        Command::Tui { .. } => {}
    }

    Ok(())
}
