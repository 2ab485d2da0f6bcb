use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use minichat::{
    api::ChatApi,
    chat::ChatClient,
    config::{default_config_path, load_config, validate_config},
    logging::init_logging,
    repl::run_repl,
    ui::run_ui,
    App,
};
use std::{fs, io, path::PathBuf};
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "minichat", version, about = "Minimal terminal chat client")]
struct Cli {
    /// Chat endpoint, e.g. http://127.0.0.1:5000/chat
    #[arg(long, env = "MINICHAT_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,

    /// Path to JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Line-mode prompt instead of the full-screen view
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?
        .with_endpoint_override(cli.endpoint);
    validate_config(&config)?;

    let log_dir = config.resolved_log_dir()?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let _logger = init_logging(&config.log_level, &log_dir)?;
    log::info!("using endpoint {}", config.endpoint);

    let (client, replies) = ChatClient::new(ChatApi::new(config.endpoint));

    if cli.plain {
        let stdin = BufReader::new(tokio::io::stdin());
        run_repl(client, replies, stdin, &mut io::stdout()).await
    } else {
        run_ui(App::new(client), replies).await
    }
}
