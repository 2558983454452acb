//! SEI Dashboard CLI
//!
//! Command-line access to the dashboard backend:
//! - Show or watch trending topics
//! - Chat with the assistant
//! - Dump the latest block
//! - List posts
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use sei_dashboard::chat::{Author, ChatController, ChatOutcome};
use sei_dashboard::fetch::OneShot;
use sei_dashboard::render::{self, LOADING};
use sei_dashboard::{
    Config, DashboardApi, DashboardEvent, DashboardRuntime, HttpClient, PollOutcome, TopicsPoller,
};

#[derive(Parser)]
#[command(name = "sei-dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SEI Network Analytics from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show trending topics
    Topics {
        /// Keep polling and redraw on every update
        #[arg(short, long)]
        watch: bool,
    },

    /// Chat with the SEI assistant
    Chat,

    /// Show the latest block
    Block,

    /// List posts
    Posts,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    sei_dashboard::logging::init(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = sei_dashboard::config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let api = Arc::new(HttpClient::new(config.api.clone())?);

    match cli.command {
        Commands::Topics { watch: false } => {
            let mut poller = TopicsPoller::new(config.polling.period());
            if let Some(ticket) = poller.tick() {
                let result = api.trending_topics().await;
                if let PollOutcome::Failed { toast, .. } = poller.complete(ticket, result) {
                    eprintln!("[{}]", toast);
                }
            }

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(poller.topics())?);
            } else {
                println!("{}", poller.panel());
            }

            if let Some(reason) = poller.state().error() {
                tracing::error!("Trending topics unavailable: {}", reason);
                std::process::exit(1);
            }
        }

        Commands::Topics { watch: true } => {
            let (runtime, mut events) = DashboardRuntime::mount(api, config.polling.period());

            loop {
                tokio::select! {
                    event = events.recv() => match event {
                        Some(DashboardEvent::Topics(outcome)) => {
                            if let PollOutcome::Failed { toast, .. } = outcome {
                                eprintln!("[{}]", toast);
                            }
                            let dashboard = runtime.snapshot().await;
                            println!("{}\n", dashboard.topics.panel());
                        }
                        Some(_) => {}
                        None => break,
                    },
                    _ = tokio::signal::ctrl_c() => break,
                }
            }

            runtime.unmount().await;
        }

        Commands::Chat => run_chat(api.as_ref()).await?,

        Commands::Block => {
            let mut block = OneShot::new("block data");
            if let Some(ticket) = block.start() {
                let result = api.latest_block().await;
                block.resolve(ticket, result);
            }

            match block.loaded() {
                Some(data) => println!("{}", render::block_dump(data)),
                None => println!("{}", LOADING),
            }
        }

        Commands::Posts => {
            let mut posts = OneShot::new("posts");
            if let Some(ticket) = posts.start() {
                let result = api.posts().await;
                posts.resolve(ticket, result);
            }

            match posts.loaded() {
                Some(items) if cli.format == "json" => {
                    println!("{}", serde_json::to_string_pretty(items)?);
                }
                Some(items) => {
                    for (key, title) in render::post_items(items) {
                        println!("{:<10} {}", key, title);
                    }
                }
                None => println!("{}", LOADING),
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Line-based chat session. A line is typed input followed by Enter; an
/// empty line sends whatever a `/use N` put in the input.
async fn run_chat(api: &dyn DashboardApi) -> Result<(), Box<dyn std::error::Error>> {
    let mut chat = ChatController::new().with_on_send(|text| {
        tracing::info!("Chat message sent: {}", text);
    });

    println!("SEI Agent chat. Type a message and press Enter.");
    println!("  /use N   copy suggestion N of the last reply into the input");
    println!("  /quit    leave");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(prompt(chat.input()).as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if line.trim() == "/quit" {
            break;
        }

        if let Some(n) = line.trim().strip_prefix("/use ") {
            match suggestion(&chat, n) {
                Some(action) => {
                    chat.activate_suggestion(&action);
                }
                None => eprintln!("No suggestion {}", n.trim()),
            }
            continue;
        }

        if !line.trim().is_empty() {
            chat.set_input(line);
        }

        let start = chat.transcript().len();
        let Some(outgoing) = chat.on_key("Enter", false) else {
            continue;
        };

        let result = api.send_chat(&outgoing.text).await;
        if let ChatOutcome::Failed { toast, .. } = chat.resolve(outgoing.ticket, result) {
            eprintln!("[{}]", toast);
        }

        for message in &chat.transcript()[start..] {
            for line in render::message_lines(message) {
                println!("{}", line);
            }
        }
    }

    chat.unmount();
    Ok(())
}

fn prompt(input: &str) -> String {
    if input.is_empty() {
        "> ".to_string()
    } else {
        format!("> [{}] ", input)
    }
}

/// Suggestion `n` (1-based) of the most recent agent entry
fn suggestion(chat: &ChatController, n: &str) -> Option<String> {
    let index = n.trim().parse::<usize>().ok()?.checked_sub(1)?;
    chat.transcript()
        .iter()
        .rev()
        .find(|m| m.author == Author::Agent)?
        .suggested_actions
        .get(index)
        .cloned()
}
