use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{BufRead, BufWriter, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn, Instrument};

use command_normalizer as norm;
use norm::{CommandNormalizer, CommandResponse, NormalizerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cmdnorm",
    version,
    about = "Saorsa Robotics command normalizer",
    disable_help_subcommand = true
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Skip spelling correction
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    no_correct: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize free text to a canonical command
    Normalize {
        /// Text to normalize
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the JSON response object instead of the bare command
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Show every pipeline stage as JSON
    Explain {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print the detected language
    Detect {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Read JSON requests from stdin, one per line, and answer on stdout
    Stdio,
    /// Serve JSON-lines requests over TCP
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:7878")]
        addr: String,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let normalizer = build_normalizer(cli.config.as_deref(), cli.no_correct)?;

    match cli.command {
        Commands::Normalize { text, json } => normalize_cmd(&normalizer, &text.join(" "), json),
        Commands::Explain { text } => explain_cmd(&normalizer, &text.join(" ")),
        Commands::Detect { text } => {
            let language = norm::detect_language(&text.join(" "));
            println!("{} ({})", language, language.code());
            Ok(())
        }
        Commands::Stdio => stdio_cmd(&normalizer),
        Commands::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            runtime.block_on(serve_cmd(Arc::new(normalizer), &addr))
        }
    }
}

fn build_normalizer(config_path: Option<&str>, no_correct: bool) -> Result<CommandNormalizer> {
    let mut config = match config_path {
        Some(path) => norm::load_config_file(path)?,
        None => NormalizerConfig::default(),
    };
    if no_correct {
        config.correct_spelling = false;
    }
    norm::init().map_err(|e| anyhow::anyhow!("Failed to init command normalizer: {}", e))?;
    let normalizer = CommandNormalizer::new(config).context("building normalizer")?;
    info!(config = ?normalizer.config(), "normalizer ready");
    Ok(normalizer)
}

fn normalize_cmd(normalizer: &CommandNormalizer, text: &str, json: bool) -> Result<()> {
    let command = normalizer.normalize(text);
    if json {
        println!("{}", serde_json::to_string(&CommandResponse { command })?);
    } else {
        println!("{command}");
    }
    Ok(())
}

fn explain_cmd(normalizer: &CommandNormalizer, text: &str) -> Result<()> {
    let report = normalizer.process(text);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn stdio_cmd(normalizer: &CommandNormalizer) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = norm::handle_request_line(normalizer, &line);
        writeln!(out, "{reply}")?;
        out.flush()?;
    }
    Ok(())
}

async fn serve_cmd(normalizer: Arc<CommandNormalizer>, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on {}", listener.local_addr()?);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!("accept failed: {}", e);
                        continue;
                    }
                };
                let session = uuid::Uuid::new_v4();
                let span = tracing::info_span!("session", %session, %peer);
                let normalizer = Arc::clone(&normalizer);
                tokio::spawn(
                    async move {
                        if let Err(e) = serve_connection(normalizer, stream).await {
                            error!("session ended with error: {:#}", e);
                        }
                    }
                    .instrument(span),
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                return Ok(());
            }
        }
    }
}

async fn serve_connection(normalizer: Arc<CommandNormalizer>, stream: TcpStream) -> Result<()> {
    info!("client connected");
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();
    let mut handled = 0u64;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let mut reply = norm::handle_request_line(&normalizer, &line);
        reply.push('\n');
        writer.write_all(reply.as_bytes()).await?;
        handled += 1;
    }
    info!(handled, "client disconnected");
    Ok(())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
