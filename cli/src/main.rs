//! triptych CLI binary: research → summarize → critique a topic, or serve the web page.
//!
//! Subcommands: `run` (one topic, or an interactive loop with `-i`), `serve` (HTTP).

mod logging;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use cli::{build_pipeline, render_json, render_text, topic_from_words, PipelineOptions};
use tokio::io::{AsyncBufReadExt, BufReader};
use triptych::{MemoryScope, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "triptych")]
#[command(about = "Triptych: research a topic, summarize it, critique the summary")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Verbose: debug logs and stage enter/exit on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use an offline mock gateway that echoes prompts (no API key needed)
    #[arg(long, global = true)]
    mock: bool,

    /// Memory scope: `process` (runs share one transcript) or `per-run`; overrides TRIPTYCH_MEMORY_SCOPE
    #[arg(long, global = true, value_name = "SCOPE")]
    memory_scope: Option<MemoryScope>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the pipeline for a topic and print research, summary and feedback
    Run(RunArgs),
    /// Serve the web page (GET/POST /) on http://127.0.0.1:8000 or TRIPTYCH_ADDR
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    /// Topic words (joined with spaces)
    topic: Vec<String>,

    /// Read further topics from stdin, one per line, sharing this process's memory
    #[arg(short, long)]
    interactive: bool,

    /// Print a JSON object instead of text
    #[arg(long)]
    json: bool,

    /// With --json, pretty-print
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default: TRIPTYCH_ADDR or 127.0.0.1:8000)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,

    /// Directory served at /static (default: TRIPTYCH_STATIC_DIR or ./static)
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,
}

async fn run_topic(
    pipeline: &Pipeline,
    topic: &str,
    args: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = pipeline.run(topic).await?;
    let rendered = if args.json {
        render_json(topic, &output, args.pretty)?
    } else {
        render_text(topic, &output)
    };
    println!("{}", rendered);
    std::io::stdout().flush()?;
    Ok(())
}

async fn run_command(pipeline: Pipeline, args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.interactive {
        let topic = topic_from_words(&args.topic)?;
        return run_topic(&pipeline, &topic, args).await;
    }

    if let Ok(topic) = topic_from_words(&args.topic) {
        run_topic(&pipeline, &topic, args).await?;
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("topic> ");
        std::io::stderr().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let topic = line.trim();
        if topic.is_empty() {
            continue;
        }
        if let Err(e) = run_topic(&pipeline, topic, args).await {
            eprintln!("error: {}", e);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_result = config::load_and_apply("triptych", None::<&std::path::Path>);
    let args = Args::parse();
    let _log_guard = logging::init(args.verbose)?;
    match config_result {
        Ok(applied) => tracing::debug!(?applied, "config applied"),
        Err(e) => tracing::warn!(error = %e, "config not loaded"),
    }

    let options = PipelineOptions {
        mock: args.mock,
        verbose: args.verbose,
        memory_scope: args.memory_scope,
    };
    let pipeline = match build_pipeline(&options) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("triptych: {}", e);
            std::process::exit(1);
        }
    };

    match &args.cmd {
        Command::Serve(sa) => {
            let mut state = serve::AppState::new(Arc::new(pipeline));
            if let Some(dir) = &sa.static_dir {
                state = state.with_static_dir(dir);
            }
            if let Err(e) = serve::run_serve(sa.addr.as_deref(), Arc::new(state)).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Run(ra) => {
            if let Err(e) = run_command(pipeline, ra).await {
                eprintln!("triptych: {}", e);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
