use cbuild_locate::{locate, Artifact, LocateError, DEFAULT_ARTIFACT_KIND};
use clap::error::ErrorKind;
use clap::Parser;
use miette::Diagnostic;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "cbuild-locate")]
#[command(
    author,
    version,
    about = "Print the artifact path and target of the most recent CMSIS build"
)]
struct Cli {
    /// Path to the build index (*.cbuild-idx.yml)
    index: PathBuf,

    /// Output type label to resolve
    #[arg(long, default_value = DEFAULT_ARTIFACT_KIND)]
    artifact_type: String,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Log progress to stderr (-vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, LocateError> {
    debug!(index = %cli.index.display(), kind = %cli.artifact_type, "locating artifact");
    let artifact = locate(&cli.index, &cli.artifact_type)?;
    Ok(render(&artifact, cli.json))
}

fn render(artifact: &Artifact, json: bool) -> String {
    if json {
        serde_json::json!({
            "path": artifact.path.display().to_string(),
            "target": artifact.target.as_str(),
        })
        .to_string()
    } else {
        artifact.to_string()
    }
}

fn report(e: &LocateError) {
    let code = e.code().map(|c| c.to_string()).unwrap_or_default();
    match e.help() {
        Some(help) => debug!(code = %code, help = %help, "{}", e),
        None => debug!(code = %code, "{}", e),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
