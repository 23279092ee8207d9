//! `parse_vcl` - a thin CLI shell over the VCL front-end.
//!
//! Reads a `.vcl` file, runs it through [`vclc_par::parse`], and either
//! pretty-prints the resulting tree or JSON-encodes it via the
//! [`vclc_par::json::JsonExporter`] visitor. The driver owns none of the
//! front-end logic itself - lexing, parsing, and AST traversal all live
//! in `vclc-lex`/`vclc-par`; this binary is only argument parsing, file
//! I/O, diagnostic formatting, and output serialization.

mod json;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse a VCL 4.x source file and print its syntax tree.
#[derive(Parser, Debug)]
#[command(name = "parse_vcl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse a VCL file and print its AST", long_about = None)]
struct Cli {
    /// VCL source file to parse
    file: PathBuf,

    /// Emit the AST as JSON instead of the default pretty-printed form
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let filename = cli.file.display().to_string();
    tracing::debug!(file = %filename, "reading source");

    let source = std::fs::read_to_string(&cli.file)
        .map_err(|e| anyhow::anyhow!("failed to read {filename}: {e}"))?;

    let program = vclc_par::parse(&source, &filename).map_err(|err| {
        let snippet = vclc_util::render_snippet(&source, &err.position);
        let mut message = format!("{err}");
        if let Some(snippet) = snippet {
            message.push('\n');
            message.push_str(&snippet);
        }
        anyhow::anyhow!(message)
    })?;

    if cli.json {
        let mut exporter = vclc_par::json::JsonExporter;
        let tree = program.accept(&mut exporter);
        let value = json::to_serde_json(&tree);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let text = vclc_par::pretty::PrettyPrinter::new().print(&program);
        print!("{text}");
    }

    Ok(())
}
