use std::{fs::read_to_string, path::PathBuf, process::ExitCode, sync::Arc, time::Instant};

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use fax::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_program},
    render_error,
};

/// Tokenizes and parses a fax source file.
#[derive(Debug, Parser)]
#[command(name = "fax")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to read
    file: PathBuf,

    /// What to print once the file has been read
    #[arg(long, value_enum, default_value_t = Emit::Source)]
    emit: Emit,

    /// Parse a single statement instead of a whole program
    #[arg(long)]
    expression: bool,

    /// Increase log verbosity (-v debug, -vv trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Source,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "fax=warn",
        1 => "fax=debug",
        _ => "fax=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %args.file.display(), "failed to read source file");
            eprintln!("Error: could not read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &source, &file_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, source: &str, file_name: &str) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize(source, Some(file_name))?;
    debug!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if args.emit == Emit::Tokens {
        for token in &tokens {
            println!("{:>5}..{:<5} {}", token.span.start.0, token.span.end.0, token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let body: Vec<Expr> = if args.expression {
        parse(tokens, Arc::from(file_name))?
    } else {
        parse_program(tokens, Arc::from(file_name))?
    };
    debug!(elapsed = ?parse_start.elapsed(), statements = body.len(), "parsed");

    match args.emit {
        Emit::Ast => println!("{:#?}", body),
        _ => {
            for stmt in &body {
                println!("{}", stmt);
            }
        }
    }

    Ok(())
}
