use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vecalc::{
    config::Config,
    error::Diagnostic,
    evaluate,
    interpreter::{evaluator::core::Context, lexer::Lexer, value::core::Value},
    run,
};

/// vecalc is a calculator for exact integer, rational and vector arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells vecalc to read the file named by CONTENTS instead of evaluating
    /// CONTENTS directly.
    #[arg(short, long)]
    file: bool,

    /// printf-style format for integers, such as `%x`. Rationals use it for
    /// both numerator and denominator.
    #[arg(long)]
    format: Option<String>,

    /// Index origin for `[]` and `iota`.
    #[arg(long, default_value_t = 0)]
    origin: usize,

    /// Turns on a debug flag. `parse` prints each line's expression tree.
    #[arg(short, long, value_name = "FLAG")]
    debug: Vec<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Source text to evaluate. Reads standard input when absent.
    contents: Option<String>,
}

/// Prints one line's outcome and reports whether it succeeded.
fn report(result: Result<Value, Diagnostic>, config: &Config) -> bool {
    match result {
        Ok(value) => {
            println!("{}", value.render(config));
            true
        },
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let mut config = Config::new();
    if let Some(format) = &args.format {
        config.set_format(format);
    }
    config.set_origin(args.origin);
    for flag in &args.debug {
        config.set_debug(flag, true);
    }
    let mut context = Context::with_config(config);

    let mut ok = true;
    match args.contents {
        Some(path) if args.file => {
            let Ok(source) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            for result in evaluate(&mut context, &path, &source) {
                ok &= report(result, context.config());
            }
        },
        Some(source) => {
            for result in evaluate(&mut context, "<args>", &source) {
                ok &= report(result, context.config());
            }
        },
        None => {
            for (index, line) in io::stdin().lock().lines().enumerate() {
                let Ok(mut line) = line else {
                    eprintln!("Failed to read standard input.");
                    return ExitCode::FAILURE;
                };
                line.push('\n');

                for result in run(&mut context, Lexer::starting_at("<stdin>", &line, index + 1)) {
                    ok &= report(result, context.config());
                }
            }
        },
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
