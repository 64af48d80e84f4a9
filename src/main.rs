use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use petrel::{error::RunError, interpreter::environment::Environment, repl, run_source};

/// petrel is a small, dynamically typed expression language with integers,
/// strings, lists and first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file. Starts the interactive REPL when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => {
            println!("This is the petrel programming language!");
            println!("Feel free to type in commands");

            let stdin = io::stdin();
            if let Err(e) = repl::start(stdin.lock(), io::stdout()) {
                eprintln!("{e}");
                process::exit(1);
            }
        },
    }
}

fn run_file(path: &std::path::Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        process::exit(1);
    });

    let env = Environment::new();

    match run_source(&source, &env) {
        Ok(_) => {},
        Err(RunError::Parse(errors)) => {
            for error in errors {
                eprintln!("{error}");
            }
            process::exit(1);
        },
        Err(RunError::Runtime(error)) => {
            eprintln!("{error}");
            process::exit(1);
        },
    }
}
