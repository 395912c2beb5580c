//! Ember Language CLI
//!
//! Command-line interface for the Ember language front end.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use ember_lang::{tokenize, Diagnostic, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Ember v{} - Language Front End", VERSION);
        println!("Type 'quit' to leave\n");
        repl();
        return;
    }

    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        if let Err(e) = show_file_tokens(file) {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: ember [OPTIONS] [script]");
    eprintln!("       ember --help");
}

fn print_help() {
    println!("Ember v{} - A minimal imperative language", VERSION);
    println!();
    println!("USAGE:");
    println!("    ember [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    ember script.mbr    Tokenize a script and print the tokens");
    println!("    ember               Start the interactive tokenizer");
    println!();
    println!("IMPLEMENTATION STATUS:");
    println!("    ✅ Phase 1: Project Setup & Error Handling");
    println!("    ✅ Phase 2: Lexer (Tokenization)");
    println!("    ⏳ Phase 3: Parser (AST Generation)");
    println!("    ⏳ Phase 4: Code Generation");
}

/// Tokenize a script and print the token stream
fn show_file_tokens(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let tokens = tokenize(&source)
        .map_err(|e| Diagnostic::with_source(e, &source).to_string())?;

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:16} | {:?}",
            i,
            format!("{:?}", token.kind),
            token.value
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    Ok(())
}

/// Start an interactive tokenizer loop
fn repl() {
    let mut line_number = 1;

    loop {
        print!("ember:{} > ", line_number);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                // 'exit' is an Ember keyword, so the REPL leaves on 'quit'
                if input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                match tokenize(input) {
                    Ok(tokens) => {
                        for token in &tokens {
                            println!("{}", token);
                        }
                    }
                    Err(e) => eprintln!("{}", Diagnostic::with_source(e, input)),
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
