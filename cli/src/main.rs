//! drift - compile regular expressions directly to DFAs.
//!
//! This is the entry point for the drift binary: it builds an automaton from
//! the given pattern(s) and writes a Graphviz dot description of it.

use std::env;
use std::fs;
use std::process;

use drift_cli::dot;
use drift_dfa::Dfa;
use drift_syntax::SyntaxTree;

/// The pattern compiled when none is given on the command line.
const DEFAULT_PATTERN: &str = "(a|b)*abb";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut patterns: Vec<String> = Vec::new();
    let mut output: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--output" => match iter.next() {
                Some(path) => output = Some(path.clone()),
                None => {
                    eprintln!("Error: {arg} requires a file argument");
                    process::exit(1);
                }
            },
            _ => patterns.push(arg.clone()),
        }
    }

    if patterns.is_empty() {
        patterns.push(DEFAULT_PATTERN.to_string());
    }

    let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
    let tree = match SyntaxTree::parse_many(&patterns) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let dfa = match Dfa::build(&tree) {
        Ok(dfa) => dfa,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let text = dot::render(&dfa);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, text) {
                eprintln!("Error writing {path}: {e}");
                process::exit(1);
            }
        }
        None => print!("{text}"),
    }
}

fn print_usage() {
    println!("Usage: drift [PATTERN ...] [-o FILE]");
    println!();
    println!("Compile regular expression patterns directly to a DFA and print");
    println!("its Graphviz dot description.");
    println!();
    println!("  PATTERN        pattern(s) to compile; several patterns build one");
    println!("                 multiplexed automaton (default: {DEFAULT_PATTERN})");
    println!("  -o, --output   write the dot text to FILE instead of stdout");
    println!("  -h, --help     show this help");
}
