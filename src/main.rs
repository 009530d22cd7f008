//! Interactive shell over the resolution engine.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use log::{debug, info, warn};
use microprolog::{
    Clause, Engine, EngineConfig, Substitution, SymbolMatching, DEFAULT_MAX_DEPTH,
    MAX_DEPTH_LIMIT,
};

const HELP: &str = "\
  voli(ivan, ana).                          add a fact
  prijatelj(X, Y) :- voli(X, Y), voli(Y, X). add a rule
  ?- prijatelj(ivan, ana)                   run a query
  facts                                     list facts
  rules                                     list rules
  help                                      show this text
  quit                                      leave";

/// Arguments of the shell
#[derive(Debug, Parser)]
#[command(version, about = "Interactive backward-chaining resolution shell")]
struct Arguments {
    /// Files with one clause per line, loaded before the prompt
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Depth at which a sub-goal is abandoned, at most 1000
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Unify terms by arity and arguments only, ignoring predicate symbols
    #[arg(long)]
    ignore_symbols: bool,

    /// Print query results as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.max_depth > MAX_DEPTH_LIMIT {
        warn!(
            "--max-depth {} is above the limit, using {MAX_DEPTH_LIMIT}",
            args.max_depth
        );
    }
    let symbols = if args.ignore_symbols {
        SymbolMatching::Ignore
    } else {
        SymbolMatching::Exact
    };
    let mut engine = Engine::with_config(
        EngineConfig::default()
            .with_max_depth(args.max_depth)
            .with_symbols(symbols),
    );

    for path in &args.paths {
        load_file(&mut engine, path)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "| ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "facts" => {
                for fact in engine.list_facts() {
                    println!("{fact}.");
                }
            }
            "rules" => {
                for rule in engine.list_rules() {
                    println!("{rule}.");
                }
            }
            _ => {
                if let Some(goal) = line.strip_prefix("?-") {
                    run_query(&engine, goal, &args);
                } else {
                    match engine.add_clause_text(line) {
                        Ok(Clause::Fact(fact)) => println!("Fact {fact} added."),
                        Ok(Clause::Rule(rule)) => println!("Rule {rule} added."),
                        Err(err) => println!("{err}"),
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_file(engine: &mut Engine, path: &Path) -> anyhow::Result<()> {
    debug!("loading clauses from '{}'", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        engine
            .add_clause_text(line)
            .with_context(|| format!("{}:{}", path.display(), number + 1))?;
    }
    info!(
        "loaded '{}': {} fact(s), {} rule(s) in total",
        path.display(),
        engine.list_facts().len(),
        engine.list_rules().len()
    );
    Ok(())
}

fn run_query(engine: &Engine, goal: &str, args: &Arguments) {
    let resolution = match engine.query_with_diagnostics(goal) {
        Ok(resolution) => resolution,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    if args.json {
        print_json(&resolution.substitutions);
        return;
    }

    let goal = goal.trim();
    if resolution.is_satisfied() {
        println!("Query {goal} is satisfied:");
        for substitution in &resolution.substitutions {
            println!("  {substitution}");
        }
    } else if resolution.depth_exceeded() {
        println!("Query {goal} is not satisfied (search depth limit reached).");
    } else {
        println!("Query {goal} is not satisfied.");
    }
}

#[cfg(feature = "serde")]
fn print_json(substitutions: &[Substitution]) {
    match microprolog::substitutions_to_json(substitutions) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("failed to render results: {err}"),
    }
}

#[cfg(not(feature = "serde"))]
fn print_json(_substitutions: &[Substitution]) {
    println!("JSON output needs the `serde` feature");
}
