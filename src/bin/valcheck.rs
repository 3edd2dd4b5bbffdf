//! Command line front end for the predicate set
//!
//! Values are given as literals: JSON documents, `undefined`, `NaN`,
//! `Infinity`, `-Infinity`, or the name of a built-in constructor.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process;
use valcheck::{Value, create_standard_registry, get_type};

#[derive(Parser)]
#[command(name = "valcheck")]
#[command(about = "Evaluate runtime type predicates against value literals")]
#[command(version)]
#[command(author = "OctoFHIR Team <funyloony@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a predicate, e.g. `valcheck check isType '[1]' '"array"'`
    Check {
        /// Registered predicate name or alias
        predicate: String,
        /// Argument literals
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print the type tag of a value
    Type {
        /// Value literal
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// List registered predicates
    List {
        /// Include documentation and signatures
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    // Setup human-panic for better error messages
    human_panic::setup_panic!();
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check { predicate, values } => handle_check(&predicate, &values),
        Commands::Type { value } => handle_type(&value),
        Commands::List { verbose } => handle_list(verbose),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn parse_values(literals: &[String]) -> Result<Vec<Value>> {
    literals
        .iter()
        .map(|literal| {
            Value::parse_literal(literal).with_context(|| format!("argument `{literal}`"))
        })
        .collect()
}

fn handle_check(predicate: &str, literals: &[String]) -> Result<()> {
    let registry = create_standard_registry()?;
    let args = parse_values(literals)?;
    let result = registry.evaluate(predicate, &args)?;
    println!("{result}");
    Ok(())
}

fn handle_type(literal: &str) -> Result<()> {
    let value = Value::parse_literal(literal)?;
    println!("{}", get_type(&value));
    Ok(())
}

fn handle_list(verbose: bool) -> Result<()> {
    let registry = create_standard_registry()?;
    for name in registry.function_names() {
        let Some(function) = registry.get(name) else {
            continue;
        };
        if !verbose {
            println!("{name}");
            continue;
        }
        if function.name() == name {
            println!("{}", function.signature());
        } else {
            println!("{name} (alias of {})", function.name());
        }
        println!("    {}", function.documentation());
    }
    Ok(())
}
