use std::io::{self, BufRead, Write};

use clap::Parser;
use numera::interpreter::{evaluator::Evaluator, variables::Resolver};

/// numera is an interactive evaluator for arithmetic expressions with
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pre-seeds a variable binding before evaluation, e.g. `--var x=1.5`.
    /// May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    var: Vec<(String, f64)>,

    /// The expression to evaluate.
    expression: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got '{raw}'"));
    };

    match value.trim().parse() {
        Ok(value) => Ok((name.trim().to_string(), value)),
        Err(_) => Err(format!("'{value}' is not a number")),
    }
}

/// Resolves unknown variables by prompting on standard input.
///
/// The prompt repeats until the reply parses as a number. An exhausted
/// standard input leaves no way to produce a value, so the process exits
/// with an error message instead.
struct PromptResolver;

impl Resolver for PromptResolver {
    fn resolve(&mut self, name: &str) -> f64 {
        let mut line = String::new();

        loop {
            print!("Enter a value for '{name}': ");
            let _ = io::stdout().flush();

            line.clear();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    eprintln!("No value supplied for '{name}'.");
                    std::process::exit(1);
                },
                Ok(_) => {},
            }

            match line.trim().parse() {
                Ok(value) => return value,
                Err(_) => eprintln!("'{}' is not a number.", line.trim()),
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut evaluator = Evaluator::new(PromptResolver);

    for (name, value) in &args.var {
        evaluator.set_variable(name, *value);
    }

    match evaluator.evaluate(&args.expression) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("{e}"),
    }
}
