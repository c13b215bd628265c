use std::fs;

use clap::Parser;
use shunt::{interpreter::evaluator, to_postfix};

/// shunt is an infix arithmetic expression evaluator built on the
/// shunting-yard algorithm.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix (reverse Polish) form of the expression before the
    /// result.
    #[arg(short, long)]
    postfix: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    let postfix = match to_postfix(&expression) {
        Ok(postfix) => postfix,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    if args.postfix {
        let rendered = postfix.iter()
                              .map(ToString::to_string)
                              .collect::<Vec<_>>()
                              .join(" ");
        println!("{rendered}");
    }

    match evaluator::evaluate(&postfix) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("{e}"),
    }
}
