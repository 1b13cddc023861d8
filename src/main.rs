use std::fs;

use clap::Parser;
use complexpr::{Bindings, Complex, error::TypeConversionError, evaluate};

/// complexpr evaluates a mathematical expression over the complex numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells complexpr to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, as `NAME=VALUE` where `VALUE` is `re` or `re,im`.
    /// May be given several times.
    #[arg(short, long, value_name = "NAME=VALUE", value_parser = parse_binding)]
    set: Vec<(String, Complex)>,

    contents: String,
}

/// Parses one `NAME=VALUE` binding.
fn parse_binding(binding: &str) -> Result<(String, Complex), TypeConversionError> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| TypeConversionError { input: binding.to_string() })?;

    Ok((name.trim().to_string(), value.parse()?))
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the expression file '{}'.", &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let bindings = args.set.into_iter().collect::<Bindings>();

    match evaluate(&source, &bindings) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
