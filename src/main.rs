use std::{env, fs::read_to_string, process::exit, time::Instant};

use tacit::parser::parser::parse;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: tacit <file>");
        exit(1);
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let start = Instant::now();

    match parse(&source) {
        Ok(ast) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{:#?}", ast);
        }
        Err(error) => {
            eprint!("{}", error);
            exit(1);
        }
    }
}
