use clap::Parser;
use std::process::exit;

use gstdynplay::config::Arguments;
use gstdynplay::{assembler, GstEngine};

fn main() {
    let args = Arguments::parse();
    println!("{}", args);

    let result = GstEngine::init().and_then(|engine| assembler::run(&engine, &args.uri));
    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }
    exit(assembler::exit_code(&result));
}
