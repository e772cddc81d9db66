use std::path::PathBuf;
use std::process;

use buildtools::generate::{self, DEFAULT_OUTPUT};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "crc32-table-gen")]
#[command(version, about = "Generate the CRC-32 known-answer header", long_about = None)]
struct Cli {
    /// Header to write
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    println!("running crc32-table-gen");
    match generate::generate(&cli.output) {
        Ok(corpus) => info!("{} vectors written to {}", corpus.len(), cli.output.display()),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
