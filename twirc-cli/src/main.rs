use clap::Parser;
use std::error::Error;
use twirc_cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run(Cli::parse()).await
}
