//! get-last-updated
//!
//! Prints the `last_updated` field of the JSON document served at TAG_URL,
//! without a trailing newline.
//!
//! Exit codes:
//! - 0: Value printed (possibly empty)
//! - 1: Missing argument, usage printed
//! - 2: Request or output failed

use get_last_updated::cli::{self, USAGE};
use get_last_updated::error::{Error, Result};
use reqwest::Client;
use std::io::{self, Write};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(Error::Usage) => {
            println!("{}", USAGE);
            Error::Usage.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e.report());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let args = cli::parse()?;

    let client = Client::new();
    let last_updated = get_last_updated::run(&client, &args.tag_url).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(last_updated.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
