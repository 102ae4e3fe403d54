use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Read input from a file instead of stdin.
    #[clap(long)]
    input: Option<PathBuf>,

    /// Write results to a file instead of stdout.
    #[clap(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut out = Vec::new();
    maxpow::run(&input, &mut out)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &out)
                .with_context(|| format!("failed to write {}", path.display()))?
        }
        None => std::io::stdout().lock().write_all(&out)?,
    }

    Ok(())
}
