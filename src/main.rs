use anyhow::Result;
use clap::Parser as _;
use dedup::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    dedup::init_logging(&args);
    dedup::run(args)
}
