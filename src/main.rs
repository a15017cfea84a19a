use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;

use psil::Config;

#[derive(clap::Parser)]
#[command(about = "Run a Psil program and print each definition's value and type")]
struct Args {
    input: PathBuf,

    /// Print each elaborated declaration to stderr before running it
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read `{}`", args.input.display()))?;

    let config = Config {
        dump_ast: args.dump_ast,
    };
    psil::run(&source, &config, |outcome| println!("{}", outcome))?;

    Ok(())
}
