use clap::Parser;
use prepare_docs::{config, root, Mode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prepare-docs", version, about = "Copy the root README into the docs index")]
struct Cli {
    /// Project root directory (defaults to the directory this tool was built from)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Write the docs index, check that it is up to date, or print it
    #[arg(long, default_value_t, value_enum)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = root::resolve(cli.root.as_deref())?;
    let config = config::load(&root)?;
    prepare_docs::run(&root, &config, cli.mode)
}
