use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Fixed output destination, overwritten on every successful run.
const OUTPUT_PATH: &str = "document.json";

#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    /// Authoring script to execute.
    script: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    // Missing or malformed arguments exit 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let doc = flipbook::ScriptHost::new()
        .run_path(&cli.script)
        .with_context(|| format!("run script '{}'", cli.script.display()))?;

    doc.write_to_path(OUTPUT_PATH)?;

    eprintln!("wrote {OUTPUT_PATH}");
    Ok(())
}
