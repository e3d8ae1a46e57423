use std::io;
use std::path::PathBuf;

use clap::Parser as ClapParser;
use color_eyre::eyre::Result;

use commentary::app::App;
use commentary::{config, logging};

#[derive(ClapParser, Debug)]
#[command(
    name = "commentary",
    about = "Narrate Claude stream-json output live and save a TTS-ready transcript",
    after_help = "Reads newline-delimited JSON from stdin, e.g.\n  \
                  claude -p \"...\" --output-format stream-json --verbose --include-partial-messages \
                  | commentary commentary.txt\n\n\
                  The COLUMNS environment variable sets the terminal width used for wrapping."
)]
struct Cli {
    /// File to write the plain-text commentary to (overwritten). Skipped if omitted.
    output: Option<PathBuf>,

    /// Terminal width used for wrapping narration.
    #[arg(long, env = "COLUMNS", hide = true)]
    columns: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let cli = Cli::parse();

    let wrap_width = config::wrap_width(cli.columns.as_deref());
    let started_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut app = App::new(io::stdout().lock(), wrap_width, cli.output, started_at);
    app.start()?;
    app.run(io::stdin().lock())?;
    app.finish()?;

    Ok(())
}
