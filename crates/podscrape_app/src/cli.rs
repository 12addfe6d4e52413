use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  podscrape \"quadratic formula\"
  podscrape \"pythagorean theorem\" -o output.json
  podscrape \"area of circle\" -d 3.0
  podscrape --interactive
  podscrape --file queries.txt";

#[derive(Debug, Parser)]
#[command(
    name = "podscrape",
    version,
    about = "Collect answer pods (text, images, formulas) for computational-knowledge queries",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Query to look up
    pub query: Option<String>,

    /// JSON file the results are written to
    #[arg(short, long, value_name = "FILE", default_value = "results.json")]
    pub output: PathBuf,

    /// Seconds to wait before each request
    #[arg(short, long, value_name = "SECONDS", default_value = "2.0", value_parser = parse_delay)]
    pub delay: Duration,

    /// Prompt for queries until `exit`
    #[arg(short, long)]
    pub interactive: bool,

    /// Read queries from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Do not print reports to the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write log output to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    File(PathBuf),
    Single(String),
}

impl Args {
    /// Interactive beats file mode, which beats a positional query.
    pub fn mode(&self) -> Option<Mode> {
        if self.interactive {
            Some(Mode::Interactive)
        } else if let Some(path) = &self.file {
            Some(Mode::File(path.clone()))
        } else {
            self.query.clone().map(Mode::Single)
        }
    }
}

fn parse_delay(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|err| format!("invalid delay `{raw}`: {err}"))
}
