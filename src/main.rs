use std::{
    fs::OpenOptions,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use verbump::{bump_str, BumpError};

// Inputs can come from flags or from the environment the way GitHub Actions hands them to an
// action: `INPUT_<NAME>` for inputs and `GITHUB_OUTPUT` for the file outputs are appended to.

#[derive(thiserror::Error, Debug)]
pub enum VerbumpCliError {
    #[error("{0}")]
    LibraryError(#[from] BumpError),

    #[error("Input required and not supplied: {name}")]
    MissingInput { name: &'static str },

    #[error("Unable to write output to `{}`: {source}", path.display())]
    OutputFile { path: PathBuf, source: io::Error },
}

#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// The version string to bump, like `1.2.3` or `1.2.3.4`
    #[arg(short, long = "version", env = "INPUT_VERSION", value_name = "VERSION")]
    current: Option<String>,

    /// The level to bump: `major`, `minor`, `patch`, `revision`, or `none`
    #[arg(short, long, env = "INPUT_BUMP")]
    bump: Option<String>,

    /// The format of the result: `a.b.c` or `a.b.c.d`. Omit to infer it from the bump level and
    /// the number of parts in VERSION.
    #[arg(short, long, env = "INPUT_FORMAT")]
    format: Option<String>,

    /// A file to append `version=<next version>` to
    #[arg(short, long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    output_file: Option<PathBuf>,
}

/// Reads an input the way CI runners do: surrounding whitespace is dropped, and an empty value is
/// the same as no value.
fn input(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn required_input<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, VerbumpCliError> {
    input(value).ok_or(VerbumpCliError::MissingInput { name })
}

fn set_output(path: &Path, name: &str, value: &str) -> Result<(), VerbumpCliError> {
    let to_err = |source| VerbumpCliError::OutputFile {
        path: path.to_owned(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_err)?;
    writeln!(file, "{name}={value}").map_err(to_err)
}

/// Escapes a workflow command's message so it stays on one line.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn do_work(cli: &Cli) -> Result<String, VerbumpCliError> {
    let current = required_input(cli.current.as_deref(), "version")?;
    let level = required_input(cli.bump.as_deref(), "bump")?;
    let format = input(cli.format.as_deref());
    debug!(current, level, format = ?format, "bumping version");

    let next = bump_str(current, level, format)?;
    info!(current, next = %next, "bumped version");

    if let Some(path) = &cli.output_file {
        set_output(path, "version", &next)?;
        debug!(path = %path.display(), "wrote output");
    }

    Ok(next)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match do_work(&cli) {
        Ok(next) => println!("{next}"),
        Err(e) => {
            error!("{e}");
            println!("::error::{}", escape_data(&e.to_string()));
            std::process::exit(1);
        }
    }
}
