use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use icss::{compile, display_error, parse_source, type_checker::type_checker::check, CompileFailure};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "icss", version, about = "Compile ICSS stylesheets to CSS")]
struct Cli {
    /// Input ICSS file.
    input: PathBuf,

    /// Write the CSS here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Only parse and check the input, without producing CSS.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("read input '{}'", cli.input.display()))?;
    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    if cli.check {
        return Ok(run_check(&source, &file_name));
    }

    let css = match compile(&source, &file_name) {
        Ok(css) => css,
        Err(failure) => {
            report(&failure, &source);
            return Ok(ExitCode::FAILURE);
        }
    };

    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            fs::write(path, css).with_context(|| format!("write css '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{}", css),
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check(source: &str, file_name: &str) -> ExitCode {
    let stylesheet = match parse_source(source, file_name) {
        Ok(stylesheet) => stylesheet,
        Err(error) => {
            report(&CompileFailure::Error(error), source);
            return ExitCode::FAILURE;
        }
    };

    let diagnostics = check(&stylesheet);
    if diagnostics.is_empty() {
        eprintln!("{}: ok", file_name);
        return ExitCode::SUCCESS;
    }

    report(&CompileFailure::Diagnostics(diagnostics), source);
    ExitCode::FAILURE
}

fn report(failure: &CompileFailure, source: &str) {
    for error in failure.errors() {
        if error.is_fault() {
            eprintln!("internal compiler error, please report this input");
        }
        eprintln!("{}", display_error(error, source));
    }
    eprintln!("{}", failure);
}
