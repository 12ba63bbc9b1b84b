use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use stringcase::cli::output::{self, OutputFormat};
use stringcase::{Case, CaseError, Config, Conversion, Report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stringcase")]
#[command(version, about = "Convert text between camelCase, snake_case, and friends", long_about = None)]
struct Cli {
    /// Target case (e.g. snake, camelcase, kebab-case)
    #[arg(value_name = "CASE")]
    case: Option<String>,

    /// Text to convert; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Show every conversion of each input
    #[arg(short, long, conflicts_with = "list")]
    all: bool,

    /// List supported cases
    #[arg(short, long)]
    list: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Drop blank lines read from stdin
    #[arg(long)]
    skip_empty: bool,

    /// Config file to load after the global and local ones
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "stringcase", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.skip_empty {
        config.skip_empty_lines = true;
    }
    tracing::debug!(?config, "resolved configuration");

    if cli.list {
        println!("{}", output::render_case_list(config.color));
        return Ok(());
    }

    // With --all every positional is text, the case slot included
    let (case, mut text) = if cli.all {
        (None, cli.case.into_iter().chain(cli.text).collect::<Vec<_>>())
    } else {
        let case = match cli.case {
            Some(name) => name.parse::<Case>()?,
            None => config.default_case.ok_or(CaseError::MissingCase)?,
        };
        (Some(case), cli.text)
    };

    if text.is_empty() {
        tracing::debug!("reading input from stdin");
        text = read_stdin_lines(config.skip_empty_lines)?;
    }

    let rendered = match case {
        Some(case) => {
            let conversions: Vec<Conversion> =
                text.par_iter().map(|line| Conversion::new(line, case)).collect();
            output::render_conversions(&conversions, config.format)?
        }
        None => {
            let reports: Vec<Report> = text
                .par_iter()
                .map(|line| Report::new(line.as_str()))
                .collect();
            output::render_reports(&reports, config.format, config.color)?
        }
    };

    if !text.is_empty() || config.format == OutputFormat::Json {
        writeln!(io::stdout().lock(), "{}", rendered)?;
    }

    Ok(())
}

fn read_stdin_lines(skip_empty: bool) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    let input = String::from_utf8(bytes).map_err(CaseError::from)?;

    Ok(input
        .lines()
        .filter(|line| !skip_empty || !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
