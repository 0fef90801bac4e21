use anyhow::Context;
use clap::Parser;
use longview::cli::Cli;
use longview::input::{build_pattern, read_subjects};
use longview::output::{Format, Output};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(all_matched) => std::process::exit(if all_matched { 0 } else { 1 }),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("LONGVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let format = if cli.quiet {
        Format::Quiet
    } else if cli.json {
        Format::Json
    } else {
        Format::Human
    };
    let mut output = Output::stdout(use_color, format);

    let pattern = build_pattern(cli);

    if cli.show_regex {
        let source = pattern
            .regex_source()
            .with_context(|| format!("invalid template '{}'", cli.template))?;
        output.print_regex(source)?;
        return Ok(true);
    }

    let subjects = read_subjects(cli)?;
    debug!(subjects = subjects.len(), "matching subjects");

    let mut all_matched = true;
    for subject in &subjects {
        let result = pattern
            .match_extract(subject)
            .with_context(|| format!("invalid template '{}'", cli.template))?;
        all_matched &= result.is_match();
        output.print_result(subject, &result)?;
    }
    output.flush()?;

    Ok(all_matched)
}
