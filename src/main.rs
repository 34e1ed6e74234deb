/*!
 * Command-line interface for rper
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use rper::config::{Args, Config};
use rper::summary::{ReportFormat, Reporter};
use rper::walker::Walker;

fn print_about() {
    println!("rper (pronounced: 'arr per')");
    println!("'recursive permissions'");
    println!("Version: {}", rper::VERSION);
    println!();
    println!("Recursively changes permission bits of files and/or directories");
    println!("to an octal target, with '*' wildcards that keep individual");
    println!("permission groups untouched.");
    println!();
    println!("Source: https://github.com/dhitchenor/rper");
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        generate(shell, &mut cmd, "rper", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if args.about {
        print_about();
        return ExitCode::SUCCESS;
    }

    // Create configuration; any failure here is fatal and nothing has
    // been touched yet.
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("type `rper --help` for help");
            return ExitCode::FAILURE;
        }
    };

    let output = config.output;
    let symlinks = config.symlinks;

    // Walk the tree; per-entry failures are reported along the way and
    // never abort the run.
    let walker = Walker::new(config);
    let summary = walker.run();

    if output.shows_summary() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(&summary, symlinks);
    }

    ExitCode::SUCCESS
}
