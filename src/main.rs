use std::io::{self, Write};
use std::process;

use clap::Parser;

use bumpctl::cli::orchestration::help;
use bumpctl::cli::{Cli, Dispatcher, Operation};
use bumpctl::config::load_config;
use bumpctl::git::Git2WorkingTree;
use bumpctl::tool::ProcessVersionTool;
use bumpctl::{logging, ui};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        ui::display_error(&e.to_string());
    }

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            // A failing tool has already printed its own diagnostics.
            if e.is_relayed() {
                tracing::debug!(error = %e, "version tool failed");
            } else {
                ui::display_error(&e.to_string());
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}

fn run(cli: &Cli) -> bumpctl::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // help must work even when the configuration is broken
    if cli.operation == Operation::Help {
        help(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let tree = Git2WorkingTree::new(".", config.repository.include_untracked);
    let tool = ProcessVersionTool::from_config(&config.tool)?;

    let result = Dispatcher::new(tree, tool).run(&cli.operation, &mut out);
    out.flush()?;
    result
}
