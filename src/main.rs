use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::{debug, info};

use file_rename::cli::{format_error, get_log_file, get_matches, get_run_options, get_verbosity};
use file_rename::logging::init_logger;
use file_rename::workflow::{run, RunOutcome};

fn main() -> ExitCode {
    setup_panic!();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    let options = get_run_options(&matches)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let report = run(&options, &mut input, &mut output)?;
    output.flush()?;

    debug!("Finished with {:?}", report.stats);
    match report.outcome {
        RunOutcome::Aborted => info!("renaming discontinued"),
        RunOutcome::NothingToDo | RunOutcome::Applied => {}
    }

    Ok(())
}
