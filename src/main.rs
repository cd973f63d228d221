use clap::{CommandFactory, Parser};
use cmds::merge::MergeArgs;
use std::process::ExitCode;
use timelapse::config::ConfigError;

mod cmds;
mod ffmpeg;
mod timelapse;

/// Error text for stderr. Rejected input also gets the usage line.
fn report(e: &anyhow::Error) -> String {
    let mut message = format!("Error: {:#}", e);
    if e.is::<ConfigError>() {
        message.push_str(&format!("\n\n{}", MergeArgs::command().render_usage()));
    }
    message
}

fn main() -> ExitCode {
    let args = MergeArgs::parse();
    if let Err(e) = cmds::init_logger(args.verbose) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    match cmds::handle_commands(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}
