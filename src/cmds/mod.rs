use self::merge::{merge, MergeArgs};
use crate::timelapse::layout::Layout;
use anyhow::Result;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub mod merge;

/// All log records go to stderr. Stdout carries only the progress lines.
pub const LOG_MODE: TerminalMode = TerminalMode::Stderr;

pub fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, LOG_MODE, ColorChoice::Auto)?;
    Ok(())
}

pub fn handle_commands(args: &MergeArgs) -> Result<()> {
    let config = args.run_config()?;
    let layout = Layout::in_dir(&std::env::current_dir()?).with_videos_dir(args.videos_dir.clone());
    log::debug!("{:?}", layout);
    merge(&layout, &config, args.dry_run)?;
    Ok(())
}
