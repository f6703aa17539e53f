mod device;
mod error;
mod layout;
mod loader;
mod placer;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use crate::loader::BootProgram;

/// Install a boot program (up to 32 KiB) into a disk image, preserving the
/// MBR partition table and boot signature.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Disk image to modify in place, must already exist
    image: PathBuf,
    /// Boot program binary
    boot_program: PathBuf,
    /// More output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut image = device::open_image(&args.image)?;
    let prog = BootProgram::load(&args.boot_program)?;
    placer::place(&prog, &mut image)?;
    info!(
        "installed {} byte boot program into `{}`",
        prog.len(),
        args.image.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    run(&args).with_context(|| {
        format!(
            "installing `{}` into `{}`",
            args.boot_program.display(),
            args.image.display()
        )
    })
}
