use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(name = "emu8", about = "A Chip-8 emulator.")]
pub struct Args {
    /// Path to the ROM to run; defaults to the assembler's output.
    #[arg(value_name = "ROM", default_value = "output.ch8")]
    pub rom: PathBuf,

    /// Size of each Chip-8 pixel on screen.
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Most instructions to execute per 1/60th of a second.
    #[arg(long, default_value_t = 10)]
    pub cycles_per_frame: u32,

    /// Seed for the random number generator; random if omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run::run(args) {
        tracing::error!("fatal: {err}");
        std::process::exit(1);
    }
}
