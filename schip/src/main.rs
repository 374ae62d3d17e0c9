use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use schip_core::{disasm, Variant};

mod run;

/// CHIP-8 / Super-Chip emulator and disassembler.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ROM image to run
    rom: PathBuf,

    /// Window scale factor
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Machine cycles per second
    #[arg(short, long, default_value_t = 700)]
    rate: u64,

    /// Recognize the Super-Chip extended instruction set
    #[arg(long)]
    super_chip: bool,

    /// Print a disassembly listing instead of running the ROM
    #[arg(short, long)]
    disassemble: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let variant = if args.super_chip {
        Variant::SuperChip
    } else {
        Variant::Chip8
    };

    if args.disassemble {
        let rom = std::fs::read(&args.rom).unwrap_or_else(|err| {
            fatal(&format!("cannot read ROM {}: {}", args.rom.display(), err))
        });
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = disasm::disassemble(&rom, &mut out) {
            fatal(&format!("cannot disassemble {}: {}", args.rom.display(), err));
        }
        let _ = out.flush();
        return;
    }

    run::run(&args.rom, variant, args.scale, args.rate);
}

/// A ROM that can't be read leaves nothing to run; this is the one place a
/// hard abort is allowed.
fn fatal(message: &str) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}
