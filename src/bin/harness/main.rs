//! i8080-harness: a CP/M-style host for running the classic 8080
//! diagnostic `.COM` images (`TEST.COM`, `CPUTEST.COM`, `8080PRE.COM`,
//! `8080EX1.COM`, ...) against the `i8080-core` crate.
//!
//! Loads the image at 0x0100, plants a `RET` at the BDOS entry point
//! (0x0005), and runs until the program returns to address 0x0000 (CP/M's
//! warm-boot vector, i.e. the diagnostic finished) or the CPU halts
//! unexpectedly (a failure in most of these fixtures). Console output
//! produced via BDOS functions 2 and 9 is collected and printed once the
//! run ends.

mod bdos;
mod io;
mod loader;
mod memory;

use clap::Parser;
use i8080_core::Cpu;
use io::NullIo;
use loader::{BDOS_ENTRY, DEFAULT_LOAD_ADDR};
use memory::FlatMemory;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "i8080-harness", about = "Run a CP/M .COM image against i8080-core")]
struct Args {
    /// Path to the .COM image to run.
    image: PathBuf,

    /// Address to load the image at.
    #[arg(long, value_parser = parse_hex_or_dec, default_value_t = DEFAULT_LOAD_ADDR)]
    load_addr: u16,

    /// Give up after this many instructions (guards against a diagnostic
    /// that loops forever instead of returning to 0x0000).
    #[arg(long, default_value_t = 200_000_000)]
    max_instructions: u64,

    /// Print every BDOS console write as it happens, not just at the end.
    #[arg(long)]
    verbose: bool,
}

fn parse_hex_or_dec(s: &str) -> Result<u16, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else {
        s.parse::<u16>().map_err(|e| e.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut mem = FlatMemory::new();
    if let Err(e) = loader::load_com(&args.image, args.load_addr, &mut mem) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let mut cpu = Cpu::new(mem, NullIo);
    cpu.jump(args.load_addr);

    let mut console_output = String::new();
    let mut instructions: u64 = 0;

    let exit_code = loop {
        if cpu.pc() == 0x0000 {
            println!("terminated at warm-boot vector after {instructions} instructions");
            break ExitCode::SUCCESS;
        }
        if cpu.halted() {
            println!("halted unexpectedly at {:#06x} after {instructions} instructions", cpu.pc());
            break ExitCode::FAILURE;
        }
        if instructions >= args.max_instructions {
            println!("aborted after {instructions} instructions (max-instructions reached)");
            break ExitCode::FAILURE;
        }

        if cpu.pc() == BDOS_ENTRY {
            let before = console_output.len();
            bdos::service(&mut cpu, &mut console_output);
            if args.verbose && console_output.len() > before {
                print!("{}", &console_output[before..]);
            }
        }

        cpu.instruction();
        instructions += 1;
    };

    if !args.verbose {
        println!("--- console output ---");
        println!("{console_output}");
    }

    exit_code
}
