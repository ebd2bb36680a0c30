//! The two CP/M BDOS calls the classic 8080 diagnostic `.COM` images rely
//! on: console-output-character (function 2, character in E) and
//! print-string (function 9, `$`-terminated string at DE). Anything else
//! lands on the trap and is reported but otherwise ignored, since no other
//! function is exercised by the fixtures this harness targets.

use super::memory::FlatMemory;
use super::io::NullIo;
use i8080_core::Cpu;

const FN_CONSOLE_OUTPUT: u8 = 2;
const FN_PRINT_STRING: u8 = 9;

/// Service a `CALL 0x0005` trap, appending any console output produced to
/// `out`. The harness has already planted `RET` at 0x0005, so by the time
/// this runs, the CALL's return address is already on the stack; this
/// function only needs to act on the function number in C.
pub fn service(cpu: &mut Cpu<FlatMemory, NullIo>, out: &mut String) {
    let function = (cpu.bc() & 0xFF) as u8;
    match function {
        FN_CONSOLE_OUTPUT => {
            let e = (cpu.de() & 0xFF) as u8;
            out.push(e as char);
        }
        FN_PRINT_STRING => {
            let mut addr = cpu.de();
            loop {
                let byte = cpu.memory().read_byte(addr);
                if byte == b'$' {
                    break;
                }
                out.push(byte as char);
                addr = addr.wrapping_add(1);
            }
        }
        _ => {}
    }
}
