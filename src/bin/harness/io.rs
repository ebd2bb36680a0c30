//! The classic 8080 diagnostic `.COM` images never touch port IO; BDOS
//! calls come in through the CALL-0x0005 trap, not IN/OUT. This device
//! exists only so `Cpu` has something to bind to.

use i8080_core::Io;

#[derive(Default)]
pub struct NullIo;

impl Io for NullIo {
    fn input(&mut self, _port: u8) -> u8 {
        0
    }

    fn output(&mut self, _port: u8, _value: u8) {}

    fn interrupt(&mut self, _enabled: bool) {}
}
