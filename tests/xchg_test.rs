//! XCHG applied twice is the identity.

use i8080_core::Cpu;
use i8080_core::test_support::{FlatMemory, RecordingIo};

#[test]
fn xchg_twice_restores_original_registers() {
    let mut mem = FlatMemory::new();
    // LXI H,0x1122 ; LXI D,0x3344 ; XCHG ; XCHG
    mem.load(0x0000, &[0x21, 0x22, 0x11, 0x11, 0x44, 0x33, 0xEB, 0xEB]);
    let mut cpu = Cpu::new(mem, RecordingIo::default());

    cpu.instruction();
    cpu.instruction();
    let (hl0, de0) = (cpu.hl(), cpu.de());

    cpu.instruction();
    assert_eq!(cpu.hl(), de0);
    assert_eq!(cpu.de(), hl0);

    cpu.instruction();
    assert_eq!(cpu.hl(), hl0);
    assert_eq!(cpu.de(), de0);
}
