//! interrupts.rs - EI/DI/HLT/NOP, and the undocumented opcode aliases that
//! collapse onto them.
//!
//! EI's enable is deferred: it only arms `iff_pending`, the actual flip and
//! `Io::interrupt` notification happen one instruction later in
//! `dispatch::step`, once the instruction following EI has completed.

use crate::cpu::cycles::set_cycles;
use crate::cpu::state::CpuState;
use crate::memio::Io;

/// NOP (`0x00`, and the undocumented aliases `0x08,0x10,0x18,0x20,0x28,
/// 0x30,0x38`).
#[inline]
pub fn nop(cpu: &mut CpuState) {
    set_cycles(cpu, &[4]);
}

/// EI: arm the one-instruction-delayed interrupt enable.
#[inline]
pub fn ei(cpu: &mut CpuState) {
    cpu.iff_pending = 2;
    set_cycles(cpu, &[4]);
}

/// DI: disable interrupts immediately, no delay.
#[inline]
pub fn di<IoDev: Io>(cpu: &mut CpuState, io: &mut IoDev) {
    cpu.iff = false;
    cpu.iff_pending = 0;
    io.interrupt(false);
    set_cycles(cpu, &[4]);
}

/// HLT: park the CPU at this opcode until an external reset or interrupt
/// moves it on.
#[inline]
pub fn hlt(cpu: &mut CpuState) {
    cpu.halt_in_place(1);
    set_cycles(cpu, &[4, 3]);
}
