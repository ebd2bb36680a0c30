//! logical.rs - standalone bit/flag instructions that fall outside the
//! quadrant-10 ALU family: the four rotates and the three flag-only ops.

use crate::cpu::cycles::set_cycles;
use crate::cpu::flags;
use crate::cpu::state::CpuState;

/// RLC/RRC/RAL/RAR (`00xxx111` where `xxx` selects among the four).
#[inline]
pub fn rotate(cpu: &mut CpuState, opcode: u8) {
    let select = (opcode >> 3) & 0x03;
    let (result, cf) = match select {
        0 => flags::rlc(cpu.a()),
        1 => flags::rrc(cpu.a()),
        2 => flags::ral(cpu.a(), cpu.cf),
        3 => flags::rar(cpu.a(), cpu.cf),
        _ => unreachable!("rotate select is masked to 2 bits"),
    };
    cpu.set_a(result);
    cpu.cf = cf;
    set_cycles(cpu, &[4]);
}

/// CMA: complement A. No flags affected.
#[inline]
pub fn cma(cpu: &mut CpuState) {
    cpu.set_a(!cpu.a());
    set_cycles(cpu, &[4]);
}

/// STC: set carry.
#[inline]
pub fn stc(cpu: &mut CpuState) {
    cpu.cf = true;
    set_cycles(cpu, &[4]);
}

/// CMC: complement carry.
#[inline]
pub fn cmc(cpu: &mut CpuState) {
    cpu.cf = !cpu.cf;
    set_cycles(cpu, &[4]);
}
