//! control_transfer.rs - JMP/Jcc/CALL/Ccc/RET/Rcc/RST.
//!
//! The condition-code field occupies bits 5-3 of the opcode for every
//! instruction in this family; `condition` decodes it once and every
//! handler below shares it. Unconditional JMP/CALL/RET always pay the
//! operand-fetch cost; their conditional counterparts pay it only when the
//! branch is taken, per the documented timing table.

use crate::cpu::access;
use crate::cpu::cycles::set_cycles;
use crate::cpu::state::CpuState;
use crate::memio::Memory;

/// Decode the 3-bit condition field (opcode bits 5-3) into a flag test.
#[inline]
pub fn condition(cpu: &CpuState, cc: u8) -> bool {
    match cc {
        0 => !cpu.zf, // NZ
        1 => cpu.zf,  // Z
        2 => !cpu.cf, // NC
        3 => cpu.cf,  // C
        4 => !cpu.pf, // PO
        5 => cpu.pf,  // PE
        6 => !cpu.sf, // P
        7 => cpu.sf,  // M
        _ => unreachable!("condition code is masked to 3 bits"),
    }
}

/// JMP a16 (`0xC3`, and the undocumented alias `0xCB`).
#[inline]
pub fn jmp<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem) {
    let addr = access::next_pc_word(cpu, mem);
    cpu.pc = addr;
    set_cycles(cpu, &[4, 3, 3]);
}

/// Jcc a16 (`11ccc010`): operand is always fetched; PC is only loaded when
/// the condition holds.
#[inline]
pub fn jcc<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let cc = (opcode >> 3) & 0x07;
    let addr = access::next_pc_word(cpu, mem);
    if condition(cpu, cc) {
        cpu.pc = addr;
    }
    set_cycles(cpu, &[4, 3, 3]);
}

/// CALL a16 (`0xCD`, and the undocumented aliases `0xDD`/`0xED`/`0xFD`).
#[inline]
pub fn call<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem) {
    let addr = access::next_pc_word(cpu, mem);
    access::push_word(cpu, mem, cpu.pc);
    cpu.pc = addr;
    set_cycles(cpu, &[5, 3, 3, 3, 3]);
}

/// Ccc a16 (`11ccc100`).
#[inline]
pub fn ccc<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let cc = (opcode >> 3) & 0x07;
    let addr = access::next_pc_word(cpu, mem);
    if condition(cpu, cc) {
        access::push_word(cpu, mem, cpu.pc);
        cpu.pc = addr;
        set_cycles(cpu, &[5, 3, 3, 3, 3]);
    } else {
        set_cycles(cpu, &[4, 3, 3, 1]);
    }
}

/// RET (`0xC9`, and the undocumented alias `0xD9`).
#[inline]
pub fn ret<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem) {
    cpu.pc = access::pop_word(cpu, mem);
    set_cycles(cpu, &[4, 3, 3]);
}

/// Rcc (`11ccc000`).
#[inline]
pub fn rcc<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let cc = (opcode >> 3) & 0x07;
    if condition(cpu, cc) {
        cpu.pc = access::pop_word(cpu, mem);
        set_cycles(cpu, &[5, 3, 3]);
    } else {
        set_cycles(cpu, &[5]);
    }
}

/// RST n (`11nnn111`): push PC, jump to `n * 8`.
#[inline]
pub fn rst<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let n = (opcode >> 3) & 0x07;
    access::push_word(cpu, mem, cpu.pc);
    cpu.pc = (n as u16) * 8;
    set_cycles(cpu, &[5, 3, 3]);
}
