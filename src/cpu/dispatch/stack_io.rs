//! stack_io.rs - PUSH/POP and port IN/OUT.
//!
//! PUSH/POP share the register-pair field with INX/DAD/etc, except that
//! pair code 3 means PSW (A + packed flags) here instead of SP; that one
//! divergence is why these stay out of `access::rp`/`set_rp`.

use crate::cpu::access;
use crate::cpu::cycles::set_cycles;
use crate::cpu::state::{CpuState, RP_SP};
use crate::memio::{Io, Memory};

/// PUSH rp (`11rp0101`); `rp == 3` selects PSW rather than SP.
#[inline]
pub fn push<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let rp = (opcode >> 4) & 0x03;
    let v = if rp == RP_SP {
        access::psw(cpu)
    } else {
        access::rp(cpu, rp)
    };
    access::push_word(cpu, mem, v);
    set_cycles(cpu, &[5, 3, 3]);
}

/// POP rp (`11rp0001`); `rp == 3` selects PSW rather than SP.
#[inline]
pub fn pop<Mem: Memory>(cpu: &mut CpuState, mem: &mut Mem, opcode: u8) {
    let rp = (opcode >> 4) & 0x03;
    let v = access::pop_word(cpu, mem);
    if rp == RP_SP {
        access::set_psw(cpu, v);
    } else {
        access::set_rp(cpu, rp, v);
    }
    set_cycles(cpu, &[4, 3, 3]);
}

/// IN d8: read port `d8` into A.
#[inline]
pub fn input<Mem: Memory, IoDev: Io>(cpu: &mut CpuState, mem: &mut Mem, io: &mut IoDev) {
    let port = access::next_pc_byte(cpu, mem);
    let v = io.input(port);
    cpu.set_a(v);
    set_cycles(cpu, &[4, 3, 3]);
}

/// OUT d8: write A to port `d8`.
#[inline]
pub fn output<Mem: Memory, IoDev: Io>(cpu: &mut CpuState, mem: &mut Mem, io: &mut IoDev) {
    let port = access::next_pc_byte(cpu, mem);
    io.output(port, cpu.a());
    set_cycles(cpu, &[4, 3, 3]);
}
