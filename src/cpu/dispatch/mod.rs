//! dispatch - opcode fetch, decode, and the single exhaustive 256-arm
//! dispatch table.
//!
//! A closure/function table is the usual first instinct, but for a
//! from-scratch, fully exhaustive 8080 decoder a flat `match` on the
//! opcode byte is both the simplest
//! thing that can be proven complete by inspection and, per measurement,
//! typically the faster of the two on modern branch predictors. Large,
//! regular instruction families (MOV, the ALU quadrant, INR/DCR/MVI,
//! LXI/INX/DCX/DAD, the condition-code group, PUSH/POP, RST) are handled
//! by extracting their shared bit fields once here and delegating to one
//! family function; the irregular single-opcode instructions are matched
//! literally.

mod arithmetic;
mod control_transfer;
mod data_transfer;
mod interrupts;
mod logical;
mod stack_io;

use super::access::next_pc_byte;
use super::state::CpuState;
use crate::memio::{Io, Memory};

/// Fetch, decode, and execute one instruction, then service the
/// EI delay and return the instruction's T-state count.
pub fn step<Mem: Memory, IoDev: Io>(cpu: &mut CpuState, mem: &mut Mem, io: &mut IoDev) -> u32 {
    let opcode = next_pc_byte(cpu, mem);
    execute(cpu, mem, io, opcode);

    if cpu.iff_pending > 0 {
        cpu.iff_pending -= 1;
        if cpu.iff_pending == 0 {
            cpu.iff = true;
            io.interrupt(true);
        }
    }

    cpu.cpu_cycles
}

fn execute<Mem: Memory, IoDev: Io>(cpu: &mut CpuState, mem: &mut Mem, io: &mut IoDev, opcode: u8) {
    match opcode {
        // --- irregular single opcodes -------------------------------
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => interrupts::nop(cpu),
        0x76 => interrupts::hlt(cpu),
        0x02 | 0x12 => data_transfer::stax(cpu, mem, opcode),
        0x0A | 0x1A => data_transfer::ldax(cpu, mem, opcode),
        0x22 => data_transfer::shld(cpu, mem),
        0x2A => data_transfer::lhld(cpu, mem),
        0x32 => data_transfer::sta(cpu, mem),
        0x3A => data_transfer::lda(cpu, mem),
        0x27 => arithmetic::daa(cpu),
        0x2F => logical::cma(cpu),
        0x37 => logical::stc(cpu),
        0x3F => logical::cmc(cpu),
        0xC3 | 0xCB => control_transfer::jmp(cpu, mem),
        0xC9 | 0xD9 => control_transfer::ret(cpu, mem),
        0xCD | 0xDD | 0xED | 0xFD => control_transfer::call(cpu, mem),
        0xD3 => stack_io::output(cpu, mem, io),
        0xDB => stack_io::input(cpu, mem, io),
        0xE3 => data_transfer::xthl(cpu, mem),
        0xE9 => data_transfer::pchl(cpu),
        0xEB => data_transfer::xchg(cpu),
        0xF3 => interrupts::di(cpu, io),
        0xFB => interrupts::ei(cpu),
        0xF9 => data_transfer::sphl(cpu),

        // --- regular families, decoded by shared bit fields ---------
        0x40..=0x7F => data_transfer::mov(cpu, mem, opcode),
        0x80..=0xBF => arithmetic::alu_op(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0xC6 => arithmetic::alu_imm(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0x04 => arithmetic::inr(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0x05 => arithmetic::dcr(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0x06 => data_transfer::mvi(cpu, mem, opcode),
        _ if opcode & 0xCF == 0x01 => data_transfer::lxi(cpu, mem, opcode),
        _ if opcode & 0xCF == 0x03 => arithmetic::inx(cpu, opcode),
        _ if opcode & 0xCF == 0x0B => arithmetic::dcx(cpu, opcode),
        _ if opcode & 0xCF == 0x09 => arithmetic::dad(cpu, opcode),
        _ if opcode & 0xE7 == 0x07 => logical::rotate(cpu, opcode),
        _ if opcode & 0xC7 == 0xC7 => control_transfer::rst(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0xC0 => control_transfer::rcc(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0xC2 => control_transfer::jcc(cpu, mem, opcode),
        _ if opcode & 0xC7 == 0xC4 => control_transfer::ccc(cpu, mem, opcode),
        _ if opcode & 0xCF == 0xC5 => stack_io::push(cpu, mem, opcode),
        _ if opcode & 0xCF == 0xC1 => stack_io::pop(cpu, mem, opcode),

        // Every opcode value 0x00..=0xFF is covered by the arms above;
        // this only fires if a future edit drops one of them.
        _ => unreachable!("opcode {:#04x} is not covered by the decode table", opcode),
    }
}
