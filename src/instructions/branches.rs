//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS. All use relative addressing
//! with a signed 8-bit offset applied to the PC *after* the operand fetch.
//!
//! Cycle timing:
//! - base cycles if the branch is not taken
//! - +1 if taken within the same page
//! - +2 if taken across a 256-byte page boundary

use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

fn branch_on<B: Bus>(cpu: &mut CPU<B>, opcode: u8, taken: bool) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (raw, _) = cpu.resolve_operand(metadata.addressing_mode);
    let offset = raw as u8 as i8;

    let mut cycles = metadata.base_cycles;

    if taken {
        // PC already points past the operand; the offset is relative to it
        let base_pc = cpu.pc;
        let target = base_pc.wrapping_add_signed(offset as i16);

        cycles += 1;
        if CPU::<B>::page_crossed(base_pc, target) {
            cycles += 1;
        }

        cpu.pc = target;
    }

    cycles
}

/// Executes BCC (Branch if Carry Clear).
pub(crate) fn execute_bcc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = !cpu.p.contains(StatusRegister::CARRY);
    branch_on(cpu, opcode, taken)
}

/// Executes BCS (Branch if Carry Set).
pub(crate) fn execute_bcs<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = cpu.p.contains(StatusRegister::CARRY);
    branch_on(cpu, opcode, taken)
}

/// Executes BEQ (Branch if Equal / Zero Set).
pub(crate) fn execute_beq<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = cpu.p.contains(StatusRegister::ZERO);
    branch_on(cpu, opcode, taken)
}

/// Executes BNE (Branch if Not Equal / Zero Clear).
pub(crate) fn execute_bne<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = !cpu.p.contains(StatusRegister::ZERO);
    branch_on(cpu, opcode, taken)
}

/// Executes BMI (Branch if Minus).
pub(crate) fn execute_bmi<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = cpu.p.contains(StatusRegister::NEGATIVE);
    branch_on(cpu, opcode, taken)
}

/// Executes BPL (Branch if Plus).
pub(crate) fn execute_bpl<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = !cpu.p.contains(StatusRegister::NEGATIVE);
    branch_on(cpu, opcode, taken)
}

/// Executes BVC (Branch if Overflow Clear).
pub(crate) fn execute_bvc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = !cpu.p.contains(StatusRegister::OVERFLOW);
    branch_on(cpu, opcode, taken)
}

/// Executes BVS (Branch if Overflow Set).
pub(crate) fn execute_bvs<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let taken = cpu.p.contains(StatusRegister::OVERFLOW);
    branch_on(cpu, opcode, taken)
}
