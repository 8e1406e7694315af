//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR in accumulator and memory (read-modify-write) forms.
//! Rotates shift through the carry flag. Memory forms carry their cycle
//! cost in the opcode table; no dynamic penalty applies.

use crate::addressing::AddressingMode;
use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

/// Shift left one bit; bit 7 falls into carry.
pub(crate) fn asl_value<B: Bus>(cpu: &mut CPU<B>, value: u8) -> u8 {
    cpu.p.set(StatusRegister::CARRY, value & 0x80 != 0);
    let result = value << 1;
    cpu.p.update_zn(result);
    result
}

/// Shift right one bit; bit 0 falls into carry.
pub(crate) fn lsr_value<B: Bus>(cpu: &mut CPU<B>, value: u8) -> u8 {
    cpu.p.set(StatusRegister::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    cpu.p.update_zn(result);
    result
}

/// Rotate left through carry.
pub(crate) fn rol_value<B: Bus>(cpu: &mut CPU<B>, value: u8) -> u8 {
    let carry_in = cpu.p.contains(StatusRegister::CARRY) as u8;
    cpu.p.set(StatusRegister::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    cpu.p.update_zn(result);
    result
}

/// Rotate right through carry.
pub(crate) fn ror_value<B: Bus>(cpu: &mut CPU<B>, value: u8) -> u8 {
    let carry_in = cpu.p.contains(StatusRegister::CARRY) as u8;
    cpu.p.set(StatusRegister::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    cpu.p.update_zn(result);
    result
}

fn shift<B: Bus>(cpu: &mut CPU<B>, opcode: u8, op: fn(&mut CPU<B>, u8) -> u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.a = op(cpu, value);
    } else {
        let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);
        let value = cpu.bus.read(addr);
        let result = op(cpu, value);
        cpu.bus.write(addr, result);
    }

    metadata.base_cycles
}

/// Executes ASL (Arithmetic Shift Left).
pub(crate) fn execute_asl<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    shift(cpu, opcode, asl_value)
}

/// Executes LSR (Logical Shift Right).
pub(crate) fn execute_lsr<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    shift(cpu, opcode, lsr_value)
}

/// Executes ROL (Rotate Left).
pub(crate) fn execute_rol<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    shift(cpu, opcode, rol_value)
}

/// Executes ROR (Rotate Right).
pub(crate) fn execute_ror<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    shift(cpu, opcode, ror_value)
}
