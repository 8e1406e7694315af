//! # Increment and Decrement Instructions
//!
//! INC/DEC on memory (read-modify-write) and INX/DEX/INY/DEY on the index
//! registers. All wrap at 8 bits and update Z/N from the result.

use crate::{Bus, CPU, OPCODE_TABLE};

/// Executes INC (Increment Memory).
pub(crate) fn execute_inc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let result = cpu.bus.read(addr).wrapping_add(1);
    cpu.bus.write(addr, result);
    cpu.p.update_zn(result);

    metadata.base_cycles
}

/// Executes DEC (Decrement Memory).
pub(crate) fn execute_dec<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let result = cpu.bus.read(addr).wrapping_sub(1);
    cpu.bus.write(addr, result);
    cpu.p.update_zn(result);

    metadata.base_cycles
}

/// Executes INX (Increment X Register).
pub(crate) fn execute_inx<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_zn(cpu.x);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes DEX (Decrement X Register).
pub(crate) fn execute_dex<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_zn(cpu.x);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes INY (Increment Y Register).
pub(crate) fn execute_iny<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_zn(cpu.y);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes DEY (Decrement Y Register).
pub(crate) fn execute_dey<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_zn(cpu.y);
    OPCODE_TABLE[opcode as usize].base_cycles
}
