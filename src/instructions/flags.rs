//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Each sets or clears one status bit.

use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

/// Executes CLC (Clear Carry Flag).
pub(crate) fn execute_clc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.remove(StatusRegister::CARRY);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn execute_sec<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.insert(StatusRegister::CARRY);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn execute_cli<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.remove(StatusRegister::INTERRUPT_DISABLE);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.insert(StatusRegister::INTERRUPT_DISABLE);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.remove(StatusRegister::DECIMAL);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes SED (Set Decimal Mode).
pub(crate) fn execute_sed<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.insert(StatusRegister::DECIMAL);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes CLV (Clear Overflow Flag). There is no SEV.
pub(crate) fn execute_clv<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.p.remove(StatusRegister::OVERFLOW);
    OPCODE_TABLE[opcode as usize].base_cycles
}
