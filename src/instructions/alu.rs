//! # Arithmetic and Logic Instructions
//!
//! - ADC / SBC: add / subtract with carry, binary and BCD modes
//! - CMP / CPX / CPY: register-memory comparison
//! - AND / ORA / EOR: bitwise logic on the accumulator
//! - BIT: non-destructive test of memory against the accumulator
//!
//! Decimal mode follows the NMOS 6502: ADC derives Z from the binary sum
//! and N/V from the intermediate high nibble; SBC derives every flag from
//! the binary computation and only adjusts the accumulator.

use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

/// Adds `value` plus carry into the accumulator, honouring decimal mode.
///
/// Shared by ADC, the undocumented RRA, and the 0xEB SBC alias (via
/// `subtract_with_carry`).
pub(crate) fn add_with_carry<B: Bus>(cpu: &mut CPU<B>, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    let carry_in = cpu.p.contains(StatusRegister::CARRY) as u16;
    let binary = a + m + carry_in;

    if cpu.p.contains(StatusRegister::DECIMAL) {
        // NMOS: Z tracks the binary sum even in decimal mode
        cpu.p.set(StatusRegister::ZERO, binary & 0xFF == 0);

        let mut lo = (a & 0x0F) + (m & 0x0F) + carry_in;
        let mut hi = (a & 0xF0) + (m & 0xF0);
        if lo > 0x09 {
            lo += 0x06;
            hi += 0x10;
        }
        // N and V are sampled from the intermediate high nibble
        cpu.p.set(StatusRegister::NEGATIVE, hi & 0x80 != 0);
        cpu.p
            .set(StatusRegister::OVERFLOW, (a ^ hi) & !(a ^ m) & 0x80 != 0);
        if hi > 0x90 {
            hi += 0x60;
        }
        cpu.p.set(StatusRegister::CARRY, hi & 0xFF00 != 0);
        cpu.a = ((hi & 0xF0) | (lo & 0x0F)) as u8;
    } else {
        let result = (binary & 0xFF) as u8;
        cpu.p.set(StatusRegister::CARRY, binary > 0xFF);
        cpu.p.set(
            StatusRegister::OVERFLOW,
            (cpu.a ^ result) & (value ^ result) & 0x80 != 0,
        );
        cpu.p.update_zn(result);
        cpu.a = result;
    }
}

/// Subtracts `value` with borrow from the accumulator.
///
/// Binary mode is ADC of the one's complement. In decimal mode the flags
/// still come from the binary computation; only A is BCD-adjusted.
pub(crate) fn subtract_with_carry<B: Bus>(cpu: &mut CPU<B>, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    let carry_in = cpu.p.contains(StatusRegister::CARRY) as u16;
    let inverted = m ^ 0xFF;
    let binary = a + inverted + carry_in;
    let result = (binary & 0xFF) as u8;

    cpu.p.set(StatusRegister::CARRY, binary > 0xFF);
    cpu.p.set(
        StatusRegister::OVERFLOW,
        (cpu.a ^ result) & ((inverted as u8) ^ result) & 0x80 != 0,
    );
    cpu.p.update_zn(result);

    if cpu.p.contains(StatusRegister::DECIMAL) {
        let borrow = 1 - carry_in;
        let mut lo = (a & 0x0F).wrapping_sub(m & 0x0F).wrapping_sub(borrow);
        let mut hi = (a >> 4).wrapping_sub(m >> 4);
        if lo & 0x10 != 0 {
            lo = lo.wrapping_sub(0x06);
            hi = hi.wrapping_sub(1);
        }
        if hi & 0x10 != 0 {
            hi = hi.wrapping_sub(0x06);
        }
        cpu.a = (((hi & 0x0F) << 4) | (lo & 0x0F)) as u8;
    } else {
        cpu.a = result;
    }
}

/// CMP/CPX/CPY core: C if register >= memory, Z if equal, N from bit 7 of
/// the difference.
pub(crate) fn compare<B: Bus>(cpu: &mut CPU<B>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.p.set(StatusRegister::CARRY, register >= value);
    cpu.p.update_zn(result);
}

/// Executes ADC (Add with Carry).
pub(crate) fn execute_adc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    add_with_carry(cpu, value);

    metadata.base_cycles + page_crossed as u8
}

/// Executes SBC (Subtract with Carry).
pub(crate) fn execute_sbc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    subtract_with_carry(cpu, value);

    metadata.base_cycles + page_crossed as u8
}

/// Executes CMP (Compare Accumulator).
pub(crate) fn execute_cmp<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.a;
    compare(cpu, register, value);

    metadata.base_cycles + page_crossed as u8
}

/// Executes CPX (Compare X Register).
pub(crate) fn execute_cpx<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.x;
    compare(cpu, register, value);

    metadata.base_cycles
}

/// Executes CPY (Compare Y Register).
pub(crate) fn execute_cpy<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.y;
    compare(cpu, register, value);

    metadata.base_cycles
}

/// Executes AND (Logical AND).
pub(crate) fn execute_and<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a &= value;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles + page_crossed as u8
}

/// Executes ORA (Logical Inclusive OR).
pub(crate) fn execute_ora<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a |= value;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles + page_crossed as u8
}

/// Executes EOR (Exclusive OR).
pub(crate) fn execute_eor<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a ^= value;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles + page_crossed as u8
}

/// Executes BIT (Bit Test). N and V come straight from memory bits 7 and
/// 6; Z reflects `A & M`; the accumulator is not modified.
pub(crate) fn execute_bit<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    cpu.p.set(StatusRegister::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(StatusRegister::OVERFLOW, value & 0x40 != 0);
    cpu.p.set(StatusRegister::ZERO, cpu.a & value == 0);

    metadata.base_cycles
}
