//! # Undocumented Instructions
//!
//! The NMOS 6502's illegal opcodes, implemented to their commonly observed
//! behaviour so programs that rely on them keep working:
//!
//! - Combined read-modify-write ops (SLO, RLA, SRE, RRA, DCP, ISC) compose
//!   the shift/inc primitive with the matching ALU operation
//! - Load/store hybrids (LAX, SAX) and the immediate-mode oddities (ANC,
//!   ALR, ARR, ANE, LXA, SBX)
//! - The "high byte + 1" store group (SHA, SHS, SHX, SHY) and LAS
//!
//! Unstable opcodes (ANE, LXA) use the widely quoted 0xEE magic constant.
//! Page-crossing penalties apply to the read-type illegals exactly as they
//! do to documented reads. JAM lives in `control.rs`.

use crate::instructions::{alu, shifts};
use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

/// LAX: load accumulator and X with the same value.
pub(crate) fn execute_lax<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = value;
    cpu.x = value;
    cpu.p.update_zn(value);

    metadata.base_cycles + page_crossed as u8
}

/// SAX: store A AND X. No flags.
pub(crate) fn execute_sax<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.a & cpu.x;
    cpu.bus.write(addr, value);

    metadata.base_cycles
}

/// SLO: ASL memory, then ORA the result into A.
pub(crate) fn execute_slo<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.bus.read(addr);
    let shifted = shifts::asl_value(cpu, value);
    cpu.bus.write(addr, shifted);

    cpu.a |= shifted;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles
}

/// RLA: ROL memory, then AND the result into A.
pub(crate) fn execute_rla<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.bus.read(addr);
    let rotated = shifts::rol_value(cpu, value);
    cpu.bus.write(addr, rotated);

    cpu.a &= rotated;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles
}

/// SRE: LSR memory, then EOR the result into A.
pub(crate) fn execute_sre<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.bus.read(addr);
    let shifted = shifts::lsr_value(cpu, value);
    cpu.bus.write(addr, shifted);

    cpu.a ^= shifted;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles
}

/// RRA: ROR memory, then ADC the result.
pub(crate) fn execute_rra<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.bus.read(addr);
    let rotated = shifts::ror_value(cpu, value);
    cpu.bus.write(addr, rotated);

    alu::add_with_carry(cpu, rotated);

    metadata.base_cycles
}

/// DCP: DEC memory, then CMP against A.
pub(crate) fn execute_dcp<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let result = cpu.bus.read(addr).wrapping_sub(1);
    cpu.bus.write(addr, result);

    let register = cpu.a;
    alu::compare(cpu, register, result);

    metadata.base_cycles
}

/// ISC: INC memory, then SBC the result.
pub(crate) fn execute_isc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let result = cpu.bus.read(addr).wrapping_add(1);
    cpu.bus.write(addr, result);

    alu::subtract_with_carry(cpu, result);

    metadata.base_cycles
}

/// ANC: AND immediate; carry mirrors the negative flag.
pub(crate) fn execute_anc<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    cpu.a &= value;
    cpu.p.update_zn(cpu.a);
    cpu.p.set(StatusRegister::CARRY, cpu.a & 0x80 != 0);

    metadata.base_cycles
}

/// ALR: AND immediate, then LSR the accumulator.
pub(crate) fn execute_alr<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let anded = cpu.a & value;
    cpu.a = shifts::lsr_value(cpu, anded);

    metadata.base_cycles
}

/// ARR: AND immediate, then ROR the accumulator with its own flag rules:
/// C comes from bit 6 of the result, V from bit 6 XOR bit 5.
pub(crate) fn execute_arr<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let anded = cpu.a & value;
    let carry_in = cpu.p.contains(StatusRegister::CARRY) as u8;
    let result = (anded >> 1) | (carry_in << 7);

    cpu.a = result;
    cpu.p.update_zn(result);
    cpu.p.set(StatusRegister::CARRY, result & 0x40 != 0);
    cpu.p.set(
        StatusRegister::OVERFLOW,
        ((result >> 6) ^ (result >> 5)) & 0x01 != 0,
    );

    metadata.base_cycles
}

/// ANE: unstable; A = (A | 0xEE) & X & immediate.
pub(crate) fn execute_ane<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = (cpu.a | 0xEE) & cpu.x & value;
    cpu.p.update_zn(cpu.a);

    metadata.base_cycles
}

/// LXA: unstable; A = X = (A | 0xEE) & immediate.
pub(crate) fn execute_lxa<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let result = (cpu.a | 0xEE) & value;
    cpu.a = result;
    cpu.x = result;
    cpu.p.update_zn(result);

    metadata.base_cycles
}

/// SBX: X = (A AND X) - immediate, with CMP-style carry.
pub(crate) fn execute_sbx<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    let masked = cpu.a & cpu.x;
    cpu.p.set(StatusRegister::CARRY, masked >= value);
    cpu.x = masked.wrapping_sub(value);
    cpu.p.update_zn(cpu.x);

    metadata.base_cycles
}

/// SHA: store A AND X AND (target high byte + 1).
pub(crate) fn execute_sha<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.a & cpu.x & ((addr >> 8) as u8).wrapping_add(1);
    cpu.bus.write(addr, value);

    metadata.base_cycles
}

/// SHS (TAS): SP = A AND X, then store SP AND (target high byte + 1).
pub(crate) fn execute_shs<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    cpu.sp = cpu.a & cpu.x;
    let value = cpu.sp & ((addr >> 8) as u8).wrapping_add(1);
    cpu.bus.write(addr, value);

    metadata.base_cycles
}

/// SHX: store X AND (target high byte + 1).
pub(crate) fn execute_shx<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.x & ((addr >> 8) as u8).wrapping_add(1);
    cpu.bus.write(addr, value);

    metadata.base_cycles
}

/// SHY: store Y AND (target high byte + 1).
pub(crate) fn execute_shy<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.resolve_operand(metadata.addressing_mode);

    let value = cpu.y & ((addr >> 8) as u8).wrapping_add(1);
    cpu.bus.write(addr, value);

    metadata.base_cycles
}

/// LAS: A = X = SP = memory AND SP.
pub(crate) fn execute_las<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let result = value & cpu.sp;
    cpu.a = result;
    cpu.x = result;
    cpu.sp = result;
    cpu.p.update_zn(result);

    metadata.base_cycles + page_crossed as u8
}
