//! # Control Flow Instructions
//!
//! - JMP: absolute or indirect jump (indirect reproduces the page-wrap bug)
//! - JSR / RTS: subroutine linkage through the stack
//! - BRK / RTI: software interrupt entry and return
//! - NOP: documented and undocumented variants of several lengths
//! - JAM: undocumented halt

use crate::addressing::AddressingMode;
use crate::cpu::IRQ_VECTOR;
use crate::status::StatusRegister;
use crate::{Bus, CPU, OPCODE_TABLE};

/// Executes JMP (Jump). No flags or stack involvement.
pub(crate) fn execute_jmp<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (target, _) = cpu.resolve_operand(metadata.addressing_mode);

    cpu.pc = target;

    metadata.base_cycles
}

/// Executes JSR (Jump to Subroutine).
///
/// Pushes the address of the last operand byte (PC - 1) high byte first,
/// then jumps. RTS adds one back.
pub(crate) fn execute_jsr<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (target, _) = cpu.resolve_operand(metadata.addressing_mode);

    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = target;

    metadata.base_cycles
}

/// Executes RTS (Return from Subroutine). Pulls the address pushed by JSR
/// and adds one.
pub(crate) fn execute_rts<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes BRK (Force Interrupt).
///
/// Advances PC one byte past the opcode (the dummy operand), pushes PC and
/// the status byte with B set, sets I, and loads PC from the IRQ vector.
/// The live B flag is not modified.
pub(crate) fn execute_brk<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.pc = cpu.pc.wrapping_add(1);
    let return_pc = cpu.pc;
    cpu.push_word(return_pc);

    let status = (cpu.p | StatusRegister::BREAK).to_byte();
    cpu.push_byte(status);

    cpu.p.insert(StatusRegister::INTERRUPT_DISABLE);
    cpu.pc = cpu.bus.read_word(IRQ_VECTOR);

    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes RTI (Return from Interrupt).
///
/// Pulls status (ignoring the pushed B bit), then PC. Unlike RTS, no +1.
pub(crate) fn execute_rti<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let pulled = cpu.pull_byte();
    let live_b = cpu.p.contains(StatusRegister::BREAK);
    cpu.p = StatusRegister::from_byte(pulled);
    cpu.p.set(StatusRegister::BREAK, live_b);

    cpu.pc = cpu.pull_word();

    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes NOP, including the undocumented multi-byte variants.
///
/// Variants with an operand consume (and actually read) it, so memory-
/// mapped peripherals observe the access; the indexed absolute forms pay
/// the page-crossing cycle like any other read.
pub(crate) fn execute_nop<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let page_crossed = if metadata.addressing_mode == AddressingMode::Implicit {
        false
    } else {
        let (_, crossed) = cpu.read_operand(metadata.addressing_mode);
        crossed
    };

    metadata.base_cycles + page_crossed as u8
}

/// Executes JAM: halts the CPU. Only RESET restarts it.
pub(crate) fn execute_jam<B: Bus>(cpu: &mut CPU<B>, opcode: u8) -> u8 {
    cpu.halted = true;
    OPCODE_TABLE[opcode as usize].base_cycles
}
