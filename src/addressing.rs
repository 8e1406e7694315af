//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor. Each mode determines how the CPU interprets operand bytes and
//! calculates effective addresses; the resolver itself lives on the CPU
//! (`CPU::resolve_operand`) because it reads through the bus and advances
//! the program counter.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// The resolver hands back the raw offset byte; sign extension is
    /// deferred to the branch instruction itself.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Only used by JMP. Reproduces the NMOS page-wrap bug: if the pointer
    /// low byte is 0xFF the high byte is fetched from the same page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) - add X to 0x40, read a 16-bit pointer from
    /// that zero-page location (wrapping within the page), load from it.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y - read a 16-bit pointer from zero page 0x40,
    /// add Y, load from the result.
    /// May incur +1 cycle penalty if a page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
