//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for all 6502 instruction
//! information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - carried with their commonly
//!   accepted mnemonics (`SLO`, `LAX`, `DCP`, the `NOP` variants, `JAM`,
//!   and so on), so the executor can run them like any other instruction
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes
//! - Whether the opcode is undocumented

use crate::addressing::AddressingMode;

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed
/// for decoding and execution planning.
///
/// # Fields
///
/// - `mnemonic`: Three-letter instruction name (e.g., "LDA", "SLO", "JAM")
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Minimum cycle cost (page-crossing penalties added
///   dynamically)
/// - `size_bytes`: Total instruction size including opcode and operands
///   (1-3 bytes)
/// - `illegal`: Whether this is an undocumented opcode
///
/// # Examples
///
/// ```
/// use sys6502::{OPCODE_TABLE, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.illegal, false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA"; undocumented opcodes use
    /// their commonly accepted names such as "SLO" or "JAM").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: Implicit, Accumulator modes
    /// - 2 bytes: Immediate, Zero Page, Relative, Indexed Indirect modes
    /// - 3 bytes: Absolute, Indirect modes
    pub size_bytes: u8,

    /// Whether this opcode is undocumented.
    ///
    /// Undocumented opcodes execute their commonly observed behaviour; the
    /// `JAM` group halts the CPU.
    pub illegal: bool,
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// This table serves as the single source of truth for all 6502 instruction
/// metadata. Index into the array using the opcode byte to retrieve its
/// metadata.
///
/// # Organization
///
/// - **Documented opcodes** (151 entries): Official NMOS 6502 instructions
///   with accurate mnemonic, addressing mode, cycle cost, and size
///   information.
/// - **Illegal opcodes** (105 entries): undocumented instructions under
///   their commonly accepted mnemonics, flagged with `illegal: true`.
///
/// # Examples
///
/// ```
/// use sys6502::OPCODE_TABLE;
///
/// // Look up instruction metadata
/// let brk = &OPCODE_TABLE[0x00];
/// println!("{} - {} cycles, {} bytes", brk.mnemonic, brk.base_cycles, brk.size_bytes);
/// // Output: BRK - 7 cycles, 1 bytes
///
/// // Check whether an opcode is undocumented
/// let jam = &OPCODE_TABLE[0x02];
/// assert_eq!(jam.mnemonic, "JAM");
/// assert!(jam.illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "BRK",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 7,
        size_bytes: 1,
        illegal: false,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x02 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x03 - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x04 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: true,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x07 - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: "PHP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        illegal: false,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x0B - undocumented
    OpcodeMetadata {
        mnemonic: "ANC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x0C - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0x0F - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x12 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x13 - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x14 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x17 - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x18
    OpcodeMetadata {
        mnemonic: "CLC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x1A - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x1B - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x1C - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0x1F - undocumented
    OpcodeMetadata {
        mnemonic: "SLO",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x22 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x23 - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x27 - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "PLP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        illegal: false,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x2B - undocumented
    OpcodeMetadata {
        mnemonic: "ANC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0x2F - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x32 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x33 - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x34 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x37 - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x38
    OpcodeMetadata {
        mnemonic: "SEC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x3A - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x3B - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x3C - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0x3F - undocumented
    OpcodeMetadata {
        mnemonic: "RLA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "RTI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        illegal: false,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x42 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x43 - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x44 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: true,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x47 - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "PHA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        illegal: false,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x4B - undocumented
    OpcodeMetadata {
        mnemonic: "ALR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        size_bytes: 3,
        illegal: false,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0x4F - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x52 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x53 - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x54 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x57 - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "CLI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x5A - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x5B - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x5C - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0x5F - undocumented
    OpcodeMetadata {
        mnemonic: "SRE",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        illegal: false,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x62 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x63 - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x64 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: true,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x67 - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "PLA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        illegal: false,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x6B - undocumented
    OpcodeMetadata {
        mnemonic: "ARR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Indirect,
        base_cycles: 5,
        size_bytes: 3,
        illegal: false,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0x6F - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0x72 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x73 - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0x74 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x77 - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "SEI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x7A - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x7B - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x7C - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0x7F - undocumented
    OpcodeMetadata {
        mnemonic: "RRA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0x80 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x82 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x83 - undocumented
    OpcodeMetadata {
        mnemonic: "SAX",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0x87 - undocumented
    OpcodeMetadata {
        mnemonic: "SAX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: true,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: "DEY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x89 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x8B - undocumented
    OpcodeMetadata {
        mnemonic: "ANE",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0x8F - undocumented
    OpcodeMetadata {
        mnemonic: "SAX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: "BCC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0x92 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0x93 - undocumented
    OpcodeMetadata {
        mnemonic: "SHA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0x97 - undocumented
    OpcodeMetadata {
        mnemonic: "SAX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "TYA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        illegal: false,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "TXS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0x9B - undocumented
    OpcodeMetadata {
        mnemonic: "SHS",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        illegal: true,
    },
    // 0x9C - undocumented
    OpcodeMetadata {
        mnemonic: "SHY",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        illegal: true,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        illegal: false,
    },
    // 0x9E - undocumented
    OpcodeMetadata {
        mnemonic: "SHX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        illegal: true,
    },
    // 0x9F - undocumented
    OpcodeMetadata {
        mnemonic: "SHA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        illegal: true,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA3 - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xA7 - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: true,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "TAY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xAB - undocumented
    OpcodeMetadata {
        mnemonic: "LXA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xAF - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "BCS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0xB2 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0xB3 - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0xB7 - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "CLV",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "TSX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xBB - undocumented
    OpcodeMetadata {
        mnemonic: "LAS",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xBF - undocumented
    OpcodeMetadata {
        mnemonic: "LAX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0xC2 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0xC3 - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0xC7 - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: "INY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "DEX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xCB - undocumented
    OpcodeMetadata {
        mnemonic: "SBX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0xCF - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0xD2 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0xD3 - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0xD4 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0xD7 - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "CLD",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xDA - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0xDB - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0xDC - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0xDF - undocumented
    OpcodeMetadata {
        mnemonic: "DCP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0xE2 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0xE3 - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        illegal: false,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0xE7 - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        illegal: true,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "INX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xEB - undocumented
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        illegal: true,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: false,
    },
    // 0xEF - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        illegal: true,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        illegal: false,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        illegal: false,
    },
    // 0xF2 - undocumented
    OpcodeMetadata {
        mnemonic: "JAM",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0xF3 - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        size_bytes: 2,
        illegal: true,
    },
    // 0xF4 - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: true,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        illegal: false,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: false,
    },
    // 0xF7 - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        illegal: true,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "SED",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: false,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xFA - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        illegal: true,
    },
    // 0xFB - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
    // 0xFC - undocumented
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: true,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        illegal: false,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: false,
    },
    // 0xFF - undocumented
    OpcodeMetadata {
        mnemonic: "ISC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        illegal: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_256_entries() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| !m.illegal).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for (index, metadata) in OPCODE_TABLE.iter().enumerate() {
            let expected = 1 + metadata.addressing_mode.operand_bytes();
            assert_eq!(
                metadata.size_bytes as u16, expected,
                "size mismatch for opcode 0x{:02X}",
                index
            );
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(OPCODE_TABLE[0xA9].mnemonic, "LDA");
        assert_eq!(OPCODE_TABLE[0x8D].mnemonic, "STA");
        assert_eq!(OPCODE_TABLE[0x6C].base_cycles, 5); // JMP (ind)
        assert_eq!(OPCODE_TABLE[0x00].base_cycles, 7); // BRK
        assert_eq!(OPCODE_TABLE[0xEB].mnemonic, "SBC"); // undocumented alias
        assert!(OPCODE_TABLE[0xEB].illegal);
    }

    #[test]
    fn test_jam_opcodes_present() {
        for op in [0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2] {
            assert_eq!(OPCODE_TABLE[op as usize].mnemonic, "JAM");
        }
    }
}
