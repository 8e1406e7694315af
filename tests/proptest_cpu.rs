//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use proptest::prelude::*;
use sys6502::{Bus, FlatMemory, CPU, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Opcodes that advance PC by exactly their size: everything except
/// control flow, branches, and JAM.
fn straight_line_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.mnemonic,
                "BCC" | "BCS" | "BEQ" | "BNE" | "BMI" | "BPL" | "BVC" | "BVS" | "JMP" | "JSR"
                    | "RTS" | "RTI" | "BRK" | "JAM"
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    /// Property: straight-line instructions advance PC by size_bytes.
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(straight_line_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];
        let expected_size = metadata.size_bytes as u16;

        cpu.bus_mut().write(0x8000, opcode);
        cpu.bus_mut().write(0x8001, operand1);
        cpu.bus_mut().write(0x8002, operand2);

        let old_pc = cpu.pc();
        cpu.execute_instruction().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            old_pc.wrapping_add(expected_size),
            "PC advance mismatch for opcode 0x{:02X} ({})",
            opcode,
            metadata.mnemonic
        );
    }

    /// Property: every instruction consumes at least its base cycles and
    /// at most base + 2.
    #[test]
    fn prop_cycles_within_documented_bounds(
        opcode in 0u8..=255u8,
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
        a in 0u8..=255u8,
        x in 0u8..=255u8,
        y in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];

        cpu.bus_mut().write(0x8000, opcode);
        cpu.bus_mut().write(0x8001, operand1);
        cpu.bus_mut().write(0x8002, operand2);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);

        cpu.execute_instruction().unwrap();

        let consumed = cpu.cycles();
        prop_assert!(
            consumed >= metadata.base_cycles as u64,
            "opcode 0x{:02X} consumed {} < base {}",
            opcode, consumed, metadata.base_cycles
        );
        prop_assert!(
            consumed <= metadata.base_cycles as u64 + 2,
            "opcode 0x{:02X} consumed {} > base {} + 2",
            opcode, consumed, metadata.base_cycles
        );
    }

    /// Property: push then pull returns the byte and restores SP.
    #[test]
    fn prop_push_pull_byte_round_trip(value in 0u8..=255u8, sp in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);

        cpu.push_byte(value);
        prop_assert_eq!(cpu.pull_byte(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: push_word then pull_word round-trips any word.
    #[test]
    fn prop_push_pull_word_round_trip(value in 0u16..=0xFFFF, sp in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);

        cpu.push_word(value);
        prop_assert_eq!(cpu.pull_word(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: the status byte always reads bit 5 as one, under any
    /// flag combination an executed instruction produces.
    #[test]
    fn prop_status_bit5_always_one(
        opcode in prop::sample::select(straight_line_opcodes()),
        operand in 0u8..=255u8,
        a in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x8000, opcode);
        cpu.bus_mut().write(0x8001, operand);
        cpu.set_a(a);

        cpu.execute_instruction().unwrap();
        prop_assert_eq!(cpu.status() & 0b0010_0000, 0b0010_0000);
    }

    /// Property: executing from any reset vector, the first fetch comes
    /// from that address.
    #[test]
    fn prop_reset_vector_is_honored(vector in 0u16..=0xFFF0) {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, (vector & 0xFF) as u8);
        memory.write(0xFFFD, (vector >> 8) as u8);
        memory.write(vector, 0xEA); // NOP

        let mut cpu = CPU::new(memory);
        prop_assert_eq!(cpu.pc(), vector);

        cpu.execute_instruction().unwrap();
        prop_assert_eq!(cpu.pc(), vector.wrapping_add(1));
    }

    /// Property: LDA immediate always sets Z iff the operand is zero and
    /// N iff bit 7 is set.
    #[test]
    fn prop_lda_zn_flags(value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x8000, 0xA9);
        cpu.bus_mut().write(0x8001, value);

        cpu.execute_instruction().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
    }
}
