//! Tests for the logic (AND/ORA/EOR/BIT) and compare (CMP/CPX/CPY)
//! instructions.

use sys6502::{Bus, FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x29); // AND #$0F
    cpu.bus_mut().write(0x8001, 0x0F);
    cpu.set_a(0xF5);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_and_produces_zero() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x29);
    cpu.bus_mut().write(0x8001, 0x0F);
    cpu.set_a(0xF0);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ora_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x09); // ORA #$80
    cpu.bus_mut().write(0x8001, 0x80);
    cpu.set_a(0x01);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_self_clears_accumulator() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x49); // EOR #$5A
    cpu.bus_mut().write(0x8001, 0x5A);
    cpu.set_a(0x5A);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_bit_copies_memory_bits_into_nv() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x24); // BIT $10
    cpu.bus_mut().write(0x8001, 0x10);
    cpu.bus_mut().write(0x0010, 0b1100_0000);
    cpu.set_a(0x01);

    cpu.execute_instruction().unwrap();

    assert!(cpu.flag_n()); // memory bit 7
    assert!(cpu.flag_v()); // memory bit 6
    assert!(cpu.flag_z()); // A & M == 0
    assert_eq!(cpu.a(), 0x01); // A untouched
}

#[test]
fn test_bit_nonzero_intersection() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x2C); // BIT $1000
    cpu.bus_mut().write(0x8001, 0x00);
    cpu.bus_mut().write(0x8002, 0x10);
    cpu.bus_mut().write(0x1000, 0b0011_1111);
    cpu.set_a(0x0F);

    cpu.execute_instruction().unwrap();

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cmp_greater_equal_less() {
    // (a, m, carry, zero, negative)
    let cases = [
        (0x50_u8, 0x30_u8, true, false, false), // A > M
        (0x30, 0x30, true, true, false),        // A == M
        (0x30, 0x50, false, false, true),       // A < M: 0x30-0x50 = 0xE0
    ];

    for (a, m, c, z, n) in cases {
        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x8000, 0xC9); // CMP #imm
        cpu.bus_mut().write(0x8001, m);
        cpu.set_a(a);

        cpu.execute_instruction().unwrap();

        assert_eq!(cpu.flag_c(), c, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.flag_z(), z, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.flag_n(), n, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.a(), a); // compare never writes A
    }
}

#[test]
fn test_cpx_cpy() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0xE0); // CPX #$10
    cpu.bus_mut().write(0x8001, 0x10);
    cpu.bus_mut().write(0x8002, 0xC0); // CPY #$20
    cpu.bus_mut().write(0x8003, 0x20);
    cpu.set_x(0x10);
    cpu.set_y(0x10);

    cpu.execute_instruction().unwrap();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    cpu.execute_instruction().unwrap();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c()); // Y < M
    assert!(cpu.flag_n());
}

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();
    // SEC CLC SEI CLI SED CLD CLV in sequence
    cpu.bus_mut().load_bytes(0x8000, &[0x38, 0x18, 0x78, 0x58, 0xF8, 0xD8, 0xB8]);
    cpu.set_flag_v(true);
    cpu.set_flag_i(false);

    cpu.execute_instruction().unwrap();
    assert!(cpu.flag_c());
    cpu.execute_instruction().unwrap();
    assert!(!cpu.flag_c());
    cpu.execute_instruction().unwrap();
    assert!(cpu.flag_i());
    cpu.execute_instruction().unwrap();
    assert!(!cpu.flag_i());
    cpu.execute_instruction().unwrap();
    assert!(cpu.flag_d());
    cpu.execute_instruction().unwrap();
    assert!(!cpu.flag_d());
    cpu.execute_instruction().unwrap();
    assert!(!cpu.flag_v());
}
