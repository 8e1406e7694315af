//! Tests for stack instructions (PHA/PHP/PLA/PLP) and the stack
//! primitives, including wrap-around at the page boundary.

use sys6502::{Bus, FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x48); // PHA
    cpu.bus_mut().write(0x8001, 0xA9); // LDA #$00
    cpu.bus_mut().write(0x8002, 0x00);
    cpu.bus_mut().write(0x8003, 0x68); // PLA
    cpu.set_a(0x42);

    let sp_before = cpu.sp();

    cpu.execute_instruction().unwrap(); // PHA
    assert_eq!(cpu.sp(), sp_before.wrapping_sub(1));
    assert_eq!(cpu.cycles(), 3);

    cpu.execute_instruction().unwrap(); // LDA #$00
    assert_eq!(cpu.a(), 0x00);

    cpu.execute_instruction().unwrap(); // PLA
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.sp(), sp_before);
}

#[test]
fn test_pla_updates_zn() {
    let mut cpu = setup_cpu();

    cpu.push_byte(0x00);
    cpu.bus_mut().write(0x8000, 0x68); // PLA
    cpu.set_a(0x55);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_php_forces_b_and_u_in_pushed_byte() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x08); // PHP
    let sp_before = cpu.sp();

    cpu.execute_instruction().unwrap();

    let pushed = cpu.bus().read(0x0100 | sp_before as u16);
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000);
    assert!(!cpu.flag_b()); // live flag untouched
}

#[test]
fn test_plp_ignores_b_keeps_u() {
    let mut cpu = setup_cpu();

    cpu.push_byte(0b1101_0011); // N V B Z C set, U clear in the byte
    cpu.bus_mut().write(0x8000, 0x28); // PLP

    cpu.execute_instruction().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_b()); // pushed B ignored
    assert_eq!(cpu.status() & 0b0010_0000, 0b0010_0000); // U reads 1
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_php_plp_round_trips_meaningful_bits() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x08); // PHP
    cpu.bus_mut().write(0x8001, 0x28); // PLP
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);
    cpu.set_flag_d(true);

    let status_before = cpu.status();
    cpu.execute_instruction().unwrap();
    cpu.execute_instruction().unwrap();

    // Everything except B round-trips
    assert_eq!(cpu.status() & 0b1110_1111, status_before & 0b1110_1111);
}

#[test]
fn test_stack_wraps_from_00_to_ff() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x48); // PHA
    cpu.set_sp(0x00);
    cpu.set_a(0x7E);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.bus().read(0x0100), 0x7E);
}

#[test]
fn test_txs_tsx() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x9A); // TXS
    cpu.bus_mut().write(0x8001, 0xBA); // TSX
    cpu.set_x(0x00);
    cpu.set_flag_z(false);

    cpu.execute_instruction().unwrap(); // TXS
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z()); // TXS never touches flags

    cpu.set_sp(0x80);
    cpu.execute_instruction().unwrap(); // TSX
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n()); // TSX does
}
