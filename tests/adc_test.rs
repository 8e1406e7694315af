//! Tests for ADC (Add with Carry), binary and decimal modes.
//!
//! Decimal semantics follow the NMOS 6502: Z is derived from the binary
//! sum, N and V from the intermediate high nibble, C from the decimal
//! carry.

use sys6502::{Bus, FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Writes `ADC #imm` at 0x8000.
fn adc_immediate(cpu: &mut CPU<FlatMemory>, value: u8) {
    cpu.bus_mut().write(0x8000, 0x69);
    cpu.bus_mut().write(0x8001, value);
}

// ========== Binary Mode ==========

#[test]
fn test_adc_simple_addition() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x20);
    cpu.set_a(0x10);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_includes_carry_in() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x20);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x31);
    assert!(!cpu.flag_c()); // consumed, not set
}

#[test]
fn test_adc_sets_carry_on_overflow_past_ff() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0xFF);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_signed_overflow_positive() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0x7F); // +127 + 1 = -128

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_signed_overflow_negative() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0xFF);
    cpu.set_a(0x80); // -128 + -1 = +127 with overflow

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0xFF); // -1
    cpu.set_a(0x01);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_low_nibble_carry() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0x09);
    cpu.set_flag_d(true);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x10); // BCD 09 + 01 = 10
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_wraps_to_zero_with_carry() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x00); // BCD 99 + 01 = 100
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_with_carry_in() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x25);
    cpu.set_a(0x24);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x50); // BCD 24 + 25 + 1
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_zero_flag_tracks_binary_sum() {
    let mut cpu = setup_cpu();
    adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);

    cpu.execute_instruction().unwrap();

    // A is 0x00 but the binary sum 0x9A was non-zero: NMOS leaves Z clear
    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_z());
}

// ========== Addressing / cycles ==========

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x79); // ADC $10FF,Y
    cpu.bus_mut().write(0x8001, 0xFF);
    cpu.bus_mut().write(0x8002, 0x10);
    cpu.bus_mut().write(0x1100, 0x05);
    cpu.set_a(0x03);
    cpu.set_y(0x01);

    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.a(), 0x08);
    assert_eq!(cpu.cycles(), 5); // 4 + page cross
}
