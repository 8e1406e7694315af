//! Tests for CPU power-on and reset behaviour.

use sys6502::{Bus, FlatMemory, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_power_on_state() {
    let cpu = setup_cpu();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.cycles(), 0);

    assert!(cpu.flag_i()); // Interrupt disable set on reset
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
}

#[test]
fn test_status_register_packing() {
    let cpu = setup_cpu();
    let status = cpu.status();

    // Bit 5 always 1, I flag set (bit 2)
    assert_eq!(status & 0b0010_0000, 0b0010_0000);
    assert_eq!(status & 0b0000_0100, 0b0000_0100);
}

#[test]
fn test_reset_vector_follow() {
    // First executed opcode must come from the address in the vector
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);
    memory.write(0x1234, 0xA9); // LDA #$7F
    memory.write(0x1235, 0x7F);

    let mut cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x1234);

    cpu.execute_instruction().unwrap();
    assert_eq!(cpu.a(), 0x7F);
    assert_eq!(cpu.pc(), 0x1236);
}

#[test]
fn test_reset_request_contract() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x40);
    cpu.set_flag_d(true);
    cpu.set_flag_i(false);

    cpu.reset();
    cpu.execute_instruction().unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0x3D); // decremented by 3, nothing pushed
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_d());
    assert!(cpu.cycles() >= 7);
}

#[test]
fn test_reset_takes_effect_at_instruction_boundary() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0xEA); // NOP

    cpu.step().unwrap(); // NOP executes, one cycle left to burn
    cpu.reset();
    cpu.step().unwrap(); // burn-down cycle, reset still pending
    assert_eq!(cpu.pc(), 0x8001);

    cpu.step().unwrap(); // boundary: reset services now
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_reset_revives_halted_cpu() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x02); // JAM

    cpu.execute_instruction().unwrap();
    assert!(cpu.is_halted());

    cpu.reset();
    cpu.execute_instruction().unwrap();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_reset_while_halted_applies_immediately() {
    let mut cpu = setup_cpu();
    cpu.halt();
    cpu.reset();
    cpu.step().unwrap();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.pc(), 0x8000);
}
