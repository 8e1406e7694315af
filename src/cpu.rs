//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the per-cycle execution loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed N V 1 B D I Z C flags
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Interrupt latches**: RESET, NMI (edge-triggered), IRQ (level)
//!
//! ## Execution Model
//!
//! `step()` advances one clock tick. An instruction executes in full on its
//! first tick and then burns down its remaining cycles on subsequent ticks,
//! so observable timing matches the documented cycle counts. The bus ticks
//! once at the end of every `step()`, strictly after the CPU has mutated its
//! state for that cycle; IRQ edges the bus reports are latched at that
//! point.
//!
//! Interrupts are sampled only at instruction boundaries, in priority order
//! RESET, NMI, IRQ.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::status::StatusRegister;
use crate::{AddressingMode, Bus, ExecutionError, OPCODE_TABLE};

/// RESET vector location (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Number of opcode-fetch addresses kept for the illegal-opcode diagnostic.
const FETCH_HISTORY_LEN: usize = 10;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, interrupt latches, and cycle counter. It
/// is generic over the memory implementation via the `Bus` trait and owns
/// its bus; peripherals deliver interrupts through the bus-side edge latch
/// drained at the end of every step.
///
/// # Type Parameters
///
/// * `B` - Bus implementation (must implement the `Bus` trait)
///
/// # Examples
///
/// ```
/// use sys6502::{Bus, FlatMemory, CPU};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<B: Bus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Packed status register
    pub(crate) p: StatusRegister,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Cycles left before the current instruction completes
    pub(crate) cycle_remainder: i8,

    /// Fetch is suspended; each step still consumes one cycle
    pub(crate) halted: bool,

    /// Sticky RESET latch, serviced at the next instruction boundary
    reset_pending: bool,

    /// Sticky NMI latch (edge-triggered via `nmi_line_high`)
    nmi_pending: bool,

    /// Sticky IRQ latch (level-triggered)
    irq_pending: bool,

    /// Shadow of the NMI input line; a request only latches on a
    /// high-to-low transition
    nmi_line_high: bool,

    /// Ring of recent opcode-fetch addresses for diagnostics
    fetch_history: VecDeque<u16>,

    /// Cooperative run flag shared with `stop_handle()` holders
    running: Arc<AtomicBool>,

    /// Bus implementation
    pub(crate) bus: B,
}

impl<B: Bus> CPU<B> {
    /// Creates a new CPU with the given bus.
    ///
    /// The CPU is initialized to the 6502 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at
    ///   0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has Interrupt Disable set and Decimal clear
    /// - All other registers (A, X, Y) are zeroed
    /// - Cycle counter is reset to 0
    ///
    /// # Examples
    ///
    /// ```
    /// use sys6502::{Bus, FlatMemory, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(bus: B) -> Self {
        let pc = bus.read_word(RESET_VECTOR);

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFD,
            p: StatusRegister::on_reset(),
            cycles: 0,
            cycle_remainder: 0,
            halted: false,
            reset_pending: false,
            nmi_pending: false,
            irq_pending: false,
            nmi_line_high: true,
            fetch_history: VecDeque::with_capacity(FETCH_HISTORY_LEN),
            running: Arc::new(AtomicBool::new(false)),
            bus,
        }
    }

    /// Advances the CPU by one clock tick.
    ///
    /// Behaviour per tick:
    /// 1. If halted, consume one cycle (RESET still takes effect here).
    /// 2. If the current instruction has cycles left to burn, burn one.
    /// 3. Otherwise sample the interrupt latches in priority order
    ///    RESET, NMI, IRQ-and-I-clear; service the first one pending, or
    ///    fetch, decode, and execute the opcode at PC.
    ///
    /// The bus ticks at the end of every call, after the CPU has mutated
    /// its state; any IRQ rising edge the bus reports is latched for the
    /// next instruction boundary.
    ///
    /// # Errors
    ///
    /// `ExecutionError::IllegalOpcode` if the fetched byte has no handler.
    /// The error is fatal to the instruction stream; the composer decides
    /// whether to report and halt.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let result = if self.halted {
            // RESET is the only way out of a JAM, and it applies
            // immediately while halted.
            if self.reset_pending {
                self.service_reset();
            } else if self.cycle_remainder > 0 {
                // Finish burning an instruction interrupted by halt()
                self.cycle_remainder -= 1;
            } else {
                self.cycles += 1;
            }
            Ok(())
        } else if self.cycle_remainder > 0 {
            self.cycle_remainder -= 1;
            Ok(())
        } else if self.reset_pending {
            self.service_reset();
            Ok(())
        } else if self.nmi_pending {
            self.service_nmi();
            Ok(())
        } else if self.irq_pending && !self.p.contains(StatusRegister::INTERRUPT_DISABLE) {
            self.service_irq();
            Ok(())
        } else {
            self.fetch_and_execute()
        };

        self.bus.tick();
        if self.bus.poll_irq() {
            self.irq_pending = true;
        }

        result
    }

    /// Steps until the current instruction (or interrupt service) has
    /// consumed all of its cycles.
    ///
    /// From an instruction boundary this executes exactly one instruction.
    /// Mid-instruction it finishes the one in flight.
    pub fn execute_instruction(&mut self) -> Result<(), ExecutionError> {
        self.step()?;
        while self.cycle_remainder > 0 {
            self.step()?;
        }
        Ok(())
    }

    /// Runs until `stop()` is called (cooperatively, checked between
    /// instructions) or an instruction faults.
    ///
    /// A signal handler holding `stop_handle()` can end the loop from
    /// outside; the current instruction always completes first.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        self.running.store(true, Ordering::SeqCst);
        while self.running.load(Ordering::SeqCst) {
            self.execute_instruction()?;
        }
        Ok(())
    }

    /// Requests that `run()` return after the current instruction.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Returns a handle that can stop `run()` from another context
    /// (typically a Ctrl-C handler installed by the launcher).
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes ticks until the cycle budget is exhausted or an error
    /// occurs. Returns the actual number of cycles consumed (may be
    /// slightly more than the budget due to instruction granularity).
    ///
    /// This is useful for frame-locked execution models where the CPU must
    /// run for an exact number of cycles per frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use sys6502::{Bus, FlatMemory, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// let consumed = cpu.run_for_cycles(10).unwrap();
    /// assert_eq!(consumed, 10); // five NOPs at 2 cycles each
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Interrupt Inputs ==========

    /// Latches a RESET request, serviced at the next instruction boundary
    /// (or immediately if the CPU is halted). Highest priority.
    pub fn reset(&mut self) {
        self.reset_pending = true;
    }

    /// Pulls the NMI line low. The request only latches if the line was
    /// high, so repeated calls without `release_nmi()` in between deliver
    /// exactly one NMI.
    pub fn request_nmi(&mut self) {
        if self.nmi_line_high {
            self.nmi_line_high = false;
            self.nmi_pending = true;
        }
    }

    /// Restores the NMI line high, re-arming edge detection.
    pub fn release_nmi(&mut self) {
        self.nmi_line_high = true;
    }

    /// Raises the level-triggered IRQ latch. Serviced at the next
    /// instruction boundary when the I flag is clear.
    pub fn request_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Clears the IRQ latch.
    pub fn release_irq(&mut self) {
        self.irq_pending = false;
    }

    /// Suspends instruction fetch; each step still consumes a cycle.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Resumes instruction fetch after `halt()`.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    // ========== Interrupt Service ==========

    /// RESET sequence: 7 cycles, SP drops by 3 without pushing, registers
    /// cleared, I set, D clear, PC loaded from 0xFFFC/D. Clears the halt
    /// state and every pending latch.
    fn service_reset(&mut self) {
        self.sp = self.sp.wrapping_sub(3);
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.p = StatusRegister::on_reset();
        self.pc = self.bus.read_word(RESET_VECTOR);
        self.halted = false;
        self.reset_pending = false;
        self.nmi_pending = false;
        self.irq_pending = false;
        self.nmi_line_high = true;
        self.cycles += 7;
        self.cycle_remainder = 6;
        log::debug!("reset: pc=0x{:04X}", self.pc);
    }

    fn service_nmi(&mut self) {
        self.nmi_pending = false;
        self.enter_interrupt(NMI_VECTOR);
        log::debug!("nmi: pc=0x{:04X}", self.pc);
    }

    fn service_irq(&mut self) {
        self.irq_pending = false;
        self.enter_interrupt(IRQ_VECTOR);
        log::debug!("irq: pc=0x{:04X}", self.pc);
    }

    /// Common NMI/IRQ entry: push PC (high then low), push status with B
    /// clear, set I, load PC from the vector. 7 cycles.
    fn enter_interrupt(&mut self, vector: u16) {
        let return_pc = self.pc;
        self.push_word(return_pc);
        let status = (self.p - StatusRegister::BREAK).to_byte();
        self.push_byte(status);
        self.p.insert(StatusRegister::INTERRUPT_DISABLE);
        self.pc = self.bus.read_word(vector);
        self.cycles += 7;
        self.cycle_remainder = 6;
    }

    // ========== Fetch / Decode / Execute ==========

    fn fetch_and_execute(&mut self) -> Result<(), ExecutionError> {
        let fetch_pc = self.pc;
        self.record_fetch(fetch_pc);

        let opcode = self.bus.read(fetch_pc);
        self.pc = self.pc.wrapping_add(1);

        let cycles = self.execute(opcode, fetch_pc)?;
        self.cycles += cycles as u64;
        // A JAM consumed its cycles up front; nothing is left to burn
        self.cycle_remainder = if self.halted { 0 } else { cycles as i8 - 1 };
        Ok(())
    }

    fn record_fetch(&mut self, pc: u16) {
        if self.fetch_history.len() == FETCH_HISTORY_LEN {
            self.fetch_history.pop_front();
        }
        self.fetch_history.push_back(pc);
    }

    /// Dispatches one opcode and returns the cycles it consumed, including
    /// any page-crossing or branch penalty.
    fn execute(&mut self, opcode: u8, fetch_pc: u16) -> Result<u8, ExecutionError> {
        use crate::instructions::*;

        let mnemonic = OPCODE_TABLE[opcode as usize].mnemonic;

        let cycles = match mnemonic {
            // Load / store
            "LDA" => load_store::execute_lda(self, opcode),
            "LDX" => load_store::execute_ldx(self, opcode),
            "LDY" => load_store::execute_ldy(self, opcode),
            "STA" => load_store::execute_sta(self, opcode),
            "STX" => load_store::execute_stx(self, opcode),
            "STY" => load_store::execute_sty(self, opcode),

            // Transfers
            "TAX" => transfer::execute_tax(self, opcode),
            "TAY" => transfer::execute_tay(self, opcode),
            "TXA" => transfer::execute_txa(self, opcode),
            "TYA" => transfer::execute_tya(self, opcode),
            "TSX" => transfer::execute_tsx(self, opcode),
            "TXS" => transfer::execute_txs(self, opcode),

            // Arithmetic and logic
            "ADC" => alu::execute_adc(self, opcode),
            "SBC" => alu::execute_sbc(self, opcode),
            "CMP" => alu::execute_cmp(self, opcode),
            "CPX" => alu::execute_cpx(self, opcode),
            "CPY" => alu::execute_cpy(self, opcode),
            "AND" => alu::execute_and(self, opcode),
            "ORA" => alu::execute_ora(self, opcode),
            "EOR" => alu::execute_eor(self, opcode),
            "BIT" => alu::execute_bit(self, opcode),

            // Shifts and rotates
            "ASL" => shifts::execute_asl(self, opcode),
            "LSR" => shifts::execute_lsr(self, opcode),
            "ROL" => shifts::execute_rol(self, opcode),
            "ROR" => shifts::execute_ror(self, opcode),

            // Increment / decrement
            "INC" => inc_dec::execute_inc(self, opcode),
            "INX" => inc_dec::execute_inx(self, opcode),
            "INY" => inc_dec::execute_iny(self, opcode),
            "DEC" => inc_dec::execute_dec(self, opcode),
            "DEX" => inc_dec::execute_dex(self, opcode),
            "DEY" => inc_dec::execute_dey(self, opcode),

            // Branches
            "BCC" => branches::execute_bcc(self, opcode),
            "BCS" => branches::execute_bcs(self, opcode),
            "BEQ" => branches::execute_beq(self, opcode),
            "BNE" => branches::execute_bne(self, opcode),
            "BMI" => branches::execute_bmi(self, opcode),
            "BPL" => branches::execute_bpl(self, opcode),
            "BVC" => branches::execute_bvc(self, opcode),
            "BVS" => branches::execute_bvs(self, opcode),

            // Control flow
            "JMP" => control::execute_jmp(self, opcode),
            "JSR" => control::execute_jsr(self, opcode),
            "RTS" => control::execute_rts(self, opcode),
            "BRK" => control::execute_brk(self, opcode),
            "RTI" => control::execute_rti(self, opcode),
            "NOP" => control::execute_nop(self, opcode),
            "JAM" => control::execute_jam(self, opcode),

            // Stack
            "PHA" => stack::execute_pha(self, opcode),
            "PHP" => stack::execute_php(self, opcode),
            "PLA" => stack::execute_pla(self, opcode),
            "PLP" => stack::execute_plp(self, opcode),

            // Flag operations
            "CLC" => flags::execute_clc(self, opcode),
            "SEC" => flags::execute_sec(self, opcode),
            "CLI" => flags::execute_cli(self, opcode),
            "SEI" => flags::execute_sei(self, opcode),
            "CLD" => flags::execute_cld(self, opcode),
            "SED" => flags::execute_sed(self, opcode),
            "CLV" => flags::execute_clv(self, opcode),

            // Undocumented opcodes
            "LAX" => illegal::execute_lax(self, opcode),
            "SAX" => illegal::execute_sax(self, opcode),
            "SLO" => illegal::execute_slo(self, opcode),
            "RLA" => illegal::execute_rla(self, opcode),
            "SRE" => illegal::execute_sre(self, opcode),
            "RRA" => illegal::execute_rra(self, opcode),
            "DCP" => illegal::execute_dcp(self, opcode),
            "ISC" => illegal::execute_isc(self, opcode),
            "ANC" => illegal::execute_anc(self, opcode),
            "ALR" => illegal::execute_alr(self, opcode),
            "ARR" => illegal::execute_arr(self, opcode),
            "ANE" => illegal::execute_ane(self, opcode),
            "LXA" => illegal::execute_lxa(self, opcode),
            "SBX" => illegal::execute_sbx(self, opcode),
            "SHA" => illegal::execute_sha(self, opcode),
            "SHS" => illegal::execute_shs(self, opcode),
            "SHX" => illegal::execute_shx(self, opcode),
            "SHY" => illegal::execute_shy(self, opcode),
            "LAS" => illegal::execute_las(self, opcode),

            _ => {
                return Err(ExecutionError::IllegalOpcode {
                    opcode,
                    pc: fetch_pc,
                    history: self.fetch_history.iter().copied().collect(),
                });
            }
        };

        Ok(cycles)
    }

    // ========== Addressing Resolution ==========

    /// Computes the effective address for an addressing mode, fetching and
    /// consuming any operand bytes at PC.
    ///
    /// Returns `(address, page_crossed)`. For `Implicit`/`Accumulator` the
    /// address is 0; for `Relative` it is the raw offset byte (sign
    /// extension is the branch's job); for `Indirect` the NMOS page-wrap
    /// bug applies.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => (0, false),
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }
            AddressingMode::ZeroPage => (self.fetch8() as u16, false),
            AddressingMode::ZeroPageX => {
                let base = self.fetch8();
                (base.wrapping_add(self.x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch8();
                (base.wrapping_add(self.y) as u16, false)
            }
            AddressingMode::Relative => (self.fetch8() as u16, false),
            AddressingMode::Absolute => (self.fetch16(), false),
            AddressingMode::AbsoluteX => {
                let base = self.fetch16();
                let addr = base.wrapping_add(self.x as u16);
                (addr, Self::page_crossed(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch16();
                let addr = base.wrapping_add(self.y as u16);
                (addr, Self::page_crossed(base, addr))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch16();
                let lo = self.bus.read(ptr) as u16;
                // NMOS bug: the high byte never leaves the pointer's page
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.bus.read(hi_addr) as u16;
                ((hi << 8) | lo, false)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch8().wrapping_add(self.x);
                let lo = self.bus.read(zp as u16) as u16;
                let hi = self.bus.read(zp.wrapping_add(1) as u16) as u16;
                ((hi << 8) | lo, false)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch8();
                let lo = self.bus.read(zp as u16) as u16;
                let hi = self.bus.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.y as u16);
                (addr, Self::page_crossed(base, addr))
            }
        }
    }

    /// Resolves the operand and reads its value in one go.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> (u8, bool) {
        let (addr, crossed) = self.resolve_operand(mode);
        (self.bus.read(addr), crossed)
    }

    fn fetch8(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8() as u16;
        let hi = self.fetch8() as u16;
        (hi << 8) | lo
    }

    pub(crate) fn page_crossed(base: u16, effective: u16) -> bool {
        base & 0xFF00 != effective & 0xFF00
    }

    // ========== Stack Primitives ==========

    /// Pushes a byte onto the stack page and decrements SP (wrapping).
    pub fn push_byte(&mut self, value: u8) {
        self.bus.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping) and pulls a byte from the stack page.
    pub fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(0x0100 | self.sp as u16)
    }

    /// Pushes a word, high byte first (so it pulls back little-endian).
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pulls a word previously pushed with `push_word`.
    pub fn pull_word(&mut self) -> u16 {
        let lo = self.pull_byte() as u16;
        let hi = self.pull_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is 0x0100 + SP. The stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (bit 5 reads as one).
    pub fn status(&self) -> u8 {
        self.p.to_byte()
    }

    /// Returns the status register as a flag set.
    pub fn p(&self) -> StatusRegister {
        self.p
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true if the CPU is halted (JAM opcode or `halt()`).
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.contains(StatusRegister::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.contains(StatusRegister::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.p.contains(StatusRegister::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.contains(StatusRegister::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.contains(StatusRegister::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.contains(StatusRegister::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.contains(StatusRegister::CARRY)
    }

    // ========== Register Setters (for testing and composition) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register from a packed byte (bit 5 forced on).
    pub fn set_status(&mut self, value: u8) {
        self.p = StatusRegister::from_byte(value);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(StatusRegister::CARRY, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(StatusRegister::ZERO, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(StatusRegister::INTERRUPT_DISABLE, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(StatusRegister::DECIMAL, value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set(StatusRegister::BREAK, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(StatusRegister::OVERFLOW, value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(StatusRegister::NEGATIVE, value);
    }

    /// Returns a reference to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns a mutable reference to the bus.
    ///
    /// This allows tests and external code to write to memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sys6502::{Bus, FlatMemory, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.bus_mut().write(0x8000, 0xEA); // Write NOP instruction
    /// ```
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
