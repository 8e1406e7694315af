//! 6551-style ACIA serial interface.
//!
//! Four memory-mapped registers bridge the emulated machine to a host
//! serial stream: Data (R/W), Status (R), Command (W), Control (W). The
//! host side is a `SerialHost` implementation polled non-blockingly on
//! every bus tick; transmitted bytes flush to it synchronously.
//!
//! ## Register map (offsets from the device base address)
//!
//! | Offset | Register | Access | Description |
//! |--------|----------|--------|-------------|
//! | 0      | Data     | R/W    | Transmit / receive data |
//! | 1      | Status   | R      | Status flags (read has a side effect) |
//! | 2      | Command  | W      | IRQ enable, echo mode |
//! | 3      | Control  | W      | Baud, word length, stop bits |
//!
//! ## Status register
//!
//! | Bit | Name | Description |
//! |-----|------|-------------|
//! | 7   | IRQ  | Interrupt pending (reading status clears the latch) |
//! | 6   | DSR  | Data set ready (host attached) |
//! | 5   | DCD  | Data carrier detect (host attached) |
//! | 4   | TDRE | Transmit data register empty |
//! | 3   | RDRF | Receive data register full |
//! | 2   | OVRN | Receive buffer overran |
//! | 1   | FE   | Framing error (never set) |
//! | 0   | PE   | Parity error (never set) |
//!
//! Receiver interrupts are enabled by command bit 1; only RDRF raises
//! them. DCD/DSR transitions never interrupt. Host I/O failures are
//! logged and leave the buffers unchanged.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;

use super::Peripheral;

/// Status bit: interrupt pending.
pub const STATUS_IRQ: u8 = 0x80;
/// Status bit: data set ready.
pub const STATUS_DSR: u8 = 0x40;
/// Status bit: data carrier detect.
pub const STATUS_DCD: u8 = 0x20;
/// Status bit: transmit data register empty.
pub const STATUS_TDRE: u8 = 0x10;
/// Status bit: receive data register full.
pub const STATUS_RDRF: u8 = 0x08;
/// Status bit: receive overrun.
pub const STATUS_OVERRUN: u8 = 0x04;

/// Command bit: enable receiver interrupts.
const COMMAND_IRQ_ENABLE: u8 = 0x02;
/// Command bit: echo received bytes back to the host.
const COMMAND_ECHO: u8 = 0x08;

/// Receive FIFO depth; further bytes set the overrun flag and are dropped.
const RX_CAPACITY: usize = 256;

/// 6551 baud-rate generator selections, indexed by control bits 0-3.
/// Entry 0 is the external-clock setting.
const BAUD_RATES: [u32; 16] = [
    0, 50, 75, 110, 135, 150, 300, 600, 1200, 1800, 2400, 3600, 4800, 7200, 9600, 19200,
];

/// Number of stop bits decoded from the control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit.
    One,
    /// One and a half stop bits (five-bit words only).
    OneAndHalf,
    /// Two stop bits.
    Two,
}

/// Host side of the serial bridge.
///
/// Both operations must be non-blocking: the ACIA calls them from the
/// bus tick path and nothing in the emulator may stall the scheduler.
pub trait SerialHost {
    /// Delivers one transmitted byte to the host stream.
    fn transmit(&mut self, byte: u8) -> io::Result<()>;

    /// Polls the host stream for one received byte; `Ok(None)` means no
    /// data is available right now.
    fn poll_receive(&mut self) -> io::Result<Option<u8>>;
}

/// Memory-mapped serial interface with host I/O bridge.
///
/// # Examples
///
/// ```rust
/// use sys6502::{Acia, Peripheral};
///
/// let mut acia = Acia::new(0xFE00);
/// assert!(acia.handles_address(0xFE03));
///
/// // Status: transmitter ready, nothing received
/// let status = acia.read(0xFE01);
/// assert_eq!(status & 0x10, 0x10); // TDRE
/// assert_eq!(status & 0x08, 0x00); // RDRF
///
/// // Feed a byte in as if the host had sent it
/// acia.receive_byte(b'x');
/// assert_eq!(acia.read(0xFE00), b'x');
/// ```
pub struct Acia {
    base: u16,

    command: u8,
    control: u8,

    // Transmit queue only holds bytes across a failed host flush
    tx_buffer: VecDeque<u8>,

    // Receive FIFO; interior mutability because reads pop it
    rx_buffer: RefCell<VecDeque<u8>>,

    overrun: Cell<bool>,
    irq_pending: Cell<bool>,
    irq_enabled: bool,

    // CTSB pin; high disables the transmitter
    cts_high: bool,

    host: Option<Box<dyn SerialHost>>,
}

impl Acia {
    /// Creates an ACIA whose four registers sit at `base..=base+3`.
    pub fn new(base: u16) -> Self {
        Self {
            base,
            command: 0,
            control: 0,
            tx_buffer: VecDeque::new(),
            rx_buffer: RefCell::new(VecDeque::new()),
            overrun: Cell::new(false),
            irq_pending: Cell::new(false),
            irq_enabled: false,
            cts_high: false,
            host: None,
        }
    }

    /// Attaches the host stream. DSR and DCD report attachment.
    pub fn attach_host(&mut self, host: Box<dyn SerialHost>) {
        self.host = Some(host);
    }

    /// Detaches and returns the host stream, if any.
    pub fn detach_host(&mut self) -> Option<Box<dyn SerialHost>> {
        self.host.take()
    }

    /// Sets the CTSB pin level. High disables the transmitter.
    pub fn set_cts(&mut self, high: bool) {
        self.cts_high = high;
    }

    /// Hardware reset: queues cleared, transmitter ready, registers
    /// zeroed (8N1), CTSB low, no pending interrupt.
    pub fn reset(&mut self) {
        self.tx_buffer.clear();
        self.rx_buffer.borrow_mut().clear();
        self.command = 0;
        self.control = 0;
        self.overrun.set(false);
        self.irq_pending.set(false);
        self.irq_enabled = false;
        self.cts_high = false;
    }

    /// Injects a byte as if the host had sent it.
    ///
    /// Fills the receive FIFO, raising the receiver interrupt when
    /// enabled; a full FIFO drops the byte and sets the overrun flag.
    /// With echo mode on, the byte is retransmitted to the host.
    pub fn receive_byte(&mut self, byte: u8) {
        if self.rx_buffer.borrow().len() < RX_CAPACITY {
            self.rx_buffer.borrow_mut().push_back(byte);
            if self.irq_enabled {
                self.irq_pending.set(true);
            }
            if self.command & COMMAND_ECHO != 0 {
                if let Some(host) = self.host.as_mut() {
                    if let Err(err) = host.transmit(byte) {
                        log::warn!("ACIA echo failed: {}", err);
                    }
                }
            }
        } else {
            self.overrun.set(true);
        }
    }

    /// Current status byte, without the read side effect. For inspection
    /// and tests; the memory-mapped read also clears the IRQ latch.
    pub fn status(&self) -> u8 {
        let mut status = 0;
        if self.irq_pending.get() {
            status |= STATUS_IRQ;
        }
        if self.host.is_some() {
            status |= STATUS_DSR | STATUS_DCD;
        }
        if self.tx_buffer.is_empty() {
            status |= STATUS_TDRE;
        }
        if !self.rx_buffer.borrow().is_empty() {
            status |= STATUS_RDRF;
        }
        if self.overrun.get() {
            status |= STATUS_OVERRUN;
        }
        status
    }

    /// Number of bytes waiting in the receive FIFO.
    pub fn rx_len(&self) -> usize {
        self.rx_buffer.borrow().len()
    }

    /// Decoded baud rate from control bits 0-3 (0 = external clock).
    pub fn baud_rate(&self) -> u32 {
        BAUD_RATES[(self.control & 0x0F) as usize]
    }

    /// Whether control bit 4 selects the internal baud-rate generator for
    /// the receiver clock.
    pub fn receiver_clock_internal(&self) -> bool {
        self.control & 0x10 != 0
    }

    /// Decoded word length from control bits 5-6: 8, 7, 6, or 5 bits.
    pub fn word_length(&self) -> u8 {
        match (self.control >> 5) & 0x03 {
            0 => 8,
            1 => 7,
            2 => 6,
            _ => 5,
        }
    }

    /// Decoded stop-bit count from control bit 7 and the word length.
    pub fn stop_bits(&self) -> StopBits {
        if self.control & 0x80 == 0 {
            StopBits::One
        } else if self.word_length() == 5 {
            StopBits::OneAndHalf
        } else {
            StopBits::Two
        }
    }

    fn write_data(&mut self, value: u8) {
        if self.cts_high {
            // Transmitter disabled; the byte is dropped and TDRE stays set
            return;
        }
        self.tx_buffer.push_back(value);
        self.flush_tx();
    }

    /// Drains the transmit queue into the host. On failure the remaining
    /// bytes stay queued (TDRE reads clear) and the error is logged.
    fn flush_tx(&mut self) {
        while let Some(&byte) = self.tx_buffer.front() {
            match self.host.as_mut() {
                Some(host) => {
                    if let Err(err) = host.transmit(byte) {
                        log::warn!("ACIA transmit failed: {}", err);
                        return;
                    }
                }
                None => {
                    // No terminal attached; bytes fall on the floor
                }
            }
            self.tx_buffer.pop_front();
        }
    }

    fn read_data(&self) -> u8 {
        let mut rx = self.rx_buffer.borrow_mut();
        match rx.pop_front() {
            Some(byte) => {
                self.overrun.set(false);
                byte
            }
            None => 0,
        }
    }
}

impl Peripheral for Acia {
    fn handles_address(&self, addr: u16) -> bool {
        (self.base..=self.base.wrapping_add(3)).contains(&addr)
    }

    fn read(&self, addr: u16) -> u8 {
        match addr.wrapping_sub(self.base) {
            0 => self.read_data(),
            1 => {
                // The IRQ bit reports the latch as of this read, and the
                // read acknowledges it
                let status = self.status();
                self.irq_pending.set(false);
                status
            }
            // Command and control are write-only
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr.wrapping_sub(self.base) {
            0 => self.write_data(value),
            1 => {
                // Status register is read-only
            }
            2 => {
                self.command = value;
                self.irq_enabled = value & COMMAND_IRQ_ENABLE != 0;
                if !self.irq_enabled {
                    self.irq_pending.set(false);
                }
            }
            3 => {
                self.control = value;
            }
            _ => {}
        }
    }

    fn tick(&mut self) {
        // Non-blocking host poll; received bytes enter the FIFO
        let mut polled = Vec::new();
        if let Some(host) = self.host.as_mut() {
            loop {
                match host.poll_receive() {
                    Ok(Some(byte)) => polled.push(byte),
                    Ok(None) => break,
                    Err(err) => {
                        log::warn!("ACIA host read failed: {}", err);
                        break;
                    }
                }
            }
        }
        for byte in polled {
            self.receive_byte(byte);
        }

        // Derived interrupt state: receiver IRQ enabled and data waiting
        self.irq_pending
            .set(self.irq_enabled && !self.rx_buffer.borrow().is_empty());
    }

    fn has_interrupt(&self) -> bool {
        self.irq_pending.get()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
