//! ROM overlay and image loaders.
//!
//! The ROM occupies a fixed window at the top of the address space
//! (0x8000..=0xFFFF by default) but is sparse: only addresses an image was
//! actually loaded into shadow RAM. Writes are refused; reads of unloaded
//! bytes return zero.
//!
//! Images arrive three ways:
//! - a direct iterator of `(address, byte)` pairs
//! - a raw binary slice or file placed at a start address
//! - a directory of sidecar JSON descriptors, each naming a `.bin` payload,
//!   a load address, a size, and a priority; images apply in ascending
//!   priority so later writes win

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Errors raised while loading ROM images.
///
/// The directory loader logs and skips per-image failures; these errors
/// surface only for whole-operation problems (an unreadable directory,
/// an unreadable file passed directly).
#[derive(Debug, thiserror::Error)]
pub enum RomError {
    /// Underlying file or directory I/O failed.
    #[error("ROM image I/O: {0}")]
    Io(#[from] std::io::Error),

    /// A metadata descriptor was not valid JSON.
    #[error("ROM metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// The load address in a descriptor could not be parsed.
    #[error("bad load address {text:?} in {name}")]
    AddressSyntax {
        /// Image name from the descriptor.
        name: String,
        /// The offending address text.
        text: String,
    },

    /// The image's load address lies outside the ROM window.
    #[error("image {name} load address 0x{load_address:04X} outside ROM window")]
    OutOfRange {
        /// Image name from the descriptor.
        name: String,
        /// The rejected load address.
        load_address: u16,
    },
}

/// A load address in metadata: either a JSON integer or a "0xNNNN" string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AddressField {
    Number(u16),
    Text(String),
}

impl AddressField {
    fn resolve(&self, name: &str) -> Result<u16, RomError> {
        match self {
            AddressField::Number(value) => Ok(*value),
            AddressField::Text(text) => {
                let digits = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                    .unwrap_or(text);
                let radix = if digits.len() < text.len() { 16 } else { 10 };
                u16::from_str_radix(digits, radix).map_err(|_| RomError::AddressSyntax {
                    name: name.to_string(),
                    text: text.clone(),
                })
            }
        }
    }
}

/// Sidecar JSON descriptor for one ROM image.
///
/// The binary payload is read from a file with the same basename and a
/// `.bin` extension.
#[derive(Debug, Deserialize)]
struct ImageDescriptor {
    name: String,
    load_address: AddressField,
    size: usize,
    priority: i64,
}

/// Read-only mapped region with a sparse per-byte presence mask.
///
/// # Examples
///
/// ```rust
/// use sys6502::Rom;
///
/// let mut rom = Rom::new();
/// rom.load_bytes(0x8000, &[0xA9, 0x2A]);
///
/// assert!(rom.contains(0x8000));
/// assert_eq!(rom.read_byte(0x8001), 0x2A);
/// assert!(!rom.contains(0x8002));
/// assert_eq!(rom.read_byte(0x8002), 0x00); // unloaded bytes read zero
/// ```
pub struct Rom {
    window_start: u16,
    data: Vec<u8>,
    present: Vec<bool>,
}

impl Rom {
    /// Creates an empty ROM with the default 0x8000..=0xFFFF window.
    pub fn new() -> Self {
        Self::with_window(0x8000)
    }

    /// Creates an empty ROM whose window spans `start..=0xFFFF`.
    pub fn with_window(start: u16) -> Self {
        let len = 0x10000 - start as usize;
        Self {
            window_start: start,
            data: vec![0; len],
            present: vec![false; len],
        }
    }

    /// First address of the ROM window.
    pub fn window_start(&self) -> u16 {
        self.window_start
    }

    fn index(&self, addr: u16) -> Option<usize> {
        (addr >= self.window_start).then(|| (addr - self.window_start) as usize)
    }

    /// Whether an image byte was loaded at `addr`.
    pub fn contains(&self, addr: u16) -> bool {
        self.index(addr).map(|i| self.present[i]).unwrap_or(false)
    }

    /// Reads the byte at `addr`. Unloaded bytes and addresses outside the
    /// window read as zero.
    pub fn read_byte(&self, addr: u16) -> u8 {
        match self.index(addr) {
            Some(i) if self.present[i] => self.data[i],
            _ => 0,
        }
    }

    /// Loads individual bytes keyed by address. Bytes below the window are
    /// skipped with a warning; later loads overwrite earlier ones.
    pub fn load_image<I>(&mut self, bytes: I)
    where
        I: IntoIterator<Item = (u16, u8)>,
    {
        for (addr, byte) in bytes {
            match self.index(addr) {
                Some(i) => {
                    self.data[i] = byte;
                    self.present[i] = true;
                }
                None => {
                    log::warn!("ROM image byte at 0x{:04X} outside window, skipped", addr);
                }
            }
        }
    }

    /// Loads a raw byte slice starting at `start`. Data that would run
    /// past 0xFFFF is truncated.
    pub fn load_bytes(&mut self, start: u16, bytes: &[u8]) {
        let Some(base) = self.index(start) else {
            log::warn!(
                "ROM image at 0x{:04X} below window 0x{:04X}, skipped",
                start,
                self.window_start
            );
            return;
        };
        let room = self.data.len() - base;
        let take = bytes.len().min(room);
        if take < bytes.len() {
            log::warn!(
                "ROM image at 0x{:04X} truncated from {} to {} bytes",
                start,
                bytes.len(),
                take
            );
        }
        self.data[base..base + take].copy_from_slice(&bytes[..take]);
        for flag in &mut self.present[base..base + take] {
            *flag = true;
        }
    }

    /// Loads a raw binary file at `start`. Returns the number of bytes
    /// applied.
    pub fn load_file(&mut self, path: &Path, start: u16) -> Result<usize, RomError> {
        let bytes = fs::read(path)?;
        let before = bytes.len();
        self.load_bytes(start, &bytes);
        Ok(before.min(self.data.len()))
    }

    /// Loads every `*.json` descriptor in `dir`, applying images in
    /// ascending priority (later writes win on overlap).
    ///
    /// Per-image failures - unreadable metadata or payload, bad or
    /// out-of-window load address - are logged and skipped; the return
    /// value counts images actually applied. Only a failure to read the
    /// directory itself is an error.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize, RomError> {
        let mut staged: Vec<(i64, u16, Vec<u8>)> = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            match self.stage_descriptor(&path) {
                Ok(image) => staged.push(image),
                Err(err) => {
                    log::warn!("skipping ROM image {}: {}", path.display(), err);
                }
            }
        }

        staged.sort_by_key(|(priority, _, _)| *priority);
        let applied = staged.len();
        for (_, load_address, payload) in staged {
            self.load_bytes(load_address, &payload);
        }
        Ok(applied)
    }

    /// Parses one descriptor and reads its payload, without applying it.
    fn stage_descriptor(&self, path: &Path) -> Result<(i64, u16, Vec<u8>), RomError> {
        let text = fs::read_to_string(path)?;
        let descriptor: ImageDescriptor = serde_json::from_str(&text)?;

        let load_address = descriptor.load_address.resolve(&descriptor.name)?;
        if self.index(load_address).is_none() {
            return Err(RomError::OutOfRange {
                name: descriptor.name,
                load_address,
            });
        }

        let mut payload = fs::read(path.with_extension("bin"))?;
        payload.truncate(descriptor.size);
        Ok((descriptor.priority, load_address, payload))
    }
}

impl Default for Rom {
    fn default() -> Self {
        Self::new()
    }
}
