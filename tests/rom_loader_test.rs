//! Tests for the ROM overlay loaders: keyed bytes, raw files, and the
//! JSON sidecar directory format with priority ordering and skip-on-error.

use std::fs;
use std::path::PathBuf;

use sys6502::{Bus, Rom, SystemBus};

/// Creates a unique scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "sys6502-rom-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_image(dir: &PathBuf, name: &str, json: &str, payload: &[u8]) {
    fs::write(dir.join(format!("{name}.json")), json).unwrap();
    fs::write(dir.join(format!("{name}.bin")), payload).unwrap();
}

#[test]
fn test_load_file_places_bytes() {
    let dir = scratch_dir("file");
    let path = dir.join("boot.bin");
    fs::write(&path, [0xA9, 0x2A, 0xEA]).unwrap();

    let mut rom = Rom::new();
    let loaded = rom.load_file(&path, 0x8000).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(rom.read_byte(0x8000), 0xA9);
    assert_eq!(rom.read_byte(0x8002), 0xEA);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_directory_with_integer_and_hex_addresses() {
    let dir = scratch_dir("addr");
    write_image(
        &dir,
        "basic",
        r#"{"name": "basic", "load_address": 40960, "size": 2, "priority": 0}"#,
        &[0x11, 0x22],
    );
    write_image(
        &dir,
        "kernal",
        r#"{"name": "kernal", "load_address": "0xE000", "size": 2, "priority": 1}"#,
        &[0x33, 0x44],
    );

    let mut rom = Rom::new();
    let applied = rom.load_directory(&dir).unwrap();

    assert_eq!(applied, 2);
    assert_eq!(rom.read_byte(0xA000), 0x11); // 40960
    assert_eq!(rom.read_byte(0xE000), 0x33);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_priority_ordering_later_wins() {
    let dir = scratch_dir("prio");
    // Same address; the higher priority applies second and wins
    write_image(
        &dir,
        "low",
        r#"{"name": "low", "load_address": "0x9000", "size": 1, "priority": 10}"#,
        &[0xAA],
    );
    write_image(
        &dir,
        "base",
        r#"{"name": "base", "load_address": "0x9000", "size": 1, "priority": 1}"#,
        &[0xBB],
    );

    let mut rom = Rom::new();
    rom.load_directory(&dir).unwrap();

    assert_eq!(rom.read_byte(0x9000), 0xAA);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_size_field_truncates_payload() {
    let dir = scratch_dir("size");
    write_image(
        &dir,
        "trim",
        r#"{"name": "trim", "load_address": "0x8000", "size": 2, "priority": 0}"#,
        &[0x01, 0x02, 0x03, 0x04],
    );

    let mut rom = Rom::new();
    rom.load_directory(&dir).unwrap();

    assert!(rom.contains(0x8001));
    assert!(!rom.contains(0x8002));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_bad_images_skipped_good_ones_applied() {
    let dir = scratch_dir("skip");
    // Valid image
    write_image(
        &dir,
        "good",
        r#"{"name": "good", "load_address": "0xC000", "size": 1, "priority": 0}"#,
        &[0x42],
    );
    // Load address below the window
    write_image(
        &dir,
        "low",
        r#"{"name": "low", "load_address": "0x4000", "size": 1, "priority": 0}"#,
        &[0x43],
    );
    // Metadata is not valid JSON
    fs::write(dir.join("broken.json"), "{not json").unwrap();
    // Metadata references a payload that does not exist
    fs::write(
        dir.join("orphan.json"),
        r#"{"name": "orphan", "load_address": "0xD000", "size": 1, "priority": 0}"#,
    )
    .unwrap();
    // Unparseable address text
    write_image(
        &dir,
        "junk",
        r#"{"name": "junk", "load_address": "0xZZZZ", "size": 1, "priority": 0}"#,
        &[0x44],
    );

    let mut rom = Rom::new();
    let applied = rom.load_directory(&dir).unwrap();

    assert_eq!(applied, 1);
    assert_eq!(rom.read_byte(0xC000), 0x42);
    assert!(!rom.contains(0x4000));
    assert!(!rom.contains(0xD000));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_non_json_files_ignored() {
    let dir = scratch_dir("ignore");
    fs::write(dir.join("README.txt"), "not a descriptor").unwrap();
    fs::write(dir.join("stray.bin"), [0xFF]).unwrap();

    let mut rom = Rom::new();
    assert_eq!(rom.load_directory(&dir).unwrap(), 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_directory_is_an_error() {
    let mut rom = Rom::new();
    let missing = std::env::temp_dir().join("sys6502-no-such-dir");
    assert!(rom.load_directory(&missing).is_err());
}

#[test]
fn test_loaded_rom_backs_reset_vector_through_bus() {
    let mut bus = SystemBus::new();
    bus.rom_mut().load_image([
        (0x8000_u16, 0xEA_u8),
        (0xFFFC, 0x00),
        (0xFFFD, 0x80),
    ]);

    assert_eq!(bus.read_word(0xFFFC), 0x8000);
    assert_eq!(bus.read(0x8000), 0xEA);

    // The vector bytes are ROM now: writes bounce
    bus.write(0xFFFC, 0x34);
    assert_eq!(bus.read(0xFFFC), 0x00);
}
