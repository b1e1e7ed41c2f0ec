use std::time::{Duration, Instant};

use palette::Srgb;
use swatchpad::clipboard::test_fixtures::{FailingClipboard, TestClipboard};
use swatchpad::formats::FormatKind;
use swatchpad::picker::{COPY_TOAST, Channel, ColorPicker, PRESET_COLORS, TOAST_DURATION};
use swatchpad::store::{ColorStore, FileStore, MemoryStore};
use tempfile::TempDir;

fn picker_with(store: &MemoryStore, clipboard: &TestClipboard) -> ColorPicker {
    ColorPicker::new(
        Srgb::new(255, 107, 107),
        Box::new(store.clone()),
        Box::new(clipboard.clone()),
    )
}

#[test]
fn test_load_restores_saved_color() {
    let store = MemoryStore::with_value("#4ecdc4");
    let mut picker = picker_with(&store, &TestClipboard::default());
    assert!(picker.load());
    assert_eq!(picker.hex(), "#4ecdc4");
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_load_ignores_malformed_value() {
    let store = MemoryStore::with_value("#nope");
    let mut picker = picker_with(&store, &TestClipboard::default());
    assert!(!picker.load());
    assert_eq!(picker.hex(), "#ff6b6b");
}

#[test]
fn test_hex_update_saves() {
    let store = MemoryStore::default();
    let mut picker = picker_with(&store, &TestClipboard::default());
    assert!(picker.update_from_hex(" #00FF00 "));
    assert_eq!(picker.color(), Srgb::new(0, 255, 0));
    assert_eq!(store.value().as_deref(), Some("#00ff00"));
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_invalid_hex_changes_nothing() {
    let store = MemoryStore::default();
    let mut picker = picker_with(&store, &TestClipboard::default());
    for input in ["zzzzzz", "#abc", "", "1234567"] {
        assert!(!picker.update_from_hex(input));
    }
    assert_eq!(picker.hex(), "#ff6b6b");
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_channel_update_keeps_other_channels() {
    let store = MemoryStore::default();
    let mut picker = picker_with(&store, &TestClipboard::default());
    picker.set_channel(Channel::Green, 0);
    assert_eq!(picker.color(), Srgb::new(255, 0, 107));
    assert_eq!(picker.channel(Channel::Blue), 107);
    assert_eq!(picker.formats().rgb, "rgb(255, 0, 107)");
    assert_eq!(store.value().as_deref(), Some("#ff006b"));
}

#[test]
fn test_presets() {
    let store = MemoryStore::default();
    let mut picker = picker_with(&store, &TestClipboard::default());
    assert!(picker.select_preset(7));
    assert_eq!(picker.hex(), PRESET_COLORS[7]);
    assert!(!picker.select_preset(PRESET_COLORS.len()));
    assert_eq!(picker.hex(), PRESET_COLORS[7]);
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_copy_writes_selected_format_and_raises_toast() {
    let clipboard = TestClipboard::default();
    let mut picker = picker_with(&MemoryStore::default(), &clipboard);
    let now = Instant::now();

    assert!(picker.copy(FormatKind::Hsl, now));
    assert_eq!(clipboard.content(), "hsl(0, 100%, 71%)");
    assert_eq!(picker.toast(now), Some(COPY_TOAST));
    assert_eq!(picker.toast(now + Duration::from_millis(1999)), Some(COPY_TOAST));
    assert_eq!(picker.toast(now + TOAST_DURATION), None);

    assert!(!picker.expire_toast(now + Duration::from_secs(1)));
    assert!(picker.expire_toast(now + TOAST_DURATION));
    assert_eq!(picker.toast(now), None);
}

#[test]
fn test_failed_copy_has_no_toast() {
    let mut picker = ColorPicker::new(
        Srgb::new(0, 0, 0),
        Box::new(MemoryStore::default()),
        Box::new(FailingClipboard),
    );
    let now = Instant::now();
    assert!(!picker.copy(FormatKind::Hex, now));
    assert_eq!(picker.toast(now), None);
    assert_eq!(picker.hex(), "#000000");
}

#[test]
fn test_file_store_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("last_color.toml");

    let mut store = FileStore::new(&path);
    assert_eq!(store.load().unwrap(), None);

    store.save("#45b7d1").unwrap();
    assert!(path.exists());
    assert_eq!(FileStore::new(&path).load().unwrap().as_deref(), Some("#45b7d1"));
}

#[test]
fn test_file_store_reports_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("last_color.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    assert!(FileStore::new(&path).load().is_err());

    // A picker treats the error as "nothing saved"
    let mut picker = ColorPicker::new(
        Srgb::new(1, 2, 3),
        Box::new(FileStore::new(&path)),
        Box::new(TestClipboard::default()),
    );
    assert!(!picker.load());
    assert_eq!(picker.color(), Srgb::new(1, 2, 3));
}
