//! Integration tests for murk-config.
//!
//! Presets and state files against a real engine and the filesystem.

use murk_config::{
    ConfigError, KitPreset, KitState, factory_preset, factory_presets, find_preset, step_preset,
};
use murk_kit::{DrumMachine, KitControl, MidiEvent, TransportInfo};
use tempfile::TempDir;

fn render_kick(kit: &mut DrumMachine) -> Vec<f32> {
    kit.prepare(44100.0, 512);
    let mut l = vec![0.0f32; 512];
    let mut r = vec![0.0f32; 512];
    let mut midi = vec![MidiEvent::note_on(0, 36, 127)];
    kit.process_block(&mut [&mut l[..], &mut r[..]], &mut midi, &TransportInfo::NONE);
    l
}

#[test]
fn test_preset_save_load_roundtrip() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("go_plastic.toml");

    let original = find_preset("Go Plastic")
        .unwrap()
        .with_description("saved from the factory set");
    original.save(&path).expect("should save preset");

    let loaded = KitPreset::load(&path).expect("should load preset");
    assert_eq!(loaded, original);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("user").join("kits").join("mine.toml");

    KitPreset::new("Mine").save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = KitPreset::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { path: ref p, .. } if *p == path));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    assert!(matches!(
        KitPreset::from_toml("name = [unterminated"),
        Err(ConfigError::TomlParse(_))
    ));
    assert!(matches!(
        KitState::from_toml("[params]\nkickLevel = \"loud\"\n"),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn test_applied_preset_changes_the_sound() {
    let mut stock = DrumMachine::with_seed(3);
    let mut preset = DrumMachine::with_seed(3);
    find_preset("Plaid Razor").unwrap().apply(&preset.control());

    let a = render_kick(&mut stock);
    let b = render_kick(&mut preset);
    assert_ne!(a, b);
    assert!(b.iter().all(|s| s.is_finite()));
}

#[test]
fn test_state_roundtrip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");

    let source = KitControl::new();
    find_preset("Acid Ghost").unwrap().apply(&source);
    source.set_param("openHatDecay", 1.93);
    KitState::capture(&source).save(&path).unwrap();

    let target = KitControl::new();
    let restored = KitState::load(&path).unwrap();
    assert_eq!(restored.restore(&target), source.param_count());
    assert_eq!(target.snapshot(), source.snapshot());
}

#[test]
fn test_state_and_preset_agree() {
    for preset in factory_presets() {
        let control = KitControl::new();
        preset.apply(&control);
        let state = KitState::capture(&control);
        let captured = KitPreset::capture(preset.name.clone(), &control);

        assert_eq!(state.get("swing"), Some(captured.global.swing));
        assert_eq!(state.get("rimDrive"), Some(captured.drums.rim.drive));
    }
}

#[test]
fn test_stepping_visits_every_kit() {
    let mut seen = Vec::new();
    let mut current = None;
    for _ in 0..18 {
        let next = step_preset(current, 1);
        seen.push(factory_preset(next).unwrap().name);
        current = Some(next);
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 18);
    assert_eq!(current, Some(0));
}
