//! Integration tests for murk-cli.
//!
//! Run the `murk` binary and inspect its stdout and the files it writes.

use std::process::Command;

fn murk_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_murk"))
}

fn read_wav(path: &std::path::Path) -> (hound::WavSpec, Vec<f32>) {
    let mut reader = hound::WavReader::open(path).expect("should open rendered wav");
    let spec = reader.spec();
    let samples = reader.samples::<f32>().map(Result::unwrap).collect();
    (spec, samples)
}

// ---------------------------------------------------------------------------
// `murk params` / `murk presets`
// ---------------------------------------------------------------------------

#[test]
fn cli_params_lists_all_ids() {
    let output = murk_bin().arg("params").output().expect("failed to run murk params");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["tune", "hatLength", "swing", "kickLevel", "closedHatDecay", "rimDrive"] {
        assert!(stdout.contains(id), "params listing should contain '{id}'");
    }
}

#[test]
fn cli_params_filters_by_group() {
    let output = murk_bin().args(["params", "openHat"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("openHatTone"));
    assert!(!stdout.contains("kickLevel"));
}

#[test]
fn cli_presets_lists_factory_kits() {
    let output = murk_bin().arg("presets").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Go Plastic", "Acid Ghost", "Metal Sticks"] {
        assert!(stdout.contains(name), "preset list should contain '{name}'");
    }
}

#[test]
fn cli_presets_export_then_render_with_it() {
    let dir = tempfile::tempdir().unwrap();
    let kit = dir.path().join("servo.toml");
    let wav = dir.path().join("servo.wav");

    let output = murk_bin()
        .args(["presets", "export", "servo funk"])
        .arg(&kit)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(kit.exists());

    let output = murk_bin()
        .arg("render")
        .arg(&wav)
        .arg("--preset")
        .arg(&kit)
        .args(["--hit", "snare@0", "--seconds", "0.25"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    // Refuses to clobber without --force
    let output = murk_bin()
        .args(["presets", "export", "servo funk"])
        .arg(&kit)
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// `murk render`
// ---------------------------------------------------------------------------

#[test]
fn cli_render_hits_to_stereo_float_wav() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("hits.wav");

    let output = murk_bin()
        .arg("render")
        .arg(&wav)
        .args(["--sample-rate", "48000", "--seconds", "0.5"])
        .args(["--hit", "kick@0", "--hit", "clap@0.25:0.7"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let (spec, samples) = read_wav(&wav);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    assert_eq!(samples.len(), 2 * 24000);
    assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 1.2));
    assert!(samples.iter().any(|s| s.abs() > 0.01));
}

#[test]
fn cli_render_test_sequence_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("sequence.wav");

    let output = murk_bin()
        .arg("render")
        .arg(&wav)
        .args(["--preset", "Amen Raze", "--seconds", "1.2"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let (_, samples) = read_wav(&wav);
    assert_eq!(samples.len(), 2 * 52920);

    // Step 0 (kick + hat) opens the render
    assert!(samples[..2 * 4410].iter().any(|&s| s.abs() > 0.01));

    // Step 12 (snare + hat) lands at 12 * 3938 = 47256 samples
    let step_12 = 2 * 47256;
    assert!(samples[step_12..step_12 + 2 * 4410].iter().any(|&s| s.abs() > 0.01));
}

#[test]
fn cli_render_is_reproducible_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");

    for path in [&a, &b] {
        let output = murk_bin()
            .arg("render")
            .arg(path)
            .args(["--seed", "42", "--seconds", "0.3", "--hit", "crash@0"])
            .args(["--set", "crashDecay=0.5"])
            .output()
            .unwrap();
        assert!(output.status.success());
    }

    assert_eq!(read_wav(&a).1, read_wav(&b).1);
}

#[test]
fn cli_render_saves_and_restores_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.toml");
    let wav = dir.path().join("out.wav");

    let output = murk_bin()
        .arg("render")
        .arg(&wav)
        .args(["--set", "kickTune=-5", "--swing", "0.4", "--seconds", "0.1"])
        .arg("--save-state")
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let saved = std::fs::read_to_string(&state).unwrap();
    assert!(saved.contains("kickTune = -5"));
    assert!(saved.contains("swing"));

    let output = murk_bin()
        .arg("render")
        .arg(&wav)
        .arg("--state")
        .arg(&state)
        .args(["--seconds", "0.1"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn cli_render_rejects_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("bad.wav");

    for args in [
        vec!["--hit", "cowbell@0"],
        vec!["--preset", "Not A Kit"],
        vec!["--set", "nope=1"],
        vec!["--bpm", "-3"],
        vec!["--swing", "NaN"],
        vec!["--sample-rate", "100"],
    ] {
        let output = murk_bin().arg("render").arg(&wav).args(&args).output().unwrap();
        assert!(!output.status.success(), "should reject {:?}", args);
    }
}
