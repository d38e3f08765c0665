//! Offline rendering to a stereo WAV file.
//!
//! Without `--hit` the built-in test sequence plays from the first sample.
//! Hits are delivered as MIDI note-ons, so swing applies to them exactly as
//! it would to host MIDI, given a tempo from `--bpm`.

use anyhow::Context;
use clap::Args;
use murk_config::KitState;
use murk_kit::sequencer::{TEST_SEQUENCE_STEPS, samples_per_step};
use murk_kit::{DEFAULT_SEED, DrumMachine, KitControl, MidiEvent, TAIL_SECONDS, TransportInfo};
use std::path::PathBuf;

use super::common::{Hit, load_preset, parse_hit, parse_key_val};

#[derive(Args)]
pub struct RenderArgs {
    /// Output WAV file (32-bit float, stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value = "44100", value_parser = clap::value_parser!(u32).range(8000..=384_000))]
    sample_rate: u32,

    /// Processing block size in frames
    #[arg(long, default_value = "512", value_parser = clap::value_parser!(u32).range(1..=16384))]
    block_size: u32,

    /// Factory kit name or preset TOML path
    #[arg(short, long)]
    preset: Option<String>,

    /// Restore parameters from a state file (after the preset)
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Set a parameter (e.g., kickDecay=1.4); may repeat
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_key_val)]
    params: Vec<(String, f32)>,

    /// Swing amount (0-1), overriding the kit
    #[arg(long)]
    swing: Option<f32>,

    /// Host tempo for swing; without it hits play unswung
    #[arg(long)]
    bpm: Option<f64>,

    /// Trigger a drum (e.g., snare@0.5:0.8); may repeat. Replaces the test sequence
    #[arg(long = "hit", value_name = "DRUM@SECONDS[:VELOCITY]", value_parser = parse_hit)]
    hits: Vec<Hit>,

    /// Render length in seconds (default: until the last hit has rung out)
    #[arg(long)]
    seconds: Option<f64>,

    /// Randomization seed for phases and noise
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Write the final parameter state to this file
    #[arg(long, value_name = "PATH")]
    save_state: Option<PathBuf>,
}

/// Rendered stereo output.
pub struct Rendered {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl Rendered {
    fn peak(&self) -> f32 {
        self.left
            .iter()
            .chain(&self.right)
            .fold(0.0f32, |peak, s| peak.max(s.abs()))
    }
}

pub fn run(args: &RenderArgs) -> anyhow::Result<()> {
    if let Some(bpm) = args.bpm
        && !(bpm.is_finite() && bpm > 0.0)
    {
        anyhow::bail!("--bpm must be a positive number, got {}", bpm);
    }
    if let Some(seconds) = args.seconds
        && !(seconds.is_finite() && seconds > 0.0)
    {
        anyhow::bail!("--seconds must be a positive number, got {}", seconds);
    }

    let mut kit = DrumMachine::with_seed(args.seed);
    kit.prepare(f64::from(args.sample_rate), args.block_size as usize);
    let control = kit.control();

    if let Some(name) = &args.preset {
        let preset = load_preset(name)?;
        preset.apply(&control);
        tracing::info!(preset = %preset.name, "loaded kit");
    }
    if let Some(path) = &args.state {
        let state = KitState::load(path)
            .with_context(|| format!("Failed to load state {}", path.display()))?;
        let applied = state.restore(&control);
        tracing::info!(path = %path.display(), applied, "restored state");
    }
    apply_overrides(&control, &args.params, args.swing)?;
    if let Some(path) = &args.save_state {
        KitState::capture(&control)
            .save(path)
            .with_context(|| format!("Failed to save state {}", path.display()))?;
    }

    let seconds = args.seconds.unwrap_or_else(|| default_length(&args.hits, args.sample_rate));
    let total_frames = (seconds * f64::from(args.sample_rate)).ceil() as usize;

    tracing::info!(
        sample_rate = args.sample_rate,
        block_size = args.block_size,
        seconds,
        hits = args.hits.len(),
        bpm = args.bpm,
        swing = control.param("swing"),
        "rendering"
    );

    let rendered = render(
        &mut kit,
        &args.hits,
        args.bpm,
        args.sample_rate,
        args.block_size as usize,
        total_frames,
    );

    write_stereo_wav(&args.output, &rendered, args.sample_rate)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        frames = rendered.left.len(),
        peak = rendered.peak(),
        output = %args.output.display(),
        "render complete"
    );
    println!("Wrote {}", args.output.display());

    Ok(())
}

/// Apply `--set` values, then `--swing`. Any rejected write is an error.
fn apply_overrides(
    control: &KitControl,
    params: &[(String, f32)],
    swing: Option<f32>,
) -> anyhow::Result<()> {
    for (id, value) in params {
        if !control.set_param(id, *value) {
            anyhow::bail!("Unknown parameter or invalid value: {}={}", id, value);
        }
    }
    if let Some(swing) = swing
        && !control.set_param("swing", swing)
    {
        anyhow::bail!("Invalid --swing value: {}", swing);
    }
    Ok(())
}

/// Length that lets everything ring out: the test sequence or the last hit,
/// plus the engine's tail.
fn default_length(hits: &[Hit], sample_rate: u32) -> f64 {
    let body = if hits.is_empty() {
        (TEST_SEQUENCE_STEPS as u64 * samples_per_step(f64::from(sample_rate))) as f64
            / f64::from(sample_rate)
    } else {
        hits.iter().map(|h| h.seconds).fold(0.0, f64::max)
    };
    body + TAIL_SECONDS
}

/// Run the engine block by block for `total_frames`.
///
/// With no hits the test sequence is started before the first block.
pub fn render(
    kit: &mut DrumMachine,
    hits: &[Hit],
    bpm: Option<f64>,
    sample_rate: u32,
    block_size: usize,
    total_frames: usize,
) -> Rendered {
    let mut scheduled: Vec<(u64, Hit)> = hits
        .iter()
        .map(|h| (h.sample_position(sample_rate), *h))
        .collect();
    scheduled.sort_by_key(|&(pos, _)| pos);

    if scheduled.is_empty() {
        kit.control().start_test_sequence();
    }

    let block_size = block_size.max(1);
    let mut left = Vec::with_capacity(total_frames);
    let mut right = Vec::with_capacity(total_frames);
    let mut l = vec![0.0f32; block_size];
    let mut r = vec![0.0f32; block_size];
    let mut midi = Vec::with_capacity(scheduled.len());
    let mut next = 0;
    let mut pos = 0usize;

    while pos < total_frames {
        let frames = block_size.min(total_frames - pos);
        let block_end = (pos + frames) as u64;

        while let Some(&(at, hit)) = scheduled.get(next) {
            if at >= block_end {
                break;
            }
            let offset = (at - pos as u64) as usize;
            midi.push(MidiEvent::note_on(offset, hit.drum.midi_note(), hit.midi_velocity()));
            next += 1;
        }

        let transport = bpm.map_or(TransportInfo::NONE, |bpm| {
            TransportInfo::new(bpm, pos as f64 / f64::from(sample_rate) * bpm / 60.0)
        });

        kit.process_block(&mut [&mut l[..frames], &mut r[..frames]], &mut midi, &transport);
        left.extend_from_slice(&l[..frames]);
        right.extend_from_slice(&r[..frames]);
        pos += frames;
    }

    Rendered { left, right }
}

fn write_stereo_wav(path: &std::path::Path, audio: &Rendered, sample_rate: u32) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for (l, r) in audio.left.iter().zip(&audio.right) {
        writer.write_sample(*l)?;
        writer.write_sample(*r)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use murk_kit::DrumType;

    fn hit(drum: DrumType, seconds: f64) -> Hit {
        Hit {
            drum,
            seconds,
            velocity: 1.0,
        }
    }

    #[test]
    fn default_length_covers_sequence_and_tail() {
        // 32 steps of 3938 samples at 44.1 kHz
        let expected = 32.0 * 3938.0 / 44100.0 + 2.5;
        assert!((default_length(&[], 44100) - expected).abs() < 1e-9);
        let hits = [hit(DrumType::Kick, 0.0), hit(DrumType::Crash, 1.5)];
        assert_eq!(default_length(&hits, 44100), 4.0);
    }

    #[test]
    fn hits_land_on_their_sample() {
        let mut kit = DrumMachine::with_seed(5);
        kit.prepare(48000.0, 64);
        // 0.01 s = sample 480, inside the eighth block
        let out = render(&mut kit, &[hit(DrumType::Snare, 0.01)], None, 48000, 64, 1024);
        assert_eq!(out.left.len(), 1024);
        assert!(out.left[..480].iter().all(|&s| s == 0.0));
        assert!(out.left[480..490].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn block_size_does_not_change_output() {
        let hits = [hit(DrumType::Kick, 0.0), hit(DrumType::Clap, 0.013)];
        let mut a = DrumMachine::with_seed(9);
        let mut b = DrumMachine::with_seed(9);
        a.prepare(44100.0, 64);
        b.prepare(44100.0, 500);
        let x = render(&mut a, &hits, None, 44100, 64, 4000);
        let y = render(&mut b, &hits, None, 44100, 500, 4000);
        assert_eq!(x.left, y.left);
        assert_eq!(x.right, y.right);
    }

    #[test]
    fn no_hits_plays_test_sequence() {
        let mut kit = DrumMachine::with_seed(1);
        kit.prepare(44100.0, 256);
        let out = render(&mut kit, &[], None, 44100, 256, 2048);
        assert!(kit.is_sequence_playing());
        assert!(out.peak() > 0.01);
    }

    #[test]
    fn overrides_apply_in_order() {
        let control = KitControl::new();
        let params = vec![("swing".to_string(), 0.2), ("kickTune".to_string(), -3.0)];
        apply_overrides(&control, &params, Some(0.6)).unwrap();
        assert_eq!(control.param("swing"), Some(0.6));
        assert_eq!(control.param("kickTune"), Some(-3.0));
    }

    #[test]
    fn non_finite_swing_is_an_error() {
        let control = KitControl::new();
        assert!(apply_overrides(&control, &[], Some(f32::NAN)).is_err());
        assert!(apply_overrides(&control, &[], Some(f32::INFINITY)).is_err());
        assert_eq!(control.param("swing"), Some(0.0));
    }

    #[test]
    fn unknown_set_is_an_error() {
        let control = KitControl::new();
        let params = vec![("cowbellLevel".to_string(), 1.0)];
        assert!(apply_overrides(&control, &params, None).is_err());
    }

    #[test]
    fn wav_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let audio = Rendered {
            left: vec![0.5, -0.25],
            right: vec![0.125, 0.0],
        };
        write_stereo_wav(&path, &audio, 44100).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_format, hound::SampleFormat::Float);
        let samples: Vec<f32> = reader.samples::<f32>().map(Result::unwrap).collect();
        assert_eq!(samples, vec![0.5, 0.125, -0.25, 0.0]);
    }
}
