//! Criterion benchmarks for murk-kit
//!
//! Run with: cargo bench -p murk-kit

// criterion_group! expands to an undocumented `pub fn`.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use murk_kit::synth::BlockContext;
use murk_kit::{DrumMachine, DrumType, MidiEvent, ParamSnapshot, TransportInfo, VoicePool};

const SAMPLE_RATE: f64 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

// ============================================================================
// Single-drum benchmarks
// ============================================================================

fn bench_single_drum(c: &mut Criterion) {
    let mut group = c.benchmark_group("Drum");
    let ctx = BlockContext::new(&ParamSnapshot::default(), SAMPLE_RATE as f32);

    for drum in DrumType::ALL {
        group.bench_with_input(BenchmarkId::new(drum.name(), 512), &512usize, |b, &size| {
            let mut pool: VoicePool<1> = VoicePool::new(1);
            let mut out = vec![0.0f32; size];
            b.iter(|| {
                pool.allocate(drum, 1.0, 0);
                pool.render_block(&ctx, &mut out);
                black_box(out[size - 1])
            })
        });
    }

    group.finish();
}

// ============================================================================
// Full engine benchmarks
// ============================================================================

fn bench_full_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("FullPool");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::new("32_voices", block_size),
            &block_size,
            |b, &size| {
                let mut kit = DrumMachine::with_seed(1);
                kit.prepare(SAMPLE_RATE, size);
                let mut l = vec![0.0f32; size];
                let mut r = vec![0.0f32; size];
                let mut midi = Vec::with_capacity(32);
                b.iter(|| {
                    if kit.active_voice_count() < 32 {
                        for i in 0..32 {
                            let drum = DrumType::ALL[i % 8];
                            midi.push(MidiEvent::note_on(0, drum.midi_note(), 100));
                        }
                    }
                    kit.process_block(&mut [&mut l[..], &mut r[..]], &mut midi, &TransportInfo::NONE);
                    black_box(l[0])
                })
            },
        );
    }

    group.finish();
}

fn bench_test_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("TestSequence");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &size| {
                let mut kit = DrumMachine::with_seed(1);
                kit.prepare(SAMPLE_RATE, size);
                let control = kit.control();
                let mut l = vec![0.0f32; size];
                let mut r = vec![0.0f32; size];
                b.iter(|| {
                    if !kit.is_sequence_playing() {
                        control.start_test_sequence();
                    }
                    kit.process_block(&mut [&mut l[..], &mut r[..]], &mut Vec::new(), &TransportInfo::NONE);
                    black_box(l[0])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_drum, bench_full_pool, bench_test_sequence);

criterion_main!(benches);
