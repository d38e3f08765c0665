//! Drum voices and the fixed-capacity voice pool.
//!
//! A [`Voice`] is one sounding hit: which drum, how hard, how far into the
//! hit it is, and the oscillator, noise, and tone filter state its algorithm
//! needs. Voices can be scheduled a number of samples into the future so
//! triggers land sample-accurately inside a block.
//!
//! [`VoicePool`] owns every voice. Allocation takes the first free slot; when
//! all slots are busy it steals the voice that has played longest (greatest
//! `sample_index`), preferring the lowest slot on ties.

use core::cmp::Reverse;
use core::f32::consts::TAU;

use murk_core::{OnePole, Xorshift32};
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::drum::DrumType;
use crate::synth::{self, BlockContext, Oscillators};

/// Number of voices in the engine's pool.
pub const MAX_VOICES: usize = 32;

/// One drum hit in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Voice {
    drum: Option<DrumType>,
    velocity: f32,
    samples_until_start: usize,
    sample_index: u64,
    osc: Oscillators,
    tone: OnePole,
}

impl Voice {
    /// Whether the voice is pending or sounding.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.drum.is_some()
    }

    /// Drum this voice plays, if active.
    pub fn drum(&self) -> Option<DrumType> {
        self.drum
    }

    /// Trigger velocity in `[0, 1]`.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Samples left before the voice starts rendering.
    pub fn samples_until_start(&self) -> usize {
        self.samples_until_start
    }

    /// Samples rendered since the voice started.
    pub fn sample_index(&self) -> u64 {
        self.sample_index
    }

    /// Oscillator and noise state.
    pub fn oscillators(&self) -> &Oscillators {
        &self.osc
    }

    /// Render one sample.
    ///
    /// Returns `None` while the voice is idle or still counting down to its
    /// start. Once started, the rendered sample is returned even on the
    /// sample where the voice retires.
    #[inline]
    pub fn render(&mut self, ctx: &BlockContext) -> Option<f32> {
        let drum = self.drum?;
        if self.samples_until_start > 0 {
            self.samples_until_start -= 1;
            return None;
        }

        let drum_ctx = ctx.drum(drum);
        let t = self.sample_index as f32 / ctx.sample_rate;
        let raw = synth::generate(drum, &mut self.osc, t, drum_ctx, ctx.sample_rate);
        if !raw.sounding {
            self.drum = None;
        }
        self.sample_index += 1;
        Some(synth::post_process(
            raw.value,
            &mut self.tone,
            drum_ctx,
            self.velocity,
        ))
    }
}

/// Fixed pool of `N` voices plus the generator that randomizes new hits.
///
/// # Example
///
/// ```rust
/// use murk_kit::{DrumType, ParamSnapshot, VoicePool};
/// use murk_kit::synth::BlockContext;
///
/// let mut pool: VoicePool<4> = VoicePool::new(7);
/// pool.allocate(DrumType::Kick, 1.0, 0);
///
/// let ctx = BlockContext::new(&ParamSnapshot::default(), 48000.0);
/// let mut block = [0.0f32; 256];
/// assert!(pool.render_block(&ctx, &mut block));
/// assert!(block.iter().any(|s| s.abs() > 0.01));
/// ```
#[derive(Debug, Clone)]
pub struct VoicePool<const N: usize> {
    voices: [Voice; N],
    rng: Pcg32,
}

impl<const N: usize> VoicePool<N> {
    /// Create an idle pool whose randomization is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            voices: [Voice::default(); N],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Silence every voice. The random generator keeps its position.
    pub fn reset(&mut self) {
        self.voices = [Voice::default(); N];
    }

    /// Pool capacity.
    pub fn voice_count(&self) -> usize {
        N
    }

    /// Number of pending or sounding voices.
    pub fn active_voice_count(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    /// Read access to all voices.
    pub fn voices(&self) -> &[Voice; N] {
        &self.voices
    }

    /// Start `drum` at `sample_offset` samples from now.
    ///
    /// Velocity is clamped to `[0, 1]`. Returns the slot used.
    pub fn allocate(&mut self, drum: DrumType, velocity: f32, sample_offset: usize) -> usize {
        let slot = self.pick_slot();
        let phases = [
            self.rng.r#gen::<f32>() * TAU,
            self.rng.r#gen::<f32>() * TAU,
            self.rng.r#gen::<f32>() * TAU,
        ];
        let noise = Xorshift32::new(self.rng.next_u32());

        self.voices[slot] = Voice {
            drum: Some(drum),
            velocity: velocity.clamp(0.0, 1.0),
            samples_until_start: sample_offset,
            sample_index: 0,
            osc: Oscillators { phases, noise },
            tone: OnePole::default(),
        };
        slot
    }

    fn pick_slot(&self) -> usize {
        if let Some(free) = self.voices.iter().position(|v| !v.is_active()) {
            return free;
        }
        // min_by_key keeps the first of equal keys, so ties go to the lowest slot.
        self.voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| Reverse(v.sample_index))
            .map_or(0, |(i, _)| i)
    }

    /// Render one summed sample.
    ///
    /// Returns the mono sum and whether any voice actually started rendering
    /// this sample (pending voices do not count).
    #[inline]
    pub fn render_sample(&mut self, ctx: &BlockContext) -> (f32, bool) {
        let mut mono = 0.0;
        let mut started = false;
        for voice in &mut self.voices {
            if let Some(s) = voice.render(ctx) {
                mono += s;
                started = true;
            }
        }
        (mono, started)
    }

    /// Render `out.len()` summed samples, overwriting `out`.
    ///
    /// Returns whether any voice rendered during the block.
    pub fn render_block(&mut self, ctx: &BlockContext, out: &mut [f32]) -> bool {
        let mut any = false;
        for sample in out.iter_mut() {
            let (mono, started) = self.render_sample(ctx);
            *sample = mono;
            any |= started;
        }
        any
    }
}
