//! Thread-safe control handle shared by the UI, host, and audio thread.
//!
//! [`KitControl`] wraps an `Arc` so it can be cloned into editor closures or
//! state savers while the [`DrumMachine`](crate::DrumMachine) holds its own
//! copy. Every operation is a single atomic load, store, swap, or `fetch_or`;
//! nothing here blocks.
//!
//! Requests are lossy by design of the flags: starting the test sequence
//! twice before the next block starts it once, and queuing the same drum
//! twice before the next block plays it once.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use murk_core::ParamDescriptor;

use crate::drum::DrumType;
use crate::params::{self, KitParams, PARAM_COUNT, ParamSnapshot};

struct KitShared {
    params: KitParams,
    test_sequence_requested: AtomicBool,
    debug_hits: AtomicU32,
}

/// Cloneable handle to the kit's parameters and trigger flags.
///
/// # Example
///
/// ```rust
/// use murk_kit::{DrumType, KitControl};
///
/// let control = KitControl::new();
/// control.set_param("kickDecay", 1.4);
/// control.queue_debug_hit(DrumType::Snare);
/// assert_eq!(control.param("kickDecay"), Some(1.4));
/// ```
#[derive(Clone)]
pub struct KitControl {
    inner: Arc<KitShared>,
}

impl Default for KitControl {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KitControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KitControl")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl KitControl {
    /// Handle with every parameter at its default and no pending requests.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(KitShared {
                params: KitParams::new(),
                test_sequence_requested: AtomicBool::new(false),
                debug_hits: AtomicU32::new(0),
            }),
        }
    }

    /// Number of parameters.
    pub fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    /// Descriptor for a flat parameter index.
    pub fn descriptor(&self, index: usize) -> Option<&'static ParamDescriptor> {
        params::descriptor(index)
    }

    /// Current plain value for a string id.
    pub fn param(&self, id: &str) -> Option<f32> {
        params::index_of(id).and_then(|i| self.inner.params.get(i))
    }

    /// Current plain value by flat index.
    pub fn param_by_index(&self, index: usize) -> Option<f32> {
        self.inner.params.get(index)
    }

    /// Write a plain value by string id.
    ///
    /// Unknown ids and non-finite values are ignored; everything else is
    /// clamped to range. Takes effect at the next block. Returns whether the
    /// value was stored.
    pub fn set_param(&self, id: &str, value: f32) -> bool {
        let Some(index) = params::index_of(id) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(id, "ignoring write to unknown parameter");
            return false;
        };
        self.set_param_by_index(index, value)
    }

    /// Write a plain value by flat index.
    pub fn set_param_by_index(&self, index: usize, value: f32) -> bool {
        let stored = self.inner.params.set(index, value);
        #[cfg(feature = "tracing")]
        if !stored {
            tracing::debug!(index, value, "rejected parameter write");
        }
        stored
    }

    /// Write a normalized `[0, 1]` value by string id.
    pub fn set_param_normalized(&self, id: &str, normalized: f32) -> bool {
        params::index_of(id).is_some_and(|i| self.inner.params.set_normalized(i, normalized))
    }

    /// Restore every parameter to its default.
    pub fn reset_to_defaults(&self) {
        self.inner.params.reset_to_defaults();
    }

    /// Read every parameter once.
    pub fn snapshot(&self) -> ParamSnapshot {
        self.inner.params.snapshot()
    }

    /// Ask the audio thread to (re)start the test pattern from step 0.
    pub fn start_test_sequence(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("test sequence requested");
        self.inner
            .test_sequence_requested
            .store(true, Ordering::Release);
    }

    /// Ask the audio thread to play `drum` at the start of the next block.
    pub fn queue_debug_hit(&self, drum: DrumType) {
        self.inner
            .debug_hits
            .fetch_or(drum.mask_bit(), Ordering::AcqRel);
    }

    /// Consume the test sequence request.
    pub(crate) fn take_test_sequence_request(&self) -> bool {
        self.inner
            .test_sequence_requested
            .swap(false, Ordering::AcqRel)
    }

    /// Consume the queued debug hits as a lane bitmask.
    pub(crate) fn take_debug_hits(&self) -> u32 {
        self.inner.debug_hits.swap(0, Ordering::AcqRel)
    }
}
