use std::sync::atomic::{AtomicBool, Ordering};

use atomic_float::AtomicF32;

use crate::{ParameterDefinition, ParameterError, ParameterId, ParameterLayout};

/// Lock-free parameter storage shared between the control thread (UI,
/// host automation) and the audio thread.
///
/// One atomic slot per layout entry, built once; no allocation after
/// construction. Writes clamp to the declared range, store the value and
/// then set the dirty flag with release ordering, so a reader that
/// observes the flag via [`take_dirty`](ParameterStore::take_dirty) also
/// observes the values written before it. The contract is last-write-wins
/// and eventually visible, which is enough for continuous controls.
#[derive(Debug)]
pub struct ParameterStore {
    layout: ParameterLayout,
    values: Vec<AtomicF32>,
    dirty: AtomicBool,
}

impl ParameterStore {
    pub fn new(layout: ParameterLayout) -> Self {
        let values = layout
            .parameters()
            .iter()
            .map(|def| AtomicF32::new(def.range.default))
            .collect();
        Self {
            layout,
            values,
            // Dirty from the start so the first processed block pulls the
            // defaults into the audio-rate state.
            dirty: AtomicBool::new(true),
        }
    }

    pub fn layout(&self) -> &ParameterLayout {
        &self.layout
    }

    /// Resolves an identifier to its slot index. Audio-rate code resolves
    /// slots once up front and reads via [`snapshot_at`](Self::snapshot_at).
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.layout.index_of(id)
    }

    /// Control-rate write. Out-of-range values are clamped silently.
    pub fn set(&self, id: &str, value: f32) -> Result<(), ParameterError> {
        let slot = self
            .index_of(id)
            .ok_or_else(|| ParameterError::Unknown(ParameterId::new(id)))?;
        let def = &self.layout.parameters()[slot];
        self.values[slot].store(def.range.clamp(value), Ordering::Relaxed);
        self.dirty.store(true, Ordering::Release);
        Ok(())
    }

    /// Audio-rate read by identifier; `None` for unknown identifiers.
    pub fn snapshot(&self, id: &str) -> Option<f32> {
        self.index_of(id).map(|slot| self.snapshot_at(slot))
    }

    /// Audio-rate read by slot index. Lock-free, never blocks, never
    /// allocates; an out-of-range slot reads as silence.
    #[inline]
    pub fn snapshot_at(&self, slot: usize) -> f32 {
        self.values
            .get(slot)
            .map(|value| value.load(Ordering::Relaxed))
            .unwrap_or(0.0)
    }

    /// Atomically reads and clears the dirty flag. Called once per block
    /// at the top of the processing loop.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::Acquire)
    }

    /// Flags pending work without changing a value, e.g. after a stream
    /// reconfiguration invalidated derived coefficients.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Restores every parameter to its declared default and flags the
    /// change for the audio thread.
    pub fn reset_to_defaults(&self) {
        for (def, value) in self.layout.parameters().iter().zip(&self.values) {
            value.store(def.range.default, Ordering::Relaxed);
        }
        self.dirty.store(true, Ordering::Release);
    }

    /// Current value of every parameter, in layout order.
    pub fn entries(&self) -> impl Iterator<Item = (&ParameterDefinition, f32)> + '_ {
        self.layout
            .parameters()
            .iter()
            .zip(&self.values)
            .map(|(def, value)| (def, value.load(Ordering::Relaxed)))
    }
}
