use crate::audio::constants::{SILENT_GAIN, UNITY_GAIN};
use nih_plug::prelude::*;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// What the host told us about looping for the current block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportSnapshot {
    /// The host has a loop region (start/end) set
    pub loop_region_defined: bool,
    /// The host is actually cycling over that region
    pub looping_enabled: bool,
}

impl TransportSnapshot {
    pub fn new(loop_region_defined: bool, looping_enabled: bool) -> Self {
        Self {
            loop_region_defined,
            looping_enabled,
        }
    }

    /// Build a snapshot from nih-plug's per-block transport information.
    ///
    /// The wrappers only fill in the loop range while the host's cycle is active (CLAP's
    /// `IS_LOOP_ACTIVE`, VST3's `kCycleActive`), so a reported range also means looping is on.
    pub fn from_transport(transport: &Transport) -> Self {
        let loop_region_defined = transport.loop_range_samples().is_some()
            || transport.loop_range_seconds().is_some()
            || transport.loop_range_beats().is_some();

        Self {
            loop_region_defined,
            looping_enabled: loop_region_defined,
        }
    }

    pub fn mute_decision(&self) -> MuteDecision {
        if self.loop_region_defined && self.looping_enabled {
            MuteDecision::Mute
        } else {
            MuteDecision::Pass
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuteDecision {
    Mute,
    #[default]
    Pass,
}

impl MuteDecision {
    pub fn is_mute(&self) -> bool {
        matches!(self, Self::Mute)
    }

    /// Gain the smoothing stage should head towards
    pub fn target_gain(&self) -> f32 {
        match self {
            Self::Mute => SILENT_GAIN,
            Self::Pass => UNITY_GAIN,
        }
    }
}

/// Loop state written by the audio thread
#[derive(Clone)]
pub struct LoopStateProducer {
    is_looping: Arc<AtomicBool>,
}

impl LoopStateProducer {
    /// Real-time safe, a single relaxed store
    pub fn store(&self, is_looping: bool) {
        self.is_looping.store(is_looping, Ordering::Relaxed);
    }
}

/// Read-only view of the loop state for the editor
#[derive(Clone)]
pub struct LoopStateConsumer {
    is_looping: Arc<AtomicBool>,
}

impl LoopStateConsumer {
    pub fn is_looping(&self) -> bool {
        self.is_looping.load(Ordering::Relaxed)
    }
}

/// Factory function to create the loop state pair
/// Returns (producer for audio thread, consumer for UI thread)
pub fn create_loop_state_channels() -> (LoopStateProducer, LoopStateConsumer) {
    let is_looping = Arc::new(AtomicBool::new(false));

    (
        LoopStateProducer {
            is_looping: is_looping.clone(),
        },
        LoopStateConsumer { is_looping },
    )
}

/// Turns per-block transport snapshots into a mute decision and publishes it
pub struct TransportMonitor {
    loop_state: LoopStateProducer,
    decision: MuteDecision,
}

impl TransportMonitor {
    pub fn new(loop_state: LoopStateProducer) -> Self {
        loop_state.store(false);

        Self {
            loop_state,
            decision: MuteDecision::Pass,
        }
    }

    /// Called once at the start of every block. Without a snapshot the previous decision stands.
    pub fn update(&mut self, snapshot: Option<TransportSnapshot>) -> MuteDecision {
        if let Some(snapshot) = snapshot {
            self.decision = snapshot.mute_decision();
            self.loop_state.store(self.decision.is_mute());
        }

        self.decision
    }

    pub fn decision(&self) -> MuteDecision {
        self.decision
    }
}
