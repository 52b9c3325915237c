use crate::audio::constants::{FALLBACK_SAMPLE_RATE, RAMP_MS, UNITY_GAIN};
use nih_plug::prelude::*;

/// Linear gain ramp applied per sample across all channels
///
/// The ramp reaches its target exactly after `round(sample_rate * RAMP_SECONDS)` samples.
pub struct GainStage {
    smoother: Smoother<f32>,
    sample_rate: f32,
    /// Last target handed to the smoother, so repeated targets don't restart the ramp
    target: f32,
}

impl GainStage {
    pub fn new() -> Self {
        let smoother = Smoother::new(SmoothingStyle::Linear(RAMP_MS));
        smoother.reset(UNITY_GAIN);

        Self {
            smoother,
            sample_rate: FALLBACK_SAMPLE_RATE,
            target: UNITY_GAIN,
        }
    }

    /// Re-derive the ramp for a new sample rate. Any ramp in progress snaps to its target.
    pub fn prepare(&mut self, sample_rate: f32) {
        nih_plug::nih_debug_assert!(sample_rate > 0.0);

        self.sample_rate = sample_rate;
        self.smoother.reset(self.target);
    }

    /// Snap to the current target without changing the sample rate
    pub fn reset(&mut self) {
        self.smoother.reset(self.target);
    }

    pub fn set_target(&mut self, target: f32) {
        let target = target.clamp(0.0, 1.0);
        if target == self.target {
            return;
        }

        self.target = target;
        self.smoother.set_target(self.sample_rate, target);
    }

    /// Advance one sample and return the new gain
    pub fn next_value(&mut self) -> f32 {
        self.smoother.next()
    }

    pub fn current_value(&self) -> f32 {
        self.smoother.previous_value()
    }

    pub fn is_ramping(&self) -> bool {
        self.smoother.is_smoothing()
    }

    /// Samples needed for a full 0.0 <-> 1.0 transition
    pub fn ramp_length_samples(&self) -> u32 {
        SmoothingStyle::Linear(RAMP_MS).num_steps(self.sample_rate)
    }

    /// Largest change the gain can make between two consecutive samples
    pub fn max_step(&self) -> f32 {
        1.0 / self.ramp_length_samples().max(1) as f32
    }

    /// Apply the ramp in place. Output channels past `input_channels` carry no input and are
    /// zeroed first. The ramp advances once per sample index regardless of channel count.
    pub fn apply(&mut self, channels: &mut [&mut [f32]], input_channels: usize) {
        let input_channels = input_channels.min(channels.len());
        let (inputs, extra_outputs) = channels.split_at_mut(input_channels);

        for channel in extra_outputs.iter_mut() {
            channel.fill(0.0);
        }

        let num_samples = inputs
            .iter()
            .chain(extra_outputs.iter())
            .map(|channel| channel.len())
            .max()
            .unwrap_or(0);

        for sample_idx in 0..num_samples {
            let gain = self.next_value();

            for channel in inputs.iter_mut() {
                if let Some(sample) = channel.get_mut(sample_idx) {
                    *sample *= gain;
                }
            }
        }
    }
}

impl Default for GainStage {
    fn default() -> Self {
        Self::new()
    }
}
