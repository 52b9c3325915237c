use crate::audio::constants::{MONO_CHANNELS, STEREO_CHANNELS};
use crate::audio::gain_stage::GainStage;
use crate::audio::transport::{
    LoopStateProducer, MuteDecision, TransportMonitor, TransportSnapshot,
};

/// Mono or stereo, with matching input and output channel counts
pub fn is_layout_supported(input_channels: u32, output_channels: u32) -> bool {
    (output_channels == MONO_CHANNELS || output_channels == STEREO_CHANNELS)
        && input_channels == output_channels
}

/// Host-independent processing core: transport monitor followed by the gain stage
pub struct AudioEngine {
    monitor: TransportMonitor,
    gain_stage: GainStage,
    /// Number of main input channels, anything past this in the block is an extra output
    input_channels: usize,
}

impl AudioEngine {
    pub fn new(loop_state: LoopStateProducer) -> Self {
        Self {
            monitor: TransportMonitor::new(loop_state),
            gain_stage: GainStage::new(),
            input_channels: STEREO_CHANNELS as usize,
        }
    }

    /// Called from `initialize()` whenever the sample rate or channel layout changes
    pub fn prepare(&mut self, sample_rate: f32, input_channels: usize) {
        self.input_channels = input_channels;
        self.gain_stage.prepare(sample_rate);
    }

    pub fn reset(&mut self) {
        self.gain_stage.reset();
    }

    /// Process one block in place. Real-time safe: no allocations, no locks.
    pub fn process(
        &mut self,
        channels: &mut [&mut [f32]],
        transport: Option<TransportSnapshot>,
    ) -> MuteDecision {
        let decision = self.monitor.update(transport);
        self.gain_stage.set_target(decision.target_gain());
        self.gain_stage.apply(channels, self.input_channels);

        decision
    }

    pub fn decision(&self) -> MuteDecision {
        self.monitor.decision()
    }

    pub fn gain_stage(&self) -> &GainStage {
        &self.gain_stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::transport::{create_loop_state_channels, LoopStateConsumer};
    use approx::assert_abs_diff_eq;

    const BLOCK_SIZE: usize = 441;

    fn engine(sample_rate: f32, input_channels: usize) -> (AudioEngine, LoopStateConsumer) {
        let (producer, consumer) = create_loop_state_channels();
        let mut engine = AudioEngine::new(producer);
        engine.prepare(sample_rate, input_channels);
        engine.reset();
        (engine, consumer)
    }

    fn process_stereo(
        engine: &mut AudioEngine,
        amplitude: f32,
        transport: Option<TransportSnapshot>,
    ) -> (Vec<f32>, Vec<f32>) {
        let mut left = vec![amplitude; BLOCK_SIZE];
        let mut right = vec![amplitude; BLOCK_SIZE];
        engine.process(&mut [&mut left[..], &mut right[..]], transport);
        (left, right)
    }

    #[test]
    fn supported_layouts() {
        assert!(is_layout_supported(1, 1));
        assert!(is_layout_supported(2, 2));

        assert!(!is_layout_supported(1, 2));
        assert!(!is_layout_supported(2, 1));
        assert!(!is_layout_supported(0, 0));
        assert!(!is_layout_supported(6, 6));
    }

    #[test]
    fn loop_region_without_looping_passes_signal() {
        let (mut engine, consumer) = engine(44100.0, 2);

        let (left, right) =
            process_stereo(&mut engine, 0.5, Some(TransportSnapshot::new(true, false)));

        assert_eq!(engine.decision(), MuteDecision::Pass);
        assert!(!consumer.is_looping());
        assert!(left.iter().chain(right.iter()).all(|&s| s == 0.5));
    }

    #[test]
    fn looping_fades_to_silence_after_ramp() {
        let (mut engine, consumer) = engine(44100.0, 2);
        let looping = Some(TransportSnapshot::new(true, true));

        // 2205 samples = 5 blocks of 441
        for _ in 0..4 {
            process_stereo(&mut engine, 1.0, looping);
        }
        let last_block = process_stereo(&mut engine, 1.0, looping);

        assert_eq!(engine.decision(), MuteDecision::Mute);
        assert!(consumer.is_looping());
        assert_abs_diff_eq!(engine.gain_stage().current_value(), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(last_block.0[BLOCK_SIZE - 1], 0.0, epsilon = 0.01);

        let (left, right) = process_stereo(&mut engine, 1.0, looping);
        assert!(left.iter().chain(right.iter()).all(|&s| s == 0.0));
    }

    #[test]
    fn first_muted_block_starts_from_unity() {
        let (mut engine, _consumer) = engine(44100.0, 2);

        let looping = Some(TransportSnapshot::new(true, true));
        let (left, _) = process_stereo(&mut engine, 1.0, looping);

        // No jump: the first sample is one ramp step below unity
        let max_step = engine.gain_stage().max_step();
        assert!(left[0] < 1.0);
        assert!(1.0 - left[0] <= max_step + 1e-6);
        assert!(left.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn stopping_the_loop_fades_back_in() {
        let (mut engine, consumer) = engine(44100.0, 2);

        for _ in 0..10 {
            process_stereo(&mut engine, 1.0, Some(TransportSnapshot::new(true, true)));
        }
        for _ in 0..10 {
            process_stereo(&mut engine, 1.0, Some(TransportSnapshot::new(false, false)));
        }

        assert!(!consumer.is_looping());
        let (left, right) =
            process_stereo(&mut engine, 0.3, Some(TransportSnapshot::new(false, false)));
        assert!(left.iter().chain(right.iter()).all(|&s| s == 0.3));
    }

    #[test]
    fn missing_transport_keeps_muting() {
        let (mut engine, consumer) = engine(44100.0, 2);

        for _ in 0..10 {
            process_stereo(&mut engine, 1.0, Some(TransportSnapshot::new(true, true)));
        }
        let (left, _) = process_stereo(&mut engine, 1.0, None);

        assert!(consumer.is_looping());
        assert!(left.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn identical_channels_stay_identical_while_ramping() {
        let (mut engine, _consumer) = engine(48000.0, 2);

        let mut left: Vec<f32> = (0..BLOCK_SIZE).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut right = left.clone();
        engine.process(
            &mut [&mut left[..], &mut right[..]],
            Some(TransportSnapshot::new(true, true)),
        );

        assert!(engine.gain_stage().is_ramping());
        assert_eq!(left, right);
    }

    #[test]
    fn extra_output_channel_is_silent() {
        let (mut engine, _consumer) = engine(44100.0, 1);

        let mut input = vec![0.9f32; BLOCK_SIZE];
        let mut extra = vec![f32::MAX; BLOCK_SIZE];
        engine.process(
            &mut [&mut input[..], &mut extra[..]],
            Some(TransportSnapshot::new(false, false)),
        );

        assert!(input.iter().all(|&s| s == 0.9));
        assert!(extra.iter().all(|&s| s == 0.0));
    }
}
