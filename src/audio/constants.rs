/// Audio processing constants
/// Visual constants live in ui::style::UITheme

/// Duration of the mute/unmute ramp
pub const RAMP_SECONDS: f32 = 0.05;
pub const RAMP_MS: f32 = RAMP_SECONDS * 1000.0;

/// Gain targets for the two mute decisions
pub const UNITY_GAIN: f32 = 1.0;
pub const SILENT_GAIN: f32 = 0.0;

/// Used until the host calls `initialize()` with the real sample rate
pub const FALLBACK_SAMPLE_RATE: f32 = 44100.0;

/// Channel counts accepted for the main input/output ports
pub const MONO_CHANNELS: u32 = 1;
pub const STEREO_CHANNELS: u32 = 2;
