mod audio;
mod editor;
mod ui;

use audio::audio_engine::{self, AudioEngine};
use audio::transport::{create_loop_state_channels, LoopStateConsumer, TransportSnapshot};
use editor::{EditorInitFlags, LoopIndicatorEditor};
use nih_plug::prelude::*;
use nih_plug_iced::{create_iced_editor, IcedState};
use std::sync::Arc;
use ui::UITheme;

struct MuteIfLooping {
    params: Arc<MuteIfLoopingParams>,
    audio_engine: AudioEngine,
    /// Read side of the loop flag, handed to the editor
    loop_state: LoopStateConsumer,
    iced_state: Arc<IcedState>,
}

#[derive(Params)]
struct MuteIfLoopingParams {
    /// Exposed to the host for automation and display. Muting is driven by the host transport,
    /// not by this value.
    #[id = "looping"]
    pub looping: FloatParam,
}

impl Default for MuteIfLooping {
    fn default() -> Self {
        let (loop_state_producer, loop_state_consumer) = create_loop_state_channels();

        Self {
            params: Arc::new(MuteIfLoopingParams::default()),
            audio_engine: AudioEngine::new(loop_state_producer),
            loop_state: loop_state_consumer,
            iced_state: IcedState::from_size(UITheme::EDITOR_WIDTH, UITheme::EDITOR_HEIGHT),
        }
    }
}

impl Default for MuteIfLoopingParams {
    fn default() -> Self {
        Self {
            looping: FloatParam::new("Looping", 0.0, FloatRange::Linear { min: 0.0, max: 1.0 })
                .with_step_size(0.01)
                .with_value_to_string(formatters::v2s_f32_rounded(2)),
        }
    }
}

impl Plugin for MuteIfLooping {
    const NAME: &'static str = "Mute If Looping";
    const VENDOR: &'static str = "Cmdv";
    const URL: &'static str = env!("CARGO_PKG_HOMEPAGE");
    const EMAIL: &'static str = "info@cmdv.me";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // The first audio IO layout is used as the default. Both layouts keep input and output
    // channel counts equal, see `audio_engine::is_layout_supported()`.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),

            aux_input_ports: &[],
            aux_output_ports: &[],

            names: PortNames::const_default(),
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            ..AudioIOLayout::const_default()
        },
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::None;

    const SAMPLE_ACCURATE_AUTOMATION: bool = false;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        let input_channels = audio_io_layout
            .main_input_channels
            .map(NonZeroU32::get)
            .unwrap_or(0);
        let output_channels = audio_io_layout
            .main_output_channels
            .map(NonZeroU32::get)
            .unwrap_or(0);

        if !audio_engine::is_layout_supported(input_channels, output_channels) {
            nih_plug::nih_log!(
                "Rejecting channel layout: {} in, {} out",
                input_channels,
                output_channels
            );
            return false;
        }

        // The sample rate may have changed, so the ramp length has to be re-derived
        self.audio_engine
            .prepare(buffer_config.sample_rate, input_channels as usize);

        nih_plug::nih_log!(
            "Plugin initialized: {} Hz, {} channel(s), max buffer size {}",
            buffer_config.sample_rate,
            input_channels,
            buffer_config.max_buffer_size
        );
        true
    }

    fn reset(&mut self) {
        // Called from the audio thread, must not allocate
        self.audio_engine.reset();
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        let transport = TransportSnapshot::from_transport(context.transport());
        self.audio_engine.process(buffer.as_slice(), Some(transport));

        ProcessStatus::Normal
    }

    fn editor(&mut self, _async_executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        nih_plug::nih_log!("Editor requested");

        let init_flags = EditorInitFlags {
            loop_state: self.loop_state.clone(),
        };

        create_iced_editor::<LoopIndicatorEditor>(
            self.iced_state.clone(),
            init_flags,
            Vec::new(), // fonts
        )
    }
}

impl ClapPlugin for MuteIfLooping {
    const CLAP_ID: &'static str = "com.cmdv.mute-if-looping";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Smoothly mutes audio while the host transport is looping");
    const CLAP_MANUAL_URL: Option<&'static str> = Some(Self::URL);
    const CLAP_SUPPORT_URL: Option<&'static str> = None;

    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Utility,
        ClapFeature::Mono,
        ClapFeature::Stereo,
    ];
}

impl Vst3Plugin for MuteIfLooping {
    const VST3_CLASS_ID: [u8; 16] = *b"MuteIfLoopingCmd";

    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Tools];
}

nih_export_clap!(MuteIfLooping);
nih_export_vst3!(MuteIfLooping);
