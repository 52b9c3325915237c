use nih_plug_iced::{widget::container::Style, Color, Theme};

/// colors, UI dimensions and timing only
/// Audio-related constants are in audio::constants
pub struct UITheme;

impl UITheme {
    // === COLORS ===

    /// Shown while the host is looping
    pub const LOOPING_BACKGROUND: Color =
        Color::from_rgb(135.0 / 255.0, 61.0 / 255.0, 72.0 / 255.0); // Cordovan red
    pub const LOOPING_TEXT: Color = Color::WHITE;

    /// Shown while audio passes through
    pub const NOT_LOOPING_BACKGROUND: Color =
        Color::from_rgb(190.0 / 255.0, 1.0, 199.0 / 255.0); // Tea green
    pub const NOT_LOOPING_TEXT: Color = Color::BLACK;

    /// Before the first poll
    pub const INITIALIZED_BACKGROUND: Color = Color::TRANSPARENT;
    pub const INITIALIZED_TEXT: Color = Color::BLACK;

    // === DIMENSIONS ===
    pub const EDITOR_WIDTH: u32 = 150;
    pub const EDITOR_HEIGHT: u32 = 85;

    pub const MAIN_LABEL_SIZE: u16 = 15;
    pub const VERSION_LABEL_SIZE: u16 = 12;

    pub const PADDING_SMALL: u16 = 4;

    // === TIMING ===

    /// How often the editor re-reads the loop state
    pub const DISPLAY_POLL_HZ: u32 = 24;

    // === VISUAL HELPER FUNCTIONS ===
    pub fn looping_background(_theme: &Theme) -> Style {
        Self::solid_background(Self::LOOPING_BACKGROUND)
    }

    pub fn not_looping_background(_theme: &Theme) -> Style {
        Self::solid_background(Self::NOT_LOOPING_BACKGROUND)
    }

    pub fn initialized_background(_theme: &Theme) -> Style {
        Self::solid_background(Self::INITIALIZED_BACKGROUND)
    }

    fn solid_background(color: Color) -> Style {
        Style {
            background: Some(color.into()),
            ..Style::default()
        }
    }
}
