use crate::ui::UITheme;
use nih_plug_iced::widget::container::Style;
use nih_plug_iced::{Color, Theme};

/// What the editor's main label currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorState {
    /// Editor opened but the loop state hasn't been polled yet
    #[default]
    Initialized,
    Looping,
    NotLooping,
}

impl IndicatorState {
    pub fn from_loop_state(is_looping: bool) -> Self {
        if is_looping {
            Self::Looping
        } else {
            Self::NotLooping
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Looping => "Looping",
            Self::NotLooping => "Not Looping",
        }
    }

    pub fn text_color(&self) -> Color {
        match self {
            Self::Initialized => UITheme::INITIALIZED_TEXT,
            Self::Looping => UITheme::LOOPING_TEXT,
            Self::NotLooping => UITheme::NOT_LOOPING_TEXT,
        }
    }

    pub fn background_color(&self) -> Color {
        match self {
            Self::Initialized => UITheme::INITIALIZED_BACKGROUND,
            Self::Looping => UITheme::LOOPING_BACKGROUND,
            Self::NotLooping => UITheme::NOT_LOOPING_BACKGROUND,
        }
    }

    /// Container style for the whole editor surface
    pub fn background_style(&self) -> fn(&Theme) -> Style {
        match self {
            Self::Initialized => UITheme::initialized_background,
            Self::Looping => UITheme::looping_background,
            Self::NotLooping => UITheme::not_looping_background,
        }
    }
}
