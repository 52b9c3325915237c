pub mod loop_indicator;
pub mod poll_timer;
pub mod style;

pub use loop_indicator::IndicatorState;
pub use poll_timer::PollTimer;
pub use style::UITheme;
