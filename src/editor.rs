use crate::audio::transport::LoopStateConsumer;
use crate::ui::{IndicatorState, PollTimer, UITheme};
use nih_plug::context::gui::GuiContext;
use nih_plug_iced::futures::Subscription;
use nih_plug_iced::widget::{container, text, Column};
use nih_plug_iced::{Element, IcedEditor, Length, Renderer, Task, Theme};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Tick, // Per-frame tick, throttled to the poll rate in update()
}

#[derive(Clone)]
pub struct EditorInitFlags {
    pub loop_state: LoopStateConsumer,
}

/// Shows whether the host is looping. Never writes anything back to the plugin.
pub struct LoopIndicatorEditor {
    loop_state: LoopStateConsumer,
    indicator: IndicatorState,
    poll_timer: PollTimer,
    context: Arc<dyn GuiContext>,
}

impl IcedEditor for LoopIndicatorEditor {
    type Executor = nih_plug_iced::executor::Default;
    type Message = Message;
    type InitializationFlags = EditorInitFlags;
    type Theme = Theme;

    fn new(
        initialization_flags: Self::InitializationFlags,
        context: Arc<dyn GuiContext>,
    ) -> (Self, Task<Self::Message>) {
        let editor = Self {
            loop_state: initialization_flags.loop_state,
            indicator: IndicatorState::Initialized,
            poll_timer: PollTimer::from_hz(UITheme::DISPLAY_POLL_HZ),
            context,
        };

        (editor, Task::none())
    }

    fn context(&self) -> &dyn GuiContext {
        self.context.as_ref()
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::Tick => {
                if self.poll_timer.poll_due(Instant::now()) {
                    self.indicator = IndicatorState::from_loop_state(self.loop_state.is_looping());
                }
                Task::none()
            }
        }
    }

    fn subscription(
        &self,
        window_subs: &mut nih_plug_iced::window::WindowSubs<Self::Message>,
    ) -> Subscription<Self::Message> {
        window_subs.on_frame = Some(Arc::new(|| Some(Message::Tick)));

        Subscription::none()
    }

    fn view(&self) -> Element<'_, Self::Message, Self::Theme, Renderer> {
        let main_label = container(
            text(self.indicator.label())
                .size(UITheme::MAIN_LABEL_SIZE)
                .color(self.indicator.text_color()),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        let version_label = container(
            text(env!("CARGO_PKG_VERSION"))
                .size(UITheme::VERSION_LABEL_SIZE)
                .color(self.indicator.text_color()),
        )
        .align_right(Length::Fill)
        .padding(UITheme::PADDING_SMALL);

        container(Column::new().push(main_label).push(version_label))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(self.indicator.background_style())
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::default()
    }
}
