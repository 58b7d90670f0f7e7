// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery screen.
//!
//! The `App` struct wires together the gallery component, localization, and
//! persisted preferences, and owns the Iced bootstrap: window settings, the
//! raw-event subscription, and the animation tick that drives decorative
//! interpolation while it is live.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::quilt::QuiltDocument;
use crate::ui::gallery::component;
use crate::ui::theming::ThemeMode;
use iced::{event, time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Root Iced application state bridging the gallery, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    gallery: component::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("blocks", &self.gallery.document().block_count())
            .field("modal_open", &self.gallery.is_modal_open())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(component::Message),
    Tick(std::time::Instant), // Animation frame for decorative effects
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to a quilt gallery TOML document.
    pub gallery_path: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Interval between decorative animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let document = QuiltDocument::load_embedded().unwrap_or_default();
        Self {
            i18n: I18n::default(),
            gallery: component::State::new(document, false),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let document = QuiltDocument::load_or_default(flags.gallery_path.as_deref().map(Path::new));
        let gallery = component::State::new(document, config.reduced_motion.unwrap_or(false));

        let app = App {
            i18n,
            gallery,
            theme_mode: config.theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        let document = self.gallery.document();

        match self
            .gallery
            .current_index()
            .and_then(|index| document.blocks.get(index))
        {
            Some(block) => format!("{} — {}", base, block.name),
            None if !document.title.is_empty() => format!("{} — {}", base, document.title),
            None => base,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Keyboard events are routed only when no widget captured them;
        // pointer, touch, and resize events always reach the gallery so an
        // in-flight swipe cannot get stuck on a capture.
        let event_subscription = event::listen_with(|event, status, _window| match &event {
            event::Event::Mouse(_) | event::Event::Touch(_) => {
                Some(Message::Gallery(component::Message::RawEvent(event.clone())))
            }
            event::Event::Window(window::Event::Resized(_)) => {
                Some(Message::Gallery(component::Message::RawEvent(event.clone())))
            }
            event::Event::Keyboard(_) => match status {
                event::Status::Ignored => {
                    Some(Message::Gallery(component::Message::RawEvent(event.clone())))
                }
                event::Status::Captured => None,
            },
            _ => None,
        });

        let tick_subscription = if self.gallery.is_animating() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([event_subscription, tick_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                match self.gallery.update(message) {
                    component::Effect::None
                    | component::Effect::Opened { .. }
                    | component::Effect::Closed => {}
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.gallery.update(component::Message::Tick(now));
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.gallery.view(&self.i18n).map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_loads_embedded_gallery() {
        let app = App::default();
        assert!(app.gallery.document().block_count() > 0);
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn title_reflects_open_block() {
        let mut app = App::default();
        let closed_title = app.title();
        assert!(closed_title.contains("Iced Quilt"));

        let _ = app.update(Message::Gallery(component::Message::BlockPressed(0)));
        let open_title = app.title();
        let block_name = app.gallery.document().blocks[0].name.clone();
        assert!(open_title.contains(&block_name));
    }

    #[test]
    fn gallery_messages_flow_through_update() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(component::Message::BlockPressed(3)));
        assert!(app.gallery.is_modal_open());
        let _ = app.update(Message::Gallery(component::Message::CloseRequested));
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn view_renders_without_panic() {
        let app = App::default();
        let _element = app.view();
    }
}
