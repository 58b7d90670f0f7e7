// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the loaded quilt document, the modal/swipe/focus
//! sub-components, and the decorative effects state. It translates raw
//! window, keyboard, mouse, and touch events into sub-component messages
//! and surfaces [`Effect`]s to the application shell.

use crate::i18n::fluent::I18n;
use crate::quilt::QuiltDocument;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::effects;
use crate::ui::gallery::preview::{render_preview, Preview};
use crate::ui::gallery::subcomponents::{focus, modal, swipe};
use crate::ui::gallery::{grid_view, modal_view};
use crate::ui::styles;
use iced::widget::{Container, Stack, Text};
use iced::{event, keyboard, mouse, touch, window, Element, Padding, Point, Size};
use std::time::Instant;

/// Viewport size assumed until the first window resize event arrives.
const INITIAL_VIEWPORT: Size = Size {
    width: 1280.0,
    height: 800.0,
};

/// Gallery component state.
pub struct State {
    document: QuiltDocument,
    modal: modal::State,
    swipe: swipe::State,
    focus: focus::State,
    effects: effects::State,
    preview: Option<Preview>,
    viewport: Size,
    last_cursor: Point,
    scroll_locked: bool,
}

/// Messages emitted by gallery widgets and raw-event routing.
#[derive(Debug, Clone)]
pub enum Message {
    /// A block tile was clicked.
    BlockPressed(usize),
    BlockHovered(usize),
    BlockUnhovered,
    /// The modal sheet was pressed (potential swipe start).
    SheetPressed,
    /// A previous/next control was pressed.
    StepRequested(i64),
    /// The close control or the backdrop was pressed.
    CloseRequested,
    RawEvent(event::Event),
    /// Animation frame for decorative interpolation.
    Tick(Instant),
}

/// Side effects the application should observe after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The modal opened (or navigated) to the given block index.
    Opened { index: usize },
    /// The modal closed.
    Closed,
}

impl State {
    /// Builds the component over a loaded document. A document without
    /// blocks leaves the modal permanently disabled.
    #[must_use]
    pub fn new(document: QuiltDocument, reduced_motion: bool) -> Self {
        let block_count = document.block_count();
        let mut effects = effects::State::new(block_count, reduced_motion);
        effects.on_load();

        Self {
            modal: modal::State::new(block_count),
            swipe: swipe::State::default(),
            focus: focus::State::new(block_count),
            effects,
            preview: None,
            viewport: INITIAL_VIEWPORT,
            last_cursor: Point::ORIGIN,
            scroll_locked: false,
            document,
        }
    }

    /// Handle a gallery message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::BlockPressed(index) => self.open_at(index as i64),
            Message::BlockHovered(index) => {
                // Hover reaching tiles beneath the open modal is ignored.
                if !self.modal.is_open() {
                    self.effects.on_hover(Some(index));
                }
                Effect::None
            }
            Message::BlockUnhovered => {
                self.effects.on_hover(None);
                Effect::None
            }
            Message::SheetPressed => {
                self.swipe.handle(swipe::Message::DragStarted {
                    y: self.last_cursor.y,
                    viewport_width: self.viewport.width,
                    modal_open: self.modal.is_open(),
                });
                Effect::None
            }
            Message::StepRequested(dir) => self.step(dir),
            Message::CloseRequested => self.close_modal(),
            Message::RawEvent(raw) => self.handle_raw_event(raw),
            Message::Tick(now) => {
                self.effects.tick(now);
                Effect::None
            }
        }
    }

    fn handle_raw_event(&mut self, raw: event::Event) -> Effect {
        match raw {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape) => self.close_modal(),
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self.step(-1),
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self.step(1),
                    keyboard::Key::Named(keyboard::key::Named::Tab) => {
                        if !self.modal.is_open() {
                            if modifiers.shift() {
                                self.focus.focus_previous();
                            } else {
                                self.focus.focus_next();
                            }
                        }
                        Effect::None
                    }
                    keyboard::Key::Named(keyboard::key::Named::Enter)
                    | keyboard::Key::Named(keyboard::key::Named::Space) => {
                        match self.focus.focused() {
                            Some(index) if !self.modal.is_open() => self.open_at(index as i64),
                            _ => Effect::None,
                        }
                    }
                    _ => Effect::None,
                }
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.last_cursor = position;
                self.effects.on_cursor_moved(position);
                self.swipe.handle(swipe::Message::DragMoved { y: position.y });
                Effect::None
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.end_drag()
            }
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.swipe.handle(swipe::Message::DragStarted {
                    y: position.y,
                    viewport_width: self.viewport.width,
                    modal_open: self.modal.is_open(),
                });
                Effect::None
            }
            event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.swipe.handle(swipe::Message::DragMoved { y: position.y });
                Effect::None
            }
            event::Event::Touch(touch::Event::FingerLifted { .. })
            | event::Event::Touch(touch::Event::FingerLost { .. }) => self.end_drag(),
            event::Event::Window(window::Event::Resized(size)) => {
                self.viewport = size;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn open_at(&mut self, index: i64) -> Effect {
        self.apply_modal_effect(modal::Message::OpenAt(index))
    }

    fn step(&mut self, dir: i64) -> Effect {
        self.apply_modal_effect(modal::Message::Step(dir))
    }

    fn close_modal(&mut self) -> Effect {
        self.apply_modal_effect(modal::Message::Close)
    }

    fn apply_modal_effect(&mut self, message: modal::Message) -> Effect {
        match self.modal.handle(message) {
            modal::Effect::Opened { index } => {
                self.focus.clear();
                self.preview = self.document.blocks.get(index).map(render_preview);
                self.scroll_locked = true;
                self.effects.on_modal_opened();
                Effect::Opened { index }
            }
            modal::Effect::Closed => {
                self.preview = None;
                self.scroll_locked = false;
                self.effects.on_modal_closed();
                Effect::Closed
            }
            modal::Effect::None => Effect::None,
        }
    }

    fn end_drag(&mut self) -> Effect {
        let effect = self.swipe.handle(swipe::Message::DragEnded {
            viewport_height: self.viewport.height,
        });
        match effect {
            swipe::Effect::Dismiss => self.close_modal(),
            swipe::Effect::None => Effect::None,
        }
    }

    /// Render the gallery, the modal overlay, and the cursor trail.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let base = grid_view::view(
            &grid_view::ViewContext { i18n },
            &grid_view::ViewModel {
                title: &self.document.title,
                blocks: &self.document.blocks,
                focused: self.focus.focused(),
                effects: &self.effects,
                viewport_width: self.viewport.width,
                scroll_locked: self.scroll_locked,
            },
        );

        let mut stack = Stack::new().push(base);

        if let (Some(index), Some(preview)) = (self.modal.current_index(), self.preview.as_ref()) {
            if let Some(block) = self.document.blocks.get(index) {
                stack = stack.push(modal_view::view(
                    &modal_view::ViewContext { i18n },
                    &modal_view::ViewModel {
                        block,
                        preview,
                        counter: self.modal.counter_label().unwrap_or_default(),
                        effects: &self.effects,
                        sheet_offset: self.swipe.offset(),
                        dragging: self.swipe.is_dragging(),
                        viewport_width: self.viewport.width,
                    },
                ));
            }
        }

        if let Some(trail) = self.cursor_trail_layer(i18n) {
            stack = stack.push(trail);
        }

        stack.into()
    }

    /// The decorative cursor-follow indicator, desktop layouts only.
    fn cursor_trail_layer<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let position = self.effects.cursor_trail(self.viewport.width)?;

        let label = self
            .effects
            .hovered_block()
            .and_then(|index| self.document.blocks.get(index))
            .map_or_else(
                || "●".to_string(),
                |block| i18n.tr_with_args("block-open-label", &[("name", &block.name)]),
            );

        let indicator = Container::new(Text::new(label).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::LG));

        Some(
            Container::new(indicator)
                .padding(Padding {
                    top: position.y,
                    left: position.x,
                    right: 0.0,
                    bottom: 0.0,
                })
                .into(),
        )
    }

    /// Whether decorative animations still need frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.effects.is_animating(Instant::now())
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.modal.current_index()
    }

    #[must_use]
    pub fn counter_label(&self) -> Option<String> {
        self.modal.counter_label()
    }

    #[must_use]
    pub fn document(&self) -> &QuiltDocument {
        &self.document
    }

    #[must_use]
    pub fn focused_block(&self) -> Option<usize> {
        self.focus.focused()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn swipe_offset(&self) -> f32 {
        self.swipe.offset()
    }
}
