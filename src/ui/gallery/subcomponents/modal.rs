// SPDX-License-Identifier: MPL-2.0
//! Modal sub-component: the open/close/step state machine for block details.

/// Modal sub-component state.
///
/// The modal is either closed (`current` is `None`) or open on a normalized
/// block index. A controller constructed over an empty block list is
/// permanently disabled: every message is a no-op.
#[derive(Debug, Clone, Default)]
pub struct State {
    block_count: usize,
    current: Option<usize>,
}

/// Messages for the modal sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open on a block index. Any integer is accepted; the index is
    /// normalized into `[0, block_count)` by true-modulo wraparound.
    OpenAt(i64),
    /// Step relative to the current index. Ignored while closed.
    Step(i64),
    /// Close the modal. Idempotent.
    Close,
}

/// Effects produced by modal transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The modal opened (or re-opened) on the given normalized index.
    /// The orchestrator refreshes title, description, preview, and counter,
    /// and suspends gallery scrolling.
    Opened { index: usize },
    /// The modal closed. The orchestrator restores gallery scrolling.
    Closed,
}

impl State {
    /// Creates a controller over `block_count` blocks.
    #[must_use]
    pub fn new(block_count: usize) -> Self {
        Self {
            block_count,
            current: None,
        }
    }

    /// Handle a modal message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.block_count == 0 {
            return Effect::None;
        }

        match msg {
            Message::OpenAt(index) => {
                let index = self.normalize(index);
                self.current = Some(index);
                Effect::Opened { index }
            }
            Message::Step(dir) => match self.current {
                Some(current) => self.handle(Message::OpenAt(current as i64 + dir)),
                None => Effect::None,
            },
            Message::Close => {
                if self.current.take().is_some() {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
        }
    }

    /// True-modulo normalization into `[0, block_count)`.
    fn normalize(&self, index: i64) -> usize {
        index.rem_euclid(self.block_count as i64) as usize
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The current index; only meaningful while open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The `position/total` counter label, e.g. `3/8`.
    #[must_use]
    pub fn counter_label(&self) -> Option<String> {
        self.current
            .map(|index| format!("{}/{}", index + 1, self.block_count))
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.block_count
    }
}
