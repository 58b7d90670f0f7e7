// SPDX-License-Identifier: MPL-2.0
//! `iced_quilt` renders an interactive quilt gallery with the Iced GUI framework.
//!
//! A grid of decorative blocks opens into a modal with title and description
//! text, navigable via keyboard, buttons, or a swipe-down gesture on compact
//! layouts. The crate demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_quilt/0.2.0")]

pub mod app;
pub mod cells;
pub mod config;
pub mod error;
pub mod i18n;
pub mod quilt;
pub mod ui;
