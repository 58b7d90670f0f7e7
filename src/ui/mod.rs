// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - The quilt grid with its block modal and swipe dismissal
//!
//! # Shared Infrastructure
//!
//! - [`effects`] - Decorative animation state (entrance, hover, cursor trail)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod effects;
pub mod gallery;
pub mod styles;
pub mod theming;
