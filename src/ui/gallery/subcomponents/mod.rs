// SPDX-License-Identifier: MPL-2.0
//! Gallery sub-components with isolated, unit-testable state.

pub mod focus;
pub mod modal;
pub mod swipe;
