// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, styles, theming, and the viewer screen.

pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod viewer;
