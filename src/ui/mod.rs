// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and emits its own message type, which the
//! application maps into its top-level message.
//!
//! - [`menubar`] - File, View and Image menus plus keyboard accelerators
//! - [`viewport`] - Scrollable image area, empty state and status line
//! - [`thumbnail_strip`] - Clickable sibling thumbnails
//! - [`banner`] - Dismissible error and warning banner
//! - [`styles`] - Shared widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod banner;
pub mod design_tokens;
pub mod menubar;
pub mod styles;
pub mod theming;
pub mod thumbnail_strip;
pub mod viewport;
