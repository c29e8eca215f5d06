// SPDX-License-Identifier: MPL-2.0
//! Native event routing: keyboard shortcuts and file drops.

use super::Message;
use crate::ui::menubar::Command;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Listens for window-level events the widgets do not handle themselves.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let Event::Window(window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        // Keys already consumed by a focused widget are left alone.
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                route_key(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Maps a key press to an application message.
pub fn route_key(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) if modifiers.is_empty() => Some(Message::NextThumbnail),
        Key::Named(Named::ArrowLeft) if modifiers.is_empty() => Some(Message::PreviousThumbnail),
        Key::Named(Named::Escape) => Some(Message::CloseMenu),
        _ => Command::from_shortcut(key, modifiers).map(Message::Shortcut),
    }
}
