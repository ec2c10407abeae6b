use super::super::Action;
use super::KeyboardHotkey;
use egui::Key;

pub const KEYBOARD: &[(Action, &[KeyboardHotkey])] = &[
    (
        Action::Undo,
        &[
            KeyboardHotkey {
                alt: false,
                ctrl: false,
                shift: false,
                key: Key::Z,
            },
            KeyboardHotkey {
                alt: false,
                ctrl: true,
                shift: false,
                key: Key::Z,
            },
        ],
    ),
    (
        Action::BrushSmaller,
        &[KeyboardHotkey {
            alt: false,
            ctrl: false,
            shift: false,
            key: Key::Minus,
        }],
    ),
    (
        Action::BrushLarger,
        &[KeyboardHotkey {
            alt: false,
            ctrl: false,
            shift: false,
            key: Key::Plus,
        }],
    ),
    (
        Action::Save,
        &[KeyboardHotkey {
            alt: false,
            ctrl: true,
            shift: false,
            key: Key::S,
        }],
    ),
    (
        Action::Load,
        &[KeyboardHotkey {
            alt: false,
            ctrl: true,
            shift: false,
            key: Key::O,
        }],
    ),
];
