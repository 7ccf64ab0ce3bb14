//! Primary screen: QWERTY letters, punctuation, and the control row.

use crate::domain::layout::{IconRef, KeyKind, KeyRow, KeySpec, Screen};

/// Rows of the primary (alphanumeric + punctuation) screen, top-to-bottom.
pub(crate) fn rows() -> Vec<KeyRow> {
    vec![
        KeyRow::new(literals(&["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"])),
        KeyRow::new(literals(&["a", "s", "d", "f", "g", "h", "j", "k", "l"])),
        KeyRow::new({
            let mut keys = vec![KeySpec::control(
                "capsLock",
                KeyKind::CapsLock,
                IconRef::CapsLock,
            )];
            keys.extend(literals(&["z", "x", "c", "v", "b", "n", "m"]));
            keys.push(KeySpec::control("delete", KeyKind::Delete, IconRef::Backspace));
            keys
        }),
        KeyRow::new(vec![
            KeySpec::control_labeled(
                "switchScreen",
                KeyKind::ScreenToggle(Screen::Secondary),
                "123",
            ),
            KeySpec::control("switchKeyboard", KeyKind::SwitchKeyboard, IconRef::Globe),
            // The two control glyphs emit verbatim regardless of caps state.
            KeySpec::literal_exempt("Tr"),
            KeySpec::literal_exempt("T+"),
            KeySpec::control("space", KeyKind::Space, IconRef::SpaceBar),
            KeySpec::literal(","),
            KeySpec::literal("."),
            KeySpec::control("enter", KeyKind::Enter, IconRef::Return),
        ]),
    ]
}

fn literals(texts: &[&str]) -> Vec<KeySpec> {
    texts.iter().map(|t| KeySpec::literal(t)).collect()
}
