//! Secondary screen: digits, symbols, and the control row.

use crate::domain::layout::{IconRef, KeyKind, KeyRow, KeySpec, Screen};

/// Rows of the secondary (digit / symbol) screen, top-to-bottom.
pub(crate) fn rows() -> Vec<KeyRow> {
    vec![
        KeyRow::new(literals(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"])),
        KeyRow::new(literals(&["-", "/", ":", ";", "(", ")", "$", "&", "@", "\""])),
        KeyRow::new({
            let mut keys = literals(&[".", ",", "?", "!", "'"]);
            keys.push(KeySpec::control("delete", KeyKind::Delete, IconRef::Backspace));
            keys
        }),
        KeyRow::new(vec![
            KeySpec::control_labeled(
                "switchScreen",
                KeyKind::ScreenToggle(Screen::Primary),
                "ABC",
            ),
            KeySpec::control("switchKeyboard", KeyKind::SwitchKeyboard, IconRef::Globe),
            KeySpec::control("space", KeyKind::Space, IconRef::SpaceBar),
            KeySpec::control("settings", KeyKind::Settings, IconRef::Settings),
            KeySpec::control("enter", KeyKind::Enter, IconRef::Return),
        ]),
    ]
}

fn literals(texts: &[&str]) -> Vec<KeySpec> {
    texts.iter().map(|t| KeySpec::literal(t)).collect()
}
