//! Key layout domain entities.
//!
//! A [`LayoutTable`] describes which keys exist, on which screen, in which
//! row and position. It is immutable after construction and shared read-only
//! between the dispatcher and the host renderer; all mutation of what the
//! user *sees* happens by switching [`Screen`] or caps state, never by
//! editing the table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One full keyboard layout: a named set of rows.
///
/// Analogous to a "shift layer" on a physical keyboard. The enum is closed;
/// supporting a third screen means adding a variant here and registering its
/// rows with the [`LayoutTableBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Alphanumeric + punctuation screen. The initial screen of a session.
    Primary,
    /// Digit / symbol screen.
    Secondary,
}

/// Symbolic icon references resolved by the renderer's asset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconRef {
    Backspace,
    CapsLock,
    /// The "next keyboard" globe.
    Globe,
    Return,
    SpaceBar,
    Settings,
    /// Screen-toggle indicator ("123" / "ABC" style).
    LayerSwitch,
}

/// What the renderer draws on a key cap.
///
/// Renderer-only data; the dispatcher never reads it. Literal keys usually
/// carry [`Glyph::Text`], control keys an [`Glyph::Icon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    /// Literal text drawn on the cap (case applied at render time).
    Text(String),
    /// Icon looked up in the host's asset set.
    Icon(IconRef),
}

/// Behavior class of a key, resolved once at table construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyKind {
    /// Emits the contained text, cased according to the caps state.
    ///
    /// The stored text is the lowercase form; case is derived at dispatch
    /// time, never stored. Multi-character literals are allowed.
    Literal(String),
    /// Deletes one unit backward in the host document.
    Delete,
    /// Toggles the caps state.
    CapsLock,
    /// Switches the active screen to the given target.
    ScreenToggle(Screen),
    /// Emits a single space.
    Space,
    /// Emits a newline.
    Enter,
    /// Asks the host to present its keyboard switcher.
    SwitchKeyboard,
    /// Asks the host to open its settings surface.
    Settings,
    /// A key that renders but does nothing when pressed.
    NoOp,
}

/// One key's definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    /// Unique semantic identifier within its screen: the literal character
    /// for literal keys, a symbolic name (`delete`, `capsLock`, ...) for
    /// control keys.
    pub id: String,
    /// Behavior class.
    pub kind: KeyKind,
    /// What the renderer draws on the cap.
    pub glyph: Glyph,
    /// When `true`, the key's emitted text ignores the caps state.
    ///
    /// This is a named per-key flag, never inferred from the text content.
    pub shift_exempt: bool,
}

impl KeySpec {
    /// A literal key whose id and glyph are the emission text itself.
    pub fn literal(text: &str) -> Self {
        Self {
            id: text.to_string(),
            kind: KeyKind::Literal(text.to_string()),
            glyph: Glyph::Text(text.to_string()),
            shift_exempt: false,
        }
    }

    /// A literal key emitted verbatim regardless of caps state.
    pub fn literal_exempt(text: &str) -> Self {
        Self {
            shift_exempt: true,
            ..Self::literal(text)
        }
    }

    /// A control key with a symbolic id and an icon glyph.
    pub fn control(id: &str, kind: KeyKind, icon: IconRef) -> Self {
        Self {
            id: id.to_string(),
            kind,
            glyph: Glyph::Icon(icon),
            shift_exempt: false,
        }
    }

    /// A control key whose cap shows text rather than an icon.
    pub fn control_labeled(id: &str, kind: KeyKind, label: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            glyph: Glyph::Text(label.to_string()),
            shift_exempt: false,
        }
    }
}

/// An ordered row of keys. Row order within a screen is significant and is
/// rendered top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRow {
    pub keys: Vec<KeySpec>,
}

impl KeyRow {
    pub fn new(keys: Vec<KeySpec>) -> Self {
        Self { keys }
    }
}

/// Errors raised by layout table construction and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested screen was never registered with the builder.
    #[error("screen {0:?} is not registered in the layout table")]
    UnknownScreen(Screen),

    /// The key id is not present on the given screen.
    #[error("key `{id}` not found on screen {screen:?}")]
    UnknownKey { screen: Screen, id: String },

    /// Two keys on the same screen share an id.
    #[error("duplicate key id `{id}` on screen {screen:?}")]
    DuplicateKeyId { screen: Screen, id: String },

    /// The same screen was registered twice with the builder.
    #[error("screen {0:?} registered twice")]
    DuplicateScreen(Screen),
}

/// Rows plus the id index for one registered screen.
#[derive(Debug, Clone)]
struct ScreenLayout {
    rows: Vec<KeyRow>,
    /// key id -> (row, column), for O(1) dispatch lookup.
    index: HashMap<String, (usize, usize)>,
}

/// The immutable key layout: for each registered [`Screen`], an ordered
/// sequence of [`KeyRow`]s.
///
/// Built once at startup through [`LayoutTable::builder`]; the invariant
/// *all key ids unique within one screen* is enforced at build time.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    screens: HashMap<Screen, ScreenLayout>,
}

impl LayoutTable {
    pub fn builder() -> LayoutTableBuilder {
        LayoutTableBuilder::default()
    }

    /// Returns the rows of `screen`, top-to-bottom.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownScreen`] if the screen was never
    /// registered. With the built-in [`crate::layouts::standard`] table this
    /// is unreachable; custom tables may register fewer screens.
    pub fn rows(&self, screen: Screen) -> Result<&[KeyRow], LayoutError> {
        self.screens
            .get(&screen)
            .map(|s| s.rows.as_slice())
            .ok_or(LayoutError::UnknownScreen(screen))
    }

    /// Looks up a key by id within `screen`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownScreen`] for an unregistered screen and
    /// [`LayoutError::UnknownKey`] when the id is absent from that screen.
    pub fn key(&self, screen: Screen, id: &str) -> Result<&KeySpec, LayoutError> {
        let layout = self
            .screens
            .get(&screen)
            .ok_or(LayoutError::UnknownScreen(screen))?;
        let (row, col) = layout.index.get(id).ok_or_else(|| LayoutError::UnknownKey {
            screen,
            id: id.to_string(),
        })?;
        Ok(&layout.rows[*row].keys[*col])
    }

    /// Returns the registered screens (in no particular order).
    pub fn screens(&self) -> impl Iterator<Item = Screen> + '_ {
        self.screens.keys().copied()
    }

    /// Number of keys registered on `screen`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownScreen`] for an unregistered screen.
    pub fn key_count(&self, screen: Screen) -> Result<usize, LayoutError> {
        self.screens
            .get(&screen)
            .map(|s| s.index.len())
            .ok_or(LayoutError::UnknownScreen(screen))
    }
}

/// Builder validating the per-screen id-uniqueness invariant.
#[derive(Debug, Default)]
pub struct LayoutTableBuilder {
    screens: Vec<(Screen, Vec<KeyRow>)>,
}

impl LayoutTableBuilder {
    /// Registers the rows of one screen.
    #[must_use]
    pub fn screen(mut self, screen: Screen, rows: Vec<KeyRow>) -> Self {
        self.screens.push((screen, rows));
        self
    }

    /// Validates and builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateScreen`] if a screen was registered
    /// twice and [`LayoutError::DuplicateKeyId`] if two keys on one screen
    /// share an id.
    pub fn build(self) -> Result<LayoutTable, LayoutError> {
        let mut screens = HashMap::new();
        for (screen, rows) in self.screens {
            let mut index = HashMap::new();
            for (r, row) in rows.iter().enumerate() {
                for (c, key) in row.keys.iter().enumerate() {
                    if index.insert(key.id.clone(), (r, c)).is_some() {
                        return Err(LayoutError::DuplicateKeyId {
                            screen,
                            id: key.id.clone(),
                        });
                    }
                }
            }
            if screens.insert(screen, ScreenLayout { rows, index }).is_some() {
                return Err(LayoutError::DuplicateScreen(screen));
            }
        }
        Ok(LayoutTable { screens })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn one_row_table(keys: Vec<KeySpec>) -> Result<LayoutTable, LayoutError> {
        LayoutTable::builder()
            .screen(Screen::Primary, vec![KeyRow::new(keys)])
            .build()
    }

    // ── Builder validation ────────────────────────────────────────────────────

    #[test]
    fn test_builder_accepts_unique_ids_within_screen() {
        let table = one_row_table(vec![KeySpec::literal("a"), KeySpec::literal("b")]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_builder_rejects_duplicate_id_within_screen() {
        let result = one_row_table(vec![KeySpec::literal("a"), KeySpec::literal("a")]);
        assert_eq!(
            result.unwrap_err(),
            LayoutError::DuplicateKeyId {
                screen: Screen::Primary,
                id: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_builder_rejects_duplicate_id_across_rows_of_same_screen() {
        let result = LayoutTable::builder()
            .screen(
                Screen::Primary,
                vec![
                    KeyRow::new(vec![KeySpec::literal("a")]),
                    KeyRow::new(vec![KeySpec::literal("a")]),
                ],
            )
            .build();
        assert!(matches!(result, Err(LayoutError::DuplicateKeyId { .. })));
    }

    #[test]
    fn test_builder_allows_same_id_on_different_screens() {
        // `delete` exists on both screens of the standard layout.
        let result = LayoutTable::builder()
            .screen(Screen::Primary, vec![KeyRow::new(vec![KeySpec::literal("a")])])
            .screen(Screen::Secondary, vec![KeyRow::new(vec![KeySpec::literal("a")])])
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_rejects_screen_registered_twice() {
        let result = LayoutTable::builder()
            .screen(Screen::Primary, vec![])
            .screen(Screen::Primary, vec![])
            .build();
        assert_eq!(result.unwrap_err(), LayoutError::DuplicateScreen(Screen::Primary));
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    #[test]
    fn test_rows_returns_rows_in_registration_order() {
        let table = LayoutTable::builder()
            .screen(
                Screen::Primary,
                vec![
                    KeyRow::new(vec![KeySpec::literal("q")]),
                    KeyRow::new(vec![KeySpec::literal("a")]),
                ],
            )
            .build()
            .unwrap();

        let rows = table.rows(Screen::Primary).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keys[0].id, "q");
        assert_eq!(rows[1].keys[0].id, "a");
    }

    #[test]
    fn test_rows_fails_with_unknown_screen_when_not_registered() {
        let table = one_row_table(vec![KeySpec::literal("a")]).unwrap();
        assert_eq!(
            table.rows(Screen::Secondary).unwrap_err(),
            LayoutError::UnknownScreen(Screen::Secondary)
        );
    }

    #[test]
    fn test_key_finds_spec_by_id() {
        let table = one_row_table(vec![
            KeySpec::literal("a"),
            KeySpec::control("delete", KeyKind::Delete, IconRef::Backspace),
        ])
        .unwrap();

        let spec = table.key(Screen::Primary, "delete").unwrap();
        assert_eq!(spec.kind, KeyKind::Delete);
    }

    #[test]
    fn test_key_fails_with_unknown_key_for_absent_id() {
        let table = one_row_table(vec![KeySpec::literal("a")]).unwrap();
        assert_eq!(
            table.key(Screen::Primary, "zzz").unwrap_err(),
            LayoutError::UnknownKey {
                screen: Screen::Primary,
                id: "zzz".to_string(),
            }
        );
    }

    #[test]
    fn test_key_fails_with_unknown_screen_before_unknown_key() {
        let table = one_row_table(vec![KeySpec::literal("a")]).unwrap();
        assert_eq!(
            table.key(Screen::Secondary, "a").unwrap_err(),
            LayoutError::UnknownScreen(Screen::Secondary)
        );
    }

    #[test]
    fn test_key_count_counts_all_rows() {
        let table = LayoutTable::builder()
            .screen(
                Screen::Primary,
                vec![
                    KeyRow::new(vec![KeySpec::literal("a"), KeySpec::literal("b")]),
                    KeyRow::new(vec![KeySpec::literal("c")]),
                ],
            )
            .build()
            .unwrap();
        assert_eq!(table.key_count(Screen::Primary).unwrap(), 3);
    }

    // ── KeySpec constructors ──────────────────────────────────────────────────

    #[test]
    fn test_literal_key_uses_text_as_id_and_glyph() {
        let spec = KeySpec::literal("q");
        assert_eq!(spec.id, "q");
        assert_eq!(spec.kind, KeyKind::Literal("q".to_string()));
        assert_eq!(spec.glyph, Glyph::Text("q".to_string()));
        assert!(!spec.shift_exempt);
    }

    #[test]
    fn test_literal_exempt_sets_the_flag() {
        let spec = KeySpec::literal_exempt("Tr");
        assert!(spec.shift_exempt);
        assert_eq!(spec.kind, KeyKind::Literal("Tr".to_string()));
    }

    #[test]
    fn test_control_key_carries_icon_glyph() {
        let spec = KeySpec::control("capsLock", KeyKind::CapsLock, IconRef::CapsLock);
        assert_eq!(spec.glyph, Glyph::Icon(IconRef::CapsLock));
        assert_eq!(spec.kind, KeyKind::CapsLock);
    }
}
