use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub mod capture;
mod event;
mod key_code;
mod modifiers;

pub use event::{KeyEvent, KeyPressed};
pub use key_code::KeyCode;
pub use modifiers::ModifierKeys;

const FIELD_SEPARATOR: char = ',';
const DISPLAY_SEPARATOR: &str = " + ";
const HASH_MULTIPLIER: i32 = 397;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHotkeyError {
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("{field} flag must be an integer, got {value:?}")]
    InvalidFlag { field: &'static str, value: String },
    #[error("unknown key name {0:?}")]
    UnknownKey(String),
}

/// A key plus the Ctrl/Alt/Shift modifiers that must be held with it.
///
/// Stored in settings as `"<ctrl>,<shift>,<alt>,<key>"`, e.g. `"1,0,0,Q"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hotkey {
    key_code: KeyCode,
    control: bool,
    alt: bool,
    shift: bool,
}

impl Hotkey {
    /// Shift + Alt + D
    pub const DEFAULT_FIX: Hotkey = Hotkey::new(KeyCode::D, false, true, true);
    /// Ctrl + Q
    pub const DEFAULT_SHOW: Hotkey = Hotkey::new(KeyCode::Q, true, false, false);
    pub const EMPTY: Hotkey = Hotkey::new(KeyCode::None, false, false, false);

    pub const fn new(key_code: KeyCode, control: bool, alt: bool, shift: bool) -> Self {
        Self {
            key_code,
            control,
            alt,
            shift,
        }
    }

    pub fn from_modifiers(modifiers: ModifierKeys, key_code: KeyCode) -> Self {
        Self {
            key_code,
            control: modifiers.contains(ModifierKeys::CONTROL),
            alt: modifiers.contains(ModifierKeys::ALT),
            shift: modifiers.contains(ModifierKeys::SHIFT),
        }
    }

    pub const fn builder(key_code: KeyCode) -> HotkeyBuilder {
        HotkeyBuilder {
            hotkey: Hotkey::new(key_code, false, false, false),
        }
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    pub fn control(&self) -> bool {
        self.control
    }

    pub fn alt(&self) -> bool {
        self.alt
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    /// A hotkey needs at least one modifier and a key that is allowed to be bound.
    pub fn is_valid(&self) -> bool {
        (self.control || self.shift || self.alt) && !self.key_code.is_reserved()
    }

    pub fn modifier(&self) -> ModifierKeys {
        let mut modifiers = ModifierKeys::empty();
        if self.control {
            modifiers |= ModifierKeys::CONTROL;
        }
        if self.shift {
            modifiers |= ModifierKeys::SHIFT;
        }
        if self.alt {
            modifiers |= ModifierKeys::ALT;
        }
        modifiers
    }

    /// Serialize to the settings format, `"<ctrl>,<shift>,<alt>,<key>"`.
    pub fn to_setting(&self) -> String {
        format!(
            "{},{},{},{}",
            flag(self.control),
            flag(self.shift),
            flag(self.alt),
            self.key_code.name()
        )
    }

    /// Parse the settings format, falling back to [`Hotkey::EMPTY`] on any error.
    pub fn from_setting(text: &str) -> Self {
        match Self::try_parse(text) {
            Ok(hotkey) => hotkey,
            Err(e) => {
                debug!("Ignoring malformed hotkey {text:?}: {e}");
                Self::EMPTY
            }
        }
    }

    /// Strict version of [`Hotkey::from_setting`].
    ///
    /// Flags are integers where only `1` means "held". The key is matched by
    /// name, case-insensitively.
    pub fn try_parse(text: &str) -> Result<Self, ParseHotkeyError> {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        let [control, shift, alt, key] = fields.as_slice() else {
            return Err(ParseHotkeyError::FieldCount(fields.len()));
        };

        let control = parse_flag("control", control)?;
        let shift = parse_flag("shift", shift)?;
        let alt = parse_flag("alt", alt)?;
        let key_code = KeyCode::from_name(key)
            .ok_or_else(|| ParseHotkeyError::UnknownKey(key.trim().to_string()))?;

        Ok(Self::new(key_code, control, alt, shift))
    }

    /// Check whether a captured key press is exactly this hotkey.
    pub fn same_as<E: KeyEvent + ?Sized>(&self, event: &E) -> bool {
        event.modifier() == self.modifier() && event.key() == self.key_code
    }

    pub fn hash_code(&self) -> i32 {
        let mut hash = i32::from(self.key_code.value());
        hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ i32::from(self.control);
        hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ i32::from(self.alt);
        hash.wrapping_mul(HASH_MULTIPLIER) ^ i32::from(self.shift)
    }
}

fn flag(set: bool) -> &'static str {
    if set { "1" } else { "0" }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ParseHotkeyError> {
    value
        .trim()
        .parse::<i32>()
        .map(|v| v == 1)
        .map_err(|_| ParseHotkeyError::InvalidFlag {
            field,
            value: value.trim().to_string(),
        })
}

impl Hash for Hotkey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Human-readable label such as `"Ctrl + Alt + D"`; empty for an unset hotkey.
impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(4);
        if self.control {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.key_code != KeyCode::None {
            parts.push(self.key_code.name());
        }
        f.write_str(&parts.join(DISPLAY_SEPARATOR))
    }
}

impl From<&str> for Hotkey {
    fn from(text: &str) -> Self {
        Self::from_setting(text)
    }
}

impl FromStr for Hotkey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_setting(s))
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_setting())
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_setting(&text))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HotkeyBuilder {
    hotkey: Hotkey,
}

impl HotkeyBuilder {
    pub const fn control(mut self, held: bool) -> Self {
        self.hotkey.control = held;
        self
    }

    pub const fn alt(mut self, held: bool) -> Self {
        self.hotkey.alt = held;
        self
    }

    pub const fn shift(mut self, held: bool) -> Self {
        self.hotkey.shift = held;
        self
    }

    pub const fn build(self) -> Hotkey {
        self.hotkey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn std_hash(hotkey: &Hotkey) -> u64 {
        let mut hasher = DefaultHasher::new();
        hotkey.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse_field_order() {
        let parsed = Hotkey::from_setting("0,1,1,D");
        let built = Hotkey::builder(KeyCode::D).shift(true).alt(true).build();
        assert_eq!(parsed, built);
        assert!(!parsed.control());
        assert!(parsed.shift());
        assert!(parsed.alt());
    }

    #[test]
    fn test_parse_key_is_case_insensitive() {
        assert_eq!(Hotkey::from_setting("1,0,0,q"), Hotkey::DEFAULT_SHOW);
    }

    #[test]
    fn test_flags_other_than_one_are_clear() {
        let hotkey = Hotkey::from_setting("2,-1, 1 ,F5");
        assert_eq!(hotkey, Hotkey::new(KeyCode::F5, false, true, false));
    }

    #[test]
    fn test_malformed_text_degrades_to_empty() {
        for text in ["", "1,0,0", "1,0,0,D,E", "x,0,0,D", "1,0,0,NotAKey", "1,,0,D"] {
            let hotkey = Hotkey::from_setting(text);
            assert_eq!(hotkey, Hotkey::EMPTY, "{text:?}");
            assert!(!hotkey.is_valid());
        }
    }

    #[test]
    fn test_try_parse_reports_reason() {
        assert_eq!(Hotkey::try_parse(""), Err(ParseHotkeyError::FieldCount(1)));
        assert_eq!(
            Hotkey::try_parse("1,yes,0,D"),
            Err(ParseHotkeyError::InvalidFlag {
                field: "shift",
                value: "yes".to_string()
            })
        );
        assert_eq!(
            Hotkey::try_parse("1,0,0,Foo"),
            Err(ParseHotkeyError::UnknownKey("Foo".to_string()))
        );
    }

    #[test]
    fn test_error_values_are_trimmed() {
        assert_eq!(
            Hotkey::try_parse(" yes ,0,0,D"),
            Err(ParseHotkeyError::InvalidFlag {
                field: "control",
                value: "yes".to_string()
            })
        );
        assert_eq!(
            Hotkey::try_parse("1,0,0, Foo "),
            Err(ParseHotkeyError::UnknownKey("Foo".to_string()))
        );
    }

    #[test]
    fn test_new_key_names_load_from_settings() {
        assert_eq!(
            Hotkey::from_setting("1,0,0,VolumeUp"),
            Hotkey::new(KeyCode::VolumeUp, true, false, false)
        );
        assert_eq!(
            Hotkey::from_setting("0,1,0,mediaplaypause"),
            Hotkey::new(KeyCode::MediaPlayPause, false, false, true)
        );
        assert!(Hotkey::from_setting("0,0,1,BrowserBack").is_valid());
    }

    #[test]
    fn test_is_valid() {
        assert!(Hotkey::DEFAULT_FIX.is_valid());
        assert!(Hotkey::DEFAULT_SHOW.is_valid());
        assert!(!Hotkey::EMPTY.is_valid());
        assert!(!Hotkey::new(KeyCode::D, false, false, false).is_valid());

        for key in [
            KeyCode::None,
            KeyCode::Back,
            KeyCode::Delete,
            KeyCode::Escape,
            KeyCode::PrintScreen,
        ] {
            assert!(!Hotkey::new(key, true, true, true).is_valid(), "{key:?}");
        }
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(Hotkey::EMPTY.modifier(), ModifierKeys::empty());
        assert_eq!(
            Hotkey::DEFAULT_FIX.modifier(),
            ModifierKeys::SHIFT | ModifierKeys::ALT
        );
        assert_eq!(Hotkey::DEFAULT_SHOW.modifier(), ModifierKeys::CONTROL);
    }

    #[test]
    fn test_from_modifiers() {
        let hotkey = Hotkey::from_modifiers(ModifierKeys::CONTROL | ModifierKeys::ALT, KeyCode::D);
        assert_eq!(hotkey, Hotkey::new(KeyCode::D, true, true, false));
        assert_eq!(hotkey.modifier(), ModifierKeys::CONTROL | ModifierKeys::ALT);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Hotkey::new(KeyCode::D, true, true, false).to_string(),
            "Ctrl + Alt + D"
        );
        assert_eq!(
            Hotkey::new(KeyCode::F5, true, true, true).to_string(),
            "Ctrl + Shift + Alt + F5"
        );
        assert_eq!(Hotkey::new(KeyCode::None, false, true, false).to_string(), "Alt");
        assert_eq!(Hotkey::new(KeyCode::Q, false, false, false).to_string(), "Q");
        assert_eq!(Hotkey::EMPTY.to_string(), "");
    }

    #[test]
    fn test_to_setting() {
        assert_eq!(Hotkey::DEFAULT_FIX.to_setting(), "0,1,1,D");
        assert_eq!(Hotkey::DEFAULT_SHOW.to_setting(), "1,0,0,Q");
        assert_eq!(Hotkey::EMPTY.to_setting(), "0,0,0,None");
    }

    #[test]
    fn test_setting_round_trip_for_valid_hotkeys() {
        for &key in KeyCode::ALL {
            let hotkey = Hotkey::new(key, true, false, true);
            if hotkey.is_valid() {
                assert_eq!(Hotkey::from_setting(&hotkey.to_setting()), hotkey);
            }
        }
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Hotkey::new(KeyCode::D, true, false, true);
        let b = Hotkey::builder(KeyCode::D).control(true).shift(true).build();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(std_hash(&a), std_hash(&b));

        let variants = [
            Hotkey::new(KeyCode::E, true, false, true),
            Hotkey::new(KeyCode::D, false, false, true),
            Hotkey::new(KeyCode::D, true, true, true),
            Hotkey::new(KeyCode::D, true, false, false),
        ];
        for other in variants {
            assert_ne!(a, other);
            assert_ne!(a.hash_code(), other.hash_code());
        }
    }

    #[test]
    fn test_hash_code_mixing() {
        let hotkey = Hotkey::new(KeyCode::D, true, false, true);
        let expected = ((((68_i64 * 397) ^ 1) * 397 ^ 0) * 397 ^ 1) as i32;
        assert_eq!(hotkey.hash_code(), expected);
    }

    #[test]
    fn test_same_as() {
        let hotkey = Hotkey::DEFAULT_FIX;
        let mods = ModifierKeys::SHIFT | ModifierKeys::ALT;

        assert!(hotkey.same_as(&KeyPressed::new(mods, KeyCode::D)));
        assert!(!hotkey.same_as(&KeyPressed::new(mods, KeyCode::E)));
        assert!(!hotkey.same_as(&KeyPressed::new(ModifierKeys::SHIFT, KeyCode::D)));
        assert!(!hotkey.same_as(&KeyPressed::new(mods | ModifierKeys::CONTROL, KeyCode::D)));
        assert!(!hotkey.same_as(&KeyPressed::new(ModifierKeys::empty(), KeyCode::E)));
    }

    #[test]
    fn test_str_conversions() {
        let parsed: Hotkey = "1,0,0,Q".parse().unwrap();
        assert_eq!(parsed, Hotkey::DEFAULT_SHOW);
        assert_eq!(Hotkey::from("garbage"), Hotkey::EMPTY);
    }

    #[test]
    fn test_serde_uses_setting_string() {
        let json = serde_json::to_string(&Hotkey::DEFAULT_FIX).unwrap();
        assert_eq!(json, "\"0,1,1,D\"");

        let hotkey: Hotkey = serde_json::from_str("\"1,0,0,q\"").unwrap();
        assert_eq!(hotkey, Hotkey::DEFAULT_SHOW);

        let broken: Hotkey = serde_json::from_str("\"not a hotkey\"").unwrap();
        assert_eq!(broken, Hotkey::EMPTY);
    }
}
