//! Translation from iced keyboard events to hotkeys, for "press the new
//! shortcut" style dialogs.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use super::{Hotkey, KeyCode, KeyPressed, ModifierKeys};

/// Map an iced key to its virtual-key code, if it has one.
pub fn key_code_from_iced(key: &Key) -> Option<KeyCode> {
    match key {
        Key::Named(named) => named_key_code(*named),
        Key::Character(c) => character_key_code(c.as_str()),
        Key::Unidentified => None,
    }
}

fn named_key_code(named: Named) -> Option<KeyCode> {
    let key = match named {
        Named::Backspace => KeyCode::Back,
        Named::Tab => KeyCode::Tab,
        Named::Clear => KeyCode::Clear,
        Named::Enter => KeyCode::Enter,
        Named::Pause => KeyCode::Pause,
        Named::CapsLock => KeyCode::CapsLock,
        Named::Escape => KeyCode::Escape,
        Named::Space => KeyCode::Space,
        Named::PageUp => KeyCode::PageUp,
        Named::PageDown => KeyCode::PageDown,
        Named::End => KeyCode::End,
        Named::Home => KeyCode::Home,
        Named::ArrowLeft => KeyCode::Left,
        Named::ArrowUp => KeyCode::Up,
        Named::ArrowRight => KeyCode::Right,
        Named::ArrowDown => KeyCode::Down,
        Named::Select => KeyCode::Select,
        Named::Print => KeyCode::Print,
        Named::Execute => KeyCode::Execute,
        Named::PrintScreen => KeyCode::PrintScreen,
        Named::Insert => KeyCode::Insert,
        Named::Delete => KeyCode::Delete,
        Named::Help => KeyCode::Help,
        Named::ContextMenu => KeyCode::Apps,
        Named::NumLock => KeyCode::NumLock,
        Named::ScrollLock => KeyCode::Scroll,
        Named::F1 => KeyCode::F1,
        Named::F2 => KeyCode::F2,
        Named::F3 => KeyCode::F3,
        Named::F4 => KeyCode::F4,
        Named::F5 => KeyCode::F5,
        Named::F6 => KeyCode::F6,
        Named::F7 => KeyCode::F7,
        Named::F8 => KeyCode::F8,
        Named::F9 => KeyCode::F9,
        Named::F10 => KeyCode::F10,
        Named::F11 => KeyCode::F11,
        Named::F12 => KeyCode::F12,
        Named::F13 => KeyCode::F13,
        Named::F14 => KeyCode::F14,
        Named::F15 => KeyCode::F15,
        Named::F16 => KeyCode::F16,
        Named::F17 => KeyCode::F17,
        Named::F18 => KeyCode::F18,
        Named::F19 => KeyCode::F19,
        Named::F20 => KeyCode::F20,
        Named::F21 => KeyCode::F21,
        Named::F22 => KeyCode::F22,
        Named::F23 => KeyCode::F23,
        Named::F24 => KeyCode::F24,
        Named::KanaMode | Named::HangulMode => KeyCode::KanaMode,
        Named::JunjaMode => KeyCode::JunjaMode,
        Named::FinalMode => KeyCode::FinalMode,
        Named::HanjaMode | Named::KanjiMode => KeyCode::HanjaMode,
        Named::Convert => KeyCode::ImeConvert,
        Named::NonConvert => KeyCode::ImeNonconvert,
        Named::Accept => KeyCode::ImeAccept,
        Named::ModeChange => KeyCode::ImeModeChange,
        Named::Process => KeyCode::ProcessKey,
        Named::Cancel => KeyCode::Cancel,
        Named::BrowserBack => KeyCode::BrowserBack,
        Named::BrowserForward => KeyCode::BrowserForward,
        Named::BrowserRefresh => KeyCode::BrowserRefresh,
        Named::BrowserStop => KeyCode::BrowserStop,
        Named::BrowserSearch => KeyCode::BrowserSearch,
        Named::BrowserFavorites => KeyCode::BrowserFavorites,
        Named::BrowserHome => KeyCode::BrowserHome,
        Named::AudioVolumeMute => KeyCode::VolumeMute,
        Named::AudioVolumeDown => KeyCode::VolumeDown,
        Named::AudioVolumeUp => KeyCode::VolumeUp,
        Named::MediaTrackNext => KeyCode::MediaNextTrack,
        Named::MediaTrackPrevious => KeyCode::MediaPreviousTrack,
        Named::MediaStop => KeyCode::MediaStop,
        Named::MediaPlayPause => KeyCode::MediaPlayPause,
        Named::LaunchMail => KeyCode::LaunchMail,
        Named::LaunchApplication1 => KeyCode::LaunchApplication1,
        Named::LaunchApplication2 => KeyCode::LaunchApplication2,
        Named::Attn => KeyCode::Attn,
        Named::CrSel => KeyCode::Crsel,
        Named::ExSel => KeyCode::Exsel,
        Named::EraseEof => KeyCode::EraseEof,
        Named::Play => KeyCode::Play,
        Named::ZoomToggle => KeyCode::Zoom,
        _ => return None,
    };
    Some(key)
}

/// Characters are matched against a US layout.
fn character_key_code(text: &str) -> Option<KeyCode> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c.to_ascii_uppercase() {
        c @ ('A'..='Z' | '0'..='9') => KeyCode::from_name(&key_name_for_char(c)),
        ';' | ':' => Some(KeyCode::OemSemicolon),
        '=' | '+' => Some(KeyCode::OemPlus),
        ',' | '<' => Some(KeyCode::OemComma),
        '-' | '_' => Some(KeyCode::OemMinus),
        '.' | '>' => Some(KeyCode::OemPeriod),
        '/' | '?' => Some(KeyCode::OemQuestion),
        '`' | '~' => Some(KeyCode::OemTilde),
        '[' | '{' => Some(KeyCode::OemOpenBrackets),
        '\\' | '|' => Some(KeyCode::OemPipe),
        ']' | '}' => Some(KeyCode::OemCloseBrackets),
        '\'' | '"' => Some(KeyCode::OemQuotes),
        _ => None,
    }
}

fn key_name_for_char(c: char) -> String {
    if c.is_ascii_digit() {
        format!("D{c}")
    } else {
        c.to_string()
    }
}

pub fn modifiers_from_iced(modifiers: Modifiers) -> ModifierKeys {
    let mut result = ModifierKeys::empty();
    if modifiers.control() {
        result |= ModifierKeys::CONTROL;
    }
    if modifiers.alt() {
        result |= ModifierKeys::ALT;
    }
    if modifiers.shift() {
        result |= ModifierKeys::SHIFT;
    }
    result
}

/// Check if a key should be ignored while recording a hotkey.
/// Modifier keys on their own arrive as key presses too.
pub fn is_uncapturable_key(key: &Key) -> bool {
    matches!(
        key,
        Key::Named(Named::Shift | Named::Control | Named::Alt | Named::Super | Named::Meta)
    )
}

impl KeyPressed {
    pub fn from_iced(key: &Key, modifiers: Modifiers) -> Option<Self> {
        let key = key_code_from_iced(key)?;
        Some(Self::new(modifiers_from_iced(modifiers), key))
    }
}

/// The hotkey a key press would record, or `None` if the key can't be bound.
pub fn capture_hotkey(key: &Key, modifiers: Modifiers) -> Option<Hotkey> {
    if is_uncapturable_key(key) {
        return None;
    }
    let pressed = KeyPressed::from_iced(key, modifiers)?;
    Some(Hotkey::from_modifiers(pressed.modifier, pressed.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(key_code_from_iced(&character("d")), Some(KeyCode::D));
        assert_eq!(key_code_from_iced(&character("Q")), Some(KeyCode::Q));
        assert_eq!(key_code_from_iced(&character("7")), Some(KeyCode::D7));
        assert_eq!(key_code_from_iced(&character("/")), Some(KeyCode::OemQuestion));
        assert_eq!(key_code_from_iced(&character("ä")), None);
        assert_eq!(key_code_from_iced(&character("ab")), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_code_from_iced(&Key::Named(Named::F5)), Some(KeyCode::F5));
        assert_eq!(
            key_code_from_iced(&Key::Named(Named::PrintScreen)),
            Some(KeyCode::PrintScreen)
        );
        assert_eq!(
            key_code_from_iced(&Key::Named(Named::AudioVolumeUp)),
            Some(KeyCode::VolumeUp)
        );
        assert_eq!(
            key_code_from_iced(&Key::Named(Named::MediaPlayPause)),
            Some(KeyCode::MediaPlayPause)
        );
        assert_eq!(
            key_code_from_iced(&Key::Named(Named::BrowserBack)),
            Some(KeyCode::BrowserBack)
        );
        assert_eq!(
            key_code_from_iced(&Key::Named(Named::HangulMode)),
            Some(KeyCode::KanaMode)
        );
        // no virtual key beyond F24
        assert_eq!(key_code_from_iced(&Key::Named(Named::F25)), None);
        assert_eq!(key_code_from_iced(&Key::Named(Named::Shift)), None);
        assert_eq!(key_code_from_iced(&Key::Unidentified), None);
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(modifiers_from_iced(Modifiers::empty()), ModifierKeys::empty());
        assert_eq!(
            modifiers_from_iced(Modifiers::CTRL | Modifiers::SHIFT),
            ModifierKeys::CONTROL | ModifierKeys::SHIFT
        );
        assert_eq!(modifiers_from_iced(Modifiers::LOGO), ModifierKeys::empty());
    }

    #[test]
    fn test_capture_hotkey() {
        let captured = capture_hotkey(&character("d"), Modifiers::SHIFT | Modifiers::ALT);
        assert_eq!(captured, Some(Hotkey::DEFAULT_FIX));

        assert_eq!(capture_hotkey(&Key::Named(Named::Control), Modifiers::CTRL), None);
        assert_eq!(capture_hotkey(&Key::Unidentified, Modifiers::CTRL), None);
    }

    #[test]
    fn test_pressed_event_matches_hotkey() {
        let pressed = KeyPressed::from_iced(&character("q"), Modifiers::CTRL).unwrap();
        assert!(Hotkey::DEFAULT_SHOW.same_as(&pressed));
        assert!(!Hotkey::DEFAULT_FIX.same_as(&pressed));
    }
}
