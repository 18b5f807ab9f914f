use super::{KeyCode, ModifierKeys};

/// A captured key press, as reported by whatever is listening to the keyboard.
pub trait KeyEvent {
    fn modifier(&self) -> ModifierKeys;
    fn key(&self) -> KeyCode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressed {
    pub modifier: ModifierKeys,
    pub key: KeyCode,
}

impl KeyPressed {
    pub fn new(modifier: ModifierKeys, key: KeyCode) -> Self {
        Self { modifier, key }
    }
}

impl KeyEvent for KeyPressed {
    fn modifier(&self) -> ModifierKeys {
        self.modifier
    }

    fn key(&self) -> KeyCode {
        self.key
    }
}
