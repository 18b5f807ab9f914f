use bitflags::bitflags;

bitflags! {
    /// Modifier keys, laid out like the Win32 `MOD_*` hotkey flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierKeys: u32 {
        const ALT = 0x0001;
        const CONTROL = 0x0002;
        const SHIFT = 0x0004;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_is_order_independent() {
        let a = ModifierKeys::CONTROL | ModifierKeys::SHIFT | ModifierKeys::ALT;
        let b = ModifierKeys::ALT | ModifierKeys::CONTROL | ModifierKeys::SHIFT;
        assert_eq!(a, b);
        assert_eq!(a.bits(), 0x7);
    }

    #[test]
    fn test_unknown_bits_are_dropped() {
        // 0x8 is MOD_WIN, which hotkeys here never use
        let mods = ModifierKeys::from_bits_truncate(0x8 | 0x2);
        assert_eq!(mods, ModifierKeys::CONTROL);
    }
}
