use std::fmt;

macro_rules! key_codes {
    ($($variant:ident = $value:literal => $name:literal $(| $alias:literal)*,)+) => {
        /// Virtual-key codes, numbered the way Windows numbers them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum KeyCode {
            $($variant = $value,)+
        }

        impl KeyCode {
            /// Every known key, in virtual-key order.
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$variant,)+];

            /// Canonical name, used both for display and in stored settings.
            pub fn name(self) -> &'static str {
                match self {
                    $(KeyCode::$variant => $name,)+
                }
            }

            /// Legacy names that refer to the same virtual key.
            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(KeyCode::$variant => &[$($alias),*],)+
                }
            }
        }
    };
}

key_codes! {
    None = 0 => "None",
    LButton = 1 => "LButton",
    RButton = 2 => "RButton",
    Cancel = 3 => "Cancel",
    MButton = 4 => "MButton",
    XButton1 = 5 => "XButton1",
    XButton2 = 6 => "XButton2",
    Back = 8 => "Back" | "Backspace",
    Tab = 9 => "Tab",
    LineFeed = 10 => "LineFeed",
    Clear = 12 => "Clear",
    Enter = 13 => "Enter" | "Return",
    ShiftKey = 16 => "ShiftKey",
    ControlKey = 17 => "ControlKey",
    Menu = 18 => "Menu",
    Pause = 19 => "Pause",
    CapsLock = 20 => "CapsLock" | "Capital",
    KanaMode = 21 => "KanaMode" | "HanguelMode" | "HangulMode",
    JunjaMode = 23 => "JunjaMode",
    FinalMode = 24 => "FinalMode",
    HanjaMode = 25 => "HanjaMode" | "KanjiMode",
    Escape = 27 => "Escape",
    ImeConvert = 28 => "IMEConvert",
    ImeNonconvert = 29 => "IMENonconvert",
    ImeAccept = 30 => "IMEAccept" | "IMEAceept",
    ImeModeChange = 31 => "IMEModeChange",
    Space = 32 => "Space",
    PageUp = 33 => "PageUp" | "Prior",
    PageDown = 34 => "PageDown" | "Next",
    End = 35 => "End",
    Home = 36 => "Home",
    Left = 37 => "Left",
    Up = 38 => "Up",
    Right = 39 => "Right",
    Down = 40 => "Down",
    Select = 41 => "Select",
    Print = 42 => "Print",
    Execute = 43 => "Execute",
    PrintScreen = 44 => "PrintScreen" | "Snapshot",
    Insert = 45 => "Insert",
    Delete = 46 => "Delete",
    Help = 47 => "Help",
    D0 = 48 => "D0",
    D1 = 49 => "D1",
    D2 = 50 => "D2",
    D3 = 51 => "D3",
    D4 = 52 => "D4",
    D5 = 53 => "D5",
    D6 = 54 => "D6",
    D7 = 55 => "D7",
    D8 = 56 => "D8",
    D9 = 57 => "D9",
    A = 65 => "A",
    B = 66 => "B",
    C = 67 => "C",
    D = 68 => "D",
    E = 69 => "E",
    F = 70 => "F",
    G = 71 => "G",
    H = 72 => "H",
    I = 73 => "I",
    J = 74 => "J",
    K = 75 => "K",
    L = 76 => "L",
    M = 77 => "M",
    N = 78 => "N",
    O = 79 => "O",
    P = 80 => "P",
    Q = 81 => "Q",
    R = 82 => "R",
    S = 83 => "S",
    T = 84 => "T",
    U = 85 => "U",
    V = 86 => "V",
    W = 87 => "W",
    X = 88 => "X",
    Y = 89 => "Y",
    Z = 90 => "Z",
    LWin = 91 => "LWin",
    RWin = 92 => "RWin",
    Apps = 93 => "Apps",
    Sleep = 95 => "Sleep",
    NumPad0 = 96 => "NumPad0",
    NumPad1 = 97 => "NumPad1",
    NumPad2 = 98 => "NumPad2",
    NumPad3 = 99 => "NumPad3",
    NumPad4 = 100 => "NumPad4",
    NumPad5 = 101 => "NumPad5",
    NumPad6 = 102 => "NumPad6",
    NumPad7 = 103 => "NumPad7",
    NumPad8 = 104 => "NumPad8",
    NumPad9 = 105 => "NumPad9",
    Multiply = 106 => "Multiply",
    Add = 107 => "Add",
    Separator = 108 => "Separator",
    Subtract = 109 => "Subtract",
    Decimal = 110 => "Decimal",
    Divide = 111 => "Divide",
    F1 = 112 => "F1",
    F2 = 113 => "F2",
    F3 = 114 => "F3",
    F4 = 115 => "F4",
    F5 = 116 => "F5",
    F6 = 117 => "F6",
    F7 = 118 => "F7",
    F8 = 119 => "F8",
    F9 = 120 => "F9",
    F10 = 121 => "F10",
    F11 = 122 => "F11",
    F12 = 123 => "F12",
    F13 = 124 => "F13",
    F14 = 125 => "F14",
    F15 = 126 => "F15",
    F16 = 127 => "F16",
    F17 = 128 => "F17",
    F18 = 129 => "F18",
    F19 = 130 => "F19",
    F20 = 131 => "F20",
    F21 = 132 => "F21",
    F22 = 133 => "F22",
    F23 = 134 => "F23",
    F24 = 135 => "F24",
    NumLock = 144 => "NumLock",
    Scroll = 145 => "Scroll",
    LShiftKey = 160 => "LShiftKey",
    RShiftKey = 161 => "RShiftKey",
    LControlKey = 162 => "LControlKey",
    RControlKey = 163 => "RControlKey",
    LMenu = 164 => "LMenu",
    RMenu = 165 => "RMenu",
    BrowserBack = 166 => "BrowserBack",
    BrowserForward = 167 => "BrowserForward",
    BrowserRefresh = 168 => "BrowserRefresh",
    BrowserStop = 169 => "BrowserStop",
    BrowserSearch = 170 => "BrowserSearch",
    BrowserFavorites = 171 => "BrowserFavorites",
    BrowserHome = 172 => "BrowserHome",
    VolumeMute = 173 => "VolumeMute",
    VolumeDown = 174 => "VolumeDown",
    VolumeUp = 175 => "VolumeUp",
    MediaNextTrack = 176 => "MediaNextTrack",
    MediaPreviousTrack = 177 => "MediaPreviousTrack",
    MediaStop = 178 => "MediaStop",
    MediaPlayPause = 179 => "MediaPlayPause",
    LaunchMail = 180 => "LaunchMail",
    SelectMedia = 181 => "SelectMedia",
    LaunchApplication1 = 182 => "LaunchApplication1",
    LaunchApplication2 = 183 => "LaunchApplication2",
    OemSemicolon = 186 => "OemSemicolon" | "Oem1",
    OemPlus = 187 => "Oemplus",
    OemComma = 188 => "Oemcomma",
    OemMinus = 189 => "OemMinus",
    OemPeriod = 190 => "OemPeriod",
    OemQuestion = 191 => "OemQuestion" | "Oem2",
    OemTilde = 192 => "Oemtilde" | "Oem3",
    OemOpenBrackets = 219 => "OemOpenBrackets" | "Oem4",
    OemPipe = 220 => "OemPipe" | "Oem5",
    OemCloseBrackets = 221 => "OemCloseBrackets" | "Oem6",
    OemQuotes = 222 => "OemQuotes" | "Oem7",
    Oem8 = 223 => "Oem8",
    OemBackslash = 226 => "OemBackslash" | "Oem102",
    ProcessKey = 229 => "ProcessKey",
    Packet = 231 => "Packet",
    Attn = 246 => "Attn",
    Crsel = 247 => "Crsel",
    Exsel = 248 => "Exsel",
    EraseEof = 249 => "EraseEof",
    Play = 250 => "Play",
    Zoom = 251 => "Zoom",
    NoName = 252 => "NoName",
    Pa1 = 253 => "Pa1",
    OemClear = 254 => "OemClear",
}

impl KeyCode {
    pub fn value(self) -> u16 {
        self as u16
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.value() == value)
    }

    /// Look a key up by name, ignoring case and surrounding whitespace.
    ///
    /// Accepts canonical names, legacy aliases and decimal virtual-key values
    /// of known keys.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Ok(value) = name.parse::<u16>() {
            return Self::from_value(value);
        }

        Self::ALL.iter().copied().find(|key| {
            key.name().eq_ignore_ascii_case(name)
                || key
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// Keys that can never be bound to a hotkey.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            KeyCode::None
                | KeyCode::Back
                | KeyCode::Delete
                | KeyCode::Escape
                | KeyCode::PrintScreen
        )
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        KeyCode::None
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
