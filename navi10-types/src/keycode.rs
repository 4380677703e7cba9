use strum::FromRepr;

/// Keyboard page keycodes used by the navi10 keymap.
///
/// Values follow the HID usage tables, so `as u8` gives the usage id.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// `c` and `C`
    C = 0x0006,
    /// `d` and `D`
    D = 0x0007,
    /// `e` and `E`
    E = 0x0008,
    /// `f` and `F`
    F = 0x0009,
    /// `l` and `L`
    L = 0x000F,
    /// `m` and `M`
    M = 0x0010,
    /// `r` and `R`
    R = 0x0015,
    /// `t` and `T`
    T = 0x0017,
    /// `v` and `V`
    V = 0x0019,
    /// `w` and `W`
    W = 0x001A,
    /// `x` and `X`
    X = 0x001B,
    /// `y` and `Y`
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// Delete backward
    Backspace = 0x002A,
    F8 = 0x0041,
    /// Right arrow
    Right = 0x004F,
    /// Left arrow
    Left = 0x0050,
    /// Down arrow
    Down = 0x0051,
    /// Up arrow
    Up = 0x0052,
    // Media keys, sent through the consumer page
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaPlayPause = 0x00AE,
    /// Left Control
    LCtrl = 0x00E0,
    /// Left Shift
    LShift = 0x00E1,
    /// Left Alt
    LAlt = 0x00E2,
    /// Left GUI
    LGui = 0x00E3,
    /// Right Control
    RCtrl = 0x00E4,
    /// Right Shift
    RShift = 0x00E5,
    /// Right Alt
    RAlt = 0x00E6,
    /// Right GUI
    RGui = 0x00E7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` if the keycode is an arrow key
    pub fn is_arrow(self) -> bool {
        HidKeyCode::Right <= self && self <= HidKeyCode::Up
    }

    /// Media keycodes live in the keyboard page for keymap compatibility but are reported as consumer keys
    pub fn process_as_consumer(&self) -> Option<ConsumerKey> {
        match self {
            HidKeyCode::AudioVolUp => Some(ConsumerKey::VolumeIncrement),
            HidKeyCode::AudioVolDown => Some(ConsumerKey::VolumeDecrement),
            HidKeyCode::MediaNextTrack => Some(ConsumerKey::NextTrack),
            HidKeyCode::MediaPrevTrack => Some(ConsumerKey::PrevTrack),
            HidKeyCode::MediaPlayPause => Some(ConsumerKey::PlayPause),
            _ => None,
        }
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[non_exhaustive]
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    // 15.7 Transport Controls
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    PlayPause = 0xCD,
    // 15.9.1 Audio Controls - Volume
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}

impl ConsumerKey {
    /// Convert ConsumerKey to the corresponding HidKeyCode
    pub fn to_hid_keycode(&self) -> Option<HidKeyCode> {
        match self {
            ConsumerKey::VolumeIncrement => Some(HidKeyCode::AudioVolUp),
            ConsumerKey::VolumeDecrement => Some(HidKeyCode::AudioVolDown),
            ConsumerKey::NextTrack => Some(HidKeyCode::MediaNextTrack),
            ConsumerKey::PrevTrack => Some(HidKeyCode::MediaPrevTrack),
            ConsumerKey::PlayPause => Some(HidKeyCode::MediaPlayPause),
            ConsumerKey::No => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Consumer(ConsumerKey),
}

impl KeyCode {
    /// Normalize media keycodes to the page they are reported on
    pub fn resolve_page(self) -> Self {
        match self {
            KeyCode::Hid(k) => k.process_as_consumer().map_or(self, KeyCode::Consumer),
            KeyCode::Consumer(_) => self,
        }
    }
}

impl From<HidKeyCode> for KeyCode {
    fn from(value: HidKeyCode) -> Self {
        KeyCode::Hid(value)
    }
}

impl From<ConsumerKey> for KeyCode {
    fn from(value: ConsumerKey) -> Self {
        KeyCode::Consumer(value)
    }
}
