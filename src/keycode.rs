//! USB HID keyboard usage IDs.
//!
//! Values follow the USB HID usage tables (keyboard/keypad page 0x07),
//! Hut1_12v2.pdf p.53ff, and must match them exactly for host
//! compatibility. Keycodes name key *positions* on a US keyboard: on an
//! AZERTY keyboard the `Q` keycode produces an 'a', which is why layout
//! tables exist at all.

/// A single keycode from the USB HID keyboard/keypad usage page.
///
/// Opaque 8-bit identifier. The named constants below cover every key on
/// a regular PC or Mac keyboard; modifiers (0xE0-0xE7) are represented in
/// a report's modifier bitfield, never in its key slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keycode(u8);

impl Keycode {
    pub const A: Keycode = Keycode(0x04);
    pub const B: Keycode = Keycode(0x05);
    pub const C: Keycode = Keycode(0x06);
    pub const D: Keycode = Keycode(0x07);
    pub const E: Keycode = Keycode(0x08);
    pub const F: Keycode = Keycode(0x09);
    pub const G: Keycode = Keycode(0x0A);
    pub const H: Keycode = Keycode(0x0B);
    pub const I: Keycode = Keycode(0x0C);
    pub const J: Keycode = Keycode(0x0D);
    pub const K: Keycode = Keycode(0x0E);
    pub const L: Keycode = Keycode(0x0F);
    pub const M: Keycode = Keycode(0x10);
    pub const N: Keycode = Keycode(0x11);
    pub const O: Keycode = Keycode(0x12);
    pub const P: Keycode = Keycode(0x13);
    pub const Q: Keycode = Keycode(0x14);
    pub const R: Keycode = Keycode(0x15);
    pub const S: Keycode = Keycode(0x16);
    pub const T: Keycode = Keycode(0x17);
    pub const U: Keycode = Keycode(0x18);
    pub const V: Keycode = Keycode(0x19);
    pub const W: Keycode = Keycode(0x1A);
    pub const X: Keycode = Keycode(0x1B);
    pub const Y: Keycode = Keycode(0x1C);
    pub const Z: Keycode = Keycode(0x1D);

    /// `1` and `!`
    pub const ONE: Keycode = Keycode(0x1E);
    /// `2` and `@`
    pub const TWO: Keycode = Keycode(0x1F);
    /// `3` and `#`
    pub const THREE: Keycode = Keycode(0x20);
    /// `4` and `$`
    pub const FOUR: Keycode = Keycode(0x21);
    /// `5` and `%`
    pub const FIVE: Keycode = Keycode(0x22);
    /// `6` and `^`
    pub const SIX: Keycode = Keycode(0x23);
    /// `7` and `&`
    pub const SEVEN: Keycode = Keycode(0x24);
    /// `8` and `*`
    pub const EIGHT: Keycode = Keycode(0x25);
    /// `9` and `(`
    pub const NINE: Keycode = Keycode(0x26);
    /// `0` and `)`
    pub const ZERO: Keycode = Keycode(0x27);

    /// Enter (Return)
    pub const ENTER: Keycode = Keycode(0x28);
    /// Alias for `ENTER`.
    pub const RETURN: Keycode = Keycode(0x28);
    pub const ESCAPE: Keycode = Keycode(0x29);
    /// Delete backward (Backspace)
    pub const BACKSPACE: Keycode = Keycode(0x2A);
    /// Tab and Backtab
    pub const TAB: Keycode = Keycode(0x2B);
    pub const SPACEBAR: Keycode = Keycode(0x2C);
    /// `-` and `_`
    pub const MINUS: Keycode = Keycode(0x2D);
    /// `=` and `+`
    pub const EQUALS: Keycode = Keycode(0x2E);
    /// `[` and `{`
    pub const LEFT_BRACKET: Keycode = Keycode(0x2F);
    /// `]` and `}`
    pub const RIGHT_BRACKET: Keycode = Keycode(0x30);
    /// `\` and `|`
    pub const BACKSLASH: Keycode = Keycode(0x31);
    /// `#` and `~` (non-US keyboard)
    pub const POUND: Keycode = Keycode(0x32);
    /// `;` and `:`
    pub const SEMICOLON: Keycode = Keycode(0x33);
    /// `'` and `"`
    pub const QUOTE: Keycode = Keycode(0x34);
    /// `` ` `` and `~`
    pub const GRAVE_ACCENT: Keycode = Keycode(0x35);
    /// `,` and `<`
    pub const COMMA: Keycode = Keycode(0x36);
    /// `.` and `>`
    pub const PERIOD: Keycode = Keycode(0x37);
    /// `/` and `?`
    pub const FORWARD_SLASH: Keycode = Keycode(0x38);

    pub const CAPS_LOCK: Keycode = Keycode(0x39);

    pub const F1: Keycode = Keycode(0x3A);
    pub const F2: Keycode = Keycode(0x3B);
    pub const F3: Keycode = Keycode(0x3C);
    pub const F4: Keycode = Keycode(0x3D);
    pub const F5: Keycode = Keycode(0x3E);
    pub const F6: Keycode = Keycode(0x3F);
    pub const F7: Keycode = Keycode(0x40);
    pub const F8: Keycode = Keycode(0x41);
    pub const F9: Keycode = Keycode(0x42);
    pub const F10: Keycode = Keycode(0x43);
    pub const F11: Keycode = Keycode(0x44);
    pub const F12: Keycode = Keycode(0x45);

    /// Print Screen (SysRq)
    pub const PRINT_SCREEN: Keycode = Keycode(0x46);
    pub const SCROLL_LOCK: Keycode = Keycode(0x47);
    /// Pause (Break)
    pub const PAUSE: Keycode = Keycode(0x48);

    pub const INSERT: Keycode = Keycode(0x49);
    pub const HOME: Keycode = Keycode(0x4A);
    pub const PAGE_UP: Keycode = Keycode(0x4B);
    /// Delete forward.
    pub const DELETE: Keycode = Keycode(0x4C);
    pub const END: Keycode = Keycode(0x4D);
    pub const PAGE_DOWN: Keycode = Keycode(0x4E);

    pub const RIGHT_ARROW: Keycode = Keycode(0x4F);
    pub const LEFT_ARROW: Keycode = Keycode(0x50);
    pub const DOWN_ARROW: Keycode = Keycode(0x51);
    pub const UP_ARROW: Keycode = Keycode(0x52);

    /// Num Lock (Clear on Mac)
    pub const KEYPAD_NUMLOCK: Keycode = Keycode(0x53);
    pub const KEYPAD_FORWARD_SLASH: Keycode = Keycode(0x54);
    pub const KEYPAD_ASTERISK: Keycode = Keycode(0x55);
    pub const KEYPAD_MINUS: Keycode = Keycode(0x56);
    pub const KEYPAD_PLUS: Keycode = Keycode(0x57);
    pub const KEYPAD_ENTER: Keycode = Keycode(0x58);
    /// Keypad `1` and End
    pub const KEYPAD_ONE: Keycode = Keycode(0x59);
    /// Keypad `2` and Down Arrow
    pub const KEYPAD_TWO: Keycode = Keycode(0x5A);
    /// Keypad `3` and PgDn
    pub const KEYPAD_THREE: Keycode = Keycode(0x5B);
    /// Keypad `4` and Left Arrow
    pub const KEYPAD_FOUR: Keycode = Keycode(0x5C);
    pub const KEYPAD_FIVE: Keycode = Keycode(0x5D);
    /// Keypad `6` and Right Arrow
    pub const KEYPAD_SIX: Keycode = Keycode(0x5E);
    /// Keypad `7` and Home
    pub const KEYPAD_SEVEN: Keycode = Keycode(0x5F);
    /// Keypad `8` and Up Arrow
    pub const KEYPAD_EIGHT: Keycode = Keycode(0x60);
    /// Keypad `9` and PgUp
    pub const KEYPAD_NINE: Keycode = Keycode(0x61);
    /// Keypad `0` and Ins
    pub const KEYPAD_ZERO: Keycode = Keycode(0x62);
    /// Keypad `.` and Del
    pub const KEYPAD_PERIOD: Keycode = Keycode(0x63);
    /// Keypad `\` and `|` (non-US)
    pub const KEYPAD_BACKSLASH: Keycode = Keycode(0x64);

    /// Application (104-key keyboard)
    pub const APPLICATION: Keycode = Keycode(0x65);
    /// Power (Mac)
    pub const POWER: Keycode = Keycode(0x66);
    /// Keypad `=` (Mac)
    pub const KEYPAD_EQUALS: Keycode = Keycode(0x67);
    pub const F13: Keycode = Keycode(0x68);
    pub const F14: Keycode = Keycode(0x69);
    pub const F15: Keycode = Keycode(0x6A);
    pub const F16: Keycode = Keycode(0x6B);
    pub const F17: Keycode = Keycode(0x6C);
    pub const F18: Keycode = Keycode(0x6D);
    pub const F19: Keycode = Keycode(0x6E);

    /// Control modifier left of the spacebar.
    pub const LEFT_CONTROL: Keycode = Keycode(0xE0);
    /// Alias for `LEFT_CONTROL`.
    pub const CONTROL: Keycode = Keycode(0xE0);
    /// Shift modifier left of the spacebar.
    pub const LEFT_SHIFT: Keycode = Keycode(0xE1);
    /// Alias for `LEFT_SHIFT`.
    pub const SHIFT: Keycode = Keycode(0xE1);
    /// Alt modifier left of the spacebar.
    pub const LEFT_ALT: Keycode = Keycode(0xE2);
    /// Alias for `LEFT_ALT`.
    pub const ALT: Keycode = Keycode(0xE2);
    /// GUI modifier left of the spacebar.
    pub const LEFT_GUI: Keycode = Keycode(0xE3);
    /// Alias for `LEFT_GUI`.
    pub const GUI: Keycode = Keycode(0xE3);
    /// Control modifier right of the spacebar.
    pub const RIGHT_CONTROL: Keycode = Keycode(0xE4);
    /// Shift modifier right of the spacebar.
    pub const RIGHT_SHIFT: Keycode = Keycode(0xE5);
    /// Alt modifier right of the spacebar (AltGr on many layouts).
    pub const RIGHT_ALT: Keycode = Keycode(0xE6);
    /// GUI modifier right of the spacebar (Windows key, Option, Meta).
    pub const RIGHT_GUI: Keycode = Keycode(0xE7);

    /// Wrap a raw USB HID usage ID.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Keycode {
        Keycode(raw)
    }

    /// The raw usage ID.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// `true` for the eight modifier keycodes (0xE0-0xE7).
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        self.0 >= 0xE0 && self.0 <= 0xE7
    }

    /// The bit this key sets in a report's modifier byte, or `None` for
    /// regular keys.
    #[must_use]
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(1 << (self.0 - 0xE0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_and_digit_values_match_usage_tables() {
        assert_eq!(Keycode::A.raw(), 0x04);
        assert_eq!(Keycode::Z.raw(), 0x1D);
        assert_eq!(Keycode::ONE.raw(), 0x1E);
        assert_eq!(Keycode::ZERO.raw(), 0x27);
        assert_eq!(Keycode::ENTER.raw(), 0x28);
        assert_eq!(Keycode::SPACEBAR.raw(), 0x2C);
        assert_eq!(Keycode::F12.raw(), 0x45);
        assert_eq!(Keycode::KEYPAD_PERIOD.raw(), 0x63);
        assert_eq!(Keycode::F19.raw(), 0x6E);
    }

    #[test]
    fn modifier_bits() {
        assert_eq!(Keycode::LEFT_CONTROL.modifier_bit(), Some(0x01));
        assert_eq!(Keycode::LEFT_SHIFT.modifier_bit(), Some(0x02));
        assert_eq!(Keycode::LEFT_ALT.modifier_bit(), Some(0x04));
        assert_eq!(Keycode::LEFT_GUI.modifier_bit(), Some(0x08));
        assert_eq!(Keycode::RIGHT_CONTROL.modifier_bit(), Some(0x10));
        assert_eq!(Keycode::RIGHT_SHIFT.modifier_bit(), Some(0x20));
        assert_eq!(Keycode::RIGHT_ALT.modifier_bit(), Some(0x40));
        assert_eq!(Keycode::RIGHT_GUI.modifier_bit(), Some(0x80));
        assert_eq!(Keycode::A.modifier_bit(), None);
    }

    #[test]
    fn aliases_resolve_to_left_side() {
        assert_eq!(Keycode::CONTROL, Keycode::LEFT_CONTROL);
        assert_eq!(Keycode::SHIFT, Keycode::LEFT_SHIFT);
        assert_eq!(Keycode::ALT, Keycode::LEFT_ALT);
        assert_eq!(Keycode::GUI, Keycode::LEFT_GUI);
        assert_eq!(Keycode::RETURN, Keycode::ENTER);
    }

    #[test]
    fn is_modifier_boundaries() {
        assert!(!Keycode::from_raw(0xDF).is_modifier());
        assert!(Keycode::from_raw(0xE0).is_modifier());
        assert!(Keycode::from_raw(0xE7).is_modifier());
        assert!(!Keycode::from_raw(0xE8).is_modifier());
    }
}
