//! US-English (QWERTY, 104-key) layout. The reference/default layout.

use super::KeyboardLayout;

/// Standard US PC keyboard layout.
///
/// Maps ASCII to keypresses; non-ASCII characters and most control
/// characters are unsupported.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsLayout;

impl KeyboardLayout for UsLayout {
    // Packed table indexed by ASCII value; top bit means "with Shift".
    // Zero entries have no keyboard key and are reported as unsupported.
    #[rustfmt::skip]
    const ASCII_TO_KEYCODE: &'static [u8; 128] = &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // NUL..BEL
        0x2a, // BS  (Backspace; called DELETE in the usb.org document)
        0x2b, // TAB \t
        0x28, // LF  \n (Return/ENTER in the usb.org document)
        0x00, 0x00, 0x00, 0x00, 0x00,                   // VT..SI
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // DLE..ETB
        0x00, 0x00, 0x00,                               // CAN..SUB
        0x29, // ESC
        0x00, 0x00, 0x00, 0x00,                         // FS..US
        0x2c, // SPACE
        0x9e, // ! (shift 1)
        0xb4, // " (shift ')
        0xa0, // # (shift 3)
        0xa1, // $ (shift 4)
        0xa2, // % (shift 5)
        0xa4, // & (shift 7)
        0x34, // '
        0xa6, // ( (shift 9)
        0xa7, // ) (shift 0)
        0xa5, // * (shift 8)
        0xae, // + (shift =)
        0x36, // ,
        0x2d, // -
        0x37, // .
        0x38, // /
        0x27, // 0
        0x1e, 0x1f, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, // 1..9
        0xb3, // : (shift ;)
        0x33, // ;
        0xb6, // < (shift ,)
        0x2e, // =
        0xb7, // > (shift .)
        0xb8, // ? (shift /)
        0x9f, // @ (shift 2)
        0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b, // A..H (shift a..h)
        0x8c, 0x8d, 0x8e, 0x8f, 0x90, 0x91, 0x92, 0x93, // I..P
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b, // Q..X
        0x9c, 0x9d,                                     // Y, Z
        0x2f, // [
        0x31, // \
        0x30, // ]
        0xa3, // ^ (shift 6)
        0xad, // _ (shift -)
        0x35, // `
        0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, // a..h
        0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, // i..p
        0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, // q..x
        0x1c, 0x1d,                                     // y, z
        0xaf, // { (shift [)
        0xb1, // | (shift \)
        0xb0, // } (shift ])
        0xb5, // ~ (shift `)
        0x4c, // DEL (Forward Delete in the usb.org document)
    ];
}

#[cfg(test)]
mod tests {
    use super::super::SHIFT_FLAG;
    use super::*;

    #[test]
    fn table_covers_all_of_ascii() {
        assert_eq!(UsLayout::ASCII_TO_KEYCODE.len(), 128);
    }

    #[test]
    fn every_printable_ascii_has_an_entry() {
        for val in 0x20..0x7f_u8 {
            assert_ne!(
                UsLayout::ASCII_TO_KEYCODE[val as usize], 0,
                "missing entry for {:?}",
                val as char
            );
        }
    }

    #[test]
    fn digits_map_to_top_row_unshifted() {
        assert_eq!(UsLayout::ASCII_TO_KEYCODE[b'1' as usize], 0x1e);
        assert_eq!(UsLayout::ASCII_TO_KEYCODE[b'9' as usize], 0x26);
        assert_eq!(UsLayout::ASCII_TO_KEYCODE[b'0' as usize], 0x27);
    }

    #[test]
    fn letters_differ_only_by_shift_flag() {
        for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
            assert_eq!(
                UsLayout::ASCII_TO_KEYCODE[upper as usize],
                UsLayout::ASCII_TO_KEYCODE[lower as usize] | SHIFT_FLAG
            );
        }
    }

    #[test]
    fn no_altgr_and_no_dead_keys() {
        assert!(UsLayout::NEED_ALTGR.is_empty());
        assert!(UsLayout::HIGHER_ASCII.is_empty());
        assert!(UsLayout::DEAD_KEYS.is_empty());
    }
}
