//! French (AZERTY) layout.
//!
//! Exercises every translation path: AltGr characters, accented
//! characters above ASCII, and circumflex/diaeresis dead-key sequences.

use super::{KeyboardLayout, SHIFT_FLAG};

/// Circumflex dead key position (the key right of P on AZERTY).
const CIRCUMFLEX_DEAD_KEY: u8 = 0x2f;
/// Diaeresis is the shifted circumflex dead key.
const TWODOTS_DEAD_KEY: u8 = CIRCUMFLEX_DEAD_KEY | SHIFT_FLAG;

/// Standard FR PC keyboard layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrLayout;

impl KeyboardLayout for FrLayout {
    #[rustfmt::skip]
    const ASCII_TO_KEYCODE: &'static [u8; 128] = &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // NUL..BEL
        0x2a, // BS  \b
        0x2b, // TAB \t
        0x28, // LF  \n
        0x00, 0x00, 0x00, 0x00, 0x00,                   // VT..SI
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // DLE..ETB
        0x00, 0x00, 0x00,                               // CAN..SUB
        0x29, // ESC
        0x00, 0x00, 0x00, 0x00,                         // FS..US
        0x2c, // SPACE
        0x38, // !
        0x20, // "
        0x20, // # (AltGr)
        0x30, // $
        0xb4, // %
        0x1e, // &
        0x21, // '
        0x22, // (
        0x2d, // )
        0x32, // *
        0xae, // + (shift =)
        0x10, // ,
        0x23, // -
        0xb6, // .
        0xb7, // /
        0xa7, // 0 (shifted digit row)
        0x9e, 0x9f, 0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, // 1..9
        0x37, // :
        0x36, // ;
        0x64, // <
        0x2e, // =
        0xe4, // > (shift <)
        0x90, // ?
        0x27, // @ (AltGr)
        0x94, // A (shift a, on the Q position)
        0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b,       // B..H
        0x8c, 0x8d, 0x8e, 0x8f,                         // I..L
        0xb3, // M (shift ;)
        0x91, 0x92, 0x93,                               // N..P
        0x84, // Q (on the A position)
        0x95, 0x96, 0x97, 0x98, 0x99,                   // R..V
        0x9d, // W (on the Z position)
        0x9b, // X
        0x9c, // Y
        0x9a, // Z (on the W position)
        0x22, // [ (AltGr)
        0x25, // \ (AltGr)
        0x2d, // ] (AltGr)
        0x26, // ^ (AltGr 9; the dedicated ^ key is a dead key)
        0x25, // _
        0x24, // ` (AltGr)
        0x14, // a
        0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,       // b..h
        0x0c, 0x0d, 0x0e, 0x0f,                         // i..l
        0x33, // m
        0x11, 0x12, 0x13,                               // n..p
        0x04, // q
        0x15, 0x16, 0x17, 0x18, 0x19,                   // r..v
        0x1d, // w
        0x1b, // x
        0x1c, // y
        0x1a, // z
        0x21, // { (AltGr)
        0x23, // | (AltGr)
        0x2e, // } (AltGr)
        0x1f, // ~ (AltGr)
        0x4c, // DEL
    ];

    const NEED_ALTGR: &'static str = "~#{[|`\\^@]}€";

    const HIGHER_ASCII: &'static [(char, u8)] = &[
        ('é', 0x1f),
        ('ç', 0x26),
        ('è', 0x24),
        ('à', 0x27),
        ('€', 0x38),
        ('ù', 0x34),
        ('°', 0x2d | SHIFT_FLAG),
        ('§', 0x38 | SHIFT_FLAG),
        ('µ', 0x31 | SHIFT_FLAG),
    ];

    const DEAD_KEYS: &'static [(char, &'static [u8])] = &[
        ('ê', &[CIRCUMFLEX_DEAD_KEY, 0x08]),
        ('Ê', &[CIRCUMFLEX_DEAD_KEY, 0x08 | SHIFT_FLAG]),
        ('ë', &[TWODOTS_DEAD_KEY, 0x08]),
        ('Ë', &[TWODOTS_DEAD_KEY, 0x08 | SHIFT_FLAG]),
        ('â', &[CIRCUMFLEX_DEAD_KEY, 0x14]),
        ('Â', &[CIRCUMFLEX_DEAD_KEY, 0x14 | SHIFT_FLAG]),
        ('ä', &[TWODOTS_DEAD_KEY, 0x14]),
        ('Ä', &[TWODOTS_DEAD_KEY, 0x14 | SHIFT_FLAG]),
        ('ô', &[CIRCUMFLEX_DEAD_KEY, 0x12]),
        ('Ô', &[CIRCUMFLEX_DEAD_KEY, 0x12 | SHIFT_FLAG]),
        ('ö', &[TWODOTS_DEAD_KEY, 0x12]),
        ('Ö', &[TWODOTS_DEAD_KEY, 0x12 | SHIFT_FLAG]),
    ];
}
