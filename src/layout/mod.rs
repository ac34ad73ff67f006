//! Character-to-keycode layout translation.
//!
//! A layout owns immutable tables mapping characters to the key
//! combination a physical keyboard must send to produce them on a host
//! with the matching OS locale. Tables are packed the same way for every
//! layout: one byte per low-ASCII character, keycode in the low seven
//! bits, [`SHIFT_FLAG`] in the top bit. Characters above ASCII live in a
//! sparse side table, and characters typed through a dead key carry an
//! explicit multi-step sequence.
//!
//! Translation produces [`Chord`]s - keys pressed together in one report,
//! then released - and typing a character is one chord per step.

pub mod fr;
pub mod us;

pub use fr::FrLayout;
pub use us::UsLayout;

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::device::HidDevice;
use crate::error::{Error, UnsupportedCharacter};
use crate::keyboard::Keyboard;
use crate::keycode::Keycode;

/// Bit set in a packed table byte when the character needs Shift held.
pub const SHIFT_FLAG: u8 = 0x80;

/// Keys pressed together in a single report: optional AltGr, optional
/// Shift, and the base keycode.
pub type Chord = Vec<Keycode, 3>;

/// Ordered chords that type one character. A single chord for plain
/// characters; one chord per step for dead-key sequences.
pub type KeySequence = Vec<Chord, 4>;

/// Translate characters into key presses for one keyboard layout.
///
/// Implementations supply the tables; translation and typing logic are
/// provided. Layouts are stateless and shareable - all per-call scratch
/// lives on the stack.
pub trait KeyboardLayout {
    /// Packed keycodes for ASCII 0-127, indexed by character value.
    /// Zero entries have no key on this layout.
    const ASCII_TO_KEYCODE: &'static [u8; 128];

    /// Characters (from any table) that need AltGr held.
    const NEED_ALTGR: &'static str = "";

    /// Packed keycodes for characters above ASCII, sparse.
    const HIGHER_ASCII: &'static [(char, u8)] = &[];

    /// Characters typed as a dead key followed by a regular key. Each
    /// step is a packed keycode, pressed and released in order.
    const DEAD_KEYS: &'static [(char, &'static [u8])] = &[];

    /// The ordered key sequence that types `ch`, without sending it.
    ///
    /// Fails with [`UnsupportedCharacter`] naming the offending code
    /// point if no table covers it - unsupported input is never silently
    /// dropped.
    fn keycodes(&self, ch: char) -> Result<KeySequence, UnsupportedCharacter> {
        let mut seq = KeySequence::new();

        let packed = Self::packed_keycode(ch);
        if packed != 0 {
            push_chord(&mut seq, packed, Self::NEED_ALTGR.contains(ch));
            return Ok(seq);
        }

        if let Some((_, steps)) = Self::DEAD_KEYS.iter().find(|(c, _)| *c == ch) {
            for &step in *steps {
                push_chord(&mut seq, step, false);
            }
            return Ok(seq);
        }

        Err(UnsupportedCharacter(ch))
    }

    /// Type one character: press each chord, then release exactly those
    /// keys. Keys held by the caller stay held.
    fn type_char<D: HidDevice>(
        &self,
        keyboard: &mut Keyboard<D>,
        ch: char,
    ) -> Result<(), Error<D::Error>> {
        let seq = self.keycodes(ch)?;
        for chord in &seq {
            keyboard.press(chord)?;
            keyboard.release(chord)?;
        }
        Ok(())
    }

    /// Type `text` character by character.
    ///
    /// Stops at the first failure; characters already typed stay typed
    /// (a keyboard cannot unsend keystrokes). Each character is fully
    /// released before the next begins.
    fn write<D: HidDevice>(
        &self,
        keyboard: &mut Keyboard<D>,
        text: &str,
    ) -> Result<(), Error<D::Error>> {
        for ch in text.chars() {
            self.type_char(keyboard, ch)?;
        }
        Ok(())
    }

    /// Type `text` with a blocking delay of `interval_ms` between
    /// characters, so host-side debounce or key-repeat logic does not
    /// coalesce fast virtual keystrokes.
    ///
    /// `cancel`, when provided, is checked between characters: a set
    /// flag aborts with [`Error::Cancelled`] before the next character
    /// starts. Same partial-effect model as [`KeyboardLayout::write`].
    fn write_paced<D: HidDevice, T: DelayNs>(
        &self,
        keyboard: &mut Keyboard<D>,
        text: &str,
        delay: &mut T,
        interval_ms: u32,
        cancel: Option<&AtomicBool>,
    ) -> Result<(), Error<D::Error>> {
        for (i, ch) in text.chars().enumerate() {
            if i > 0 && interval_ms > 0 {
                delay.delay_ms(interval_ms);
            }
            if let Some(flag) = cancel {
                if flag.load(Ordering::Acquire) {
                    return Err(Error::Cancelled);
                }
            }
            self.type_char(keyboard, ch)?;
        }
        Ok(())
    }

    /// Packed keycode for `ch`, or zero if no single-key entry exists.
    fn packed_keycode(ch: char) -> u8 {
        let val = ch as u32;
        if val < 128 {
            Self::ASCII_TO_KEYCODE[val as usize]
        } else {
            Self::HIGHER_ASCII
                .iter()
                .find(|(c, _)| *c == ch)
                .map_or(0, |(_, packed)| *packed)
        }
    }
}

/// Unpack one table byte into a chord and append it to `seq`.
fn push_chord(seq: &mut KeySequence, packed: u8, altgr: bool) {
    let mut chord = Chord::new();
    // Chord capacity is exactly AltGr + Shift + base key.
    if altgr {
        let _ = chord.push(Keycode::RIGHT_ALT);
    }
    if packed & SHIFT_FLAG != 0 {
        let _ = chord.push(Keycode::SHIFT);
    }
    let _ = chord.push(Keycode::from_raw(packed & !SHIFT_FLAG));
    let _ = seq.push(chord);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_letter_is_bare_keycode() {
        let seq = UsLayout.keycodes('a').unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].as_slice(), &[Keycode::A]);
    }

    #[test]
    fn uppercase_letter_adds_shift() {
        let seq = UsLayout.keycodes('A').unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].as_slice(), &[Keycode::SHIFT, Keycode::A]);
    }

    #[test]
    fn shifted_symbol_uses_digit_key() {
        let seq = UsLayout.keycodes('!').unwrap();
        assert_eq!(seq[0].as_slice(), &[Keycode::SHIFT, Keycode::ONE]);
    }

    #[test]
    fn control_characters_with_keys_resolve() {
        assert_eq!(
            UsLayout.keycodes('\t').unwrap()[0].as_slice(),
            &[Keycode::TAB]
        );
        assert_eq!(
            UsLayout.keycodes('\n').unwrap()[0].as_slice(),
            &[Keycode::ENTER]
        );
    }

    #[test]
    fn unmapped_control_character_is_unsupported() {
        assert_eq!(
            UsLayout.keycodes('\r'),
            Err(UnsupportedCharacter('\r'))
        );
        assert_eq!(
            UsLayout.keycodes('\u{7}'),
            Err(UnsupportedCharacter('\u{7}'))
        );
    }

    #[test]
    fn non_latin_character_is_unsupported_on_us() {
        assert_eq!(UsLayout.keycodes('é'), Err(UnsupportedCharacter('é')));
        assert_eq!(UsLayout.keycodes('質'), Err(UnsupportedCharacter('質')));
    }
}
