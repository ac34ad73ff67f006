//! USB HID keyboard report state machine (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes),
//!           oldest press first, unused slots zero
//! ```

use crate::device::HidDevice;
use crate::error::ReportFull;
use crate::keycode::Keycode;
use heapless::Vec;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// No more than this many regular (non-modifier) keys may be down at once.
pub const MAX_KEYPRESSES: usize = 6;

/// Current "all keys down" state of one simulated keyboard.
///
/// Pure state machine: mutations never transmit anything. [`KeyReport::send`]
/// hands the serialized bytes to a transport; [`crate::Keyboard`] couples the
/// two for callers that want press-and-transmit in one call.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    modifier: u8,
    // Press order, oldest first. Release compacts, so serialization is
    // gap-free and stable.
    keys: Vec<u8, MAX_KEYPRESSES>,
}

impl KeyReport {
    /// Create an empty (all-keys-released) report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modifier: 0,
            keys: Vec::new(),
        }
    }

    /// Mark the given keys as pressed.
    ///
    /// Modifier keycodes set their bitfield bit (idempotent). Regular
    /// keycodes take the next free slot unless already present (no-op).
    /// The whole set is checked against the six-slot capacity before any
    /// mutation, so on [`ReportFull`] the report is byte-for-byte unchanged.
    pub fn press(&mut self, keycodes: &[Keycode]) -> Result<(), ReportFull> {
        let mut added = 0;
        for (i, kc) in keycodes.iter().enumerate() {
            if self.would_take_slot(*kc) && !keycodes[..i].contains(kc) {
                added += 1;
            }
        }
        if self.keys.len() + added > MAX_KEYPRESSES {
            return Err(ReportFull);
        }

        for kc in keycodes {
            if let Some(bit) = kc.modifier_bit() {
                self.modifier |= bit;
            } else if self.would_take_slot(*kc) {
                // Capacity verified above.
                let _ = self.keys.push(kc.raw());
            }
        }
        Ok(())
    }

    /// Mark the given keys as released.
    ///
    /// Remaining slots are compacted to keep press order contiguous.
    /// Releasing a key that is not pressed is a no-op.
    pub fn release(&mut self, keycodes: &[Keycode]) {
        for kc in keycodes {
            if let Some(bit) = kc.modifier_bit() {
                self.modifier &= !bit;
            } else {
                self.keys.retain(|&k| k != kc.raw());
            }
        }
    }

    /// Release every key: all modifier bits and all six slots cleared.
    pub fn release_all(&mut self) {
        self.modifier = 0;
        self.keys.clear();
    }

    /// Serialize the current state into the 8-byte wire format.
    #[must_use]
    pub fn bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        buf[0] = self.modifier;
        for (slot, key) in buf[2..].iter_mut().zip(self.keys.iter()) {
            *slot = *key;
        }
        buf
    }

    /// Write the current state to the transport.
    ///
    /// The transport error is surfaced unmodified; no retry here.
    pub fn send<D: HidDevice>(&self, device: &mut D) -> Result<(), D::Error> {
        device.send_report(&self.bytes())
    }

    /// `true` if a press of `kc` would consume a regular-key slot.
    fn would_take_slot(&self, kc: Keycode) -> bool {
        // Zero is the empty-slot marker, never a pressable key.
        !kc.is_modifier() && kc.raw() != 0 && !self.keys.contains(&kc.raw())
    }

    /// Returns `true` if no keys are pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_serializes_to_zeroes() {
        let report = KeyReport::new();
        assert!(report.is_empty());
        assert_eq!(report.bytes(), [0; 8]);
    }

    #[test]
    fn press_fills_slots_in_press_order() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::B]).unwrap();
        report.press(&[Keycode::A]).unwrap();
        // Press order, not sorted by value.
        assert_eq!(report.bytes(), [0, 0, 0x05, 0x04, 0, 0, 0, 0]);
    }

    #[test]
    fn reserved_byte_stays_zero() {
        let mut report = KeyReport::new();
        report
            .press(&[Keycode::SHIFT, Keycode::A, Keycode::ENTER])
            .unwrap();
        assert_eq!(report.bytes()[1], 0x00);
        report.release(&[Keycode::A]);
        assert_eq!(report.bytes()[1], 0x00);
    }

    #[test]
    fn modifiers_set_bits_not_slots() {
        let mut report = KeyReport::new();
        report
            .press(&[Keycode::LEFT_CONTROL, Keycode::RIGHT_GUI])
            .unwrap();
        assert_eq!(report.bytes(), [0x81, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn modifier_press_is_idempotent() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::SHIFT]).unwrap();
        let first = report.bytes();
        report.press(&[Keycode::SHIFT]).unwrap();
        assert_eq!(report.bytes(), first);
    }

    #[test]
    fn duplicate_regular_press_is_noop() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::A]).unwrap();
        report.press(&[Keycode::A]).unwrap();
        assert_eq!(report.bytes(), [0, 0, 0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn seventh_key_rejected_report_unchanged() {
        let mut report = KeyReport::new();
        report
            .press(&[
                Keycode::A,
                Keycode::B,
                Keycode::C,
                Keycode::D,
                Keycode::E,
                Keycode::F,
            ])
            .unwrap();
        let before = report.bytes();
        assert_eq!(report.press(&[Keycode::G]), Err(ReportFull));
        assert_eq!(report.bytes(), before);
    }

    #[test]
    fn oversized_press_set_rejected_atomically() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::A, Keycode::B]).unwrap();
        let before = report.bytes();
        // 5 new keys would overflow 2 + 5 > 6; nothing may be applied.
        assert_eq!(
            report.press(&[
                Keycode::C,
                Keycode::D,
                Keycode::E,
                Keycode::F,
                Keycode::G,
            ]),
            Err(ReportFull)
        );
        assert_eq!(report.bytes(), before);
    }

    #[test]
    fn press_set_with_duplicates_counts_once() {
        let mut report = KeyReport::new();
        report
            .press(&[Keycode::A, Keycode::B, Keycode::C, Keycode::D, Keycode::E])
            .unwrap();
        // F appears twice but only takes one slot.
        report.press(&[Keycode::F, Keycode::F]).unwrap();
        assert_eq!(
            report.bytes(),
            [0, 0, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]
        );
    }

    #[test]
    fn modifiers_still_accepted_when_slots_full() {
        let mut report = KeyReport::new();
        report
            .press(&[
                Keycode::A,
                Keycode::B,
                Keycode::C,
                Keycode::D,
                Keycode::E,
                Keycode::F,
            ])
            .unwrap();
        report.press(&[Keycode::SHIFT]).unwrap();
        assert_eq!(report.bytes()[0], 0x02);
    }

    #[test]
    fn release_compacts_remaining_slots() {
        let mut report = KeyReport::new();
        report
            .press(&[Keycode::A, Keycode::B, Keycode::C])
            .unwrap();
        report.release(&[Keycode::B]);
        // No gap: C moves up, order among survivors preserved.
        assert_eq!(report.bytes(), [0, 0, 0x04, 0x06, 0, 0, 0, 0]);
    }

    #[test]
    fn release_unpressed_key_is_noop() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::A]).unwrap();
        report.release(&[Keycode::Z, Keycode::RIGHT_ALT]);
        assert_eq!(report.bytes(), [0, 0, 0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn press_release_roundtrip_restores_bytes() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::CONTROL, Keycode::X]).unwrap();
        let held = report.bytes();
        report
            .press(&[Keycode::SHIFT, Keycode::A, Keycode::B])
            .unwrap();
        report.release(&[Keycode::SHIFT, Keycode::A, Keycode::B]);
        assert_eq!(report.bytes(), held);
    }

    #[test]
    fn release_all_yields_zero_report() {
        let mut report = KeyReport::new();
        report
            .press(&[Keycode::GUI, Keycode::A, Keycode::B, Keycode::C])
            .unwrap();
        report.release_all();
        assert_eq!(report.bytes(), [0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(report.is_empty());
    }

    #[test]
    fn zero_keycode_never_occupies_a_slot() {
        let mut report = KeyReport::new();
        report.press(&[Keycode::from_raw(0)]).unwrap();
        assert!(report.is_empty());
    }
}
