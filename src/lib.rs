//! Simulate a USB HID keyboard: build correctly formatted 8-byte input
//! reports from high-level intent and hand them to a transport.
//!
//! Two pieces form the core:
//!
//! - [`KeyReport`] tracks which keys are down (modifier bitfield plus up
//!   to six regular keys in press order) and serializes that state into
//!   the boot-protocol wire format.
//! - [`KeyboardLayout`] translates text into ordered press/release
//!   sequences using per-layout character tables, including AltGr and
//!   dead-key composition. [`UsLayout`] is the reference layout;
//!   [`FrLayout`] covers AZERTY.
//!
//! [`Keyboard`] couples a report to one [`HidDevice`] endpoint and
//! transmits after every change:
//!
//! ```no_run
//! # fn demo<D: hidkey::HidDevice>(endpoints: impl IntoIterator<Item = D>) -> Result<(), hidkey::Error<D::Error>> {
//! use hidkey::{Keyboard, KeyboardLayout, Keycode, UsLayout};
//!
//! let mut kbd = Keyboard::new(endpoints)?;
//! kbd.send(&[Keycode::CONTROL, Keycode::X])?;
//! UsLayout.write(&mut kbd, "hello\n")?;
//! # Ok(()) }
//! ```
//!
//! The transport (USB enumeration, descriptors, delivery) is a
//! collaborator behind the [`HidDevice`] trait; this crate only
//! guarantees report content and sequencing. Instances are single-owner:
//! wrap a [`Keyboard`] in a mutex yourself if you share it across
//! threads.

#![cfg_attr(not(test), no_std)]

pub mod device;
pub mod error;
pub mod keyboard;
pub mod keycode;
pub mod layout;
pub mod report;

pub use device::{find_device, HidDevice, USAGE_KEYBOARD, USAGE_PAGE_GENERIC_DESKTOP};
pub use error::{Error, ReportFull, UnsupportedCharacter};
pub use keyboard::Keyboard;
pub use keycode::Keycode;
pub use layout::{Chord, FrLayout, KeySequence, KeyboardLayout, UsLayout, SHIFT_FLAG};
pub use report::{KeyReport, KEYBOARD_REPORT_SIZE, MAX_KEYPRESSES};
