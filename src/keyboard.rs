//! Keyboard front-end: one HID endpoint plus its report state.
//!
//! Every state change is transmitted immediately, so the host's view of
//! the keyboard always matches [`Keyboard::report`] after a successful
//! call. On a transport error the local state keeps the mutation; the
//! caller decides whether to retry the send or reset.

use crate::device::{find_device, HidDevice, USAGE_KEYBOARD, USAGE_PAGE_GENERIC_DESKTOP};
use crate::error::Error;
use crate::keycode::Keycode;
use crate::report::KeyReport;

/// A simulated USB HID keyboard bound to one transport endpoint.
pub struct Keyboard<D: HidDevice> {
    device: D,
    report: KeyReport,
}

impl<D: HidDevice> Keyboard<D> {
    /// Pick the keyboard endpoint (usage page 0x01, usage 0x06) out of
    /// `devices` and bind to it.
    ///
    /// Sends one empty report as a readiness probe, so a dead transport
    /// is detected at construction rather than on the first keystroke.
    pub fn new(devices: impl IntoIterator<Item = D>) -> Result<Self, Error<D::Error>> {
        let device = find_device(devices, USAGE_PAGE_GENERIC_DESKTOP, USAGE_KEYBOARD)
            .ok_or(Error::DeviceNotFound)?;
        let mut keyboard = Self {
            device,
            report: KeyReport::new(),
        };
        keyboard.sync()?;
        Ok(keyboard)
    }

    /// Press the given keys and send the updated report.
    ///
    /// Fails with [`Error::ReportFull`] (report and wire state unchanged)
    /// or [`Error::Transport`] (report updated, send failed).
    pub fn press(&mut self, keycodes: &[Keycode]) -> Result<(), Error<D::Error>> {
        self.report.press(keycodes)?;
        self.sync()
    }

    /// Release the given keys and send the updated report.
    ///
    /// Keys that were not pressed are ignored.
    pub fn release(&mut self, keycodes: &[Keycode]) -> Result<(), Error<D::Error>> {
        self.report.release(keycodes);
        self.sync()
    }

    /// Release every key and send the empty report.
    pub fn release_all(&mut self) -> Result<(), Error<D::Error>> {
        self.report.release_all();
        self.sync()
    }

    /// Press the given keys together, then release all pressed keys.
    pub fn send(&mut self, keycodes: &[Keycode]) -> Result<(), Error<D::Error>> {
        self.press(keycodes)?;
        self.release_all()
    }

    /// Current report state.
    #[must_use]
    pub fn report(&self) -> &KeyReport {
        &self.report
    }

    /// The bound transport endpoint.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Unbind, returning the transport endpoint.
    pub fn into_device(self) -> D {
        self.device
    }

    fn sync(&mut self) -> Result<(), Error<D::Error>> {
        self.report.send(&mut self.device).map_err(Error::Transport)
    }
}
