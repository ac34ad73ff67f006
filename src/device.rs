//! Transport collaborator contract.
//!
//! This crate builds report bytes; it never enumerates USB devices or
//! negotiates descriptors. A transport is anything that can accept a
//! serialized report and identify itself by HID usage page and usage,
//! e.g. one endpoint of a composite HID device.

/// HID usage page for Generic Desktop controls.
pub const USAGE_PAGE_GENERIC_DESKTOP: u16 = 0x01;

/// Generic Desktop usage ID for a keyboard.
pub const USAGE_KEYBOARD: u16 = 0x06;

/// A HID endpoint that accepts raw input reports.
///
/// `usage_page` and `usage` let the owner pick the right endpoint among
/// several (see [`find_device`]). `send_report` hands one serialized
/// report to the host; delivery and retry are the implementor's concern.
pub trait HidDevice {
    /// Transport-specific write error, surfaced to callers unmodified.
    type Error;

    /// HID usage page of this endpoint (keyboard: 0x01).
    fn usage_page(&self) -> u16;

    /// HID usage ID of this endpoint (keyboard: 0x06).
    fn usage(&self) -> u16;

    /// Write one input report to the host.
    fn send_report(&mut self, report: &[u8]) -> Result<(), Self::Error>;
}

/// Search `devices` for the endpoint with the matching usage page and usage.
///
/// Returns the first match, consuming the iterator up to it; `None` if no
/// endpoint matches.
pub fn find_device<D: HidDevice>(
    devices: impl IntoIterator<Item = D>,
    usage_page: u16,
    usage: u16,
) -> Option<D> {
    devices
        .into_iter()
        .find(|d| d.usage_page() == usage_page && d.usage() == usage)
}
