//! Unified error type for hidkey.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The pure operations (`KeyReport::press`, `KeyboardLayout::keycodes`)
//! return narrow marker errors that convert into [`Error`] via `From`,
//! so device-level code can use `?` throughout.

/// Top-level error type, generic over the transport's error.
///
/// The transport error `E` is surfaced unmodified; this crate never
/// retries a failed report write. Retry and reconnect policy belong to
/// the transport or the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A seventh simultaneous non-modifier key press was attempted.
    ///
    /// Recoverable: release keys and try again. The report is unchanged.
    ReportFull,

    /// The active layout has no key sequence for this character.
    ///
    /// Recoverable: skip the character and continue.
    UnsupportedCharacter(char),

    /// No device in the provided set matches the requested usage page/usage.
    DeviceNotFound,

    /// A paced write was aborted via its cancellation token.
    Cancelled,

    /// The underlying report write failed (device disconnected, endpoint
    /// busy). Fatal to the current operation, not to the process.
    Transport(E),
}

/// Marker error: all six regular-key slots are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportFull;

/// Marker error: no keycode sequence exists for the named character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedCharacter(pub char);

// Convenience conversions

impl<E> From<ReportFull> for Error<E> {
    fn from(_: ReportFull) -> Self {
        Error::ReportFull
    }
}

impl<E> From<UnsupportedCharacter> for Error<E> {
    fn from(e: UnsupportedCharacter) -> Self {
        Error::UnsupportedCharacter(e.0)
    }
}
