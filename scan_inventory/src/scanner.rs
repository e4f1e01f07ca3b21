//! Boundary to whatever decodes barcodes.
//!
//! A camera decoder, a keyboard-wedge scanner or a typed-in code all hand the
//! workflow the same thing: one opaque string per scan, or a cancellation.
//! Symbology is never interpreted here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A code was decoded
    Scanned(String),
    /// The scanner was closed without producing a code
    Cancelled,
}

impl ScanEvent {
    /// Builds an event from a decoder result; `None` means the scan was abandoned
    pub fn from_decoded(decoded: Option<String>) -> Self {
        match decoded {
            Some(code) => ScanEvent::Scanned(code),
            None => ScanEvent::Cancelled,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ScanEvent::Scanned(code) => Some(code),
            ScanEvent::Cancelled => None,
        }
    }
}
