use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts outstanding calls instead of flipping a shared boolean, so a
/// fast call finishing cannot mask a slower overlapping one.
#[derive(Debug, Default)]
pub(crate) struct Flight {
    active: AtomicUsize
}

impl Flight {
    pub fn begin(&self) -> FlightGuard<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        FlightGuard { flight: self }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }
}

/// Decrements on drop, including on early returns and panics.
pub(crate) struct FlightGuard<'a> {
    flight: &'a Flight
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flight.active.fetch_sub(1, Ordering::SeqCst);
    }
}
