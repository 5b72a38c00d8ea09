//! Seams between the board and its collaborators.
//!
//! - [`RenderSink`] receives every visual intent, fire-and-forget.
//! - [`MatchObserver`] hears about each successful clear.

use crate::types::RenderEvent;

/// Receiver of board render intents, in emission order.
pub trait RenderSink {
    fn emit(&mut self, event: RenderEvent);
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn emit(&mut self, _event: RenderEvent) {}
}

/// Collects events, handy for tests and replays.
impl RenderSink for Vec<RenderEvent> {
    fn emit(&mut self, event: RenderEvent) {
        self.push(event);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn emit(&mut self, event: RenderEvent) {
        (**self).emit(event);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn emit(&mut self, event: RenderEvent) {
        (**self).emit(event);
    }
}

/// Callback invoked once per successful resolve with the cleared type's name
/// and the chain length.
pub trait MatchObserver {
    fn on_match(&mut self, piece_type: &str, count: usize);
}

impl<F: FnMut(&str, usize)> MatchObserver for F {
    fn on_match(&mut self, piece_type: &str, count: usize) {
        self(piece_type, count)
    }
}
