//! Step-by-step replay over an exploration trace: a cursor with seek and
//! single-step movement, and a cooperative fixed-cadence driver.

#[doc(hidden)]
#[cfg(test)]
mod test;

use std::time::{Duration, Instant};

use crate::route::{ExplorationEvent, Trace};

/// Default cadence of automatic playback.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(800);

/// Replay cursor over an immutable trace snapshot.
///
/// Starts in a not-yet-started state; swapping in a new trace returns to
/// it. The cursor never blocks a search: it owns its snapshot outright.
#[derive(Clone, Debug, Default)]
pub struct Playback {
    trace: Trace,
    cursor: Option<usize>,
}

impl Playback {
    pub fn new(trace: Trace) -> Playback {
        Playback {
            trace,
            cursor: None,
        }
    }

    /// Swaps in a new trace, resetting to the not-yet-started state.
    pub fn replace(&mut self, trace: Trace) {
        self.trace = trace;
        self.cursor = None;
    }

    /// Returns to the not-yet-started state, keeping the trace.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn started(&self) -> bool {
        self.cursor.is_some()
    }

    /// Current index into the trace, once started.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&ExplorationEvent> {
        self.trace.get(self.cursor?)
    }

    /// Whether the cursor rests on the final event.
    pub fn finished(&self) -> bool {
        match self.cursor {
            Some(index) => index + 1 >= self.trace.len(),
            None => false,
        }
    }

    /// Moves to an arbitrary index, clamped to the trace. An empty trace
    /// stays not-yet-started.
    pub fn seek(&mut self, index: usize) -> Option<&ExplorationEvent> {
        if self.trace.is_empty() {
            return None;
        }

        self.cursor = Some(index.min(self.trace.len() - 1));
        self.current()
    }

    /// Advances one step, entering the trace on the first call. At the last
    /// event the cursor holds and `None` is returned.
    pub fn step(&mut self) -> Option<&ExplorationEvent> {
        let next = match self.cursor {
            None => 0,
            Some(index) => index + 1,
        };

        if next >= self.trace.len() {
            return None;
        }

        self.cursor = Some(next);
        self.current()
    }

    /// Jumps to the first event.
    pub fn rewind(&mut self) -> Option<&ExplorationEvent> {
        self.seek(0)
    }

    /// Jumps to the final event.
    pub fn skip_to_end(&mut self) -> Option<&ExplorationEvent> {
        self.seek(self.trace.len().saturating_sub(1))
    }
}

/// Cooperative fixed-cadence driver over a [`Playback`].
///
/// The owner polls with the current instant; nothing advances between
/// polls, pausing cancels outright, and exhausting the trace stops the
/// driver on its own.
#[derive(Clone, Debug)]
pub struct CadenceDriver {
    period: Duration,
    playing: bool,
    last_advance: Option<Instant>,
}

impl Default for CadenceDriver {
    fn default() -> CadenceDriver {
        CadenceDriver::new(DEFAULT_PERIOD)
    }
}

impl CadenceDriver {
    pub fn new(period: Duration) -> CadenceDriver {
        CadenceDriver {
            period,
            playing: false,
            last_advance: None,
        }
    }

    /// Begins advancing; the first due poll steps immediately.
    pub fn play(&mut self) {
        self.playing = true;
        self.last_advance = None;
    }

    /// Cancels playback. The cursor holds its position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Advances the playback one step when the cadence period has elapsed
    /// at `now`. Returns whether a step was taken.
    pub fn poll(&mut self, now: Instant, playback: &mut Playback) -> bool {
        if !self.playing {
            return false;
        }

        if let Some(last) = self.last_advance {
            if now.duration_since(last) < self.period {
                return false;
            }
        }

        self.last_advance = Some(now);
        match playback.step() {
            Some(_) => true,
            None => {
                self.playing = false;
                false
            }
        }
    }
}
