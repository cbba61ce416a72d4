use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{SelectionError, SequencerError};
use crate::selection::{PickResult, Ticket};

/// Observable stage of the post-pick animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Loading,
    FadingIn,
    Blinking,
}

/// Which periodic timer a tick came from. Each phase listens to its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSource {
    Loading,
    Fade,
    Blink,
}

impl TickSource {
    pub const ALL: [TickSource; 3] = [TickSource::Loading, TickSource::Fade, TickSource::Blink];
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The tick was not for the active phase.
    Ignored,
    /// Loading fraction in `0..=1`.
    Progress(f64),
    /// Loading ran past its budget and the pick was committed. Fading starts at opacity 0.
    Committed(PickResult),
    Opacity(f32),
    Blink { visible: bool },
    /// Blinking finished; the result is fully visible and the sequencer is idle again.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    pub loading_interval: Duration,
    pub loading_ticks: u32,
    pub fade_interval: Duration,
    pub fade_step: f32,
    pub blink_interval: Duration,
    pub blink_ticks: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            loading_interval: Duration::from_millis(50),
            loading_ticks: 40,
            fade_interval: Duration::from_millis(30),
            fade_step: 0.1,
            blink_interval: Duration::from_millis(200),
            blink_ticks: 6,
        }
    }
}

impl AnimationTiming {
    pub fn interval(&self, source: TickSource) -> Duration {
        match source {
            TickSource::Loading => self.loading_interval,
            TickSource::Fade => self.fade_interval,
            TickSource::Blink => self.blink_interval,
        }
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Loading { ticket: Ticket, ticks: u32 },
    FadingIn { ticks: u32 },
    Blinking { ticks: u32 },
}

/// Runs Loading -> FadingIn -> Blinking for one pick, one tick at a time.
///
/// The sequencer holds the pick's ticket while loading and hands it to the
/// commit callback exactly once, on the first tick past the loading budget.
#[derive(Debug)]
pub struct AnimationSequencer {
    timing: AnimationTiming,
    state: State,
}

impl AnimationSequencer {
    pub fn new(timing: AnimationTiming) -> Self {
        Self { timing, state: State::Idle }
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    pub fn phase(&self) -> AnimationPhase {
        match self.state {
            State::Idle => AnimationPhase::Idle,
            State::Loading { .. } => AnimationPhase::Loading,
            State::FadingIn { .. } => AnimationPhase::FadingIn,
            State::Blinking { .. } => AnimationPhase::Blinking,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    pub fn active_source(&self) -> Option<TickSource> {
        match self.state {
            State::Idle => None,
            State::Loading { .. } => Some(TickSource::Loading),
            State::FadingIn { .. } => Some(TickSource::Fade),
            State::Blinking { .. } => Some(TickSource::Blink),
        }
    }

    /// Raw loading fraction; exceeds 1 only on the committing tick.
    pub fn progress(&self) -> f64 {
        match self.state {
            State::Loading { ticks, .. } => f64::from(ticks) / f64::from(self.timing.loading_ticks),
            State::Idle => 0.0,
            _ => 1.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self.state {
            State::Loading { .. } => 0.0,
            State::FadingIn { ticks } => self.fade_level(ticks),
            State::Idle | State::Blinking { .. } => 1.0,
        }
    }

    pub fn blink_visible(&self) -> bool {
        match self.state {
            State::Blinking { ticks } => ticks % 2 == 0,
            _ => true,
        }
    }

    pub fn start(&mut self, ticket: Ticket) -> Result<(), SequencerError> {
        if !self.is_idle() {
            warn!(ticket = ticket.id(), phase = ?self.phase(), "start rejected, animation in progress");
            return Err(SequencerError::AlreadyRunning(ticket));
        }
        debug!(ticket = ticket.id(), "loading");
        self.state = State::Loading { ticket, ticks: 0 };
        Ok(())
    }

    /// Advances the active phase by one tick.
    ///
    /// `commit` runs synchronously inside the tick that ends loading. If it
    /// fails the sequencer returns to Idle and the error is passed through.
    pub fn tick<F>(&mut self, source: TickSource, commit: F) -> Result<TickOutcome, SelectionError>
    where
        F: FnOnce(&Ticket) -> Result<PickResult, SelectionError>,
    {
        if self.active_source() != Some(source) {
            return Ok(TickOutcome::Ignored);
        }

        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => Ok(TickOutcome::Ignored),
            State::Loading { ticket, ticks } => {
                let ticks = ticks + 1;
                let progress = f64::from(ticks) / f64::from(self.timing.loading_ticks);
                if progress <= 1.0 {
                    self.state = State::Loading { ticket, ticks };
                    return Ok(TickOutcome::Progress(progress));
                }
                let pick = commit(&ticket)?;
                debug!(ticket = ticket.id(), "fading in");
                self.state = State::FadingIn { ticks: 0 };
                Ok(TickOutcome::Committed(pick))
            }
            State::FadingIn { ticks } => {
                let ticks = ticks + 1;
                let opacity = self.fade_level(ticks);
                if opacity >= 1.0 {
                    debug!("blinking");
                    self.state = State::Blinking { ticks: 0 };
                } else {
                    self.state = State::FadingIn { ticks };
                }
                Ok(TickOutcome::Opacity(opacity))
            }
            State::Blinking { ticks } => {
                let ticks = ticks + 1;
                if ticks >= self.timing.blink_ticks {
                    debug!("settled");
                    return Ok(TickOutcome::Settled);
                }
                self.state = State::Blinking { ticks };
                Ok(TickOutcome::Blink { visible: ticks % 2 == 0 })
            }
        }
    }

    /// Forces Idle. Returns the ticket if the pick was not committed yet.
    pub fn cancel(&mut self) -> Option<Ticket> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Loading { ticket, .. } => {
                warn!(ticket = ticket.id(), "animation cancelled before commit");
                Some(ticket)
            }
            _ => None,
        }
    }

    fn fade_level(&self, ticks: u32) -> f32 {
        (ticks as f32 * self.timing.fade_step).min(1.0)
    }
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new(AnimationTiming::default())
    }
}
