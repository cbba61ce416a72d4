use std::time::{Duration, Instant};

use crate::animation::{AnimationTiming, TickSource};

/// Restartable periodic timer. Missed periods are not replayed: after firing,
/// the next deadline is one period from the moment it was polled.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next_due: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// One ticker per animation phase; only the active one runs.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    loading: Ticker,
    fade: Ticker,
    blink: Ticker,
    active: Option<TickSource>,
}

impl TickSchedule {
    pub fn new(timing: &AnimationTiming) -> Self {
        Self {
            loading: Ticker::new(timing.interval(TickSource::Loading)),
            fade: Ticker::new(timing.interval(TickSource::Fade)),
            blink: Ticker::new(timing.interval(TickSource::Blink)),
            active: None,
        }
    }

    /// Switches to the ticker for `active`, restarting it if the phase changed.
    pub fn sync(&mut self, active: Option<TickSource>, now: Instant) {
        if self.active == active {
            return;
        }
        for source in TickSource::ALL {
            self.ticker_mut(source).stop();
        }
        if let Some(source) = active {
            self.ticker_mut(source).start(now);
        }
        self.active = active;
    }

    /// How long the event loop may block before the next tick is due.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.active
            .and_then(|source| self.ticker(source).time_until(now))
            .unwrap_or(idle)
    }

    pub fn poll(&mut self, now: Instant) -> Option<TickSource> {
        let source = self.active?;
        self.ticker_mut(source).poll(now).then_some(source)
    }

    fn ticker(&self, source: TickSource) -> &Ticker {
        match source {
            TickSource::Loading => &self.loading,
            TickSource::Fade => &self.fade,
            TickSource::Blink => &self.blink,
        }
    }

    fn ticker_mut(&mut self, source: TickSource) -> &mut Ticker {
        match source {
            TickSource::Loading => &mut self.loading,
            TickSource::Fade => &mut self.fade,
            TickSource::Blink => &mut self.blink,
        }
    }
}
