use tracing::{error, info, warn};

use crate::animation::{AnimationPhase, AnimationSequencer, AnimationTiming, TickOutcome, TickSource};
use crate::error::{SelectionError, SequencerError};
use crate::labels::{Labels, Lang};
use crate::models::Notice;
use crate::roster::Roster;
use crate::selection::{PickResult, RandomSource, SelectionState};

/// What a press of the extract control led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Started,
    /// Control is disabled while an animation runs.
    Busy,
    Exhausted,
}

/// Presentation-layer owner of the selection and animation state.
pub struct App {
    pub selection: SelectionState,
    pub sequencer: AnimationSequencer,
    pub labels: &'static Labels,
    pub last_pick: Option<PickResult>,
    pub notice: Notice,
    pub should_quit: bool,
    rng: Box<dyn RandomSource>,
}

impl App {
    pub fn new(roster: Roster, timing: AnimationTiming, rng: Box<dyn RandomSource>, lang: Lang) -> Self {
        Self {
            selection: SelectionState::new(roster),
            sequencer: AnimationSequencer::new(timing),
            labels: Labels::for_lang(lang),
            last_pick: None,
            notice: Notice::default(),
            should_quit: false,
            rng,
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.sequencer.is_idle()
    }

    /// The previous result is hidden while a new one is loading.
    pub fn result_visible(&self) -> bool {
        self.last_pick.is_some() && self.sequencer.phase() != AnimationPhase::Loading
    }

    pub fn trigger(&mut self) -> Trigger {
        if self.is_animating() {
            return Trigger::Busy;
        }
        match self.selection.request_pick() {
            Ok(ticket) => match self.sequencer.start(ticket) {
                Ok(()) => Trigger::Started,
                Err(SequencerError::AlreadyRunning(ticket)) => {
                    self.selection.discard(ticket);
                    Trigger::Busy
                }
            },
            Err(_) => {
                info!(total = self.selection.len(), "roster exhausted");
                self.notice.show(self.labels.notice_title, self.labels.notice_text);
                Trigger::Exhausted
            }
        }
    }

    /// Feeds one timer tick to the sequencer. A failed commit is a defect and
    /// is returned to the event loop.
    pub fn on_tick(&mut self, source: TickSource) -> Result<TickOutcome, SelectionError> {
        let selection = &mut self.selection;
        let rng = &mut self.rng;
        let outcome = self
            .sequencer
            .tick(source, |ticket| selection.commit_pick(ticket, &mut **rng))
            .inspect_err(|e| error!(error = %e, "commit failed during animation"))?;

        if let TickOutcome::Committed(pick) = &outcome {
            self.last_pick = Some(pick.clone());
        }
        Ok(outcome)
    }

    /// Stops any running animation; an uncommitted pick is discarded.
    pub fn quit(&mut self) {
        if let Some(ticket) = self.sequencer.cancel() {
            warn!("quitting during extraction, pick discarded");
            self.selection.discard(ticket);
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ScriptedSource;

    fn app(names: &[&str]) -> App {
        let timing = AnimationTiming { loading_ticks: 2, fade_step: 0.5, blink_ticks: 2, ..AnimationTiming::default() };
        App::new(Roster::new(names.iter().copied()), timing, Box::new(ScriptedSource::default()), Lang::It)
    }

    #[test]
    fn test_trigger_is_busy_while_animating() {
        let mut app = app(&["A", "B"]);
        assert_eq!(app.trigger(), Trigger::Started);
        assert_eq!(app.trigger(), Trigger::Busy);
        assert!(app.is_animating());
    }

    #[test]
    fn test_exhausted_trigger_shows_notice() {
        let mut app = app(&[]);
        assert_eq!(app.trigger(), Trigger::Exhausted);
        assert!(app.notice.visible);
        assert_eq!(app.notice.title, "Completato");
    }

    #[test]
    fn test_quit_mid_loading_discards_pick() {
        let mut app = app(&["A"]);
        app.trigger();
        app.on_tick(TickSource::Loading).unwrap();
        app.quit();
        assert!(app.should_quit);
        assert!(!app.is_animating());
        assert_eq!(app.selection.picked_count(), 0);
        assert!(app.last_pick.is_none());
    }
}
