use std::time::Duration;

use tracing::{debug, info};

use crate::score::Scoreboard;

/// A discrete, already-materialized input for the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Character(char),
    Erase,
    Restart,
    Quit,
    TimerTick,
}

/// Side effects requested by a transition, performed by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartTimer,
    StopTimer,
    SaveHighscore(Duration),
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    /// Cursor reached the end with a mismatch still pending.
    AtEndWithError,
    Completed,
}

/// The target split around the cursor, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub matched: String,
    pub erroneous: String,
    pub cursor: Option<char>,
    pub rest: String,
}

/// One typing attempt against a fixed target text
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    target: String,
    chars: Vec<char>,
    position: usize,
    error_mark: Option<usize>,
    timer_running: bool,
    finalized: bool,
    scoreboard: Scoreboard,
}

impl Session {
    pub fn new(target: String, scoreboard: Scoreboard) -> Self {
        let chars = target.chars().collect();
        Self {
            target,
            chars,
            position: 0,
            error_mark: None,
            timer_running: false,
            finalized: false,
            scoreboard,
        }
    }

    /// Fresh attempt on a new target, keeping history and highscore.
    pub fn restart(&self, target: String) -> Self {
        Self::new(target, self.scoreboard.clone())
    }

    /// Apply one event. `elapsed` is the stopwatch reading at the time the
    /// event is delivered; it is only consulted when a run is finalized.
    #[must_use]
    pub fn apply(&mut self, event: SessionEvent, elapsed: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            SessionEvent::Quit => {
                effects.push(Effect::Quit);
                return effects;
            }
            SessionEvent::Character(c) => self.type_char(c, &mut effects),
            SessionEvent::Erase => self.erase(),
            SessionEvent::Restart | SessionEvent::TimerTick => {}
        }

        self.finalize(elapsed, &mut effects);

        if event == SessionEvent::Restart {
            if self.is_complete() {
                effects.push(Effect::Restart);
            } else {
                debug!(phase = ?self.phase(), "restart ignored, run not complete");
            }
        }

        effects
    }

    fn type_char(&mut self, c: char, effects: &mut Vec<Effect>) {
        if self.at_end() {
            return;
        }

        if !self.timer_running {
            self.timer_running = true;
            effects.push(Effect::StartTimer);
        }

        if c != self.chars[self.position] && self.error_mark.is_none() {
            debug!(position = self.position, expected = %self.chars[self.position], got = %c, "mismatch");
            self.error_mark = Some(self.position);
        }

        self.position += 1;
    }

    fn erase(&mut self) {
        if self.is_complete() || self.position == 0 {
            return;
        }

        self.position -= 1;

        if matches!(self.error_mark, Some(mark) if self.position <= mark) {
            debug!(position = self.position, "error corrected");
            self.error_mark = None;
        }
    }

    /// Stop the clock and record the run, at most once per session.
    fn finalize(&mut self, elapsed: Duration, effects: &mut Vec<Effect>) {
        if !self.is_complete() || !self.timer_running || self.finalized {
            return;
        }

        self.timer_running = false;
        self.finalized = true;
        effects.push(Effect::StopTimer);

        let changed = self.scoreboard.record(elapsed);
        info!(?elapsed, new_highscore = changed, "run completed");
        if changed {
            effects.push(Effect::SaveHighscore(elapsed));
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn error_mark(&self) -> Option<usize> {
        self.error_mark
    }

    pub fn at_end(&self) -> bool {
        self.position == self.chars.len()
    }

    pub fn has_error(&self) -> bool {
        self.error_mark.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.at_end() && !self.has_error()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Completed
        } else if self.at_end() {
            Phase::AtEndWithError
        } else if self.position == 0 && !self.timer_running {
            Phase::Idle
        } else {
            Phase::InProgress
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn history(&self) -> &[Duration] {
        self.scoreboard.history()
    }

    pub fn highscore(&self) -> Option<Duration> {
        self.scoreboard.highscore()
    }

    pub fn segments(&self) -> Segments {
        let done_until = self.error_mark.unwrap_or(self.position);

        Segments {
            matched: self.chars[..done_until].iter().collect(),
            erroneous: self.chars[done_until..self.position].iter().collect(),
            cursor: self.chars.get(self.position).copied(),
            rest: self
                .chars
                .get(self.position + 1..)
                .map(|rest| rest.iter().collect())
                .unwrap_or_default(),
        }
    }
}
