use std::time::Duration;

/// Words per minute for `target` typed in `elapsed`.
///
/// Words are whitespace-delimited tokens. The result is fractional and
/// computed from raw minutes; callers round for display. A zero elapsed
/// time yields `0.0`.
pub fn words_per_minute(target: &str, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes == 0.0 {
        return 0.0;
    }

    word_count(target) as f64 / minutes
}

pub fn word_count(target: &str) -> usize {
    target.split_whitespace().count()
}

/// Compare a finished run against the current best time.
///
/// Returns the highscore to keep and whether it changed. An unset
/// highscore is always beaten.
pub fn evaluate_highscore(elapsed: Duration, current: Option<Duration>) -> (Option<Duration>, bool) {
    match current {
        Some(best) if elapsed >= best => (Some(best), false),
        _ => (Some(elapsed), true),
    }
}

/// Completed run times and the best of them, carried across restarts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    history: Vec<Duration>,
    highscore: Option<Duration>,
}

impl Scoreboard {
    pub fn new(highscore: Option<Duration>) -> Self {
        Self {
            history: Vec::new(),
            highscore,
        }
    }

    /// Append a completed run and re-evaluate the highscore.
    /// Returns true when the run became the new highscore.
    ///
    /// A zero time (the clock never ran, e.g. a one-character prompt) is
    /// kept in the history but never becomes the highscore: a stored zero
    /// reads back as unset.
    pub fn record(&mut self, elapsed: Duration) -> bool {
        self.history.push(elapsed);
        if elapsed.is_zero() {
            return false;
        }

        let (highscore, changed) = evaluate_highscore(elapsed, self.highscore);
        self.highscore = highscore;
        changed
    }

    pub fn history(&self) -> &[Duration] {
        &self.history
    }

    pub fn highscore(&self) -> Option<Duration> {
        self.highscore
    }
}
