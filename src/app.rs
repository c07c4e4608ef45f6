use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::highscore::HighscoreStore;
use crate::input::map_key;
use crate::runtime::AppEvent;
use crate::score::{words_per_minute, Scoreboard};
use crate::session::{Effect, Segments, Session, SessionEvent};
use crate::stopwatch::{Stopwatch, SystemStopwatch};
use crate::word_generator::PromptSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub target: &'a str,
    pub position: usize,
    pub error_mark: Option<usize>,
    pub segments: Segments,
    pub is_complete: bool,
    pub elapsed: Duration,
    pub wpm: f64,
    pub history: &'a [Duration],
    pub highscore: Option<Duration>,
    pub status: Option<&'a str>,
}

/// Owns the session and performs the effects it asks for
pub struct App<W: Stopwatch = SystemStopwatch> {
    session: Session,
    stopwatch: W,
    store: Box<dyn HighscoreStore>,
    prompts: Box<dyn PromptSource>,
    status: Option<String>,
}

impl<W: Stopwatch> App<W> {
    /// Loads the stored highscore and draws the first prompt.
    pub fn new(
        stopwatch: W,
        store: Box<dyn HighscoreStore>,
        mut prompts: Box<dyn PromptSource>,
    ) -> Result<Self> {
        let highscore = store.load()?;
        info!(?highscore, "loaded highscore");

        let session = Session::new(prompts.next_prompt(), Scoreboard::new(highscore));

        Ok(Self {
            session,
            stopwatch,
            store,
            prompts,
            status: None,
        })
    }

    /// Handle one raw loop event. Resizes only need a redraw.
    pub fn handle(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Key(key) => match map_key(key) {
                Some(ev) => self.apply(ev),
                None => Flow::Continue,
            },
            AppEvent::Tick => self.apply(SessionEvent::TimerTick),
            AppEvent::Resize => Flow::Continue,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Flow {
        let elapsed = self.stopwatch.elapsed();
        let effects = self.session.apply(event, elapsed);

        let mut flow = Flow::Continue;
        for effect in effects {
            debug!(?effect, "performing effect");
            match effect {
                Effect::StartTimer => {
                    self.stopwatch.reset();
                    self.stopwatch.start();
                }
                Effect::StopTimer => self.stopwatch.stop(),
                Effect::SaveHighscore(highscore) => self.save_highscore(highscore),
                Effect::Restart => self.restart(),
                Effect::Quit => flow = Flow::Quit,
            }
        }

        flow
    }

    fn save_highscore(&mut self, highscore: Duration) {
        match self.store.save(highscore) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!(error = %e, "keeping highscore in memory only");
                self.status = Some(format!("highscore not saved: {e}"));
            }
        }
    }

    fn restart(&mut self) {
        let target = self.prompts.next_prompt();
        self.stopwatch.reset();
        self.session = self.session.restart(target);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stopwatch(&self) -> &W {
        &self.stopwatch
    }

    pub fn stopwatch_mut(&mut self) -> &mut W {
        &mut self.stopwatch
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn view(&self) -> View<'_> {
        let elapsed = self.stopwatch.elapsed();

        View {
            target: self.session.target(),
            position: self.session.position(),
            error_mark: self.session.error_mark(),
            segments: self.session.segments(),
            is_complete: self.session.is_complete(),
            elapsed,
            wpm: words_per_minute(self.session.target(), elapsed),
            history: self.session.history(),
            highscore: self.session.highscore(),
            status: self.status(),
        }
    }
}
