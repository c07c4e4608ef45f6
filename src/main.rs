use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    process::ExitCode,
};
use tracing::info;
use typetime::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    highscore::FileHighscoreStore,
    language::SupportedLanguage,
    logging,
    runtime::{CrosstermEventSource, Runner},
    stopwatch::SystemStopwatch,
    word_generator::WordGenerator,
    App, Flow,
};

/// minimal typing speed test with a persistent best time
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of words to use in test
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// number of generated sentences to use instead of words
    #[clap(short = 'f', long = "full-sentences")]
    number_of_sentences: Option<usize>,

    /// fixed prompt to type on every run
    #[clap(short = 'p', long, value_parser = parse_prompt)]
    prompt: Option<String>,

    /// word list to draw from
    #[clap(short = 'l', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// file holding the best time
    #[clap(long)]
    highscore_file: Option<PathBuf>,

    /// save the effective settings as the new defaults
    #[clap(long)]
    write_config: bool,
}

fn parse_prompt(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("prompt must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

impl Cli {
    /// Command line flags take precedence over stored config
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(n) = self.number_of_words {
            config.number_of_words = n;
        }
        if self.number_of_sentences.is_some() {
            config.number_of_sentences = self.number_of_sentences;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(ref path) = self.highscore_file {
            config.highscore_file = path.clone();
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("typetime: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_store = FileConfigStore::new();
    let config = cli.merge_into(config_store.load()?);
    if cli.write_config {
        config_store.save(&config)?;
    }

    if let Some(path) = AppDirs::log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("typetime: logging disabled: {e}");
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // load the highscore before touching the terminal so a bad file is reported plainly
    let mut app = App::new(
        SystemStopwatch::new(),
        Box::new(FileHighscoreStore::with_path(&config.highscore_file)),
        Box::new(WordGenerator::new(config.word_gen_config(cli.prompt.clone()))),
    )?;
    info!(?config, "starting");

    enable_raw_mode()?;
    let mut terminal = restore_on_err(enter_tui(), || {
        let _ = disable_raw_mode();
    })?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn enter_tui() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `restore` before handing back a failed setup step
fn restore_on_err<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    result.inspect_err(|_| restore())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::spawn());

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        if app.handle(runner.step()) == Flow::Quit {
            break;
        }
    }

    Ok(())
}
