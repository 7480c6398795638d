//! Word Builder entry point
//!
//! Native builds run a line-oriented terminal front end; the browser build
//! starts from `web::wasm_main`.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use word_builder::audio::LogSink;
    use word_builder::consts::TICK_SECONDS;
    use word_builder::engine::{Difficulty, GameMode, LevelPhase, TickOutcome};
    use word_builder::error::ParseError;
    use word_builder::persistence::{KeyValueStore, MemoryStore};
    use word_builder::platform::FileStore;
    use word_builder::session::{Screen, SessionSnapshot};
    use word_builder::{BuiltinCatalog, SessionController, UserData};

    /// Word Builder - build words from scrambled letters
    #[derive(Parser)]
    #[command(name = "word-builder")]
    #[command(about = "Word Builder - a vocabulary word-building game", long_about = None)]
    #[command(version)]
    struct Cli {
        /// Directory for saved progress and settings
        #[arg(default_value = ".word-builder")]
        data_dir: PathBuf,
    }

    /// Turns wall-clock time between commands into countdown ticks
    struct Clock {
        last: Instant,
        accumulator: Duration,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                last: Instant::now(),
                accumulator: Duration::ZERO,
            }
        }

        /// Whole ticks elapsed since the previous call
        fn drain(&mut self) -> u64 {
            let now = Instant::now();
            self.accumulator += now - self.last;
            self.last = now;

            let step = Duration::from_secs(TICK_SECONDS);
            let mut ticks = 0;
            while self.accumulator >= step {
                self.accumulator -= step;
                ticks += 1;
            }
            ticks
        }

        fn reset(&mut self) {
            self.last = Instant::now();
            self.accumulator = Duration::ZERO;
        }
    }

    fn open_store(dir: &Path) -> Box<dyn KeyValueStore> {
        match FileStore::open(dir) {
            Ok(store) => {
                log::info!("Saving progress in {}", dir.display());
                Box::new(store)
            }
            Err(e) => {
                log::warn!(
                    "Cannot use {} ({}), progress will not be saved",
                    dir.display(),
                    e
                );
                Box::new(MemoryStore::new())
            }
        }
    }

    fn render(view: &SessionSnapshot) {
        println!();
        match view.screen {
            Screen::Registration => {
                println!("Welcome to Word Builder! Tell us about yourself.");
                println!("  register <name> <age> <email>");
            }
            Screen::Start => {
                println!(
                    "Hi {}! Score {}, stars {}",
                    view.user_name.as_deref().unwrap_or("Player"),
                    view.total_score,
                    view.total_stars
                );
                println!(
                    "Difficulty: {}  Mode: {}  Sound: {}",
                    view.difficulty.as_str(),
                    view.game_mode.as_str(),
                    if view.sound_enabled { "on" } else { "off" }
                );
                println!("  difficulty <easy|medium|hard>, mode <story|practice>, sound, start, quit");
            }
            Screen::LevelSelect => {
                println!(
                    "{} levels: 1-{} unlocked of {} (current {})",
                    view.difficulty.as_str(),
                    view.unlocked_level,
                    view.level_count,
                    view.current_level
                );
                println!("  level <n>, difficulty <d>, home");
            }
            Screen::Play => {
                let Some(play) = &view.play else { return };
                println!("Level {}: {}", play.level, play.title);
                if play.phase == LevelPhase::Story {
                    println!("{}", play.story);
                    println!("Lesson: {}", play.lesson);
                    println!("  continue");
                    return;
                }
                println!(
                    "Word {}/{}  Time {}s  Hints {}  Score {}  Stars {}",
                    play.word_index + 1,
                    play.total_words,
                    play.time_remaining,
                    play.hints_remaining,
                    play.level_score,
                    play.level_stars
                );
                println!("Hint: {}", play.hint);
                let pool: Vec<String> = play
                    .available
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{}:{}", i, c))
                    .collect();
                println!("Letters: {}", pool.join(" "));
                let answer: String = play.selected.iter().collect();
                println!("Answer:  {} ({:?})", answer, play.outcome);
                println!("  pick <i>, drop <i>, hint, check, reset, next, home");
            }
            Screen::Complete => {
                println!(
                    "You finished every {} level! Score {}, stars {}",
                    view.difficulty.as_str(),
                    view.total_score,
                    view.total_stars
                );
                println!("  restart, home");
            }
        }
    }

    fn dispatch(session: &mut SessionController, line: &str) -> Result<(), String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(());
        };
        let args: Vec<&str> = parts.collect();
        let number = |i: usize| -> Result<u32, String> {
            args.get(i)
                .and_then(|a| a.parse().ok())
                .ok_or_else(|| "expected a number".to_string())
        };
        let index = |i: usize| -> Result<usize, String> {
            args.get(i)
                .and_then(|a| a.parse().ok())
                .ok_or_else(|| "expected a letter position".to_string())
        };

        match command {
            "register" => {
                let [name, age, email] = args.as_slice() else {
                    return Err("usage: register <name> <age> <email>".to_string());
                };
                let age = age.parse().map_err(|_| "age must be a number".to_string())?;
                session
                    .register(UserData::new(name, age, email))
                    .map_err(|e| e.to_string())
            }
            "difficulty" => {
                let d: Difficulty = args
                    .first()
                    .ok_or("usage: difficulty <easy|medium|hard>")?
                    .parse()
                    .map_err(|e: ParseError| e.to_string())?;
                session.select_difficulty(d).map_err(|e| e.to_string())
            }
            "mode" => {
                let mode: GameMode = args
                    .first()
                    .ok_or("usage: mode <story|practice>")?
                    .parse()
                    .map_err(|e: ParseError| e.to_string())?;
                session.select_game_mode(mode);
                Ok(())
            }
            "sound" => {
                session.toggle_sound();
                Ok(())
            }
            "start" => session.launch().map_err(|e| e.to_string()),
            "level" => {
                session.select_level(number(0)?).map_err(|e| e.to_string())
            }
            "continue" => session.continue_story().map(|_| ()).map_err(|e| e.to_string()),
            "pick" => session.select_letter(index(0)?).map(|_| ()).map_err(|e| e.to_string()),
            "drop" => session.deselect_letter(index(0)?).map(|_| ()).map_err(|e| e.to_string()),
            "hint" => match session.use_hint().map_err(|e| e.to_string())? {
                Some(letter) => {
                    println!("Hint placed '{}'", letter);
                    Ok(())
                }
                None => Err("no hint available".to_string()),
            },
            "check" => {
                let outcome = session.check().map_err(|e| e.to_string())?;
                println!("{:?}!", outcome);
                Ok(())
            }
            "reset" => session.reset_selection().map_err(|e| e.to_string()),
            "next" => {
                let advance = session.next_word().map_err(|e| e.to_string())?;
                println!("{:?}", advance);
                Ok(())
            }
            "home" => session.return_home().map_err(|e| e.to_string()),
            "restart" => session.restart().map_err(|e| e.to_string()),
            _ => Err(format!("unknown command '{}'", command)),
        }
    }

    pub fn run() -> io::Result<()> {
        let cli = Cli::parse();
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        log::info!("Session seed: {}", seed);

        let mut session = SessionController::new(
            open_store(&cli.data_dir),
            Box::new(BuiltinCatalog::new()),
            Box::new(LogSink),
            seed,
        );
        let mut clock = Clock::new();
        let stdin = io::stdin();

        loop {
            render(&session.snapshot());
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            // Time spent thinking counts against the round
            let handle = session.timer_handle();
            let ticks = clock.drain();
            if let Some(handle) = handle {
                for _ in 0..ticks {
                    if let TickOutcome::Expired(advance) = session.tick(handle) {
                        println!("Time's up! {:?}", advance);
                        break;
                    }
                }
            }
            if session.timer_handle().is_none() {
                clock.reset();
            }

            let line = line.trim();
            if line == "quit" {
                break;
            }
            if let Err(e) = dispatch(&mut session, line) {
                println!("! {}", e);
            }
            if handle != session.timer_handle() {
                clock.reset();
            }
        }

        log::info!("Goodbye");
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use word_builder::audio::NullSink;
        use word_builder::consts::PROGRESS_KEY;

        fn level_select() -> SessionController {
            let store = MemoryStore::with_entry(
                PROGRESS_KEY,
                r#"{"userData":{"name":"Ada","age":9,"email":"ada@example.com"}}"#,
            );
            let mut session = SessionController::new(
                Box::new(store),
                Box::new(BuiltinCatalog::new()),
                Box::new(NullSink),
                1,
            );
            dispatch(&mut session, "start").unwrap();
            session
        }

        #[test]
        fn test_data_dir_argument() {
            let cli = Cli::try_parse_from(["word-builder"]).unwrap();
            assert_eq!(cli.data_dir, PathBuf::from(".word-builder"));

            let cli = Cli::try_parse_from(["word-builder", "saves"]).unwrap();
            assert_eq!(cli.data_dir, PathBuf::from("saves"));

            assert!(Cli::try_parse_from(["word-builder", "a", "b"]).is_err());
        }

        #[test]
        fn test_level_number_out_of_u32_range_rejected() {
            let mut session = level_select();
            assert_eq!(
                dispatch(&mut session, "level 4294967297"),
                Err("expected a number".to_string())
            );
            assert_eq!(session.screen(), Screen::LevelSelect);

            dispatch(&mut session, "level 1").unwrap();
            assert_eq!(session.screen(), Screen::Play);
        }

        #[test]
        fn test_difficulty_names_parsed() {
            let mut session = level_select();
            let err = dispatch(&mut session, "difficulty nightmare").unwrap_err();
            assert!(err.contains("nightmare"));

            dispatch(&mut session, "difficulty HARD").unwrap();
            assert_eq!(session.snapshot().difficulty, Difficulty::Hard);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Word Builder (native) starting...");
    if let Err(e) = terminal::run() {
        log::error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
