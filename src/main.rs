//! Headless driver for a prayer session.
//!
//! Stands in for a touch screen: gesture input arrives as text commands on
//! stdin and every outbound [`Action`] is printed as one JSON line on stdout.
//! Useful for scripting sessions and for inspecting the exact visual targets
//! the controller produces.
//!
//! ```text
//! prayer-deck [config.toml]
//! ```
//!
//! # Commands
//!
//! - `start`: Load the configured deck and begin a new session
//! - `drag <dx> <dy>`: Move the finger (the first drag also lifts the card)
//! - `release <dx> <vx>`: Lift the finger at offset `dx` moving at `vx`
//! - `settle`: Report that the exit animation finished
//! - `end`: End the session early
//! - `notify`: Poll the notification scheduler with the local time
//! - `test-notify`: Show a test notification
//! - `show`: Print the current screen as text
//! - `quit`: Exit
//!
//! A session is started automatically on launch.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use prayer_deck::scheduler::{Notification, NotificationScheduler};
use prayer_deck::storage::DeckSource;
use prayer_deck::{handle_event, Action, Config, Event, Result, SessionController};

/// One parsed stdin line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Start,
    Drag { dx: f64, dy: f64 },
    Release { dx: f64, velocity_x: f64 },
    Settle,
    End,
    Notify,
    TestNotify,
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| "empty command".to_string())?;
        let mut number = |what: &str| -> std::result::Result<f64, String> {
            let value = words
                .next()
                .ok_or_else(|| format!("{name}: missing {what}"))?
                .parse::<f64>()
                .map_err(|e| format!("{name}: bad {what}: {e}"))?;
            if !value.is_finite() {
                return Err(format!("{name}: {what} must be a finite number"));
            }
            Ok(value)
        };

        Ok(match name {
            "start" => Self::Start,
            "drag" => Self::Drag {
                dx: number("dx")?,
                dy: number("dy")?,
            },
            "release" => Self::Release {
                dx: number("dx")?,
                velocity_x: number("vx")?,
            },
            "settle" => Self::Settle,
            "end" => Self::End,
            "notify" => Self::Notify,
            "test-notify" => Self::TestNotify,
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}'")),
        })
    }
}

/// Controller, scheduler and drag tracking for one run.
struct Driver {
    config: Config,
    controller: SessionController,
    scheduler: NotificationScheduler,
    dragging: bool,
}

impl Driver {
    fn new(config: Config) -> Result<Self> {
        let controller = prayer_deck::initialize(&config)?;
        let scheduler = config.scheduler()?;
        Ok(Self {
            config,
            controller,
            scheduler,
            dragging: false,
        })
    }

    /// Runs one command. Returns `false` when the driver should stop.
    fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Start => {
                let items = self.config.deck_source().load()?.iter().cloned().collect();
                self.dragging = false;
                self.dispatch(&Event::StartSession { items }, out)?;
            }
            Command::Drag { dx, dy } => {
                if !self.dragging {
                    self.dragging = true;
                    self.dispatch(&Event::DragStart, out)?;
                }
                self.dispatch(&Event::DragUpdate { dx, dy }, out)?;
            }
            Command::Release { dx, velocity_x } => {
                self.dragging = false;
                self.dispatch(&Event::DragEnd { dx, velocity_x }, out)?;
            }
            Command::Settle => self.dispatch(&Event::TransitionSettled, out)?,
            Command::End => self.dispatch(&Event::EndSessionEarly, out)?,
            Command::Notify => {
                let now = chrono::Local::now().time();
                let notification = self.scheduler.poll(now);
                print_notification(notification.as_ref(), out)?;
            }
            Command::TestNotify => {
                let notification = self.scheduler.trigger_test();
                print_notification(notification.as_ref(), out)?;
            }
            Command::Show => match self.controller.view_model() {
                Some(vm) => write!(out, "{}", prayer_deck::ui::render_text(&vm))?,
                None => writeln!(out, "no session")?,
            },
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn dispatch(&mut self, event: &Event, out: &mut impl Write) -> Result<()> {
        let (_, actions) = handle_event(&mut self.controller, event)?;
        for action in &actions {
            self.scheduler.apply_session_action(action);
            print_action(action, out)?;
        }
        Ok(())
    }
}

fn print_action(action: &Action, out: &mut impl Write) -> Result<()> {
    match serde_json::to_string(action) {
        Ok(line) => writeln!(out, "{line}")?,
        Err(e) => tracing::debug!(error = %e, "failed to serialize action"),
    }
    Ok(())
}

fn print_notification(notification: Option<&Notification>, out: &mut impl Write) -> Result<()> {
    let Some(notification) = notification else {
        writeln!(out, "{{\"notification\":null}}")?;
        return Ok(());
    };
    match serde_json::to_string(notification) {
        Ok(line) => writeln!(out, "{{\"notification\":{line}}}")?,
        Err(e) => tracing::debug!(error = %e, "failed to serialize notification"),
    }
    Ok(())
}

fn run() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    prayer_deck::observability::init_tracing(&config);

    let span = tracing::debug_span!("driver");
    let _guard = span.entered();

    let mut driver = Driver::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.execute(Command::Start, &mut out)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match driver.execute(command, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("error: {e}"),
        }
        out.flush()?;
    }

    tracing::debug!("driver finished");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("prayer-deck: {e}");
            ExitCode::FAILURE
        }
    }
}
