use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use landing_core::{update, AppState, Msg};
use landing_engine::SearchSettings;
use landing_logging::{landing_debug, landing_info};

use super::cli::CliArgs;
use super::content;
use super::effects::EffectRunner;
use super::input::{self, AppEvent};
use super::location::AddressBar;
use super::ui;

const TICK: Duration = Duration::from_millis(50);
const PROMPT: &str = "> ";

pub fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let runner = EffectRunner::new(SearchSettings::new(args.endpoint.clone()))
        .context("starting search engine")?;
    let mut page = Page::new(runner, AddressBar::new("/", &args.location));
    let mut out = io::stdout().lock();

    page.dispatch(Msg::ContentLoaded(content::load_catalog_or_empty(
        args.content.as_deref(),
    )));
    page.mount();
    page.flush(&mut out)?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    thread::Builder::new()
        .name("landing-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                for event in input::parse_line(&line) {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
            }
            let _ = event_tx.send(AppEvent::Quit);
        })
        .context("spawning input thread")?;

    loop {
        match event_rx.recv_timeout(TICK) {
            Ok(AppEvent::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(event) => page.handle(event),
            Err(RecvTimeoutError::Timeout) => {}
        }
        page.drain_engine();
        page.flush(&mut out)?;
    }

    landing_info!(
        "Leaving at {} ({} history entries)",
        page.location.href(),
        page.location.history_len()
    );
    Ok(())
}

/// One page view: state, its location and the effect runner.
struct Page {
    state: AppState,
    location: AddressBar,
    runner: EffectRunner,
    notices: Vec<String>,
}

impl Page {
    fn new(runner: EffectRunner, location: AddressBar) -> Self {
        Self {
            state: AppState::new(),
            location,
            runner,
            notices: Vec::new(),
        }
    }

    /// Reads the current location, as on first render.
    fn mount(&mut self) {
        let query = self.location.query().to_string();
        self.dispatch(Msg::LocationChanged(query));
    }

    fn dispatch(&mut self, msg: Msg) {
        landing_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects, &mut self.location);
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Core(msg) => self.dispatch(msg),
            AppEvent::Navigate(query) => {
                self.location.navigate(&query);
                self.mount();
            }
            AppEvent::Back => {
                if self.location.back() {
                    self.mount();
                } else {
                    self.notices.push("Already at the first page.".to_string());
                }
            }
            AppEvent::Help => self.notices.push(input::HELP.to_string()),
            AppEvent::Unknown(name) => self
                .notices
                .push(format!("Unknown command /{name}; try /help")),
            AppEvent::Quit => {}
        }
    }

    fn drain_engine(&mut self) {
        while let Some(msg) = self.runner.poll() {
            self.dispatch(msg);
        }
    }

    /// Redraws when state changed; prints pending notices either way.
    fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        let dirty = self.state.consume_dirty();
        if !dirty && self.notices.is_empty() {
            return Ok(());
        }
        if dirty {
            for line in ui::render::render(&self.state.view(), &self.location.href()) {
                writeln!(out, "{line}")?;
            }
        }
        for notice in self.notices.drain(..) {
            writeln!(out, "{notice}")?;
        }
        write!(out, "{PROMPT}")?;
        out.flush()
    }
}
