use std::path::Path;
use std::sync::mpsc;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use dex_core::{update, AppState, AppViewModel, Msg};
use dex_logging::{dex_info, DEFAULT_LOG_FILE};
use log::LevelFilter;

use super::config::{load_settings, CONFIG_FILENAME};
use super::effects::{EffectExecutor, EffectRunner};
use super::ui;
use super::ui::input::{clamp_cursor, map_key, InputAction};

pub fn run_app() -> anyhow::Result<()> {
    dex_logging::initialize(Path::new(DEFAULT_LOG_FILE), LevelFilter::Info);

    let settings = load_settings(Path::new(CONFIG_FILENAME));
    dex_info!("Starting with {:?}", settings.catalog);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings.fetch, msg_tx)?;
    let mut app = App::new(AppState::with_config(settings.catalog), runner);
    app.dispatch(Msg::Started);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &msg_rx);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<EffectRunner>,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    while app.running {
        if app.needs_render {
            let view = app.view();
            terminal.draw(|frame| ui::render::render(frame, &view, app.cursor))?;
            app.needs_render = false;
        }

        if event::poll(ui::constants::POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => app.needs_render = true,
                _ => {}
            }
        }

        // Engine results queued since the last pass.
        while let Ok(msg) = msg_rx.try_recv() {
            app.dispatch(msg);
        }
    }
    dex_info!("Quit requested");
    Ok(())
}

/// Owns the core state and the UI-local list cursor.
struct App<E: EffectExecutor> {
    state: AppState,
    executor: E,
    cursor: usize,
    needs_render: bool,
    running: bool,
}

impl<E: EffectExecutor> App<E> {
    fn new(state: AppState, executor: E) -> Self {
        Self {
            state,
            executor,
            cursor: 0,
            needs_render: true,
            running: true,
        }
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.cursor = clamp_cursor(self.cursor, self.view().active_rows().len());
        if !effects.is_empty() {
            self.executor.execute(effects);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let view = self.view();
        match map_key(key, &view, self.cursor) {
            InputAction::Dispatch(msg) => self.dispatch(msg),
            InputAction::MoveCursor(delta) => {
                let moved = self.cursor.saturating_add_signed(delta);
                self.cursor = clamp_cursor(moved, view.active_rows().len());
                self.needs_render = true;
            }
            InputAction::Quit => self.running = false,
            InputAction::Ignore => {}
        }
    }
}
