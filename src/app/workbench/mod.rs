//! Workbench: owns the store and the views, turns terminal events into store
//! actions and runs the effects the store hands back.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::debug;

use super::theme::UiTheme;
use crate::core::ClickListeners;
use crate::kernel::{Action, AppState, Effect, FocusTarget, Store};
use crate::models::FileTree;
use crate::services::Settings;
use crate::tui::view::{EventResult, View};
use crate::views::{ContextMenuView, ExplorerView, WorkbenchLayout};

mod input;
mod render;

const LOG_BUFFER_CAP: usize = 2000;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;

pub struct Workbench {
    store: Store,
    explorer: ExplorerView,
    context_menu: ContextMenuView,
    click_listeners: ClickListeners<Action>,
    pending_effects: Vec<Effect>,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
    theme: UiTheme,
    layout: WorkbenchLayout,
}

impl Workbench {
    pub fn new(tree: FileTree, settings: &Settings, log_rx: Option<Receiver<String>>) -> Self {
        let mut theme = UiTheme::default();
        if !cfg!(test) {
            theme.adapt_to_terminal_capabilities();
        }

        let click_listeners = ClickListeners::new();
        let mut explorer = ExplorerView::new();
        explorer.mount(&click_listeners);

        Self {
            store: Store::new(AppState::new(tree, &settings.layout)),
            explorer,
            context_menu: ContextMenuView::new(),
            click_listeners,
            pending_effects: Vec::new(),
            log_rx,
            logs: VecDeque::with_capacity(256),
            theme,
            layout: WorkbenchLayout::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn logs(&self) -> &VecDeque<String> {
        &self.logs
    }

    /// Runs `action` through the store and queues its effects for after the
    /// next frame. Returns whether a redraw is needed.
    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        self.pending_effects.extend(result.effects);
        result.state_changed
    }

    /// Pulls new log lines for the terminal panel.
    pub fn tick(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut drained = 0usize;
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(line) => {
                    changed = true;
                    drained += 1;
                    self.logs.push_back(line);
                    while self.logs.len() > LOG_BUFFER_CAP {
                        self.logs.pop_front();
                    }
                    if drained >= MAX_LOG_DRAIN_PER_TICK {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }

        changed
    }

    /// Work that needs the frame just drawn: the explorer's real height and
    /// the store's queued effects. Returns whether another frame is needed.
    pub fn after_render(&mut self) -> bool {
        let mut changed = false;

        if let Some(height) = self.explorer.view_height() {
            if height != self.store.state().explorer.view_height {
                changed |= self.dispatch(Action::ExplorerSetViewHeight { height });
            }
        }

        for effect in std::mem::take(&mut self.pending_effects) {
            changed |= self.run_effect(effect);
        }
        changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::FocusRenameInput { id } => {
                if self.store.state().explorer.editing() != Some(&id) {
                    debug!(id = %id, "rename input gone before focus");
                    return false;
                }
                let mut changed = self.dispatch(Action::SetFocus(FocusTarget::Explorer));
                changed |= self.dispatch(Action::RenameSelectAll);
                changed
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &Event) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}
