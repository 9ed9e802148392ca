//! Top-level screens
//!
//! The app starts on the menu. Start stays locked until every rules page
//! has been read; after that the session owns the frame.

use crate::catalog::Catalog;
use crate::consts::RULES_PAGE_COUNT;
use crate::platform::FrameInput;
use crate::sim::{GameEvent, GameState, tick};
use crate::ui::{MenuAction, layout};

/// Which screen owns the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    /// Paging through the rules, 0-based
    Rules { page: u32 },
    Game,
}

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Continue,
    Quit,
}

pub struct App {
    screen: Screen,
    rules_read: bool,
    game: GameState,
}

impl App {
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            screen: Screen::Menu,
            rules_read: false,
            game: GameState::new(catalog, seed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// All rules pages have been seen, so Start is unlocked
    pub fn rules_read(&self) -> bool {
        self.rules_read
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// A quiz overlay is on screen
    pub fn quiz_open(&self) -> bool {
        self.screen == Screen::Game && self.game.quiz.is_active()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game.drain_events()
    }

    /// Run one frame
    pub fn frame(&mut self, input: &FrameInput) -> AppStatus {
        if input.quit_requested() {
            log::info!("Quit requested");
            return AppStatus::Quit;
        }

        match self.screen {
            Screen::Menu => self.menu_frame(input),
            Screen::Rules { page } => self.rules_frame(page, input),
            Screen::Game => tick(&mut self.game, input),
        }
        AppStatus::Continue
    }

    fn menu_frame(&mut self, input: &FrameInput) {
        for pos in input.events.iter().filter_map(|e| e.left_click()) {
            match layout::menu_action(pos, self.rules_read) {
                Some(MenuAction::Start) => {
                    self.game.start_new_session();
                    self.screen = Screen::Game;
                    return;
                }
                Some(MenuAction::Rules) => {
                    log::info!("Opening rules");
                    self.screen = Screen::Rules { page: 0 };
                    return;
                }
                None => {
                    if layout::start_button().contains(pos) {
                        log::debug!("Start is locked until the rules are read");
                    }
                }
            }
        }
    }

    fn rules_frame(&mut self, mut page: u32, input: &FrameInput) {
        for pos in input.events.iter().filter_map(|e| e.left_click()) {
            if !layout::rules_next_hit(pos) {
                continue;
            }
            page += 1;
            if page >= RULES_PAGE_COUNT {
                log::info!("Rules read, start unlocked");
                self.rules_read = true;
                self.screen = Screen::Menu;
                return;
            }
        }
        self.screen = Screen::Rules { page };
    }
}
