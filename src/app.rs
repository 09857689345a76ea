//! Application state and event loop.
//!
//! `App` is the screen controller: it loads all five datasets eagerly at
//! construction, owns the active-tab state, and applies app events. `run`
//! drives the crossterm event stream until the user quits.

use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::data::{Datasets, StatsProvider};
use crate::error::{RentscopeError, Result};
use crate::events::{map_event, AppEvent};
use crate::state::{ScreenState, Tab};
use crate::ui;

// ============================================================================
// App
// ============================================================================

/// The statistics screen: eagerly loaded datasets plus the active-tab state
/// and the content scroll offset.
#[derive(Debug, Clone)]
pub struct App {
    datasets: Datasets,
    screen: ScreenState,
    scroll: u16,
    should_quit: bool,
}

impl App {
    /// Create the app, loading every dataset from the provider up front.
    ///
    /// The datasets are held unchanged for the lifetime of the app; only the
    /// tab selection and scroll offset mutate afterwards.
    pub fn new(provider: &dyn StatsProvider) -> Self {
        Self {
            datasets: Datasets::load(provider),
            screen: ScreenState::new(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// The loaded datasets
    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// The currently active tab
    pub fn active_tab(&self) -> Tab {
        self.screen.active()
    }

    /// Scroll offset of the active tab's content, in lines
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Whether the event loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one app event.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectTab(tab) => self.select_tab(tab),
            AppEvent::NextTab => self.select_tab(self.screen.active().next()),
            AppEvent::PrevTab => self.select_tab(self.screen.active().prev()),
            AppEvent::ScrollDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            AppEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Redraw => {}
        }
    }

    /// Select a tab and reset the scroll offset when the tab actually
    /// changes. Reselecting the active tab leaves all state untouched.
    fn select_tab(&mut self, tab: Tab) {
        if tab != self.screen.active() {
            self.screen.select(tab);
            self.scroll = 0;
        }
    }

    /// Scroll limit for the active tab's content.
    ///
    /// Only the popular tab outgrows a small terminal with the mock data;
    /// the other tabs' content is fixed-height and stays pinned.
    fn max_scroll(&self) -> u16 {
        match self.active_tab() {
            Tab::Popular => {
                let entries = self
                    .datasets
                    .popular_listings
                    .len()
                    .min(crate::ui::screens::popular::TOP_LISTING_COUNT)
                    as u16;
                // 3 lines per entry plus separators, minus the last visible line
                (entries * 4).saturating_sub(2)
            }
            _ => 0,
        }
    }
}

// ============================================================================
// Event Loop
// ============================================================================

/// Draw one frame of the dashboard.
///
/// Generic over backends whose draw error is `io::Error` (both
/// `CrosstermBackend` and `TestBackend`), so the `?` conversion into
/// [`RentscopeError::Terminal`] applies.
pub fn draw_frame<B>(terminal: &mut Terminal<B>, app: &App) -> Result<()>
where
    B: Backend,
    RentscopeError: From<B::Error>,
{
    terminal.draw(|frame| ui::render(frame, app))?;
    Ok(())
}

/// Drive the dashboard until the user quits.
///
/// Draws a frame, waits for the next terminal event, applies it, repeats.
/// There is no timer and no background work; the screen only changes in
/// response to input.
pub async fn run<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    RentscopeError: From<B::Error>,
{
    let mut events = EventStream::new();
    info!("dashboard started");

    while !app.should_quit() {
        draw_frame(terminal, app)?;

        match events.next().await {
            Some(Ok(event)) => {
                if let Some(app_event) = map_event(&event) {
                    app.handle(app_event);
                }
            }
            Some(Err(err)) => {
                return Err(RentscopeError::EventStream {
                    message: err.to_string(),
                });
            }
            None => break, // stdin closed
        }
    }

    info!("dashboard exiting");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
