//! Terminal Quote Viewer
//!
//! Raw-mode event loop that renders the home and about tabs with ratatui and
//! hands category and command selection to inquire menus, suspending the
//! full-screen UI while a menu is open.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use inquire::{InquireError, Select};
use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};

use super::{
    commands::{CommandParser, CommandResult, QuoteCommand},
    config::AppConfig,
    view::{about_lines, category_entries, HomeView, Tab, NO_CATEGORIES},
};
use crate::store::QuoteStore;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const KEY_HINTS: &str = "n next · c categories · / menu · Tab switch · ? help · q quit";

/// Full-screen quote viewer
pub struct QuoteApp<R: Rng = ThreadRng> {
    config: AppConfig,
    store: QuoteStore<R>,
    tab: Tab,
    show_help: bool,
    notice: Option<String>,
    should_exit: bool,
}

impl<R: Rng> QuoteApp<R> {
    /// Create a viewer over an already loaded store
    pub fn new(config: AppConfig, store: QuoteStore<R>) -> Self {
        Self {
            config,
            store,
            tab: Tab::default(),
            show_help: false,
            notice: None,
            should_exit: false,
        }
    }

    /// Run the viewer until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let result = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(mut terminal) => {
                info!("Quote viewer started");
                let result = self.run_loop(&mut terminal);
                let _ = terminal.show_cursor();
                result
            }
            Err(e) => Err(e),
        };

        // Always restore the terminal on exit
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        result
    }

    fn run_loop(&mut self, terminal: &mut CrosstermTerminal) -> io::Result<()> {
        while !self.should_exit {
            terminal.draw(|f| self.draw(f))?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let result = if key.code == KeyCode::Char('/') {
                    self.show_command_menu(terminal)?
                } else if let Some(command) = QuoteCommand::from_key(key) {
                    self.dispatch(command, terminal)?
                } else {
                    CommandResult::NoOp
                };
                self.apply_result(result);
            }
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        command: QuoteCommand,
        terminal: &mut CrosstermTerminal,
    ) -> io::Result<CommandResult> {
        debug!("Executing command {}", command);
        match command {
            QuoteCommand::Categories => self.show_category_menu(terminal),
            other => Ok(self.execute_command(other)),
        }
    }

    /// Execute every command that does not need an interactive menu
    pub fn execute_command(&mut self, command: QuoteCommand) -> CommandResult {
        match command {
            QuoteCommand::Next => {
                if self.tab != Tab::Home || !self.store.has_data() {
                    return CommandResult::NoOp;
                }
                self.store.next_quote();
                CommandResult::NoOp
            }
            QuoteCommand::Home => {
                self.tab = Tab::Home;
                CommandResult::NoOp
            }
            QuoteCommand::About => {
                self.tab = Tab::About;
                CommandResult::NoOp
            }
            QuoteCommand::SwitchTab => {
                self.tab = self.tab.toggle();
                CommandResult::NoOp
            }
            QuoteCommand::Help => {
                self.show_help = !self.show_help;
                CommandResult::NoOp
            }
            QuoteCommand::Quit => {
                self.should_exit = true;
                CommandResult::Exit
            }
            QuoteCommand::Categories => CommandResult::Info("Press 'c' to choose a category".to_string()),
        }
    }

    /// Apply a category picked from the menu; `None` means the menu was cancelled
    pub fn select_category(&mut self, category: Option<&str>) -> CommandResult {
        let Some(category) = category else {
            return CommandResult::NoOp;
        };

        if !self.store.has_data() {
            return CommandResult::Warning("No quote data loaded".to_string());
        }

        self.store.filter_quotes(category);
        self.tab = Tab::Home;
        CommandResult::Info(format!("Category: {}", category))
    }

    fn apply_result(&mut self, result: CommandResult) {
        match &result {
            CommandResult::Warning(msg) => {
                warn!("{}", msg);
                self.notice = Some(msg.clone());
            }
            CommandResult::Info(msg) => self.notice = Some(msg.clone()),
            CommandResult::Exit => info!("Quote viewer exiting"),
            CommandResult::NoOp => {}
        }
    }

    /// Show the category picker with quote counts
    fn show_category_menu(&mut self, terminal: &mut CrosstermTerminal) -> io::Result<CommandResult> {
        let entries = category_entries(&self.store);
        if entries.is_empty() {
            return Ok(CommandResult::Warning(NO_CATEGORIES.to_string()));
        }

        let selection = suspended(terminal, || {
            Select::new("Choose a category:", entries)
                .with_page_size(12)
                .with_help_message("↑↓ to move, Enter to select, Esc to close")
                .prompt()
        })?;

        match selection {
            Ok(entry) => Ok(self.select_category(Some(entry.name.as_str()))),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(self.select_category(None))
            }
            Err(e) => Ok(CommandResult::Warning(format!("Category menu error: {}", e))),
        }
    }

    /// Show interactive command menu
    fn show_command_menu(&mut self, terminal: &mut CrosstermTerminal) -> io::Result<CommandResult> {
        let commands = QuoteCommand::get_command_menu();

        let selection = suspended(terminal, || {
            Select::new("Select command:", commands)
                .with_page_size(10)
                .with_help_message("Use arrow keys to navigate, Enter to select, Esc to cancel")
                .prompt()
        })?;

        match selection {
            Ok(entry) => match CommandParser::parse_command_line(&entry) {
                Some(command) => self.dispatch(command, terminal),
                None => Ok(CommandResult::NoOp),
            },
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(CommandResult::NoOp)
            }
            Err(e) => Ok(CommandResult::Warning(format!("Command menu error: {}", e))),
        }
    }

    pub fn store(&self) -> &QuoteStore<R> {
        &self.store
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(f.size());

        let frame_color = self.config.get_frame_color();
        let tabs = Tabs::new(Tab::titles())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(frame_color))
                    .title(self.config.title.as_str()),
            )
            .select(self.tab.index())
            .highlight_style(Style::default().fg(frame_color).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[0]);

        match self.tab {
            Tab::Home => self.draw_home(f, chunks[1]),
            Tab::About => self.draw_about(f, chunks[1]),
        }

        let footer = self.notice.as_deref().unwrap_or(KEY_HINTS);
        f.render_widget(
            Paragraph::new(footer).style(Style::default().fg(Color::Gray)),
            chunks[2],
        );

        if self.show_help {
            self.draw_help(f);
        }
    }

    fn draw_home(&self, f: &mut Frame, area: Rect) {
        let view = HomeView::new(&self.config, &self.store.snapshot());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (card_color, text_color) = if view.is_error {
            (self.config.get_error_color(), self.config.get_error_color())
        } else {
            (self.config.get_frame_color(), self.config.get_text_color())
        };

        let card = Paragraph::new(view.quote.as_str())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(text_color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(card_color)),
            );
        f.render_widget(card, chunks[0]);

        let button_style = if view.next_enabled {
            Style::default()
                .fg(Color::White)
                .bg(self.config.get_frame_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new("Next (n)")
            .alignment(Alignment::Center)
            .style(button_style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[1]);

        let status_color = if view.is_error {
            self.config.get_error_color()
        } else {
            Color::Gray
        };
        f.render_widget(
            Paragraph::new(view.status_line.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(status_color)),
            chunks[2],
        );
    }

    fn draw_about(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = about_lines(&self.config).into_iter().map(Line::from).collect();
        let about = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.config.get_frame_color()))
                    .title("About"),
            );
        f.render_widget(about, area);
    }

    fn draw_help(&self, f: &mut Frame) {
        let help = QuoteCommand::get_help_text();
        let area = centered_rect(60, help.len() as u16 + 2, f.size());
        let lines: Vec<Line> = help.into_iter().map(Line::from).collect();

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.config.get_frame_color()))
                    .title("Keys"),
            ),
            area,
        );
    }
}

/// Leave the full-screen UI while `menu` runs, then restore it
fn suspended<T>(terminal: &mut CrosstermTerminal, menu: impl FnOnce() -> T) -> io::Result<T> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    let value = menu();

    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    terminal.clear()?;
    Ok(value)
}

/// Rectangle of the given width percentage and height centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "[A]\na1\na2\n[Empty]\n[B]\nb1\n";

    fn app_with(text: &str) -> QuoteApp<StdRng> {
        let mut store = QuoteStore::with_rng(StdRng::seed_from_u64(3));
        store.load(text);
        QuoteApp::new(AppConfig::default(), store)
    }

    #[test]
    fn test_next_changes_quote_on_home() {
        let mut app = app_with(SAMPLE);
        app.select_category(Some("A"));
        let before = app.store().current_quote().to_string();

        assert_eq!(app.execute_command(QuoteCommand::Next), CommandResult::NoOp);
        assert_ne!(app.store().current_quote(), before);
    }

    #[test]
    fn test_next_ignored_on_about_tab() {
        let mut app = app_with(SAMPLE);
        let before = app.store().snapshot();
        app.execute_command(QuoteCommand::About);
        app.execute_command(QuoteCommand::Next);
        assert_eq!(app.store().snapshot(), before);
    }

    #[test]
    fn test_next_disabled_without_data() {
        let mut app = app_with("");
        let before = app.store().current_quote().to_string();
        app.execute_command(QuoteCommand::Next);
        assert_eq!(app.store().current_quote(), before);
    }

    #[test]
    fn test_select_category() {
        let mut app = app_with(SAMPLE);
        app.execute_command(QuoteCommand::About);

        let result = app.select_category(Some("B"));
        assert_eq!(result, CommandResult::Info("Category: B".to_string()));
        assert_eq!(app.tab(), Tab::Home);
        assert_eq!(app.store().active_category(), Some("B"));
        assert_eq!(app.store().current_quote(), "b1");

        assert_eq!(app.select_category(None), CommandResult::NoOp);
        assert_eq!(app.store().active_category(), Some("B"));
    }

    #[test]
    fn test_select_category_without_data() {
        let mut app = app_with("");
        let result = app.select_category(Some("A"));
        assert!(matches!(result, CommandResult::Warning(_)));
        assert_eq!(app.store().active_category(), None);
    }

    #[test]
    fn test_tab_and_help_commands() {
        let mut app = app_with(SAMPLE);
        app.execute_command(QuoteCommand::SwitchTab);
        assert_eq!(app.tab(), Tab::About);
        app.execute_command(QuoteCommand::Home);
        assert_eq!(app.tab(), Tab::Home);

        app.execute_command(QuoteCommand::Help);
        assert!(app.show_help);
        app.execute_command(QuoteCommand::Help);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(SAMPLE);
        assert!(app.execute_command(QuoteCommand::Quit).is_exit());
        assert!(app.should_exit());
    }

    #[test]
    fn test_apply_result_sets_notice() {
        let mut app = app_with(SAMPLE);
        app.apply_result(CommandResult::Warning(NO_CATEGORIES.to_string()));
        assert_eq!(app.notice.as_deref(), Some(NO_CATEGORIES));
        app.apply_result(CommandResult::NoOp);
        assert_eq!(app.notice.as_deref(), Some(NO_CATEGORIES));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 10, area);
        assert_eq!(rect, Rect::new(20, 15, 60, 10));

        let small = centered_rect(60, 80, Rect::new(0, 0, 10, 5));
        assert_eq!(small.height, 5);
    }
}
