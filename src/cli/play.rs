//! Play command implementation - interactive TUI.

// TUI layout code uses intentional casts for cell geometry
#![allow(clippy::cast_possible_truncation)]

use super::{CliError, RuleArgs, seed_or_clock};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notopoly::game::{GameState, GroupId};
use notopoly::render::{GRID_SIZE, cell_at, die_face, house_glyph};
use notopoly::{Action, Session};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::time::Duration;

/// Columns per board cell.
const CELL_WIDTH: usize = 9;

/// Group colours, indexed by group id.
const GROUP_COLORS: [Color; 13] = [
    Color::Rgb(0xff, 0x88, 0x88),
    Color::Rgb(0x88, 0x88, 0xff),
    Color::Rgb(0x88, 0xff, 0x88),
    Color::Rgb(0xff, 0xff, 0x88),
    Color::Rgb(0xff, 0x88, 0xff),
    Color::Rgb(0x88, 0xff, 0xff),
    Color::Rgb(0x88, 0xbb, 0xff),
    Color::Rgb(0xff, 0xbb, 0x88),
    Color::Rgb(0xff, 0x88, 0xbb),
    Color::Rgb(0xbb, 0x88, 0xff),
    Color::Rgb(0xbb, 0xff, 0x44),
    Color::Rgb(0xdd, 0x66, 0xff),
    Color::Rgb(0x44, 0xbb, 0x66),
];

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the game cannot be set up or the terminal fails.
pub(crate) fn execute(seed: Option<u64>, rules: &RuleArgs) -> Result<(), CliError> {
    let seed = seed_or_clock(seed);
    let session = Session::standard(rules.to_config(), seed)?;
    log::info!("starting game with dice seed {seed}");

    run_tui(App::new(session))
}

/// App state for the TUI.
struct App {
    session: Session,
}

impl App {
    fn new(session: Session) -> Self {
        Self { session }
    }

    fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Handle a key press. Returns `false` when the user quits.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => false,
            KeyCode::Char(c) => {
                // Refusals are logged by the session and shown in the log panel
                let _ = self.session.act_key(c);
                true
            }
            _ => true,
        }
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(24),    // Board and players
            Constraint::Length(8),  // Log
            Constraint::Length(3),  // Controls
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((CELL_WIDTH * GRID_SIZE as usize) as u16 + 2),
            Constraint::Min(30),
        ])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);
    render_players(f, main_chunks[1], app);
    render_log(f, chunks[2], app);
    render_controls(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let active = state.active_player();

    let dice = match state.turn().last_roll() {
        Some(roll) => format!(
            "{} rolled {} {}",
            active.name,
            die_face(roll.die1()),
            die_face(roll.die2())
        ),
        None => "roll the dice!".to_string(),
    };

    let title = format!(
        " totally not monopoly | it is {}'s ({}) turn | {dice} ",
        active.name, active.token
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn group_color(group: Option<GroupId>) -> Color {
    group
        .and_then(|g| GROUP_COLORS.get(usize::from(g)).copied())
        .unwrap_or(Color::White)
}

/// Truncate or pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let mut lines: Vec<Line> = Vec::new();

    for row in 1..=GRID_SIZE {
        let mut names = Vec::new();
        let mut tokens = Vec::new();

        for col in 1..=GRID_SIZE {
            let Some(index) = cell_at(row, col) else {
                names.push(Span::raw(" ".repeat(CELL_WIDTH)));
                tokens.push(Span::raw(" ".repeat(CELL_WIDTH)));
                continue;
            };

            let property = &state.board().properties()[index];
            let mut style = Style::default().fg(group_color(property.group));
            if state.owner_of(index).is_some() {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if index == state.active_player().position {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            names.push(Span::styled(fit(&property.name, CELL_WIDTH - 1), style));
            names.push(Span::raw(" "));

            let here: String = state
                .players()
                .iter()
                .filter(|p| p.position == index)
                .map(|p| p.token.as_str())
                .collect();
            // Emoji tokens are two columns wide
            let used = 2 * state.players().iter().filter(|p| p.position == index).count();
            tokens.push(Span::raw(here));
            tokens.push(Span::raw(" ".repeat(CELL_WIDTH.saturating_sub(used))));
        }

        lines.push(Line::from(names));
        lines.push(Line::from(tokens));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board, area);
}

fn render_players(f: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let mut lines = Vec::new();

    lines.push(Line::from(""));

    for (i, player) in state.players().iter().enumerate() {
        let marker = if i == state.active_id() { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{} {}", player.name, player.token),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ${}", player.money)),
        ]));

        let cell = &state.board().properties()[player.position];
        lines.push(Line::from(format!("    on {}", cell.name)));

        for owned in &player.properties {
            let property = &state.board().properties()[owned.index];
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(property.name.clone(), Style::default().fg(group_color(property.group))),
                Span::raw(format!(" {}", house_glyph(owned.houses))),
            ]));
        }
        lines.push(Line::from(""));
    }

    let players = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Players "))
        .wrap(Wrap { trim: false });

    f.render_widget(players, area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = app
        .session
        .log()
        .rev()
        .take(visible)
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.reverse();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));

    f.render_widget(log, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let mut spans = vec![Span::raw(" ")];

    for action in Action::ALL {
        let style = if state.check(action).is_ok() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}] {}", action.key(), action.label()), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("[q] quit", Style::default().fg(Color::Gray)));

    let controls = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    f.render_widget(controls, area);
}
