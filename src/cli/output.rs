//! Output formatting utilities for CLI.

// Text tables favour format! + push_str for readability
#![allow(clippy::format_push_string)]

use notopoly::game::{Board, GroupId, Money, TurnPhase};
use notopoly::render::house_glyph;
use notopoly::{DiceRoll, RuleConfig, Session};
use serde::Serialize;

/// JSON-serializable snapshot of a session.
#[derive(Debug, Serialize)]
pub(super) struct JsonGame<'a> {
    /// Dice seed.
    pub(super) seed: u64,
    /// Index of the player whose turn it is.
    pub(super) active_player: usize,
    /// Turn phase of the active player.
    pub(super) phase: TurnPhase,
    /// Most recent roll this turn.
    pub(super) last_roll: Option<DiceRoll>,
    /// Rules in effect.
    pub(super) rules: RuleConfig,
    /// Per-player state.
    pub(super) players: Vec<JsonPlayer<'a>>,
    /// Session log, oldest first.
    pub(super) log: Vec<&'a str>,
}

/// JSON-serializable player.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayer<'a> {
    /// Display name.
    pub(super) name: &'a str,
    /// Board token.
    pub(super) token: &'a str,
    /// Board index.
    pub(super) position: usize,
    /// Name of the cell the player stands on.
    pub(super) cell: &'a str,
    /// Balance.
    pub(super) money: Money,
    /// Owned properties in display order.
    pub(super) properties: Vec<JsonOwned<'a>>,
}

/// JSON-serializable owned property.
#[derive(Debug, Serialize)]
pub(super) struct JsonOwned<'a> {
    /// Board index.
    pub(super) index: usize,
    /// Property name.
    pub(super) name: &'a str,
    /// Group id.
    pub(super) group: Option<GroupId>,
    /// Houses built.
    pub(super) houses: u8,
}

impl<'a> JsonGame<'a> {
    /// Snapshot a session.
    pub(super) fn from_session(session: &'a Session) -> Self {
        let state = session.state();
        let board = state.board();
        Self {
            seed: session.seed(),
            active_player: state.active_id(),
            phase: state.turn().phase(),
            last_roll: state.turn().last_roll(),
            rules: *state.rules(),
            players: state
                .players()
                .iter()
                .map(|p| JsonPlayer {
                    name: &p.name,
                    token: &p.token,
                    position: p.position,
                    cell: &board.properties()[p.position].name,
                    money: p.money,
                    properties: p
                        .properties
                        .iter()
                        .map(|owned| {
                            let property = &board.properties()[owned.index];
                            JsonOwned {
                                index: owned.index,
                                name: &property.name,
                                group: property.group,
                                houses: owned.houses,
                            }
                        })
                        .collect(),
                })
                .collect(),
            log: session.log().collect(),
        }
    }
}

/// JSON-serializable board cell.
#[derive(Debug, Serialize)]
pub(super) struct JsonCell<'a> {
    /// Board index.
    pub(super) index: usize,
    /// Cell name.
    pub(super) name: &'a str,
    /// Group id (null for Go).
    pub(super) group: Option<GroupId>,
    /// Purchase price (null when unpurchasable).
    pub(super) cost: Option<Money>,
    /// Price per house.
    pub(super) house_cost: Money,
    /// Maximum houses.
    pub(super) max_houses: u8,
    /// Rent by house count.
    pub(super) rent: [Money; 6],
}

/// Every cell of `board` in track order.
pub(super) fn json_board(board: &Board) -> Vec<JsonCell<'_>> {
    board
        .properties()
        .iter()
        .enumerate()
        .map(|(index, p)| JsonCell {
            index,
            name: &p.name,
            group: p.group,
            cost: p.cost,
            house_cost: p.house_cost,
            max_houses: p.max_houses,
            rent: p.rent,
        })
        .collect()
}

/// Format the board as a human-readable table.
pub(super) fn format_board_text(board: &Board) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>3}  {:<12} {:>5} {:>6} {:>6}  {}\n",
        "#", "name", "group", "cost", "house", "rent (0-5 houses)"
    ));

    for (index, p) in board.properties().iter().enumerate() {
        let group = p.group.map_or_else(|| "-".to_string(), |g| g.to_string());
        let cost = p.cost.map_or_else(|| "-".to_string(), |c| c.to_string());
        let rent: Vec<String> = p.rent.iter().map(ToString::to_string).collect();
        output.push_str(&format!(
            "{index:>3}  {:<12} {group:>5} {cost:>6} {:>6}  {}\n",
            p.name,
            p.house_cost,
            rent.join(" ")
        ));
    }

    output.push_str(&format!("\n{} groups:", board.groups().len()));
    for group in board.groups() {
        output.push_str(&format!(" {}x{}", group.id, group.count));
    }
    output.push('\n');

    output
}

/// Format the owned properties of every player, one line each.
pub(super) fn format_holdings(session: &Session) -> String {
    let state = session.state();
    let mut output = String::new();
    for player in state.players() {
        output.push_str(&format!("{} owns", player.name));
        if player.properties.is_empty() {
            output.push_str(" nothing");
        }
        for owned in &player.properties {
            let property = &state.board().properties()[owned.index];
            output.push_str(&format!(" [{} {}]", property.name, house_glyph(owned.houses)));
        }
        output.push('\n');
    }
    output
}
