//! Board command implementation.

use super::output::{format_board_text, json_board};
use super::{CliError, OutputFormat};
use notopoly::Board;

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the board cannot be generated or serialized.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    let board = Board::generate()?;

    match format {
        OutputFormat::Text => print!("{}", format_board_text(&board)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&json_board(&board))?;
            println!("{json}");
        }
    }

    Ok(())
}
