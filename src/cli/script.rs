//! Script command implementation - headless key playback.

use super::output::{JsonGame, format_holdings};
use super::{CliError, OutputFormat, RuleArgs, seed_or_clock};
use notopoly::render::render_text;
use notopoly::{Action, Session};

/// Execute the script command.
///
/// Refused actions are skipped, exactly as a key press would be ignored in
/// the interactive game.
///
/// # Errors
///
/// Returns an error if the key sequence contains an unbound key or the game
/// cannot be set up.
pub(crate) fn execute(
    keys: &str,
    seed: Option<u64>,
    rules: &RuleArgs,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), CliError> {
    let actions = Action::parse_keys(keys)
        .map_err(|c| CliError::new(format!("Unknown key '{c}' (use 1 = move, 2 = buy, 3 = end turn)")))?;

    let session = run(&actions, seed_or_clock(seed), rules)?;

    match format {
        OutputFormat::Text => {
            if verbose {
                for line in session.log() {
                    println!("{line}");
                }
                println!();
            }
            print!("{}", render_text(session.state()));
            println!();
            print!("{}", format_holdings(&session));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonGame::from_session(&session))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Play `actions` in a fresh session.
fn run(actions: &[Action], seed: u64, rules: &RuleArgs) -> Result<Session, CliError> {
    let mut session = Session::standard(rules.to_config(), seed)?;
    for &action in actions {
        // Refusals are already in the session log
        let _ = session.act(action);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestArgs {
        #[command(flatten)]
        rules: RuleArgs,
    }

    fn default_rules() -> RuleArgs {
        TestArgs::parse_from(["test"]).rules
    }

    #[test]
    fn test_run_is_deterministic() {
        let actions = Action::parse_keys("1231231232").unwrap();
        let a = run(&actions, 5, &default_rules()).unwrap();
        let b = run(&actions, 5, &default_rules()).unwrap();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_run_skips_refused_actions() {
        let actions = Action::parse_keys("3311").unwrap();
        let session = run(&actions, 5, &default_rules()).unwrap();
        assert_eq!(session.accepted_actions(), 1);
        assert!(session.state().turn().has_moved());
    }
}
