//! The interactive loop: prompts on `output`, reads answers from `input`.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use rand::RngCore;

use balaton_core::places::{AccentFolding, LocationCatalog};
use balaton_core::{
    GameError, GuessOutcome, MatchController, MatchMode, MatchProgress, MatchSummary, RecordStore,
    RoundState,
};

const HELP: &str = "Type a place name to guess, ? to list places, :new to start over, :quit to leave.";
const SAVE_FAILED: &str = "the result could not be saved (type :save to try again)";

fn minutes_seconds(seconds: f64) -> (u64, u64) {
    let whole = seconds.max(0.0) as u64;
    (whole / 60, whole % 60)
}

/// Read one trimmed line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until a usable competitive name is given.
fn ask_player_name<S: RecordStore>(
    controller: &mut MatchController<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>> {
    loop {
        write!(output, "Player name: ")?;
        output.flush()?;

        let Some(name) = read_line(input)? else {
            return Ok(None);
        };

        match controller.start_match(MatchMode::Competitive, &name, Utc::now()) {
            Ok(state) => return Ok(state.player_name().map(str::to_string)),
            Err(e) if e.is_user_error() => writeln!(output, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }
}

fn begin<S: RecordStore>(
    controller: &mut MatchController<S>,
    catalog: &dyn LocationCatalog,
    rng: &mut dyn RngCore,
    mode: MatchMode,
    player: &str,
    output: &mut impl Write,
) -> Result<()> {
    if controller.state().is_none() {
        controller.start_match(mode, player, Utc::now())?;
    }
    controller.advance_round(catalog, rng, Utc::now())?;

    match mode {
        MatchMode::Casual => writeln!(output, "I'm thinking of a place. Which one is it?")?,
        MatchMode::Competitive => {
            let rounds = controller.state().map(|s| s.rounds()).unwrap_or_default();
            writeln!(output, "Good luck, {player}! Round 1 of {rounds}.")?;
        }
    }

    Ok(())
}

fn report_round(round: &RoundState, output: &mut impl Write) -> Result<()> {
    let (min, sec) = minutes_seconds(round.elapsed_seconds().unwrap_or_default());
    let path: Vec<&str> = round.trail().iter().map(|p| p.name.as_str()).collect();

    writeln!(
        output,
        "Found it in {} guesses and {min} min {sec} s. Your path: {}",
        round.guess_count(),
        path.join(" -> ")
    )?;

    Ok(())
}

fn report_progress<S: RecordStore>(
    controller: &MatchController<S>,
    progress: MatchProgress,
    output: &mut impl Write,
) -> Result<()> {
    match progress {
        MatchProgress::NextRound { round_index } => {
            let rounds = controller.state().map(|s| s.rounds()).unwrap_or_default();
            writeln!(output, "Round {round_index} of {rounds}. I've picked a new place.")?;
        }
        MatchProgress::Complete(summary) => {
            report_summary(&summary, output)?;
            writeln!(output, "Type :new to play again or :quit to leave.")?;
        }
    }

    Ok(())
}

fn report_summary(summary: &MatchSummary, output: &mut impl Write) -> Result<()> {
    let Some(standing) = &summary.standing else {
        return Ok(());
    };

    let (min, sec) = minutes_seconds(summary.total_time_seconds);
    writeln!(
        output,
        "All rounds done: {} guesses in {min} min {sec} s. \
         You are #{} by guesses and #{} by time.",
        summary.total_guesses, standing.by_guesses, standing.by_time
    )?;

    writeln!(output, "Fastest players:")?;
    for (i, record) in standing.top_by_time.iter().enumerate() {
        writeln!(
            output,
            "{:>3}. {:<20} {:>8.1} s {:>4} guesses  {}",
            i + 1,
            record.player_name,
            record.total_time_seconds,
            record.total_guesses,
            record.played_at.format("%Y-%m-%d %H:%M")
        )?;
    }

    Ok(())
}

pub fn run<S: RecordStore>(
    controller: &mut MatchController<S>,
    catalog: &dyn LocationCatalog,
    rng: &mut dyn RngCore,
    mode: MatchMode,
    player: Option<String>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let player = match (mode, player) {
        (MatchMode::Casual, _) => String::new(),
        (MatchMode::Competitive, Some(name)) if !name.trim().is_empty() => name.trim().to_string(),
        (MatchMode::Competitive, _) => match ask_player_name(controller, &mut input, &mut output)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    writeln!(output, "{HELP}")?;
    begin(controller, catalog, rng, mode, &player, &mut output)?;

    while let Some(line) = read_line(&mut input)? {
        match line.as_str() {
            "" => continue,
            ":quit" => break,
            ":new" => {
                controller.reset();
                begin(controller, catalog, rng, mode, &player, &mut output)?;
                continue;
            }
            ":save" => {
                match controller.on_round_won(catalog, rng, Utc::now()) {
                    Ok(progress) => report_progress(controller, progress, &mut output)?,
                    Err(GameError::Store(e)) => writeln!(output, "{SAVE_FAILED}: {e}")?,
                    Err(_) => writeln!(output, "Nothing to save.")?,
                }
                continue;
            }
            "?" => {
                let names = catalog.all_names(&AccentFolding);
                let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
                writeln!(output, "{}", names.join(", "))?;
                continue;
            }
            _ => {}
        }

        match controller.submit_guess(&line, catalog, rng, Utc::now()) {
            Ok(GuessOutcome::Hint(feedback)) => writeln!(output, "{feedback}")?,
            Ok(GuessOutcome::RoundWon {
                feedback,
                round,
                progress,
            }) => {
                writeln!(output, "{feedback}")?;
                report_round(&round, &mut output)?;
                report_progress(controller, progress, &mut output)?;
            }
            Err(GameError::Store(e)) => {
                writeln!(output, "You found it, but {SAVE_FAILED}: {e}")?;
            }
            Err(GameError::NoActiveRound) => {
                writeln!(output, "The match is over. Type :new to play again.")?
            }
            Err(e) if e.is_user_error() => writeln!(output, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use balaton_core::places::{Place, StaticCatalog};
    use balaton_core::{GameConfig, MatchRecord, MemoryStore, StoreError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> StaticCatalog {
        StaticCatalog::from_places(vec![
            Place::new("Siófok", 46.9041, 18.0580),
            Place::new("Tihany", 46.9136, 17.8894),
            Place::new("Keszthely", 46.7681, 17.2432),
        ])
        .unwrap()
    }

    fn play(mode: MatchMode, player: Option<&str>, script: &str) -> (String, MatchController<MemoryStore>) {
        let mut controller = MatchController::new(GameConfig::default(), MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(4);
        let mut output = Vec::new();

        run(
            &mut controller,
            &catalog(),
            &mut rng,
            mode,
            player.map(str::to_string),
            script.as_bytes(),
            &mut output,
        )
        .unwrap();

        (String::from_utf8(output).unwrap(), controller)
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(minutes_seconds(125.7), (2, 5));
        assert_eq!(minutes_seconds(-1.0), (0, 0));
    }

    #[test]
    fn test_casual_round() {
        let (output, controller) = play(MatchMode::Casual, None, "Budapest\nSiófok\nTihany\nKeszthely\n");

        assert!(output.contains("Budapest is not a place I know"));
        assert!(output.contains("is the place, well done!"));
        assert!(controller.state().unwrap().is_complete());
        assert!(controller.leaderboard().store().records().is_empty());
    }

    #[test]
    fn test_competitive_match_is_ranked() {
        let guesses = "Siófok\nTihany\nKeszthely\n".repeat(3);
        let script = format!("\n   \nZsófi\n{guesses}:quit\n");
        let (output, controller) = play(MatchMode::Competitive, None, &script);

        assert!(output.contains("Enter a player name"));
        assert!(output.contains("Good luck, Zsófi! Round 1 of 3."));
        assert!(output.contains("Round 3 of 3."));
        assert!(output.contains("You are #1 by guesses and #1 by time."));

        let records = controller.leaderboard().store().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player_name, "Zsófi");
    }

    #[test]
    fn test_list_and_restart() {
        let (output, controller) = play(MatchMode::Competitive, Some("Dóra"), "?\n:new\n:quit\n");

        assert!(output.contains("Keszthely, Siófok, Tihany"));
        assert_eq!(output.matches("Good luck, Dóra!").count(), 2);
        assert_eq!(controller.state().unwrap().total_guesses(), 0);
    }

    /// Rejects the first append, then behaves like a memory store.
    #[derive(Default)]
    struct FailsOnce {
        inner: MemoryStore,
        failed: bool,
    }

    impl RecordStore for FailsOnce {
        fn append(&mut self, record: &MatchRecord) -> std::result::Result<(), StoreError> {
            if !self.failed {
                self.failed = true;
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            self.inner.append(record)
        }

        fn load_all(&self) -> std::result::Result<Vec<MatchRecord>, StoreError> {
            self.inner.load_all()
        }
    }

    #[test]
    fn test_failed_save_can_be_retried() {
        let config = GameConfig {
            competitive_rounds: 1,
            ..GameConfig::default()
        };
        let mut controller = MatchController::new(config, FailsOnce::default());
        let mut rng = StdRng::seed_from_u64(4);
        let mut output = Vec::new();

        run(
            &mut controller,
            &catalog(),
            &mut rng,
            MatchMode::Competitive,
            Some("Lili".to_string()),
            "Siófok\nTihany\nKeszthely\n:save\n:quit\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("You found it, but the result could not be saved"));
        assert!(output.contains("You are #1 by guesses and #1 by time."));
        assert_eq!(controller.leaderboard().store().inner.records().len(), 1);
        assert!(controller.state().unwrap().is_complete());
    }
}
