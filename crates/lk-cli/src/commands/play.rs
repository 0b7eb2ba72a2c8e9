use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lk_session::{GameSession, SessionConfig};

pub fn run(
    content: Option<&Path>,
    seed: Option<u64>,
    luck: Option<i32>,
    journal_file: Option<&Path>,
) -> Result<(), String> {
    let mut tree_rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let tree = super::load_tree(content, &mut tree_rng)?;

    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(luck) = luck {
        config = config.with_initial_luck(luck);
    }

    let mut session = GameSession::new(Arc::new(tree), config);

    let stdin = io::stdin();
    play_session(&mut session, stdin.lock(), io::stdout(), journal_file)
}

/// Run the command loop until `quit` or end of input, then write the journal.
///
/// The journal is written even when reading input fails; the read error is
/// reported after it.
fn play_session(
    session: &mut GameSession,
    input: impl BufRead,
    mut output: impl Write,
    journal_file: Option<&Path>,
) -> Result<(), String> {
    let played = command_loop(session, input, &mut output);

    if let Some(path) = journal_file {
        std::fs::write(path, session.journal().export_text())
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        log::info!("journal written to {}", path.display());
    }

    played
}

fn command_loop(
    session: &mut GameSession,
    mut reader: impl BufRead,
    output: &mut impl Write,
) -> Result<(), String> {
    writeln!(output, "{}", session.render_current()).map_err(|e| e.to_string())?;
    writeln!(output, "  Type 'help' for commands, 'quit' to exit.\n").map_err(|e| e.to_string())?;

    let mut line = String::new();

    loop {
        write!(output, "> ").map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let shown = match session.process(input) {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(e) => Some(e.to_string().yellow().to_string()),
        };
        if let Some(text) = shown {
            writeln!(output, "{text}\n").map_err(|e| e.to_string())?;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use lk_core::{ContentTable, build_scenario_tree};
    use tempfile::TempDir;

    use super::*;

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("input closed unexpectedly"))
        }
    }

    fn session() -> GameSession {
        let tree = build_scenario_tree(
            &ContentTable::builtin().unwrap(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        GameSession::new(Arc::new(tree), SessionConfig::default().with_seed(1))
    }

    #[test]
    fn journal_written_when_input_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("session.log");
        let input = BufReader::new(Cursor::new("start\n").chain(BrokenPipe));
        let mut out = Vec::new();

        let err = play_session(&mut session(), input, &mut out, Some(&file)).unwrap_err();
        assert!(err.contains("input closed unexpectedly"));

        let text = std::fs::read_to_string(&file).unwrap();
        assert!(text.contains("START -> instructions"));
    }

    #[test]
    fn quit_stops_reading() {
        let input = Cursor::new("quit\nstart\n");
        let mut out = Vec::new();
        let mut s = session();

        play_session(&mut s, input, &mut out, None).unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Goodbye!"));
        assert!(s.journal().is_empty());
    }
}
