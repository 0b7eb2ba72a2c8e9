//! Text command processing for a game session.

use lk_core::{Chance, Choice};

use crate::error::{SessionError, SessionResult};
use crate::phase::Phase;
use crate::render;
use crate::session::GameSession;

impl<C: Chance> GameSession<C> {
    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "start" => {
                self.start()?;
                Ok(self.render_current())
            }
            "begin" | "go" => {
                self.begin()?;
                Ok(self.render_current())
            }
            "1" | "2" => self.do_choose(&cmd),
            "choose" | "choice" => self.do_choose(rest),
            "continue" | "next" | "c" => {
                self.proceed()?;
                Ok(self.render_current())
            }
            "home" => {
                self.home()?;
                Ok(self.render_current())
            }
            "resume" => {
                self.resume()?;
                Ok(self.render_current())
            }
            "again" | "restart" => self.do_play_again(),
            "play" if rest.eq_ignore_ascii_case("again") => self.do_play_again(),
            "look" => Ok(self.render_current()),
            "note" => self.do_note(rest),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(rest),
            "status" => Ok(self.status()),
            "help" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(trimmed.to_string())),
        }
    }

    /// Render the screen for the current phase.
    pub fn render_current(&self) -> String {
        match self.phase() {
            Phase::Start => render::start_screen(self.tree()),
            Phase::Instructions => render::instructions_screen(self.tree()),
            Phase::Scenario { index } => match (self.current_scenario(), self.playthrough()) {
                (Some(scenario), Some(p)) => {
                    render::scenario_screen(scenario, self.luck(), index, p.len())
                }
                _ => String::new(),
            },
            Phase::Outcome { .. } => match self.last_resolution() {
                Some(resolution) => render::outcome_screen(resolution, self.luck()),
                None => String::new(),
            },
            Phase::End { band } => render::end_screen(self.luck(), band),
        }
    }

    /// A one-screen summary of the session.
    pub fn status(&self) -> String {
        let mut out = format!("Luck: {} ({})\n", self.luck(), self.luck().band());
        out.push_str(&format!("Screen: {}\n", self.phase()));
        match self.playthrough() {
            Some(p) => out.push_str(&format!(
                "Playthrough: {}/{} scenarios\n",
                p.position().min(p.len()),
                p.len()
            )),
            None => out.push_str("No playthrough in progress.\n"),
        }
        out.push_str(&format!("Completed: {}\n", self.completed()));
        out.push_str(&format!("Journal: {} entries", self.journal().len()));
        out
    }

    fn do_choose(&mut self, arg: &str) -> SessionResult<String> {
        let n: u8 = arg
            .parse()
            .map_err(|_| SessionError::InvalidInput("usage: choose 1|2".to_string()))?;
        let choice = Choice::try_from(n)?;
        self.choose(choice)?;
        Ok(self.render_current())
    }

    fn do_play_again(&mut self) -> SessionResult<String> {
        self.play_again()?;
        Ok(self.render_current())
    }

    fn do_note(&mut self, text: &str) -> SessionResult<String> {
        if text.is_empty() {
            return Err(SessionError::InvalidInput("usage: note <text>".to_string()));
        }
        self.add_note(text);
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> SessionResult<String> {
        if self.journal().is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        Ok(self.journal().export_text().trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal().export_markdown()),
            "text" | "txt" => Ok(self.journal().export_text()),
            "json" => self
                .journal()
                .export_json()
                .map_err(|e| SessionError::InvalidInput(e.to_string())),
            other => Err(SessionError::InvalidInput(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }
}

fn help_text() -> &'static str {
    "\
Luckometer Commands:
  start                 Leave the title screen
  begin                 Start the day after reading the instructions
  1 | 2                 Pick an option (also: choose 1|2)
  continue              Move on after an outcome
  home                  Back to the title screen
  resume                Return to where you left off
  again                 Play again from the end screen
  look                  Show the current screen again
  status                Show luck and progress
  note <text>           Add a journal note
  journal               Show the journal
  export [markdown|text|json]
                        Export the journal
  help                  Show this help
  quit                  Exit"
}
