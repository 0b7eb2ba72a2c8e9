//! Game session management.
//!
//! `GameSession` owns the luck score, the current playthrough, and the
//! journal, and moves between the screens of [`Phase`] in response to
//! player actions. The scenario tree is shared and never modified.

use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lk_core::{
    Chance, Choice, Playthrough, Resolution, Scenario, ScenarioTree, build_sequence,
    resolve_outcome, select_path,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::{Journal, JournalEntry};
use crate::luck::LuckScore;
use crate::phase::Phase;

/// An interactive game session.
pub struct GameSession<C: Chance = StdRng> {
    tree: Arc<ScenarioTree>,
    config: SessionConfig,
    chance: C,
    luck: LuckScore,
    phase: Phase,
    playthrough: Option<Playthrough>,
    last_resolution: Option<Resolution>,
    suspended: Option<Phase>,
    completed: u32,
    journal: Journal,
}

impl GameSession<StdRng> {
    /// Create a session seeded from `config.seed`, or from the OS when no
    /// seed is set.
    pub fn new(tree: Arc<ScenarioTree>, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_chance(tree, config, rng)
    }
}

impl<C: Chance> GameSession<C> {
    /// Create a session drawing all randomness from `chance`.
    pub fn with_chance(tree: Arc<ScenarioTree>, config: SessionConfig, mut chance: C) -> Self {
        let luck = fresh_luck(&config, &mut chance);
        log::info!("new session on '{}', luck {luck}", tree.title());
        Self {
            tree,
            config,
            chance,
            luck,
            phase: Phase::Start,
            playthrough: None,
            last_resolution: None,
            suspended: None,
            completed: 0,
            journal: Journal::new(),
        }
    }

    /// The shared scenario tree.
    pub fn tree(&self) -> &ScenarioTree {
        &self.tree
    }

    /// The current screen.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The running luck score.
    pub fn luck(&self) -> LuckScore {
        self.luck
    }

    /// The active playthrough, if one has been built.
    pub fn playthrough(&self) -> Option<&Playthrough> {
        self.playthrough.as_ref()
    }

    /// The scenario under the playthrough cursor.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.playthrough.as_ref().and_then(Playthrough::current)
    }

    /// The most recent resolution in this playthrough.
    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }

    /// Number of playthroughs finished in this session.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Record a player note.
    pub fn add_note(&mut self, text: &str) {
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Leave the start screen for the instructions.
    pub fn start(&mut self) -> SessionResult<Phase> {
        self.require(matches!(self.phase, Phase::Start), "start")?;
        if self.playthrough.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        self.enter(Phase::Instructions, "start");
        Ok(self.phase)
    }

    /// Leave the instructions and begin a new playthrough: pick a path and
    /// build its sequence.
    pub fn begin(&mut self) -> SessionResult<Phase> {
        self.require(matches!(self.phase, Phase::Instructions), "begin")?;

        let path = select_path(&self.tree, &mut self.chance);
        let route: String = path.branches().iter().map(|b| b.to_string()).collect();
        let labels: Vec<String> = path.scenarios().iter().map(|s| s.to_string()).collect();
        let playthrough = build_sequence(Some(path.into_scenarios()))?;

        log::info!("playthrough {route} started with luck {}", self.luck);
        self.journal.append(JournalEntry::PlaythroughStarted {
            scenarios: labels,
            route,
            luck: self.luck.value(),
            timestamp: Utc::now(),
        });

        let empty = playthrough.current().is_none();
        self.playthrough = Some(playthrough);
        self.last_resolution = None;
        if empty {
            self.finish("begin");
        } else {
            self.enter(Phase::Scenario { index: 0 }, "begin");
        }
        Ok(self.phase)
    }

    /// Pick an option in the current scenario and apply its outcome.
    pub fn choose(&mut self, choice: Choice) -> SessionResult<Resolution> {
        let Phase::Scenario { index } = self.phase else {
            return Err(self.invalid("choose"));
        };
        let Some(scenario) = self.playthrough.as_ref().and_then(Playthrough::current) else {
            return Err(self.invalid("choose"));
        };

        let resolution = resolve_outcome(scenario, choice, &mut self.chance);
        self.journal.append(JournalEntry::ChoiceMade {
            scenario: scenario.to_string(),
            choice: choice.number(),
            label: scenario.choice(choice).label.clone(),
            timestamp: Utc::now(),
        });

        let luck_after = self.luck.apply(&resolution);
        self.journal.append(JournalEntry::OutcomeResolved {
            scenario: scenario.to_string(),
            sign: resolution.sign(),
            text: resolution.text().to_string(),
            delta: resolution.signed_delta(),
            luck_after,
            timestamp: Utc::now(),
        });

        self.last_resolution = Some(resolution.clone());
        self.enter(Phase::Outcome { index }, "choose");
        Ok(resolution)
    }

    /// Leave an outcome screen: move to the next scenario, or to the end
    /// screen once the playthrough is exhausted.
    pub fn proceed(&mut self) -> SessionResult<Phase> {
        let Phase::Outcome { index } = self.phase else {
            return Err(self.invalid("continue"));
        };
        let Some(playthrough) = self.playthrough.as_mut() else {
            return Err(self.invalid("continue"));
        };

        playthrough.advance();
        if playthrough.current().is_some() {
            self.enter(Phase::Scenario { index: index + 1 }, "continue");
        } else {
            self.finish("continue");
        }
        Ok(self.phase)
    }

    /// Go back to the start screen, keeping the playthrough for `resume`.
    pub fn home(&mut self) -> SessionResult<Phase> {
        self.require(self.phase.in_playthrough(), "go home")?;
        self.suspended = Some(self.phase);
        self.enter(Phase::Start, "home");
        Ok(self.phase)
    }

    /// Return from the start screen to the screen that was left.
    pub fn resume(&mut self) -> SessionResult<Phase> {
        self.require(matches!(self.phase, Phase::Start), "resume")?;
        let phase = self.suspended.take().ok_or(SessionError::NotStarted)?;
        self.enter(phase, "resume");
        Ok(self.phase)
    }

    /// Leave the end screen for a fresh game: new luck, no playthrough.
    pub fn play_again(&mut self) -> SessionResult<Phase> {
        self.require(matches!(self.phase, Phase::End { .. }), "play again")?;
        self.luck = fresh_luck(&self.config, &mut self.chance);
        self.playthrough = None;
        self.last_resolution = None;
        self.suspended = None;
        self.journal.append(JournalEntry::LuckReset {
            luck: self.luck.value(),
            timestamp: Utc::now(),
        });
        self.enter(Phase::Start, "play again");
        Ok(self.phase)
    }

    fn finish(&mut self, action: &str) {
        let band = self.luck.band();
        self.completed += 1;
        log::info!("playthrough ended with luck {} ({band})", self.luck);
        self.journal.append(JournalEntry::PlaythroughEnded {
            final_luck: self.luck.value(),
            band,
            timestamp: Utc::now(),
        });
        self.enter(Phase::End { band }, action);
    }

    fn enter(&mut self, phase: Phase, action: &str) {
        log::debug!("{action}: {} -> {phase}", self.phase);
        self.phase = phase;
        self.journal.append(JournalEntry::Navigation {
            action: action.to_string(),
            screen: phase.name(),
            timestamp: Utc::now(),
        });
    }

    fn require(&self, allowed: bool, action: &'static str) -> SessionResult<()> {
        if allowed {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidAction {
            action,
            phase: self.phase.name(),
        }
    }
}

fn fresh_luck(config: &SessionConfig, chance: &mut impl Chance) -> LuckScore {
    let luck = config
        .initial_luck
        .unwrap_or_else(|| chance.roll(config.luck_range()));
    LuckScore::new(i64::from(luck))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luck::LuckBand;
    use lk_core::{ContentTable, ScriptedChance, Sign, build_scenario_tree};

    fn tree() -> Arc<ScenarioTree> {
        Arc::new(
            build_scenario_tree(
                &ContentTable::builtin().unwrap(),
                &mut StdRng::seed_from_u64(42),
            )
            .unwrap(),
        )
    }

    fn scripted(flip: bool) -> GameSession<ScriptedChance> {
        GameSession::with_chance(
            tree(),
            SessionConfig::default().with_initial_luck(10),
            ScriptedChance::always(flip, 10),
        )
    }

    #[test]
    fn create_session() {
        let s = GameSession::new(tree(), SessionConfig::default().with_seed(1));
        assert_eq!(s.phase(), Phase::Start);
        assert!((5..=20).contains(&s.luck().value()));
        assert!(s.playthrough().is_none());
        assert!(s.journal().is_empty());
    }

    #[test]
    fn start_then_begin_builds_playthrough() {
        let mut s = scripted(true);
        assert_eq!(s.start().unwrap(), Phase::Instructions);
        assert_eq!(s.begin().unwrap(), Phase::Scenario { index: 0 });
        let p = s.playthrough().unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(s.current_scenario().unwrap().id(), 1);
    }

    #[test]
    fn reversed_luck_range_draws_within_bounds() {
        let config = SessionConfig::default().with_seed(11).with_luck_range(20, 5);
        for _ in 0..50 {
            let s = GameSession::new(tree(), config.clone());
            assert!((5..=20).contains(&s.luck().value()));
        }
    }

    #[test]
    fn choose_applies_luck() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        let delta = s.current_scenario().unwrap().luck_delta().value();
        let r = s.choose(Choice::First).unwrap();
        assert_eq!(r.sign(), Sign::Positive);
        assert_eq!(s.luck().value(), i64::from(10 + delta));
        assert_eq!(s.phase(), Phase::Outcome { index: 0 });
        assert_eq!(s.last_resolution(), Some(&r));
    }

    #[test]
    fn negative_outcomes_subtract() {
        let mut s = scripted(false);
        s.start().unwrap();
        s.begin().unwrap();
        let delta = s.current_scenario().unwrap().luck_delta().value();
        s.choose(Choice::Second).unwrap();
        assert_eq!(s.luck().value(), i64::from(10 - delta));
    }

    #[test]
    fn full_playthrough_reaches_end() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        let mut expected: i64 = 10;
        for i in 0..4 {
            assert_eq!(s.phase(), Phase::Scenario { index: i });
            expected += i64::from(s.current_scenario().unwrap().luck_delta().value());
            s.choose(Choice::First).unwrap();
            s.proceed().unwrap();
        }
        assert_eq!(s.luck().value(), expected);
        assert_eq!(
            s.phase(),
            Phase::End {
                band: LuckBand::classify(expected)
            }
        );
        assert!(s.current_scenario().is_none());
        assert_eq!(s.completed(), 1);
    }

    #[test]
    fn choose_twice_is_rejected() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        s.choose(Choice::First).unwrap();
        let err = s.choose(Choice::First).unwrap_err();
        assert!(matches!(err, SessionError::InvalidAction { .. }));
        assert_eq!(err.to_string(), "cannot choose from the outcome 1 screen");
    }

    #[test]
    fn proceed_requires_outcome() {
        let mut s = scripted(true);
        assert!(s.proceed().is_err());
        s.start().unwrap();
        s.begin().unwrap();
        assert!(s.proceed().is_err());
    }

    #[test]
    fn home_and_resume_return_to_same_screen() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        s.choose(Choice::First).unwrap();
        let luck = s.luck();
        assert_eq!(s.home().unwrap(), Phase::Start);
        assert_eq!(s.resume().unwrap(), Phase::Outcome { index: 0 });
        assert_eq!(s.luck(), luck);
    }

    #[test]
    fn start_while_playing_is_already_started() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        s.home().unwrap();
        assert!(matches!(s.start(), Err(SessionError::AlreadyStarted)));
    }

    #[test]
    fn resume_before_start_is_not_started() {
        let mut s = scripted(true);
        assert!(matches!(s.resume(), Err(SessionError::NotStarted)));
    }

    #[test]
    fn play_again_resets_luck_and_playthrough() {
        let mut s = GameSession::with_chance(
            tree(),
            SessionConfig::default(),
            ScriptedChance::new()
                .with_rolls([12, 17])
                .with_fallback_flip(true),
        );
        assert_eq!(s.luck().value(), 12);
        s.start().unwrap();
        s.begin().unwrap();
        for _ in 0..4 {
            s.choose(Choice::First).unwrap();
            s.proceed().unwrap();
        }
        assert_eq!(s.play_again().unwrap(), Phase::Start);
        assert_eq!(s.luck().value(), 17);
        assert!(s.playthrough().is_none());
        assert!(matches!(s.resume(), Err(SessionError::NotStarted)));
        assert_eq!(s.start().unwrap(), Phase::Instructions);
    }

    #[test]
    fn play_again_only_from_end() {
        let mut s = scripted(true);
        assert!(s.play_again().is_err());
    }

    #[test]
    fn journal_records_playthrough() {
        let mut s = scripted(true);
        s.start().unwrap();
        s.begin().unwrap();
        s.choose(Choice::Second).unwrap();
        let started = s
            .journal()
            .entries()
            .iter()
            .find_map(|e| match e {
                JournalEntry::PlaythroughStarted { route, scenarios, .. } => {
                    Some((route.clone(), scenarios.len()))
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(started, ("LLL".to_string(), 4));
        assert!(s.journal().entries().iter().any(|e| matches!(
            e,
            JournalEntry::ChoiceMade { choice: 2, .. }
        )));
    }
}
