//! Scenario records: one narrative beat with a prompt and two choices.

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::content::ScenarioContent;
use crate::error::{ScenarioError, ScenarioResult};

/// The magnitude applied to the luck score when any outcome of a scenario
/// resolves. Always within [`LuckDelta::MIN`]..=[`LuckDelta::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct LuckDelta(i32);

impl LuckDelta {
    /// Smallest allowed delta.
    pub const MIN: i32 = 1;
    /// Largest allowed delta.
    pub const MAX: i32 = 20;

    /// Create a delta, rejecting values outside 1..=20.
    pub fn new(value: i32) -> ScenarioResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScenarioError::LuckDeltaOutOfRange(value))
        }
    }

    /// Draw a delta uniformly from 1..=20.
    pub fn draw(chance: &mut impl Chance) -> Self {
        Self(chance.roll(Self::MIN..=Self::MAX).clamp(Self::MIN, Self::MAX))
    }

    /// The raw value.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for LuckDelta {
    type Error = ScenarioError;

    fn try_from(value: i32) -> ScenarioResult<Self> {
        Self::new(value)
    }
}

impl From<LuckDelta> for i32 {
    fn from(delta: LuckDelta) -> Self {
        delta.0
    }
}

impl std::fmt::Display for LuckDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of a scenario's two options the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Option 1.
    First,
    /// Option 2.
    Second,
}

impl Choice {
    /// Both choices in display order.
    pub const ALL: [Choice; 2] = [Choice::First, Choice::Second];

    /// The 1-based choice number.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = ScenarioError;

    fn try_from(n: u8) -> ScenarioResult<Self> {
        match n {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(ScenarioError::InvalidChoice(other)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One labeled option and its two possible resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Button label.
    pub label: String,
    /// Text shown when the option resolves well.
    pub positive: String,
    /// Text shown when the option resolves badly.
    pub negative: String,
}

/// An immutable narrative beat.
///
/// The luck delta is drawn once when the scenario is built and never
/// changes afterwards; fields are private so nothing can rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    id: u32,
    image: String,
    prompt: String,
    choices: [ChoiceOption; 2],
    luck_delta: LuckDelta,
}

impl Scenario {
    /// Build a scenario from authored content, drawing its luck delta.
    pub fn from_content(content: &ScenarioContent, chance: &mut impl Chance) -> Self {
        Self::with_luck_delta(content, LuckDelta::draw(chance))
    }

    /// Build a scenario from authored content with a known luck delta.
    pub fn with_luck_delta(content: &ScenarioContent, luck_delta: LuckDelta) -> Self {
        Self {
            id: content.id,
            image: content.image.clone(),
            prompt: content.prompt.clone(),
            choices: content.choices.clone(),
            luck_delta,
        }
    }

    /// Tree-level identifier (not unique across the tree).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Opaque artwork reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Setup text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The option for `choice`.
    pub fn choice(&self, choice: Choice) -> &ChoiceOption {
        &self.choices[choice.index()]
    }

    /// Both options in display order.
    pub fn choices(&self) -> &[ChoiceOption; 2] {
        &self.choices
    }

    /// The fixed luck delta.
    pub fn luck_delta(&self) -> LuckDelta {
        self.luck_delta
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scenario{}", self.id)
    }
}
