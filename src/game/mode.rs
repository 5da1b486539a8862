use crate::error::InputError;

/// Who sits in the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two interactive participants.
    TwoPlayer,
    /// Interactive first seat, automated second seat.
    VsAutomated,
    /// Both seats automated.
    AutomatedVsAutomated,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::TwoPlayer, Mode::VsAutomated, Mode::AutomatedVsAutomated];

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "2 Player",
            Mode::VsAutomated => "vs. Computer",
            Mode::AutomatedVsAutomated => "Computer vs. Computer",
        }
    }

    /// Whether the seat is filled by an automated participant in this mode.
    pub fn is_automated_seat(self, seat: usize) -> bool {
        match self {
            Mode::TwoPlayer => false,
            Mode::VsAutomated => seat == 1,
            Mode::AutomatedVsAutomated => true,
        }
    }
}

/// The ordered list of modes offered at setup. Options are shown and
/// selected 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    modes: Vec<Mode>,
}

impl ModeSet {
    pub fn new(modes: Vec<Mode>) -> Self {
        ModeSet { modes }
    }

    /// The two-option menu offered before automated-vs-automated existed.
    pub fn classic() -> Self {
        ModeSet::new(vec![Mode::TwoPlayer, Mode::VsAutomated])
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Resolve a raw token like `"2"` to a mode.
    pub fn select(&self, token: &str) -> Result<Mode, InputError> {
        let token = token.trim();
        let value: i64 = token
            .parse()
            .map_err(|_| InputError::Malformed(token.to_string()))?;
        usize::try_from(value)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.modes.get(idx).copied())
            .ok_or(InputError::OutOfRange {
                value,
                max: self.modes.len(),
            })
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        ModeSet::new(Mode::ALL.to_vec())
    }
}
