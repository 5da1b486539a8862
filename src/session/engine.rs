use crate::agent::{HumanParticipant, Participant, RandomParticipant, Seat};
use crate::config::GameConfig;
use crate::error::{ConfigError, InputError, SessionError};
use crate::game::{Board, Mode, ModeSet, MoveError, PlayerId};
use crate::ui::{Event, InputSource, Io, Presenter, Prompt};

/// Where the session is in its setup / round / replay cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingModeSelection,
    AwaitingParticipantSetup,
    InRound,
    RoundComplete,
    AwaitingReplayDecision,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerId),
    /// The automated seat beat the human in [`Mode::VsAutomated`].
    LossToAutomated(PlayerId),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub turns: u32,
}

/// How a finished move ends the round, if it does. A win takes precedence
/// over a full board.
pub fn round_outcome(
    mode: Mode,
    player: PlayerId,
    automated: bool,
    win: bool,
    board_full: bool,
) -> Option<Outcome> {
    if win {
        if mode == Mode::VsAutomated && automated {
            Some(Outcome::LossToAutomated(player))
        } else {
            Some(Outcome::Win(player))
        }
    } else if board_full {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Parse a replay answer: `y` or `n`, in either case.
pub fn parse_replay(token: &str) -> Result<bool, InputError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(InputError::Malformed(token.to_string()))
    }
}

/// One console session: any number of rounds between two participants.
pub struct GameEngine<I, P> {
    config: GameConfig,
    modes: ModeSet,
    input: I,
    presenter: P,
    board: Board,
    participants: Vec<Box<dyn Participant>>,
    mode: Option<Mode>,
    turn: u32,
    win: bool,
    board_full: bool,
    outcome: Option<Outcome>,
    phase: Phase,
    rounds_started: u64,
}

impl<I: InputSource, P: Presenter> GameEngine<I, P> {
    /// Fails when the config offers no modes or is otherwise invalid.
    pub fn new(config: GameConfig, input: I, presenter: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let modes = config.mode_set();
        Ok(GameEngine {
            config,
            modes,
            input,
            presenter,
            board: Board::new(),
            participants: Vec::with_capacity(2),
            mode: None,
            turn: 0,
            win: false,
            board_full: false,
            outcome: None,
            phase: Phase::AwaitingModeSelection,
            rounds_started: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn is_board_full(&self) -> bool {
        self.board_full
    }

    /// The participant in the given seat, once set up.
    pub fn seat(&self, id: PlayerId) -> Option<&Seat> {
        self.participants.get(id.index()).map(|p| p.seat())
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (I, P) {
        (self.input, self.presenter)
    }

    /// Ask for a mode until the answer names one of the offered options.
    pub fn select_mode(&mut self) -> Result<Mode, SessionError> {
        self.phase = Phase::AwaitingModeSelection;
        let mut io = Io {
            input: &mut self.input,
            presenter: &mut self.presenter,
        };
        loop {
            let token = io.request(&Prompt::Mode(&self.modes))?;
            match self.modes.select(&token) {
                Ok(mode) => {
                    log::info!("mode selected: {}", mode.name());
                    io.presenter.mode_selected(mode)?;
                    self.phase = Phase::AwaitingParticipantSetup;
                    return Ok(mode);
                }
                Err(err) => {
                    log::debug!("rejected mode {:?}: {}", token, err);
                    io.presenter.rejected(&err)?;
                }
            }
        }
    }

    /// Reset round state, lay out a fresh board and seat new participants.
    pub fn setup_game(&mut self, mode: Mode) -> Result<(), SessionError> {
        self.phase = Phase::AwaitingParticipantSetup;
        self.mode = Some(mode);
        self.turn = 0;
        self.win = false;
        self.board_full = false;
        self.outcome = None;
        self.board = Board::new();
        self.participants.clear();

        let both_automated = mode.is_automated_seat(0) && mode.is_automated_seat(1);
        for (seat, id) in [PlayerId::FIRST, PlayerId::SECOND].into_iter().enumerate() {
            let participant: Box<dyn Participant> = if mode.is_automated_seat(seat) {
                let name = if both_automated {
                    format!("{} {}", self.config.automated_name, id)
                } else {
                    self.config.automated_name.clone()
                };
                Box::new(self.automated(name, id))
            } else {
                let mut io = Io {
                    input: &mut self.input,
                    presenter: &mut self.presenter,
                };
                let name = io.request(&Prompt::Name(id))?;
                let name = match name.trim() {
                    "" => format!("Player {id}"),
                    trimmed => trimmed.to_string(),
                };
                Box::new(HumanParticipant::new(name, id))
            };
            self.participants.push(participant);
        }
        self.rounds_started += 1;

        log::info!(
            "round {} set up: {} vs {}",
            self.rounds_started,
            self.participants[0].seat().name,
            self.participants[1].seat().name
        );
        self.presenter.board(&self.board, false)?;
        self.phase = Phase::InRound;
        Ok(())
    }

    fn automated(&self, name: String, id: PlayerId) -> RandomParticipant {
        let agent = match self.config.seed {
            Some(seed) => {
                let offset = self.rounds_started * 2 + id.index() as u64;
                RandomParticipant::with_seed(name, id, seed.wrapping_add(offset))
            }
            None => RandomParticipant::new(name, id),
        };
        agent.with_think_time(self.config.think_time())
    }

    /// Play one move for the participant whose turn it is. Returns whether
    /// the round continues.
    ///
    /// A full column sends the same participant back for another choice
    /// without advancing the turn counter further.
    ///
    /// # Panics
    ///
    /// Panics if called outside a round, i.e. before `setup_game` or after
    /// the round has ended.
    pub fn play_turn(&mut self) -> Result<bool, SessionError> {
        assert_eq!(self.phase, Phase::InRound, "play_turn called outside a round");
        let mode = self.mode.expect("a round in progress has a mode");

        self.turn += 1;
        let id = PlayerId::for_turn(self.turn);
        let participant = &mut self.participants[id.index()];
        let mut io = Io {
            input: &mut self.input,
            presenter: &mut self.presenter,
        };

        loop {
            let col = participant.select_column(&self.board, &mut io)?;
            match self.board.apply_move(id, col) {
                Ok(row) => {
                    log::debug!(
                        "turn {}: {} dropped into column {} (row {})",
                        self.turn,
                        participant.seat().name,
                        col,
                        row
                    );
                    break;
                }
                Err(MoveError::ColumnFull) => {
                    log::debug!("turn {}: column {} is full", self.turn, col);
                    io.presenter
                        .event(&Event::InvalidMove(InputError::ColumnFull(col)))?;
                }
            }
        }

        self.win = self.board.has_winner(id);
        self.board_full = self.board.is_full();
        let round_over = self.win || self.board_full;
        io.presenter.board(&self.board, round_over)?;

        let seat = participant.seat();
        self.outcome = round_outcome(mode, id, participant.is_automated(), self.win, self.board_full);
        match self.outcome {
            Some(Outcome::Win(_)) => io.presenter.event(&Event::Win(seat))?,
            Some(Outcome::LossToAutomated(_)) => io.presenter.event(&Event::LossToAutomated(seat))?,
            Some(Outcome::Draw) => io.presenter.event(&Event::Draw)?,
            None => {}
        }

        if round_over {
            self.phase = Phase::RoundComplete;
        }
        Ok(!round_over)
    }

    /// Play turns until the round ends.
    pub fn play_round(&mut self) -> Result<RoundSummary, SessionError> {
        while self.play_turn()? {}

        let summary = RoundSummary {
            outcome: self.outcome.expect("finished round must have an outcome"),
            turns: self.turn,
        };
        log::info!("round over after {} turns: {:?}", summary.turns, summary.outcome);
        Ok(summary)
    }

    /// Ask whether to play again until the answer is yes or no.
    pub fn offer_replay(&mut self) -> Result<bool, SessionError> {
        self.phase = Phase::AwaitingReplayDecision;
        let mut io = Io {
            input: &mut self.input,
            presenter: &mut self.presenter,
        };
        loop {
            let token = io.request(&Prompt::Replay)?;
            match parse_replay(&token) {
                Ok(again) => {
                    self.phase = if again {
                        Phase::AwaitingModeSelection
                    } else {
                        Phase::Finished
                    };
                    return Ok(again);
                }
                Err(err) => io.presenter.rejected(&err)?,
            }
        }
    }

    /// Set up, play and offer a replay until the player declines.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let mode = self.select_mode()?;
            self.setup_game(mode)?;
            self.play_round()?;
            if !self.offer_replay()? {
                return Ok(());
            }
        }
    }
}
