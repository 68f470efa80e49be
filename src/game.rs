use alloc::{string::String, vec::Vec};
use rand::rngs::SmallRng;

use crate::{
    common::{MatchError, PlacementError, ShotResult},
    config::{FleetManifest, GRID_SIZE},
    grid::{Coordinate, Grid},
    placement::generate_placement,
    player::{Player, Seat, Strategy, TargetView},
    shot::resolve_shot,
};

/// Lifecycle of a match. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    Uninitialized,
    InProgress,
    Over,
}

/// Record of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub shooter: Seat,
    pub target: Coordinate,
    pub result: ShotResult,
    /// The turn moved to the other seat.
    pub turn_passed: bool,
    /// This shot eliminated the opponent's fleet.
    pub match_over: bool,
}

/// Final result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: String,
    pub loser: String,
    pub winner_score: u32,
    pub loser_score: u32,
    /// Shots resolved over the whole match, retries included.
    pub shots: usize,
}

/// Two-player turn state machine.
pub struct Match<const N: usize = GRID_SIZE> {
    players: [Player<N>; 2],
    current: Seat,
    status: MatchStatus,
    loser: Option<Seat>,
    events: Vec<TurnOutcome>,
    shots: usize,
}

impl<const N: usize> Match<N> {
    /// A new match; `first` takes the first turn.
    pub fn new(first: Player<N>, second: Player<N>) -> Self {
        Self {
            players: [first, second],
            current: Seat::First,
            status: MatchStatus::Uninitialized,
            loser: None,
            events: Vec::new(),
            shots: 0,
        }
    }

    /// Generate a random fleet layout for both players and start the match.
    pub fn init(&mut self, manifest: &FleetManifest, rng: &mut SmallRng) -> Result<(), MatchError> {
        self.ensure_uninitialized()?;
        let first = generate_placement::<N, _>(manifest, rng)?;
        let second = generate_placement::<N, _>(manifest, rng)?;
        self.start_with(first, second)
    }

    /// Start the match with layouts built elsewhere. Both grids need at
    /// least one ship afloat, or the match could never end.
    pub fn start_with(&mut self, first: Grid<N>, second: Grid<N>) -> Result<(), MatchError> {
        self.ensure_uninitialized()?;
        if first.all_sunk() || second.all_sunk() {
            return Err(PlacementError::EmptyFleet.into());
        }
        self.players[0].set_grid(first);
        self.players[1].set_grid(second);
        self.status = MatchStatus::InProgress;
        log::info!(
            "match started: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn player(&self, seat: Seat) -> &Player<N> {
        &self.players[seat.index()]
    }

    pub fn current_player(&self) -> &Player<N> {
        self.player(self.current)
    }

    /// The player being fired at this turn.
    pub fn next_player(&self) -> &Player<N> {
        self.player(self.current.other())
    }

    /// Seat whose fleet was eliminated, once the match is over.
    pub fn loser(&self) -> Option<Seat> {
        self.loser
    }

    pub fn winner(&self) -> Option<Seat> {
        self.loser.map(Seat::other)
    }

    /// Pending turn log, oldest first.
    pub fn events(&self) -> &[TurnOutcome] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Fire at `target` on behalf of the current player.
    ///
    /// Hits keep the turn and score a point, a miss passes the turn, a retry
    /// changes nothing. A sink that empties the opponent's fleet ends the
    /// match.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnOutcome, MatchError> {
        match self.status {
            MatchStatus::Uninitialized => return Err(MatchError::NotStarted),
            MatchStatus::Over => return Err(MatchError::Finished),
            MatchStatus::InProgress => {}
        }

        let shooter = self.current;
        let defender = shooter.other();
        let result = resolve_shot(target, self.players[defender.index()].grid_mut())?;
        self.shots += 1;

        let mut turn_passed = false;
        let mut match_over = false;
        match result {
            ShotResult::Hit => self.players[shooter.index()].inc_score(),
            ShotResult::Sunk { .. } => {
                self.players[shooter.index()].inc_score();
                if self.players[defender.index()].is_defeated() {
                    self.status = MatchStatus::Over;
                    self.loser = Some(defender);
                    match_over = true;
                }
            }
            ShotResult::Miss => {
                self.current = defender;
                turn_passed = true;
            }
            ShotResult::Retry => {}
        }

        let outcome = TurnOutcome {
            shooter,
            target,
            result,
            turn_passed,
            match_over,
        };
        log::debug!(
            "{} fires at ({}, {}): {:?}",
            self.players[shooter.index()].name(),
            target.row,
            target.col,
            result
        );
        if match_over {
            log::info!(
                "{} wins {}:{}",
                self.players[shooter.index()].name(),
                self.players[shooter.index()].score(),
                self.players[defender.index()].score()
            );
        }
        self.events.push(outcome);
        Ok(outcome)
    }

    /// Ask `strategy` for the current player's target and fire at it.
    pub fn play_turn<S>(&mut self, strategy: &mut S, rng: &mut SmallRng) -> Result<TurnOutcome, MatchError>
    where
        S: Strategy<N> + ?Sized,
    {
        if self.status != MatchStatus::InProgress {
            return Err(match self.status {
                MatchStatus::Uninitialized => MatchError::NotStarted,
                _ => MatchError::Finished,
            });
        }
        let view = TargetView::new(self.next_player().grid());
        let target = strategy
            .select_target(view, rng)
            .ok_or_else(|| MatchError::Abandoned {
                player: self.current_player().name().into(),
            })?;
        let outcome = self.fire(target)?;
        strategy.handle_shot_result(target, outcome.result);
        Ok(outcome)
    }

    /// Play until one fleet is gone. `strategies[0]` plays the first seat.
    pub fn run(
        &mut self,
        strategies: [&mut dyn Strategy<N>; 2],
        rng: &mut SmallRng,
    ) -> Result<MatchSummary, MatchError> {
        let [first, second] = strategies;
        while self.status == MatchStatus::InProgress {
            match self.current {
                Seat::First => self.play_turn(&mut *first, rng)?,
                Seat::Second => self.play_turn(&mut *second, rng)?,
            };
        }
        self.summary().ok_or(MatchError::NotStarted)
    }

    /// Winner, loser and frozen scores, once the match is over.
    pub fn summary(&self) -> Option<MatchSummary> {
        let loser = self.loser?;
        let winner = self.player(loser.other());
        let loser = self.player(loser);
        Some(MatchSummary {
            winner: winner.name().into(),
            loser: loser.name().into(),
            winner_score: winner.score(),
            loser_score: loser.score(),
            shots: self.shots,
        })
    }

    fn ensure_uninitialized(&self) -> Result<(), MatchError> {
        if self.status == MatchStatus::Uninitialized {
            Ok(())
        } else {
            Err(MatchError::AlreadyStarted)
        }
    }
}
