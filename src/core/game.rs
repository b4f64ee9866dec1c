//! Game lifecycle and shot resolution.
//!
//! `GameEngine` is the aggregate root: both players' fleets, the boards they
//! shoot at, the turn history and scores. Every command checks the game
//! phase first, then validates fully before touching any state.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::board::{Board, CellStatus};
use crate::core::common::{GameError, Reference, ShotResult};
use crate::core::config::GameConfig;
use crate::core::geometry::{surrounding_cells, Direction, Point};
use crate::core::placement::{occupied_cells, place, random_placement, Placement};
use crate::core::ship::{Ship, ShipStatus, ShipType};

/// Number of players in a game.
pub const NUM_PLAYERS: usize = 2;

/// Consecutive hits needed for each extra combo point.
pub const COMBO_STEP: u32 = 5;

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    #[default]
    Starting,
    Configuring,
    Playing,
    Finished,
}

/// Phases that can be entered directly through `set_game_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum SetupStatus {
    /// Restart: drops every fleet and shot and bumps the game id.
    Starting,
    Configuring,
}

/// Ship being positioned while configuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShipEdit {
    /// A ship of this type that is not on the board yet.
    New { ship_type_id: usize },
    /// An already placed ship being moved or rotated.
    Existing { ship_id: u32 },
}

/// Shots of one round, in the order they were made, per player index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub cells: [Vec<Point>; NUM_PLAYERS],
}

/// Everything one player owns during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// The player's own fleet.
    pub ships: Vec<Ship>,
    /// The player's shots against the opponent.
    pub enemy_board: Board,
    /// Ids of opponent ships this player has sunk, in sinking order.
    pub enemy_sunk_ships: Vec<u32>,
    pub score: u32,
}

impl PlayerState {
    fn new(config: &GameConfig) -> Self {
        Self {
            ships: Vec::new(),
            enemy_board: Board::new(config.board_size),
            enemy_sunk_ships: Vec::new(),
            score: 0,
        }
    }

    pub fn ship(&self, ship_id: u32) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == ship_id)
    }

    /// Ships of the given type already placed.
    pub fn placed_of_type(&self, ship_type_id: usize) -> usize {
        self.ships
            .iter()
            .filter(|s| s.ship_type_id == ship_type_id)
            .count()
    }
}

/// What a successful shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub point: Point,
    pub result: ShotResult,
    /// Points awarded for this shot, sink reward and combo bonus included.
    pub score_gained: u32,
    /// Phase after the shot.
    pub status: GameStatus,
}

/// Rules engine for a two-player game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEngine {
    #[cfg_attr(feature = "std", serde(skip))]
    config: GameConfig,
    game_id: u64,
    status: GameStatus,
    current_player: usize,
    history: Vec<Turn>,
    players: [PlayerState; NUM_PLAYERS],
    last_ship_id: u32,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with the standard board and catalog.
    pub fn new() -> Self {
        Self::build(GameConfig::default(), 0)
    }

    /// Create an engine for a custom board or catalog.
    ///
    /// Fails with `UnfitGeometry` if some ship type cannot fit on the board.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(config, 0))
    }

    fn build(config: GameConfig, game_id: u64) -> Self {
        Self {
            config,
            game_id,
            status: GameStatus::Starting,
            current_player: 0,
            history: Vec::new(),
            players: [PlayerState::new(&config), PlayerState::new(&config)],
            last_ship_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Incremented on every restart.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// All rounds so far; the last one is the current round.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.history.last()
    }

    pub fn players(&self) -> &[PlayerState; NUM_PLAYERS] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Result<&PlayerState, GameError> {
        self.players
            .get(index)
            .ok_or(GameError::InvalidReference(Reference::Player(index)))
    }

    /// The player who sank the last ship, once the game is finished.
    pub fn winner(&self) -> Option<usize> {
        (self.status == GameStatus::Finished).then_some(self.current_player)
    }

    /// Ships of each catalog type the player still has to place, as
    /// `(ship_type_id, remaining)`.
    pub fn remaining_ship_counts(&self, player: usize) -> Result<Vec<(usize, usize)>, GameError> {
        let state = self.player(player)?;
        Ok(self
            .config
            .ship_types
            .iter()
            .map(|t| (t.id(), t.count().saturating_sub(state.placed_of_type(t.id()))))
            .collect())
    }

    fn ensure_status(
        &self,
        operation: &'static str,
        allowed: &[GameStatus],
    ) -> Result<(), GameError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(GameError::StateMismatch {
                operation,
                status: self.status,
            })
        }
    }

    fn ship_type(&self, ship_type_id: usize) -> Result<&'static ShipType, GameError> {
        self.config
            .ship_type(ship_type_id)
            .ok_or(GameError::InvalidReference(Reference::ShipType(ship_type_id)))
    }

    /// Move between the setup phases.
    pub fn set_game_status(&mut self, status: SetupStatus) -> Result<(), GameError> {
        match status {
            SetupStatus::Starting => {
                *self = Self::build(self.config, self.game_id + 1);
                log::info!("game {} restarted", self.game_id);
            }
            SetupStatus::Configuring => {
                self.ensure_status(
                    "set_game_status",
                    &[GameStatus::Starting, GameStatus::Configuring],
                )?;
                self.status = GameStatus::Configuring;
                log::info!("game {} configuring", self.game_id);
            }
        }
        Ok(())
    }

    /// Validate a placement for `player` without changing anything.
    ///
    /// An `Existing` ship is left out of the occupied cells, so it can be
    /// moved or rotated in place.
    pub fn preview_placement(
        &self,
        player: usize,
        edit: ShipEdit,
        anchor: Point,
        direction: Direction,
    ) -> Result<Placement, GameError> {
        self.ensure_status("preview_placement", &[GameStatus::Configuring])?;
        let state = self.player(player)?;
        let (ship_type, excluding) = match edit {
            ShipEdit::New { ship_type_id } => (self.ship_type(ship_type_id)?, None),
            ShipEdit::Existing { ship_id } => {
                let ship = state
                    .ship(ship_id)
                    .ok_or(GameError::InvalidReference(Reference::Ship(ship_id)))?;
                (self.ship_type(ship.ship_type_id)?, Some(ship_id))
            }
        };
        let occupied = occupied_cells(&state.ships, excluding, self.config.board_size);
        place(
            anchor,
            ship_type.cell_offsets(),
            direction,
            &occupied,
            self.config.board_size,
        )
    }

    /// Place a new ship of `ship_type_id` for `player`. Returns its id.
    pub fn add_ship(
        &mut self,
        player: usize,
        ship_type_id: usize,
        direction: Direction,
        anchor: Point,
    ) -> Result<u32, GameError> {
        self.ensure_status("add_ship", &[GameStatus::Configuring])?;
        let ship_type = self.ship_type(ship_type_id)?;
        if self.player(player)?.placed_of_type(ship_type_id) >= ship_type.count() {
            return Err(GameError::ShipTypeExhausted { ship_type_id });
        }
        let placement = self.preview_placement(
            player,
            ShipEdit::New { ship_type_id },
            anchor,
            direction,
        )?;
        if !placement.can_place {
            return Err(GameError::PlacementBlocked);
        }

        let id = self.last_ship_id + 1;
        let ship = Ship::new(ship_type, direction, id).relocated(placement.cells, direction);
        self.players[player].ships.push(ship);
        self.last_ship_id = id;
        log::debug!(
            "player {} placed {} #{} at {} facing {:?}",
            player,
            ship_type.name(),
            id,
            anchor,
            direction
        );
        Ok(id)
    }

    /// Move and/or rotate an already placed ship.
    pub fn replace_ship(
        &mut self,
        player: usize,
        ship_id: u32,
        anchor: Point,
        direction: Direction,
    ) -> Result<(), GameError> {
        self.ensure_status("replace_ship", &[GameStatus::Configuring])?;
        let placement =
            self.preview_placement(player, ShipEdit::Existing { ship_id }, anchor, direction)?;
        if !placement.can_place {
            return Err(GameError::PlacementBlocked);
        }
        let ships = &mut self.players[player].ships;
        let slot = ships
            .iter_mut()
            .find(|s| s.id == ship_id)
            .ok_or(GameError::InvalidReference(Reference::Ship(ship_id)))?;
        *slot = slot.relocated(placement.cells, direction);
        log::debug!("player {} moved ship #{} to {}", player, ship_id, anchor);
        Ok(())
    }

    pub fn remove_ship(&mut self, player: usize, ship_id: u32) -> Result<(), GameError> {
        self.ensure_status("remove_ship", &[GameStatus::Configuring])?;
        self.player(player)?;
        let ships = &mut self.players[player].ships;
        let index = ships
            .iter()
            .position(|s| s.id == ship_id)
            .ok_or(GameError::InvalidReference(Reference::Ship(ship_id)))?;
        ships.remove(index);
        log::debug!("player {} removed ship #{}", player, ship_id);
        Ok(())
    }

    /// Randomly place every ship `player` still lacks. Returns how many
    /// ships were added; nothing is added if any of them cannot be placed.
    pub fn auto_place<R: Rng>(&mut self, player: usize, rng: &mut R) -> Result<usize, GameError> {
        self.ensure_status("auto_place", &[GameStatus::Configuring])?;
        let mut ships = self.player(player)?.ships.clone();
        let mut next_id = self.last_ship_id;
        let size = self.config.board_size;
        for ship_type in self.config.ship_types {
            let placed = ships
                .iter()
                .filter(|s| s.ship_type_id == ship_type.id())
                .count();
            for _ in placed..ship_type.count() {
                let occupied = occupied_cells(&ships, None, size);
                let (anchor, direction) =
                    random_placement(rng, &self.config, ship_type, &occupied)?;
                let placement =
                    place(anchor, ship_type.cell_offsets(), direction, &occupied, size)?;
                next_id += 1;
                let ship = Ship::new(ship_type, direction, next_id);
                ships.push(ship.relocated(placement.cells, direction));
            }
        }
        let added = (next_id - self.last_ship_id) as usize;
        self.players[player].ships = ships;
        self.last_ship_id = next_id;
        log::debug!("player {} auto-placed {} ships", player, added);
        Ok(added)
    }

    /// Leave configuration once both fleets are complete.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.ensure_status("start_game", &[GameStatus::Configuring])?;
        let required = self.config.ship_count_for_player();
        for (player, state) in self.players.iter().enumerate() {
            if state.ships.len() != required {
                return Err(GameError::IncompletePlacement {
                    player,
                    placed: state.ships.len(),
                    required,
                });
            }
        }
        self.status = GameStatus::Playing;
        self.current_player = 0;
        self.history = alloc::vec![Turn::default()];
        log::info!("game {} started", self.game_id);
        Ok(())
    }

    /// Current player shoots at `point` on the opponent's board.
    pub fn shoot(&mut self, point: Point) -> Result<ShotOutcome, GameError> {
        self.ensure_status("shoot", &[GameStatus::Playing])?;
        let shooter = self.current_player;
        let target = 1 - shooter;
        let hit_ship = self.players[target]
            .ships
            .iter()
            .find(|s| s.occupies(point))
            .map(|s| s.id);

        let cell = self.players[shooter]
            .enemy_board
            .cell_mut(point)
            .ok_or(GameError::InvalidReference(Reference::Cell(point)))?;
        if cell.is_resolved() {
            return Err(GameError::AlreadyResolvedCell(point));
        }
        match hit_ship {
            Some(ship_id) => {
                cell.status = CellStatus::Hit;
                cell.ship_id = Some(ship_id);
            }
            None => cell.status = CellStatus::NoShip,
        }
        if self.history.is_empty() {
            self.history.push(Turn::default());
        }
        if let Some(turn) = self.history.last_mut() {
            turn.cells[shooter].push(point);
        }

        let mut score_gained = 0;
        let result = match hit_ship {
            None => ShotResult::Miss,
            Some(ship_id) => {
                let mut result = ShotResult::Hit { ship_id };
                if let Some(size) = self.try_sink(shooter, ship_id) {
                    score_gained += size;
                    result = ShotResult::Sink { ship_id };
                }
                score_gained += self.combo_count(shooter) / COMBO_STEP + 1;
                result
            }
        };
        self.players[shooter].score += score_gained;
        log::debug!(
            "player {} shot {}: {:?} (+{})",
            shooter,
            point,
            result,
            score_gained
        );

        if self.players[target].ships.len() == self.players[shooter].enemy_sunk_ships.len() {
            self.status = GameStatus::Finished;
            log::info!("game {} finished, player {} won", self.game_id, shooter);
        }

        Ok(ShotOutcome {
            point,
            result,
            score_gained,
            status: self.status,
        })
    }

    /// Hand the turn to the other player; opens a new round after player 1.
    pub fn finish_player_turn(&mut self) -> Result<(), GameError> {
        self.ensure_status("finish_player_turn", &[GameStatus::Playing])?;
        let shot = self
            .history
            .last()
            .is_some_and(|t| !t.cells[self.current_player].is_empty());
        if !shot {
            return Err(GameError::NoShotThisTurn);
        }
        let next = 1 - self.current_player;
        if next == 0 {
            self.history.push(Turn::default());
        }
        self.current_player = next;
        Ok(())
    }

    /// Hits in a row preceding the latest shot of `player`, across rounds.
    fn combo_count(&self, player: usize) -> u32 {
        let board = &self.players[player].enemy_board;
        self.history
            .iter()
            .rev()
            .flat_map(|turn| turn.cells[player].iter().rev())
            .skip(1)
            .take_while(|&&p| board.status(p) == Some(CellStatus::Hit))
            .count() as u32
    }

    /// Marks the opponent ship sunk if all of its cells are hit, and rules
    /// out its neighbourhood. Returns the ship size on sinking.
    fn try_sink(&mut self, shooter: usize, ship_id: u32) -> Option<u32> {
        let [first, second] = &mut self.players;
        let (attacker, defender) = if shooter == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let ship = defender.ships.iter_mut().find(|s| s.id == ship_id)?;
        let board = &mut attacker.enemy_board;
        let all_hit = ship
            .cells
            .iter()
            .all(|&c| board.status(c) == Some(CellStatus::Hit));
        if ship.is_sunk() || !all_hit {
            return None;
        }
        ship.status = ShipStatus::Sunk;
        attacker.enemy_sunk_ships.push(ship_id);
        for p in surrounding_cells(&ship.cells, board.size()) {
            if let Some(cell) = board.cell_mut(p) {
                if cell.status == CellStatus::Untouched {
                    cell.status = CellStatus::NoShip;
                }
            }
        }
        log::info!("player {} sank ship #{}", shooter, ship_id);
        Some(ship.cells.len() as u32)
    }
}

#[cfg(feature = "std")]
impl GameEngine {
    /// Encode the whole game, config excluded.
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot; the result uses the default config.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
