use crate::core::{Direction, GameEngine, GameError, Point, SetupStatus, ShotOutcome};

/// Commands accepted from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "command", rename_all = "snake_case"))]
pub enum Command {
    /// Enter a setup phase (restart or configure).
    SetGameStatus { status: SetupStatus },
    /// Place a new ship.
    AddShip {
        player: usize,
        ship_type_id: usize,
        direction: Direction,
        anchor: Point,
    },
    /// Move or rotate a placed ship.
    ReplaceShip {
        player: usize,
        ship_id: u32,
        anchor: Point,
        direction: Direction,
    },
    /// Take a placed ship back.
    RemoveShip { player: usize, ship_id: u32 },
    /// Leave configuration and begin shooting.
    StartGame,
    /// Current player shoots at a cell.
    Shoot { point: Point },
    /// Pass the turn to the other player.
    FinishPlayerTurn,
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum CommandOutcome {
    /// State changed, nothing else to report.
    Updated,
    /// A ship was placed under this id.
    ShipPlaced { ship_id: u32 },
    Shot(ShotOutcome),
}

impl GameEngine {
    /// Dispatch a command to the matching engine operation.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        match command {
            Command::SetGameStatus { status } => {
                self.set_game_status(status)?;
                Ok(CommandOutcome::Updated)
            }
            Command::AddShip {
                player,
                ship_type_id,
                direction,
                anchor,
            } => {
                let ship_id = self.add_ship(player, ship_type_id, direction, anchor)?;
                Ok(CommandOutcome::ShipPlaced { ship_id })
            }
            Command::ReplaceShip {
                player,
                ship_id,
                anchor,
                direction,
            } => {
                self.replace_ship(player, ship_id, anchor, direction)?;
                Ok(CommandOutcome::Updated)
            }
            Command::RemoveShip { player, ship_id } => {
                self.remove_ship(player, ship_id)?;
                Ok(CommandOutcome::Updated)
            }
            Command::StartGame => {
                self.start_game()?;
                Ok(CommandOutcome::Updated)
            }
            Command::Shoot { point } => self.shoot(point).map(CommandOutcome::Shot),
            Command::FinishPlayerTurn => {
                self.finish_player_turn()?;
                Ok(CommandOutcome::Updated)
            }
        }
    }
}
