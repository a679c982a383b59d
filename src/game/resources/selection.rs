//! Selection resource - the pick-up / drop state machine
//!
//! Two states: [`SelectionState::Idle`] and [`SelectionState::Holding`].
//! [`Selection::pointer_down`] is the only transition and is a pure function
//! of the current state and the [`PointerPick`]; the ECS side effects
//! (highlight, transform, grid coordinate) are applied by
//! `game::systems::movement::apply_pointer_picks`.
//!
//! | State      | Pick                    | Next    | Outcome                      |
//! |------------|-------------------------|---------|------------------------------|
//! | Idle       | piece hit               | Holding | `PickedUp(piece)`            |
//! | Idle       | anything else           | Idle    | `Unchanged`                  |
//! | Holding(h) | piece hit (any, even h) | Idle    | `Dropped { h, Piece(hit) }`  |
//! | Holding(h) | square hit, no piece    | Idle    | `Dropped { h, Square(hit) }` |
//! | Holding(h) | nothing                 | Holding | `Unchanged`                  |
//!
//! Dropping onto another piece stacks the held piece on top of it. There is
//! no occupancy check and no capture.

use crate::game::events::PointerPick;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SelectionState {
    #[default]
    Idle,
    Holding(Entity),
}

/// Where a held piece is being dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Piece(Entity),
    Square(Entity),
}

impl DropTarget {
    pub fn entity(self) -> Entity {
        match self {
            DropTarget::Piece(entity) | DropTarget::Square(entity) => entity,
        }
    }
}

/// Result of feeding one pointer-down into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    PickedUp(Entity),
    Dropped { piece: Entity, target: DropTarget },
    Unchanged,
}

/// Resource to store the currently held piece
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn held(&self) -> Option<Entity> {
        match self.state {
            SelectionState::Holding(entity) => Some(entity),
            SelectionState::Idle => None,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.held().is_some()
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }

    pub fn pointer_down(&mut self, pick: PointerPick) -> SelectionOutcome {
        match self.state {
            SelectionState::Idle => match pick.piece {
                Some(piece) => {
                    self.state = SelectionState::Holding(piece);
                    SelectionOutcome::PickedUp(piece)
                }
                None => SelectionOutcome::Unchanged,
            },
            SelectionState::Holding(held) => {
                let target = match (pick.piece, pick.square) {
                    (Some(piece), _) => DropTarget::Piece(piece),
                    (None, Some(square)) => DropTarget::Square(square),
                    (None, None) => return SelectionOutcome::Unchanged,
                };
                self.state = SelectionState::Idle;
                SelectionOutcome::Dropped {
                    piece: held,
                    target,
                }
            }
        }
    }
}
