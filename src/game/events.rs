use bevy::prelude::*;

/// What a pointer-down ray hit, nearest first per candidate set
///
/// `square` is only filled when no piece was hit and a piece is being held;
/// an idle controller never looks at the board.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPick {
    pub piece: Option<Entity>,
    pub square: Option<Entity>,
}

impl PointerPick {
    pub const MISS: Self = Self {
        piece: None,
        square: None,
    };

    pub fn piece(entity: Entity) -> Self {
        Self {
            piece: Some(entity),
            square: None,
        }
    }

    pub fn square(entity: Entity) -> Self {
        Self {
            piece: None,
            square: Some(entity),
        }
    }
}
