//! Standard Gess rules implementation.

use super::{IllegalMove, RuleSet};
use crate::path::{footprint_trace, Trace};
use crate::{ring, Position};
use gess_core::{Color, Footprint, Move};

/// Furthest a group without a center stone may slide along either axis.
pub const HEADLESS_RANGE: u32 = 3;

/// Standard Gess rules.
///
/// A move is checked in this order, stopping at the first failure:
/// 1. the source center leaves room for the whole footprint
/// 2. the source footprint holds no opponent stone
/// 3. the source footprint holds at least one of the mover's stones
/// 4. the destination center leaves room for the whole footprint
/// 5. a group without a center stone moves at most 3 squares per axis
/// 6. the move has a direction, and diagonals are true 45 degree slides
/// 7. the leading stone for that direction is present
/// 8. the swept paths are clear
/// 9. playing the move on a scratch board leaves the mover a ring
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGess;

impl StandardGess {
    /// Plays the move on a copy of the board and reports whether `mover`
    /// still has a ring afterwards. The position itself is never touched.
    pub fn survives(&self, position: &Position, m: Move, mover: Color) -> bool {
        let mut scratch = position.board.clone();
        scratch.apply(&Footprint::around(m.from), &Footprint::around(m.to));
        ring::has_ring(&scratch, mover)
    }
}

impl RuleSet for StandardGess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn check_move(&self, position: &Position, m: Move) -> Result<(), IllegalMove> {
        let board = &position.board;
        let mover = position.side_to_move;
        let from = Footprint::around(m.from);
        let to = Footprint::around(m.to);

        if !m.from.is_valid_center() {
            return Err(IllegalMove::OffBoardSource(m.from));
        }

        if let Some(sq) = from.iter().find(|&sq| board.cell(sq).is(mover.opposite())) {
            return Err(IllegalMove::EnemyStoneInSource(sq));
        }

        if !from.iter().any(|sq| board.cell(sq).is(mover)) {
            return Err(IllegalMove::EmptySource);
        }

        if !m.to.is_valid_center() {
            return Err(IllegalMove::OffBoardDestination(m.to));
        }

        if board.cell(m.from).is_empty() && m.distance() > HEADLESS_RANGE {
            return Err(IllegalMove::TooFarWithoutCenter);
        }

        let dir = m.direction().ok_or(IllegalMove::NullMove)?;
        let (dr, dc) = m.delta();
        if dir.is_diagonal() && dr.abs() != dc.abs() {
            return Err(IllegalMove::ObliqueMove);
        }

        if !board.cell(from.get(dir.leading_cell())).is(mover) {
            return Err(IllegalMove::MissingLeadingStone(dir));
        }

        match footprint_trace(board, &from, &to, dir) {
            Trace::Clear => {}
            Trace::Blocked(sq, _) | Trace::OffGrid(sq) => {
                return Err(IllegalMove::PathBlocked(sq));
            }
        }

        if !self.survives(position, m, mover) {
            return Err(IllegalMove::Suicide);
        }

        Ok(())
    }

    fn make_move(&self, position: &Position, m: Move) -> Position {
        let mut new_pos = position.clone();
        new_pos
            .board
            .apply(&Footprint::around(m.from), &Footprint::around(m.to));
        new_pos.side_to_move = position.side_to_move.opposite();
        new_pos
    }

    fn has_ring(&self, position: &Position, color: Color) -> bool {
        ring::has_ring(&position.board, color)
    }
}
