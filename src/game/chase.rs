use super::piece::Position;
use crate::utils::get_difference;

/// One greedy pursuit step: move a single unit along the axis with the larger
/// gap to `target`. Equal gaps move vertically.
pub fn chase_step(enemy: Position, target: Position) -> Position {
    let mut next = enemy;
    if get_difference(target.x, enemy.x) > get_difference(target.y, enemy.y) {
        next.x += if target.x < enemy.x { -1 } else { 1 };
    } else {
        next.y += if target.y < enemy.y { -1 } else { 1 };
    }
    next
}
