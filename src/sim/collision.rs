//! Player vs obstacle collision detection

use super::obstacles::ObstacleField;
use super::state::Player;

/// Slot of the first active obstacle touching the player, by slot order
pub fn first_collision(player: &Player, obstacles: &ObstacleField) -> Option<usize> {
    let player_rect = player.rect();
    obstacles
        .iter_active()
        .find(|(_, o)| player_rect.intersects(&o.rect()))
        .map(|(idx, _)| idx)
}

/// Whether the player touches any active obstacle
pub fn check_collision(player: &Player, obstacles: &ObstacleField) -> bool {
    first_collision(player, obstacles).is_some()
}
