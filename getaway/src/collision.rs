use crate::player::Player;
use crate::pursuer::Pursuer;

/// Circle test using half diagonals as radii. Touching circles do not count.
pub fn is_caught(player: &Player, pursuer: &Pursuer) -> bool {
    player.position.distance(pursuer.position) < player.collision_radius() + pursuer.collision_radius()
}

pub fn count_catches(player: &Player, pursuers: &[Pursuer]) -> usize {
    pursuers.iter().filter(|p| is_caught(player, p)).count()
}
