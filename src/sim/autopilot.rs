//! Idle/demo mode - the computer plays the game
//!
//! Picks the obstacle that will reach the player's row soonest among those
//! overlapping the player's lane, and steers toward the side with more room.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Extra horizontal clearance the autopilot tries to keep (pixels)
const LANE_MARGIN: f32 = 12.0;
/// How far ahead (seconds to impact) obstacles are considered threats
const LOOKAHEAD_SECS: f32 = 1.2;
/// Dead zone when drifting back to center
const CENTER_DEAD_ZONE: f32 = 20.0;

/// Fill in movement intents for the current state
///
/// Also presses start from the menu and after a game over so a demo keeps
/// running on its own.
pub fn steer(state: &GameState, input: &mut TickInput) {
    input.move_left = false;
    input.move_right = false;

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            input.start = true;
            return;
        }
        GamePhase::Paused => return,
        GamePhase::Playing => {}
    }

    let player = state.player.rect();
    let lane_left = player.left() - LANE_MARGIN;
    let lane_right = player.right() + LANE_MARGIN;

    // Most urgent obstacle in our lane
    let threat = state
        .obstacles
        .iter_active()
        .map(|(_, o)| o)
        .filter(|o| o.rect().bottom() <= player.bottom() && o.speed > 0.0)
        .filter(|o| o.rect().right() >= lane_left && o.rect().left() <= lane_right)
        .map(|o| ((player.top() - o.rect().bottom()).max(0.0) / o.speed, o))
        .filter(|(eta, _)| *eta <= LOOKAHEAD_SECS)
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let screen_width = state.tuning.screen_width;

    if let Some((_, o)) = threat {
        let rect = o.rect();
        let room_left = rect.left() - 0.0;
        let room_right = screen_width - rect.right();
        let player_center = player.pos.x + player.size.x / 2.0;
        let threat_center = rect.pos.x + rect.size.x / 2.0;

        // Prefer dodging away from the obstacle center, unless that side is a wall
        let go_left = if room_left < player.size.x + LANE_MARGIN {
            false
        } else if room_right < player.size.x + LANE_MARGIN {
            true
        } else {
            player_center < threat_center
        };
        input.move_left = go_left;
        input.move_right = !go_left;
        return;
    }

    // Nothing close: drift toward the middle
    let center_x = (screen_width - player.size.x) / 2.0;
    let offset = player.pos.x - center_x;
    if offset > CENTER_DEAD_ZONE {
        input.move_left = true;
    } else if offset < -CENTER_DEAD_ZONE {
        input.move_right = true;
    }
}
