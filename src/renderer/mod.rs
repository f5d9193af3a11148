//! Rendering collaborator
//!
//! The simulation never draws. Each frame the driver hands a read-only
//! [`FrameView`] to a [`Renderer`]; [`build_draw_list`] turns that view into
//! colored triangles ready for any GPU or software backend.

pub mod shapes;
pub mod vertex;

use crate::sim::{GamePhase, GameState, Rect};

pub use vertex::{Vertex, colors};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub phase: GamePhase,
    pub screen: Rect,
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub high_score: u32,
}

impl FrameView {
    pub fn new(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            screen: Rect::new(0.0, 0.0, state.tuning.screen_width, state.tuning.screen_height),
            player: state.player.rect(),
            obstacles: state.obstacles.iter_active().map(|(_, o)| o.rect()).collect(),
            score: state.score,
            high_score: state.high_score,
        }
    }

    /// Window title text
    pub fn title(&self) -> String {
        window_title(self.score, self.high_score, self.phase)
    }
}

/// Presentation backend
pub trait Renderer {
    /// Draw one frame; must not mutate game state
    fn present(&mut self, view: &FrameView);
}

/// `"Endless Dodge - Score: S  High: H  [STATE]"`
pub fn window_title(score: u32, high_score: u32, phase: GamePhase) -> String {
    format!(
        "Endless Dodge - Score: {}  High: {}  [{}]",
        score,
        high_score,
        phase.as_str()
    )
}

/// Full-screen overlay for a phase; playing has none
pub fn tint_for(phase: GamePhase) -> Option<[f32; 4]> {
    match phase {
        GamePhase::Menu => Some(colors::MENU_TINT),
        GamePhase::Paused => Some(colors::PAUSE_TINT),
        GamePhase::GameOver => Some(colors::GAME_OVER_TINT),
        GamePhase::Playing => None,
    }
}

/// Background, player, obstacles, then the phase tint on top
pub fn build_draw_list(view: &FrameView) -> Vec<Vertex> {
    let quads = 2 + view.obstacles.len() + usize::from(tint_for(view.phase).is_some());
    let mut out = Vec::with_capacity(quads * shapes::QUAD_VERTICES);

    shapes::filled_rect(&mut out, &view.screen, colors::BACKGROUND);
    shapes::filled_rect(&mut out, &view.player, colors::PLAYER);
    for rect in &view.obstacles {
        shapes::filled_rect(&mut out, rect, colors::OBSTACLE);
    }
    if let Some(tint) = tint_for(view.phase) {
        shapes::filled_rect(&mut out, &view.screen, tint);
    }

    out
}

/// Renderer without a window: builds the draw list and logs the title
///
/// Used by the native binary's demo mode and by tests, which inspect the
/// recorded frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Frames presented so far
    pub frames: u64,
    /// Vertices generated for the last frame
    pub last_vertices: Vec<Vertex>,
    /// Every distinct title, in order
    pub titles: Vec<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, view: &FrameView) {
        self.frames += 1;
        self.last_vertices = build_draw_list(view);

        let title = view.title();
        if self.titles.last() != Some(&title) {
            log::debug!("{}", title);
            self.titles.push(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameRng;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Tuning::default(), GameRng::new(1), 250)
    }

    #[test]
    fn test_title_format() {
        assert_eq!(
            window_title(12, 340, GamePhase::GameOver),
            "Endless Dodge - Score: 12  High: 340  [GAME OVER]"
        );
    }

    #[test]
    fn test_each_overlay_phase_has_distinct_tint() {
        assert!(tint_for(GamePhase::Playing).is_none());
        assert!(tint_for(GamePhase::Menu).is_some());
        assert_ne!(tint_for(GamePhase::Menu), tint_for(GamePhase::GameOver));
        assert_ne!(tint_for(GamePhase::Paused), tint_for(GamePhase::GameOver));
    }

    #[test]
    fn test_menu_draw_list_has_overlay() {
        let state = state();
        let view = FrameView::new(&state);
        let verts = build_draw_list(&view);
        // background + player + tint
        assert_eq!(verts.len(), 3 * shapes::QUAD_VERTICES);
        assert_eq!(verts.last().unwrap().color, colors::MENU_TINT);
    }

    #[test]
    fn test_playing_draw_list_has_obstacles_and_no_tint() {
        let mut state = state();
        state.phase = GamePhase::Playing;
        for idx in 0..2 {
            let o = state.obstacles.slot_mut(idx).unwrap();
            o.active = true;
            o.size = glam::Vec2::new(50.0, 20.0);
        }
        let view = FrameView::new(&state);
        assert_eq!(view.obstacles.len(), 2);
        let verts = build_draw_list(&view);
        assert_eq!(verts.len(), 4 * shapes::QUAD_VERTICES);
        assert_eq!(verts.last().unwrap().color, colors::OBSTACLE);
    }

    #[test]
    fn test_headless_records_title_changes() {
        let mut state = state();
        let mut renderer = HeadlessRenderer::new();
        renderer.present(&FrameView::new(&state));
        renderer.present(&FrameView::new(&state));
        state.score = 5;
        renderer.present(&FrameView::new(&state));
        assert_eq!(renderer.frames, 3);
        assert_eq!(renderer.titles.len(), 2);
        assert_eq!(renderer.titles[0], "Endless Dodge - Score: 0  High: 250  [MENU]");
    }
}
