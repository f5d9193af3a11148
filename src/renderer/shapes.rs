//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Vertices per filled rectangle (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// Screen rects snap to whole pixels before drawing
pub fn snap(rect: &Rect) -> Rect {
    Rect::new(
        rect.pos.x.round(),
        rect.pos.y.round(),
        rect.size.x.round(),
        rect.size.y.round(),
    )
}

/// Append a filled, pixel-snapped rectangle as two triangles
pub fn filled_rect(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let r = snap(rect);
    let (x0, y0) = (r.left(), r.top());
    let (x1, y1) = (r.right(), r.bottom());

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}
