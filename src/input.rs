use glam::Vec2;
use web_sys as web;

/// Last known pointer position in canvas pixels; `None` until the pointer
/// moves over the page or after it leaves.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn moved_to(&mut self, pos: Vec2) {
        self.position = Some(pos);
    }

    #[inline]
    pub fn left(&mut self) {
        self.position = None;
    }
}

/// Map a CSS-pixel point relative to the element's box into backing-store
/// pixels. Degenerate boxes map to the origin.
#[inline]
pub fn css_to_canvas_px(css: Vec2, box_size: Vec2, canvas_size: Vec2) -> Vec2 {
    if box_size.x <= 0.0 || box_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / box_size * canvas_size
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_canvas_px(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Pointer offset inside an element, in CSS pixels (for the card spotlight).
#[inline]
pub fn pointer_offset_in(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
