use egui::{Color32, Context, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::surface::RasterCanvas;

const TEXTURE_NAME: &str = "whiteboard_canvas";

/// Keeps the canvas bitmap mirrored in an egui texture and paints it.
///
/// The bitmap is only re-uploaded when its revision changes.
#[derive(Default)]
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_upload(&self, canvas: &RasterCanvas) -> bool {
        self.uploaded_revision != Some(canvas.revision())
    }

    /// Upload the bitmap if it changed since the last upload.
    /// Returns whether an upload happened.
    pub fn sync(&mut self, ctx: &Context, canvas: &RasterCanvas) -> bool {
        if !self.needs_upload(canvas) {
            return false;
        }
        if canvas.width() == 0 || canvas.height() == 0 {
            self.texture = None;
            self.uploaded_revision = Some(canvas.revision());
            return false;
        }

        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(handle) => handle.set(image, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture(TEXTURE_NAME, image, TextureOptions::NEAREST)),
        }
        self.uploaded_revision = Some(canvas.revision());
        true
    }

    /// Paint the background, then the bitmap at its native size anchored to
    /// the top-left of `rect`. Erased pixels show the background through.
    pub fn render(&mut self, ctx: &Context, painter: &Painter, rect: Rect, canvas: &RasterCanvas, background: Color32) {
        painter.rect_filled(rect, 8.0, background);
        self.sync(ctx, canvas);

        if let Some(texture) = &self.texture {
            let image_rect = Rect::from_min_size(rect.min, vec2(canvas.width() as f32, canvas.height() as f32));
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawingSurface;

    #[test]
    fn test_upload_only_when_revision_changes() {
        let ctx = Context::default();
        let mut renderer = CanvasRenderer::new();
        let mut canvas = RasterCanvas::new(8, 8);
        canvas.fill(Color32::WHITE);

        assert!(renderer.sync(&ctx, &canvas));
        assert!(renderer.texture.is_some());
        assert!(!renderer.sync(&ctx, &canvas));

        canvas.fill(Color32::BLACK);
        assert!(renderer.needs_upload(&canvas));
        assert!(renderer.sync(&ctx, &canvas));
        assert_eq!(renderer.texture.as_ref().unwrap().size(), [8, 8]);
    }

    #[test]
    fn test_resized_canvas_replaces_texture_size() {
        let ctx = Context::default();
        let mut renderer = CanvasRenderer::new();
        let mut canvas = RasterCanvas::new(8, 8);
        renderer.sync(&ctx, &canvas);

        canvas.resize(16, 4);
        assert!(renderer.sync(&ctx, &canvas));
        assert_eq!(renderer.texture.as_ref().unwrap().size(), [16, 4]);
    }

    #[test]
    fn test_empty_canvas_has_no_texture() {
        let ctx = Context::default();
        let mut renderer = CanvasRenderer::new();
        let canvas = RasterCanvas::new(0, 0);
        assert!(!renderer.sync(&ctx, &canvas));
        assert!(renderer.texture.is_none());
    }
}
