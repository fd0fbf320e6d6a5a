use std::io::Cursor;

use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};

use super::{CompositeMode, DrawingSurface, StrokeStyle};
use crate::error::{WhiteboardError, WhiteboardResult};

/// An in-memory RGBA bitmap with software stroking.
///
/// Pixels are sampled at their centers and stroke edges get one pixel of
/// anti-aliasing. Coverage is derived from the distance to the stroke's
/// centerline, which yields round caps and joins for free.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pixels: RgbaImage,
    /// End of the current path, if one has been started
    cursor: Option<Pos2>,
    /// Bumped on every mutation so renderers know when to re-upload
    revision: u64,
}

impl Default for RasterCanvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl RasterCanvas {
    /// A fully transparent canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            cursor: None,
            revision: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Unmultiplied color at `(x, y)`, or `None` outside the bitmap
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.width() as usize, self.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Composite `style` onto every pixel whose center lies within half the
    /// stroke width of the shape described by `distance`.
    fn stroke_by_distance(&mut self, bounds: Rect, style: &StrokeStyle, distance: impl Fn(Pos2) -> f32) {
        let half = style.width.max(0.0) / 2.0;
        let bounds = bounds.expand(half + 1.0);
        let (width, height) = (self.width() as f32, self.height() as f32);
        if width == 0.0 || height == 0.0 || !bounds.is_finite() {
            return;
        }

        let x0 = bounds.min.x.floor().clamp(0.0, width) as u32;
        let x1 = bounds.max.x.ceil().clamp(0.0, width) as u32;
        let y0 = bounds.min.y.floor().clamp(0.0, height) as u32;
        let y1 = bounds.max.y.ceil().clamp(0.0, height) as u32;

        let source = style.color.to_srgba_unmultiplied();
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (half + 0.5 - distance(center)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let pixel = self.pixels.get_pixel_mut(x, y);
                    composite(pixel, source, coverage, style.composite);
                }
            }
        }
        self.touch();
    }
}

fn composite(dst: &mut Rgba<u8>, src: [u8; 4], coverage: f32, mode: CompositeMode) {
    let src_alpha = src[3] as f32 / 255.0 * coverage;
    let dst_alpha = dst[3] as f32 / 255.0;

    match mode {
        CompositeMode::SourceOver => {
            let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
            if out_alpha <= 0.0 {
                *dst = Rgba([0, 0, 0, 0]);
                return;
            }
            for channel in 0..3 {
                let s = src[channel] as f32;
                let d = dst[channel] as f32;
                let value = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
                dst[channel] = to_u8(value);
            }
            dst[3] = to_u8(out_alpha * 255.0);
        }
        CompositeMode::DestinationOut => {
            let out_alpha = dst_alpha * (1.0 - src_alpha);
            dst[3] = to_u8(out_alpha * 255.0);
        }
    }
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

pub(crate) fn distance_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

impl DrawingSurface for RasterCanvas {
    fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.cursor = None;
        self.touch();
    }

    fn fill(&mut self, color: Color32) {
        let rgba = Rgba(color.to_srgba_unmultiplied());
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
        self.touch();
    }

    fn begin_path(&mut self, point: Pos2) {
        self.cursor = Some(point);
    }

    fn stroke_path_to(&mut self, point: Pos2, style: &StrokeStyle) {
        // Like canvas `lineTo`: with no current path this only moves the pen.
        let Some(from) = self.cursor.replace(point) else {
            return;
        };
        self.stroke_line(from, point, style);
    }

    fn stroke_rect(&mut self, origin: Pos2, size: Vec2, style: &StrokeStyle) {
        let rect = Rect::from_two_pos(origin, origin + size);
        let corners = [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
        self.stroke_by_distance(rect, style, |p| {
            (0..4)
                .map(|i| distance_to_segment(p, corners[i], corners[(i + 1) % 4]))
                .fold(f32::INFINITY, f32::min)
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: &StrokeStyle) {
        let radius = radius.abs();
        let bounds = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        self.stroke_by_distance(bounds, style, |p| (p.distance(center) - radius).abs());
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle) {
        let bounds = Rect::from_two_pos(from, to);
        self.stroke_by_distance(bounds, style, |p| distance_to_segment(p, from, to));
    }

    fn encode_png(&self) -> WhiteboardResult<Vec<u8>> {
        let [width, height] = self.size();
        if width == 0 || height == 0 {
            return Err(WhiteboardError::EmptySurface { width, height });
        }
        let mut bytes = Vec::new();
        self.pixels.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        log::debug!("Encoded {}x{} canvas to {} PNG bytes", width, height, bytes.len());
        Ok(bytes)
    }
}
