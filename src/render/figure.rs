use vello_cpu::kurbo::Shape as _;

use crate::{
    animation::pose::{Effect, Limb, Pose},
    foundation::core::{FrameIndex, FrameSize, Point, Rgba8},
    foundation::error::StickgenResult,
};

/// One rendered frame: straight (non-premultiplied) RGBA8, row-major,
/// tightly packed, alpha 0 everywhere the figure is not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Stroke colors for the figure and its effect overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub line: Rgba8,
    pub accent: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line: Rgba8::opaque(255, 255, 255),
            accent: Rgba8::opaque(255, 200, 0),
        }
    }
}

const HEAD_RADIUS: f64 = 8.0;
const ARM_LENGTH: f64 = 20.0;
const LEG_LENGTH: f64 = 25.0;
const LIMB_WIDTH: f64 = 3.0;
/// Perpendicular-ish displacement of a bent limb's midpoint.
const KINK_OFFSET: f64 = 5.0;
/// Fixed expansion step of the one-shot shockwave ring.
const SHOCKWAVE_STEP: u32 = 2;
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Rasterizes poses onto a fixed-size transparent canvas.
///
/// Draw order is fixed and matters (later strokes land on top): head with
/// eyes, body, left arm, right arm, left leg, right leg, effect overlays.
/// The underlying render context is reused across frames.
pub struct Renderer {
    size: FrameSize,
    palette: Palette,
    ctx: Option<vello_cpu::RenderContext>,
}

impl Renderer {
    pub fn new(size: FrameSize, palette: Palette) -> Self {
        Self {
            size,
            palette,
            ctx: None,
        }
    }

    pub fn frame_size(&self) -> FrameSize {
        self.size
    }

    /// Rasterize one pose. `frame` only feeds frame-indexed effect detail
    /// (sparkle size); the figure itself is fully described by `pose`.
    pub fn render(&mut self, pose: &Pose, frame: FrameIndex) -> StickgenResult<FrameRGBA> {
        let (w, h) = self.size.to_u16()?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        self.draw_pose(&mut ctx, pose, frame);

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data,
        })
    }

    fn draw_pose(&self, ctx: &mut vello_cpu::RenderContext, pose: &Pose, frame: FrameIndex) {
        self.draw_head(ctx, pose);
        self.stroke_line(
            ctx,
            pose.body_top,
            pose.body_bottom,
            LIMB_WIDTH,
            self.palette.line,
        );
        self.draw_limb(ctx, pose.body_top, pose.left_arm, ARM_LENGTH);
        self.draw_limb(ctx, pose.body_top, pose.right_arm, ARM_LENGTH);
        self.draw_limb(ctx, pose.body_bottom, pose.left_leg, LEG_LENGTH);
        self.draw_limb(ctx, pose.body_bottom, pose.right_leg, LEG_LENGTH);

        if pose.has_effect(Effect::Sparkle) {
            // Three stars fanned over the head, alternating heights.
            for i in 0..3i32 {
                let dx = f64::from(i - 1) * 20.0;
                let dy = -20.0 - f64::from(i % 2) * 10.0;
                let at = Point::new(pose.head.x + dx, pose.head.y + dy);
                self.draw_sparkle(ctx, at, frame);
            }
        }
        if pose.has_effect(Effect::Shockwave) {
            let at = Point::new(pose.body_top.x + 25.0, pose.body_top.y);
            self.draw_shockwave(ctx, at, SHOCKWAVE_STEP);
        }
    }

    fn draw_head(&self, ctx: &mut vello_cpu::RenderContext, pose: &Pose) {
        let line = self.palette.line;
        let (x, y) = (pose.head.x, pose.head.y);
        self.stroke_circle(ctx, pose.head, HEAD_RADIUS, LIMB_WIDTH, line);

        if pose.has_effect(Effect::Angry) {
            // Furrowed slashes.
            self.stroke_line(ctx, Point::new(x - 3.0, y - 2.0), Point::new(x - 1.0, y), 2.0, line);
            self.stroke_line(ctx, Point::new(x + 1.0, y), Point::new(x + 3.0, y - 2.0), 2.0, line);
        } else if pose.has_effect(Effect::Dizzy) {
            // X-shaped eyes.
            self.stroke_line(ctx, Point::new(x - 3.0, y - 2.0), Point::new(x - 1.0, y), 1.0, line);
            self.stroke_line(ctx, Point::new(x - 1.0, y - 2.0), Point::new(x - 3.0, y), 1.0, line);
            self.stroke_line(ctx, Point::new(x + 1.0, y - 2.0), Point::new(x + 3.0, y), 1.0, line);
            self.stroke_line(ctx, Point::new(x + 3.0, y - 2.0), Point::new(x + 1.0, y), 1.0, line);
        } else {
            self.fill_dot(ctx, Point::new(x - 2.5, y - 1.5), 0.7, line);
            self.fill_dot(ctx, Point::new(x + 2.5, y - 1.5), 0.7, line);
        }
    }

    /// Endpoint via polar offset from the origin anchor. A non-zero bend
    /// replaces the straight segment with two segments through a midpoint
    /// displaced by the bend angle, producing the elbow/knee kink.
    fn draw_limb(&self, ctx: &mut vello_cpu::RenderContext, origin: Point, limb: Limb, length: f64) {
        let dir = limb.angle_deg.to_radians();
        let end = Point::new(
            origin.x + length * dir.cos(),
            origin.y + length * dir.sin(),
        );

        if limb.bend_deg == 0.0 {
            self.stroke_line(ctx, origin, end, LIMB_WIDTH, self.palette.line);
        } else {
            let bend = limb.bend_deg.to_radians();
            let mid = Point::new(
                origin.x + (length / 2.0) * dir.cos() + KINK_OFFSET * bend.sin(),
                origin.y + (length / 2.0) * dir.sin() + KINK_OFFSET * bend.cos(),
            );
            self.stroke_line(ctx, origin, mid, LIMB_WIDTH, self.palette.line);
            self.stroke_line(ctx, mid, end, LIMB_WIDTH, self.palette.line);
        }
    }

    /// Four-pointed star: a bold cross plus thin diagonals, sized by the
    /// frame index so consecutive frames twinkle.
    fn draw_sparkle(&self, ctx: &mut vello_cpu::RenderContext, at: Point, frame: FrameIndex) {
        let accent = self.palette.accent;
        let size = f64::from(3 + frame.0 % 3);
        let (x, y) = (at.x, at.y);

        self.stroke_line(ctx, Point::new(x - size, y), Point::new(x + size, y), 2.0, accent);
        self.stroke_line(ctx, Point::new(x, y - size), Point::new(x, y + size), 2.0, accent);

        let d = size * 0.7;
        self.stroke_line(ctx, Point::new(x - d, y - d), Point::new(x + d, y + d), 1.0, accent);
        self.stroke_line(ctx, Point::new(x - d, y + d), Point::new(x + d, y - d), 1.0, accent);
    }

    fn draw_shockwave(&self, ctx: &mut vello_cpu::RenderContext, at: Point, step: u32) {
        let accent = self.palette.accent;
        let radius = f64::from(5 + step * 2);
        self.stroke_circle(ctx, at, radius, 2.0, accent);
        if step > 1 {
            self.stroke_circle(ctx, at, radius - 4.0, 1.0, accent);
        }
    }

    fn stroke_line(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
    ) {
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(cpu_point(from));
        path.line_to(cpu_point(to));
        set_stroke_style(ctx, width, color);
        ctx.stroke_path(&path);
    }

    fn stroke_circle(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba8,
    ) {
        let circle = vello_cpu::kurbo::Circle::new(cpu_point(center), radius);
        set_stroke_style(ctx, width, color);
        ctx.stroke_path(&circle.to_path(CIRCLE_TOLERANCE));
    }

    fn fill_dot(&self, ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, color: Rgba8) {
        let circle = vello_cpu::kurbo::Circle::new(cpu_point(center), radius);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
    }
}

fn set_stroke_style(ctx: &mut vello_cpu::RenderContext, width: f64, color: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
}

fn cpu_point(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

/// Pixmap readback is premultiplied; PNG output wants straight RGBA.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/figure.rs"]
mod tests;
