//! Canvas 2D implementation of the engine's [`Surface`]

use aurora_engine::viewport::backing_size;
use aurora_engine::{Blend, Fill, GradientStop, Path, PathCommand, Rgba, Size, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// Drawing surface over a `<canvas>` element's 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }

    fn try_resize(&self, size: Size, pixel_ratio: f64) -> Result<(), JsValue> {
        let (width, height) = backing_size(size, pixel_ratio);
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", size.width))?;
        style.set_property("height", &format!("{}px", size.height))?;

        // Draw in CSS pixels; replaces rather than accumulates the scale
        self.ctx
            .set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)
    }

    fn try_clear(&self, size: Size, background: Option<Rgba>) -> Result<(), JsValue> {
        self.ctx.set_global_composite_operation(Blend::SourceOver.as_css())?;
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        if let Some(color) = background {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
        }
        Ok(())
    }

    fn try_fill(&self, path: &Path, fill: &Fill, blend: Blend) -> Result<(), JsValue> {
        let gradient = self.gradient(fill)?;
        self.ctx.set_global_composite_operation(blend.as_css())?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);

        self.ctx.begin_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathCommand::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathCommand::QuadTo { control, to } => {
                    self.ctx.quadratic_curve_to(control.x, control.y, to.x, to.y)
                }
                PathCommand::Close => self.ctx.close_path(),
            }
        }
        self.ctx.fill();
        Ok(())
    }

    fn gradient(&self, fill: &Fill) -> Result<CanvasGradient, JsValue> {
        let (gradient, stops) = match fill {
            Fill::Radial(g) => (
                self.ctx.create_radial_gradient(
                    g.center.x,
                    g.center.y,
                    g.inner_radius,
                    g.center.x,
                    g.center.y,
                    g.outer_radius,
                )?,
                &g.stops,
            ),
            Fill::Linear(g) => (
                self.ctx
                    .create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y),
                &g.stops,
            ),
        };
        add_stops(&gradient, stops)?;
        Ok(gradient)
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[GradientStop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset as f32, &stop.color.to_css())?;
    }
    Ok(())
}

impl Surface for CanvasSurface {
    fn resize(&mut self, size: Size, pixel_ratio: f64) {
        if let Err(e) = self.try_resize(size, pixel_ratio) {
            log::warn!("canvas resize failed: {:?}", e);
        }
    }

    fn clear(&mut self, size: Size, background: Option<Rgba>) {
        if let Err(e) = self.try_clear(size, background) {
            log::warn!("canvas clear failed: {:?}", e);
        }
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill, blend: Blend) {
        if path.is_empty() {
            return;
        }
        if let Err(e) = self.try_fill(path, fill, blend) {
            log::warn!("canvas fill failed: {:?}", e);
        }
    }
}
