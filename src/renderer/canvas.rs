//! Canvas 2D drawing (wasm only)

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wasm_bindgen::JsCast;

use super::{cell_rect, eye_offsets, palette, power_up_color};
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::sim::Snapshot;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, snap: &Snapshot) {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(palette::BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.draw_grid();

        if let Some(food) = snap.food {
            let r = cell_rect(self.width, self.height, food);
            ctx.set_fill_style_str(palette::FOOD);
            ctx.fill_rect(r.x, r.y, r.w, r.h);
        }

        if let Some(bonus) = snap.bonus {
            let r = cell_rect(self.width, self.height, bonus.pos);
            ctx.set_fill_style_str(palette::BONUS);
            ctx.fill_rect(r.x, r.y, r.w, r.h);
        }

        if let Some(power_up) = snap.power_up {
            let r = cell_rect(self.width, self.height, power_up.pos);
            ctx.set_fill_style_str(power_up_color(power_up.kind));
            ctx.begin_path();
            ctx.arc(r.x + r.w / 2.0, r.y + r.h / 2.0, r.w.min(r.h) * 0.45, 0.0, TAU)
                .ok();
            ctx.fill();
        }

        for (i, &segment) in snap.snake.iter().enumerate() {
            let r = cell_rect(self.width, self.height, segment);
            ctx.set_fill_style_str(if i == 0 { palette::HEAD } else { palette::BODY });
            ctx.fill_rect(r.x, r.y, r.w, r.h);
            ctx.set_stroke_style_str(palette::SEGMENT_BORDER);
            ctx.stroke_rect(r.x, r.y, r.w, r.h);

            if i == 0 {
                ctx.set_fill_style_str(palette::EYE);
                for (ex, ey) in eye_offsets(snap.direction) {
                    ctx.begin_path();
                    ctx.arc(r.x + r.w * ex, r.y + r.h * ey, r.w * 0.1, 0.0, TAU)
                        .ok();
                    ctx.fill();
                }
            }
        }

        if snap.slow_motion {
            ctx.set_fill_style_str(palette::SLOW_TINT);
            ctx.fill_rect(0.0, 0.0, self.width, self.height);
        }
    }

    fn draw_grid(&self) {
        let ctx = &self.ctx;
        let cw = self.width / GRID_WIDTH as f64;
        let ch = self.height / GRID_HEIGHT as f64;

        ctx.set_stroke_style_str(palette::GRID_LINE);
        for i in 0..=GRID_WIDTH {
            ctx.begin_path();
            ctx.move_to(i as f64 * cw, 0.0);
            ctx.line_to(i as f64 * cw, self.height);
            ctx.stroke();
        }
        for i in 0..=GRID_HEIGHT {
            ctx.begin_path();
            ctx.move_to(0.0, i as f64 * ch);
            ctx.line_to(self.width, i as f64 * ch);
            ctx.stroke();
        }
    }
}
