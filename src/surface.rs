// Drawing surface the particle field renders onto. The browser implementation
// wraps a canvas element and its 2d context.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    type Error;

    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;
    fn set_fill_color(&mut self, color: &Color) -> Result<(), Self::Error>;
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height)
    }
}

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    // One css string per distinct color, built on first use
    fill_styles: Vec<(Color, JsValue)>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasSurface {
            canvas,
            context,
            fill_styles: Vec::new(),
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn cached_fill_styles(&self) -> usize {
        self.fill_styles.len()
    }

    fn fill_style_index(&mut self, color: &Color) -> usize {
        match self.fill_styles.iter().position(|(c, _)| c == color) {
            Some(idx) => idx,
            None => {
                self.fill_styles
                    .push((*color, JsValue::from_str(&color.to_css())));
                self.fill_styles.len() - 1
            }
        }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(x, y, width, height);
        Ok(())
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: &Color) -> Result<(), JsValue> {
        let idx = self.fill_style_index(color);
        self.context.set_fill_style(&self.fill_styles[idx].1);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
