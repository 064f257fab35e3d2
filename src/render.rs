use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys as web;

use crate::core::{Compositor, MaskFrame, MaskMode, MaskTarget, Rect, Rgb, Theme, Viewport};
use crate::dom;
use crate::error::EffectError;

const CANVAS_ID: &str = "main-canvas";
const WRAPPER_ID: &str = "bg-canvas";

// ===================== Canvas 2D mask target =====================

fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, EffectError> {
    canvas
        .get_context("2d")?
        .ok_or(EffectError::NoContext("2d"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| EffectError::NoContext("2d"))
}

fn create_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement, EffectError> {
    document
        .create_element("canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| EffectError::Js(format!("{:?}", e)))
}

fn set_fill_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

/// Visible canvas plus an offscreen layer and a tiny mask canvas.
pub struct Canvas2dTarget {
    ctx: web::CanvasRenderingContext2d,
    layer: web::HtmlCanvasElement,
    layer_ctx: web::CanvasRenderingContext2d,
    mask: web::HtmlCanvasElement,
    mask_ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dTarget {
    pub fn new(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
    ) -> Result<Self, EffectError> {
        let ctx = context_2d(canvas)?;
        let layer = create_canvas(document)?;
        let layer_ctx = context_2d(&layer)?;
        let mask = create_canvas(document)?;
        let mask_ctx = context_2d(&mask)?;
        Ok(Self {
            ctx,
            layer,
            layer_ctx,
            mask,
            mask_ctx,
            width: 0.0,
            height: 0.0,
        })
    }

    fn upload_mask(&self, mask: &MaskFrame) -> Result<(), JsValue> {
        let size = mask.size() as u32;
        if self.mask.width() != size || self.mask.height() != size {
            self.mask.set_width(size);
            self.mask.set_height(size);
        }
        let rgba = mask.to_rgba();
        let data = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(bytemuck::cast_slice(&rgba)),
            size,
            size,
        )?;
        self.mask_ctx.put_image_data(&data, 0.0, 0.0)
    }

    fn draw_layer(&self, color: Rgb, rects: &[Rect], mask: &MaskFrame) -> Result<(), JsValue> {
        let lc = &self.layer_ctx;
        lc.set_global_composite_operation("source-over")?;
        lc.clear_rect(0.0, 0.0, self.width, self.height);
        set_fill_style(lc, &color.css());
        for r in rects {
            lc.fill_rect(r.x, r.y, r.w, r.h);
        }
        self.upload_mask(mask)?;
        lc.set_global_composite_operation("destination-in")?;
        lc.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.mask,
            0.0,
            0.0,
            self.width,
            self.height,
        )?;
        lc.set_global_composite_operation("source-over")?;
        self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.layer,
            0.0,
            0.0,
            self.width,
            self.height,
        )
    }
}

impl MaskTarget for Canvas2dTarget {
    fn resize(&mut self, viewport: &Viewport) {
        let (w_px, h_px) = viewport.device_size();
        self.layer.set_width(w_px);
        self.layer.set_height(h_px);
        let dpr = viewport.dpr;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        _ = self.layer_ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.width = viewport.width;
        self.height = viewport.height;
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_masked_layer(&mut self, color: Rgb, rects: &[Rect], mask: &MaskFrame) {
        if let Err(e) = self.draw_layer(color, rects, mask) {
            log::error!("[background] draw error: {:?}", e);
        }
    }
}

// ===================== Background canvas =====================

/// The animated grid behind the YOS section.
pub struct Background {
    canvas: web::HtmlCanvasElement,
    wrapper: web::Element,
    target: Canvas2dTarget,
    compositor: Compositor,
}

impl Background {
    pub fn install(document: &web::Document) -> Result<Self, EffectError> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| EffectError::missing(format!("#{CANVAS_ID}")))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| EffectError::missing(format!("canvas#{CANVAS_ID}")))?;
        let wrapper = document
            .get_element_by_id(WRAPPER_ID)
            .ok_or_else(|| EffectError::missing(format!("#{WRAPPER_ID}")))?;
        let target = Canvas2dTarget::new(document, &canvas)?;
        let mut bg = Self {
            canvas,
            wrapper,
            target,
            compositor: Compositor::default(),
        };
        bg.resize();
        Ok(bg)
    }

    /// Recompute backing size and grid geometry. Runs synchronously before
    /// the next frame is drawn.
    pub fn resize(&mut self) {
        let viewport = dom::sync_canvas_backing_size(&self.canvas, &self.wrapper);
        self.compositor.resize(viewport, &mut self.target);
    }

    pub fn render(&mut self, elapsed: f64) {
        self.compositor.render(elapsed, &mut self.target);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.compositor.set_theme(theme);
        self.wrapper
            .set_class_name(&format!("bg-canvas__wrapper {}", theme.key()));
    }

    pub fn set_mode(&mut self, mode: MaskMode) {
        self.compositor.set_mode(mode);
    }
}
