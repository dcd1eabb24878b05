use canvas_core::Surface;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// Canvas2D presenter: copies the composed surface onto the page canvas.
pub struct Presenter {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

impl Presenter {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let mut presenter = Self { canvas, ctx: None };
        if presenter.acquire().is_none() {
            log::warn!("[render] 2d context not available yet");
        }
        presenter
    }

    /// The 2D context, fetched again if an earlier attempt failed.
    pub fn acquire(&mut self) -> Option<&web::CanvasRenderingContext2d> {
        if self.ctx.is_none() {
            self.ctx = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        }
        self.ctx.as_ref()
    }

    pub fn present(&mut self, surface: &Surface) -> anyhow::Result<()> {
        let ctx = self
            .acquire()
            .ok_or_else(|| anyhow::anyhow!("2d context lost"))?;
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(surface.as_bytes()),
            surface.width(),
            surface.height(),
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.put_image_data(&image, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }
}
