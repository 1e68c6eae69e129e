//! Browser implementation of [`Surface`] over `CanvasRenderingContext2d`.
//!
//! This module and [`Engine`](crate::engine::Engine) are the only places that
//! touch `web_sys`. Every fallible `Canvas2D` call is mapped to
//! [`Error::Surface`].

use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::{AssetRegistry, image_source};
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::hex::hexagon_corners;
use crate::surface::Surface;
use crate::tile::TileKind;

pub(crate) fn js_error(err: JsValue) -> Error {
    Error::Surface(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Fetch the 2D context of `canvas`.
///
/// # Errors
///
/// Returns [`Error::Surface`] if the canvas has no 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| Error::Surface("missing 2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::Surface("context is not a CanvasRenderingContext2d".into()))
}

/// Start loading one image per tile kind from the default sources.
///
/// Images load asynchronously; a glyph whose image has not finished loading
/// draws nothing until the next frame after it completes.
///
/// # Errors
///
/// Returns [`Error::Surface`] if an image element cannot be created.
pub fn load_images() -> Result<AssetRegistry<HtmlImageElement>> {
    TileKind::ALL
        .into_iter()
        .map(|tile| {
            let image = HtmlImageElement::new().map_err(js_error)?;
            image.set_src(image_source(tile));
            Ok::<_, Error>((tile, image))
        })
        .collect()
}

/// A [`Surface`] that draws onto a browser canvas.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    assets: &'a AssetRegistry<HtmlImageElement>,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, assets: &'a AssetRegistry<HtmlImageElement>) -> Self {
        Self { ctx, assets }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, bounds: &BoundingBox, background: &str) -> Result<()> {
        let Point { x, y } = bounds.origin;
        self.ctx.clear_rect(x, y, bounds.width, bounds.height);
        self.ctx.set_fill_style_str(background);
        self.ctx.fill_rect(x, y, bounds.width, bounds.height);
        Ok(())
    }

    fn fill_hexagon(&mut self, center: Point, radius: f64, fill: &str) -> Result<()> {
        let [first, rest @ ..] = hexagon_corners(center, radius);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for corner in rest {
            self.ctx.line_to(corner.x, corner.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        Ok(())
    }

    fn draw_glyph(&mut self, tile: TileKind, center: Point, size: f64) -> Result<()> {
        let Some(image) = self.assets.get(tile) else {
            debug!(%tile, "no image registered; glyph skipped");
            return Ok(());
        };
        let half = size * 0.5;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, center.x - half, center.y - half, size, size)
            .map_err(js_error)
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str) -> Result<()> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, at.x, at.y).map_err(js_error)
    }
}
