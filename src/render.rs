//! Rendering: paints one frame of the scene onto a [`Surface`].
//!
//! Receives read-only views of the scene and the drag ghost and produces
//! drawing calls. It does not mutate any application state. Traversal order
//! is the only z-ordering: later leaves occlude earlier ones.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::ops::ControlFlow;

use crate::error::Result;
use crate::geometry::{BoundingBox, Point};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::widget::Widget;

/// Draw a full frame.
///
/// Layers: background, every visible leaf in walk order, then the drag ghost
/// (if any) at its pointer-relative position, painted regardless of the
/// dragged widget's own visibility.
///
/// # Errors
///
/// Returns the first surface failure; later layers are not drawn.
pub fn draw(
    surface: &mut dyn Surface,
    scene: &Scene,
    bounds: &BoundingBox,
    background: &str,
    ghost: Option<(&Widget, Point)>,
) -> Result<()> {
    // Layer 1: background.
    surface.clear(bounds, background)?;

    // Layer 2: leaves in traversal order.
    let failure = scene.try_walk(bounds, |widget, at| match widget.draw(surface, at) {
        Ok(()) => ControlFlow::Continue(()),
        Err(err) => ControlFlow::Break(err),
    });
    if let Some(err) = failure {
        return Err(err);
    }

    // Layer 3: the dragged copy under the pointer.
    if let Some((widget, at)) = ghost {
        widget.draw_ghost(surface, at)?;
    }

    Ok(())
}
