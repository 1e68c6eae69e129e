//! Shared numeric constants for the canvas crate.

// ── Hex math ────────────────────────────────────────────────────

/// √3 — width of a pointy-top hexagon is `SQRT_3 * size`.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// 2 / √3 — scales a normalized x so the hexagon's vertical edges sit at ±1.
pub const TWO_OVER_SQRT_3: f64 = 1.154_700_538_379_251_5;

/// (√3 / 2)² — squared inradius of a unit-circumradius hexagon.
pub const INRADIUS_SQ: f64 = 0.75;

/// Vertical distance between hex rows, as a fraction of hexagon height.
pub const ROW_SPACING: f64 = 0.75;

// ── Drawing ─────────────────────────────────────────────────────

/// Inset between a tile's highlight ring and its body, in pixels.
pub const TILE_PADDING_PX: f64 = 2.0;
