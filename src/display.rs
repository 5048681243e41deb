//! Display layer: turns a [`Cluster`] descriptor into pixels.
//!
//! The screen has three regions (see [`crate::config`]): the header bar, the
//! control panel, and the cluster placeholder. The placeholder is owned by
//! [`draw_cluster`], which replaces it wholesale on every cycle: clear to
//! the cluster background, then draw each panel into its grid slot. Nothing
//! from the previous frame survives, so a frame depends only on the
//! descriptor.
//!
//! The header and control panel are chrome, drawn by [`draw_frame`] at
//! startup; the control panel is redrawn on its own when the selection
//! changes.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    config::{
        CLUSTER_HEIGHT, CLUSTER_WIDTH, CLUSTER_X, CLUSTER_Y, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
    },
    gauge::{Cluster, Grid, Slot},
    state::CarStatus,
    widgets::{draw_dial, draw_divider, draw_header, draw_sidebar},
};

// =============================================================================
// Regions
// =============================================================================

/// The cluster placeholder region.
pub const CLUSTER_REGION: Rectangle = Rectangle::new(
    Point::new(CLUSTER_X as i32, CLUSTER_Y as i32),
    Size::new(CLUSTER_WIDTH, CLUSTER_HEIGHT),
);

/// The part of the placeholder left for panels once margins are taken off.
pub const PLOT_AREA: Rectangle = Rectangle::new(
    Point::new((CLUSTER_X + MARGIN_LEFT) as i32, (CLUSTER_Y + MARGIN_TOP) as i32),
    Size::new(CLUSTER_WIDTH - MARGIN_LEFT - MARGIN_RIGHT, CLUSTER_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM),
);

/// Pixel rectangle of a grid slot inside `area`.
///
/// Rows and columns are equal in size with no spacing between them. A slot
/// spanning several columns covers them all; spans past the last column are
/// clipped to the grid.
pub fn slot_rect(
    area: &Rectangle,
    grid: Grid,
    slot: Slot,
) -> Rectangle {
    let rows = grid.rows.max(1);
    let cols = grid.cols.max(1);
    let cell_w = area.size.width / cols;
    let cell_h = area.size.height / rows;

    let col = slot.col.min(cols - 1);
    let span = slot.colspan.clamp(1, cols - col);
    let row = slot.row.min(rows - 1);

    Rectangle::new(
        area.top_left + Point::new((col * cell_w) as i32, (row * cell_h) as i32),
        Size::new(cell_w * span, cell_h),
    )
}

// =============================================================================
// Drawing
// =============================================================================

/// Replace the cluster placeholder with `cluster`.
pub fn draw_cluster<D>(
    display: &mut D,
    cluster: &Cluster,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&CLUSTER_REGION, cluster.background.into())?;
    for panel in &cluster.panels {
        let area = slot_rect(&PLOT_AREA, cluster.grid, panel.slot);
        draw_dial(display, &panel.gauge, &area)?;
    }
    Ok(())
}

/// Draw the static chrome: header with the cluster title, control panel
/// showing `selected`, and the divider between panel and cluster.
pub fn draw_frame<D>(
    display: &mut D,
    cluster: &Cluster,
    selected: CarStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(cluster.background.into())?;
    draw_header(display, cluster.title, cluster.font_color)?;
    draw_sidebar(display, selected)?;
    draw_divider(display)
}
