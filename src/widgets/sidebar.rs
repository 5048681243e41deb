//! Control panel on the left edge of the screen.
//!
//! Shows the car status selector: a heading, a label and one row per
//! [`CarStatus`] option. The selected row is boxed and drawn in white, the
//! other in gray. Key hints sit at the bottom.
//!
//! ```text
//! CONTROLS
//!
//! CAR STATUS
//! ┌──────┐
//! │ ON   │   selected
//! └──────┘
//!   OFF
//!
//! [A] toggle
//! [O] on [F] off
//! [Q] quit
//! ```

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    colors::{BLACK, WHITE},
    config::{HEADER_HEIGHT, SCREEN_HEIGHT, SIDEBAR_WIDTH},
    state::CarStatus,
    styles::{LEFT_TOP, PANEL_HEADING_STYLE, PANEL_HINT_STYLE, PANEL_LABEL_STYLE},
};

// =============================================================================
// Panel Layout Constants
// =============================================================================

/// Left padding for all panel text.
const PAD_X: i32 = 8;

/// Panel area, right of which the divider is drawn.
const PANEL_POS: Point = Point::new(0, HEADER_HEIGHT as i32);
const PANEL_SIZE: Size = Size::new(SIDEBAR_WIDTH - 1, SCREEN_HEIGHT - HEADER_HEIGHT);

const HEADING_POS: Point = Point::new(PAD_X, HEADER_HEIGHT as i32 + 8);
const LABEL_POS: Point = Point::new(PAD_X, HEADER_HEIGHT as i32 + 40);

/// Top of the first option row.
const OPTIONS_TOP: i32 = HEADER_HEIGHT as i32 + 56;

/// Height of one option row.
const OPTION_HEIGHT: u32 = 18;

/// Width of the selection box.
const OPTION_WIDTH: u32 = SIDEBAR_WIDTH - 2 * PAD_X as u32;

/// Text inset inside an option row.
const OPTION_TEXT_INSET: Point = Point::new(6, 4);

const HINT_TOGGLE_POS: Point = Point::new(PAD_X, SCREEN_HEIGHT as i32 - 44);
const HINT_SELECT_POS: Point = Point::new(PAD_X, SCREEN_HEIGHT as i32 - 30);
const HINT_QUIT_POS: Point = Point::new(PAD_X, SCREEN_HEIGHT as i32 - 16);

const PANEL_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK.to_rgb565());
const SELECTED_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE.to_rgb565(), 1);

/// Bounding box of an option row.
pub fn option_rect(status: CarStatus) -> Rectangle {
    let index = CarStatus::ALL.iter().position(|&s| s == status).unwrap_or(0) as i32;
    Rectangle::new(
        Point::new(PAD_X, OPTIONS_TOP + index * (OPTION_HEIGHT as i32 + 4)),
        Size::new(OPTION_WIDTH, OPTION_HEIGHT),
    )
}

/// Draw the control panel with `selected` highlighted.
///
/// Redraws the whole panel background, so it can be called on its own
/// whenever the selection changes.
pub fn draw_sidebar<D>(
    display: &mut D,
    selected: CarStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(PANEL_POS, PANEL_SIZE)
        .into_styled(PANEL_FILL_STYLE)
        .draw(display)?;

    Text::with_text_style("CONTROLS", HEADING_POS, PANEL_HEADING_STYLE, LEFT_TOP).draw(display)?;
    Text::with_text_style("CAR STATUS", LABEL_POS, PANEL_LABEL_STYLE, LEFT_TOP).draw(display)?;

    for status in CarStatus::ALL {
        let rect = option_rect(status);
        let style = if status == selected {
            rect.into_styled(SELECTED_STYLE).draw(display)?;
            PANEL_LABEL_STYLE
        } else {
            PANEL_HINT_STYLE
        };
        Text::with_text_style(status.label(), rect.top_left + OPTION_TEXT_INSET, style, LEFT_TOP).draw(display)?;
    }

    Text::with_text_style("[A] toggle", HINT_TOGGLE_POS, PANEL_HINT_STYLE, LEFT_TOP).draw(display)?;
    Text::with_text_style("[O] on [F] off", HINT_SELECT_POS, PANEL_HINT_STYLE, LEFT_TOP).draw(display)?;
    Text::with_text_style("[Q] quit", HINT_QUIT_POS, PANEL_HINT_STYLE, LEFT_TOP).draw(display)?;
    Ok(())
}
