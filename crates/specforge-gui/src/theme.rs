//! Spacing constants and shared widget styles.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

use iced::widget::{container, text};
use iced::{Border, Theme};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Error text - failed loads, rejected credentials.
pub fn text_error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Warning text - missing optional tables.
pub fn text_warning(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().warning.base.color),
    }
}

/// Success text - confirmations and positive status.
pub fn text_success(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().success.base.color),
    }
}

/// Muted text - hints, secondary labels.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Bordered card container for form sections and status panels.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..container::Style::default()
    }
}
