//! Theme system for Rosterdeck
//!
//! Each [`ThemeChoice`] maps to an iced palette. Style functions read their
//! colors back from the active `Theme`, so every widget follows the toggle.

use iced::color;
use iced::font::Weight;
use iced::theme::Palette;
use iced::widget::{button, container, svg, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::features::ThemeChoice;

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

pub const WHITE: Color = Color::WHITE;

// ============================================================================
// Palettes
// ============================================================================

mod hunter_green {
    use super::*;
    pub const PRIMARY: Color = color!(0x355e3b);
    pub const TEXT: Color = color!(0x1b2a1e);
}

mod purple_sapphire {
    use super::*;
    pub const PRIMARY: Color = color!(0x5b3e96);
    pub const TEXT: Color = color!(0x221a33);
}

const BACKGROUND: Color = color!(0xffffff);
const SUCCESS: Color = color!(0x2e7d32);
const DANGER: Color = color!(0xc62828);

/// Palette for a named theme
pub fn palette(choice: ThemeChoice) -> Palette {
    let (primary, text) = match choice {
        ThemeChoice::HunterGreen => (hunter_green::PRIMARY, hunter_green::TEXT),
        ThemeChoice::PurpleSapphire => (purple_sapphire::PRIMARY, purple_sapphire::TEXT),
    };
    Palette {
        background: BACKGROUND,
        text,
        primary,
        success: SUCCESS,
        danger: DANGER,
        ..Palette::LIGHT
    }
}

/// iced theme for a named theme
pub fn iced_theme(choice: ThemeChoice) -> Theme {
    Theme::custom(choice.display_name().to_string(), palette(choice))
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Primary text color
pub fn text_primary(theme: &Theme) -> Color {
    theme.palette().text
}

/// Secondary text color
pub fn text_secondary(theme: &Theme) -> Color {
    with_alpha(theme.palette().text, 0.65)
}

/// Divider and outline color
pub fn divider(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}

pub fn danger(theme: &Theme) -> Color {
    theme.palette().danger
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top application bar painted with the primary color
pub fn header_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().primary)),
        text_color: Some(WHITE),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// One pixel divider line
pub fn separator(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(divider(theme))),
        ..Default::default()
    }
}

/// Table card surrounding header and rows
pub fn table_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: Border {
            color: divider(theme),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Table header row
pub fn table_header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Table body row; odd rows get a faint primary tint, the hovered row a stronger one
pub fn table_row(theme: &Theme, odd: bool, hovered: bool) -> container::Style {
    let background = if hovered {
        Some(Background::Color(with_alpha(theme.palette().primary, 0.12)))
    } else if odd {
        Some(Background::Color(with_alpha(theme.palette().primary, 0.05)))
    } else {
        None
    };
    container::Style {
        background,
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Modal card
pub fn dialog_box(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            theme.palette().background,
            opacity,
        ))),
        text_color: Some(text_primary(theme)),
        border: Border {
            color: with_alpha(divider(theme), opacity),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modals
pub fn overlay_backdrop(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            0.45 * opacity,
        ))),
        ..Default::default()
    }
}

/// Floating toast surface
pub fn toast(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Filled button in the primary color
pub fn contained_button(theme: &Theme, status: button::Status) -> button::Style {
    let primary = &theme.extended_palette().primary;
    let bg = match status {
        button::Status::Hovered => primary.strong.color,
        button::Status::Pressed => primary.base.color,
        button::Status::Disabled => with_alpha(primary.base.color, 0.4),
        button::Status::Active => primary.base.color,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent button on the primary header bar
pub fn header_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.25,
        button::Status::Pressed => 0.35,
        _ => 0.15,
    };
    button::Style {
        background: Some(Background::Color(with_alpha(WHITE, alpha))),
        text_color: WHITE,
        border: Border {
            color: with_alpha(WHITE, 0.6),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Outlined secondary button
pub fn outlined_button(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.palette().primary;
    let (bg, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (with_alpha(primary, 0.08), primary)
        }
        button::Status::Disabled => (Color::TRANSPARENT, with_alpha(primary, 0.4)),
        button::Status::Active => (Color::TRANSPARENT, primary),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            color: with_alpha(text_color, 0.6),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Destructive confirm button
pub fn danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let danger = &theme.extended_palette().danger;
    let bg = match status {
        button::Status::Hovered => danger.strong.color,
        button::Status::Disabled => with_alpha(danger.base.color, 0.4),
        _ => danger.base.color,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless icon button
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(with_alpha(theme.palette().primary, 0.12)))
        }
        _ => None,
    };
    button::Style {
        background: bg,
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Form text field; the border turns red while the field has an error
pub fn text_field(theme: &Theme, status: text_input::Status, has_error: bool) -> text_input::Style {
    let primary = theme.palette().primary;
    let border_color = if has_error {
        danger(theme)
    } else {
        match status {
            text_input::Status::Focused { .. } => primary,
            text_input::Status::Hovered => with_alpha(primary, 0.6),
            _ => divider(theme),
        }
    };
    let background = match status {
        text_input::Status::Disabled => theme.extended_palette().background.weak.color,
        _ => theme.palette().background,
    };
    text_input::Style {
        background: Background::Color(background),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_secondary(theme),
        placeholder: with_alpha(theme.palette().text, 0.4),
        value: text_primary(theme),
        selection: with_alpha(primary, 0.3),
    }
}

/// Icons tinted with the primary text color
pub fn icon(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(text_primary(theme)),
    }
}
