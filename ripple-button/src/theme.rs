//! Style resolution for button variants and accent colors.
//!
//! The mapping is a fixed lookup: an [`AccentColor`] selects the base hue and
//! a [`ButtonVariant`] decides how that hue is applied to fill, border,
//! content and ripple tint. [`resolve`] is a pure function over the two
//! enumerations; components call it at render time and never cache the
//! result.

use tessera_ui::{Color, Dp};

/// Border stroke width used by the bordered variant.
pub const BORDER_WIDTH: Dp = Dp(2.0);

/// Blend fraction toward white applied to hovered fills and borders.
const HOVER_MIX: f32 = 0.4;

/// Blend fraction toward white for the light variant's hover fill and the
/// bordered variant's ripple tint.
const FAINT_MIX: f32 = 0.8;

/// Blend fraction toward white for the light variant's ripple tint.
const SOFT_MIX: f32 = 0.5;

/// Alpha of the translucent white ripple used by the solid variant.
const SOLID_RIPPLE_ALPHA: f32 = 0.4;

const PRIMARY: Color = Color::from_rgb_u8(65, 105, 225); // royal blue
const SECONDARY: Color = Color::from_rgb_u8(128, 0, 128); // purple
const ERROR: Color = Color::from_rgb_u8(255, 0, 0); // red
const SUCCESS: Color = Color::from_rgb_u8(0, 128, 0); // green

/// Structural style family of a button surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled background in the accent hue, white content.
    #[default]
    Solid,
    /// Transparent fill with an accent-colored border and content.
    Bordered,
    /// Content-only at rest; a faint accent fill appears on hover.
    Light,
}

/// Semantic accent hue, independent of the variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccentColor {
    /// Royal blue.
    #[default]
    Primary,
    /// Purple.
    Secondary,
    /// Red.
    Error,
    /// Green.
    Success,
}

impl AccentColor {
    /// Base hue of this accent.
    pub const fn base(self) -> Color {
        match self {
            AccentColor::Primary => PRIMARY,
            AccentColor::Secondary => SECONDARY,
            AccentColor::Error => ERROR,
            AccentColor::Success => SUCCESS,
        }
    }
}

/// Resolved visual rules for one `(variant, accent)` pair.
///
/// `fill` and `border` are `None` where the variant paints nothing there; the
/// bordered variant's border is drawn at [`BORDER_WIDTH`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    /// Fill behind the content, if the variant paints one.
    pub fill: Option<Color>,
    /// Fill while the cursor hovers the surface.
    pub hover_fill: Option<Color>,
    /// Border color, if the variant draws an outline.
    pub border: Option<Color>,
    /// Border color while hovered.
    pub hover_border: Option<Color>,
    /// Color handed to the button's content.
    pub content: Color,
    /// Content color while hovered.
    pub hover_content: Color,
    /// Tint of the ripple circles spawned by clicks, including alpha.
    pub ripple: Color,
}

/// Surface colors at one instant of the hover transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceColors {
    /// Current fill, if any.
    pub fill: Option<Color>,
    /// Current border color, if any.
    pub border: Option<Color>,
    /// Current content color.
    pub content: Color,
}

impl ButtonStyle {
    /// Surface colors at a hover blend factor in `[0, 1]`, where `0.0` is the
    /// resting style and `1.0` the fully hovered one.
    pub fn at_hover(&self, blend: f32) -> SurfaceColors {
        SurfaceColors {
            fill: mix_optional(self.fill, self.hover_fill, blend),
            border: mix_optional(self.border, self.hover_border, blend),
            content: self.content.lerp(&self.hover_content, blend),
        }
    }
}

/// Maps `(variant, accent)` to the rendered appearance.
///
/// Total over both enumerations and deterministic; calling it twice with the
/// same inputs yields identical output.
pub fn resolve(variant: ButtonVariant, accent: AccentColor) -> ButtonStyle {
    let base = accent.base();
    match variant {
        ButtonVariant::Solid => ButtonStyle {
            fill: Some(base),
            hover_fill: Some(towards_white(base, HOVER_MIX)),
            border: None,
            hover_border: None,
            content: Color::WHITE,
            hover_content: Color::WHITE,
            ripple: Color::WHITE.with_alpha(SOLID_RIPPLE_ALPHA),
        },
        ButtonVariant::Bordered => {
            let hover = towards_white(base, HOVER_MIX);
            ButtonStyle {
                fill: None,
                hover_fill: None,
                border: Some(base),
                hover_border: Some(hover),
                content: base,
                hover_content: hover,
                ripple: towards_white(base, FAINT_MIX),
            }
        }
        ButtonVariant::Light => ButtonStyle {
            fill: None,
            hover_fill: Some(towards_white(base, FAINT_MIX)),
            border: None,
            hover_border: None,
            content: base,
            hover_content: base,
            ripple: towards_white(base, SOFT_MIX),
        },
    }
}

/// Component-wise blend toward white, the framework analog of
/// `color-mix(in srgb, base, white N%)`.
fn towards_white(color: Color, amount: f32) -> Color {
    color.lerp(&Color::WHITE, amount)
}

/// Blends two optional colors; a missing side fades through transparency.
fn mix_optional(from: Option<Color>, to: Option<Color>, blend: f32) -> Option<Color> {
    match (from, to) {
        (None, None) => None,
        (Some(from), Some(to)) => Some(from.lerp(&to, blend)),
        (Some(from), None) => (blend < 1.0).then(|| from.lerp(&from.with_alpha(0.0), blend)),
        (None, Some(to)) => (blend > 0.0).then(|| to.with_alpha(0.0).lerp(&to, blend)),
    }
}
