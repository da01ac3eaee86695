//! Demo page: one button per variant, side by side.

use ripple_button::{AccentColor, ButtonArgsBuilder, ButtonVariant, button};
use tessera_ui::{Color, DimensionValue, Dp, Px, tessera};
use tessera_ui_basic_components::{
    alignment::CrossAxisAlignment,
    row::{RowArgsBuilder, row},
    spacer::{SpacerArgsBuilder, spacer},
    surface::{SurfaceArgsBuilder, SurfaceStyle, surface},
    text::{TextArgsBuilder, text},
};

#[tessera]
pub fn app() {
    surface(
        SurfaceArgsBuilder::default()
            .style(SurfaceStyle::Filled {
                color: Color::WHITE,
            })
            .width(DimensionValue::FILLED)
            .height(DimensionValue::FILLED)
            .padding(Dp(24.0))
            .build()
            .expect("builder construction failed"),
        || {
            row(
                RowArgsBuilder::default()
                    .cross_axis_alignment(CrossAxisAlignment::Center)
                    .build()
                    .expect("builder construction failed"),
                |scope| {
                    scope.child(|| demo_button(ButtonVariant::Solid, AccentColor::Primary));
                    scope.child(gap);
                    scope.child(|| demo_button(ButtonVariant::Bordered, AccentColor::Error));
                    scope.child(gap);
                    scope.child(|| demo_button(ButtonVariant::Light, AccentColor::Secondary));
                },
            );
        },
    );
}

#[tessera]
fn demo_button(variant: ButtonVariant, color: AccentColor) {
    button(
        ButtonArgsBuilder::default()
            .variant(variant)
            .color(color)
            .padding(Dp(20.0))
            .accessibility_label("Click Me")
            .on_click(move || tracing::info!(?variant, ?color, "button clicked"))
            .build()
            .expect("builder construction failed"),
        |content_color| {
            text(
                TextArgsBuilder::default()
                    .text("Click Me".to_string())
                    .color(content_color)
                    .size(Dp(18.0))
                    .build()
                    .expect("builder construction failed"),
            );
        },
    );
}

fn gap() {
    spacer(
        SpacerArgsBuilder::default()
            .width(DimensionValue::Fixed(Px::from(Dp(16.0))))
            .build()
            .expect("builder construction failed"),
    );
}
