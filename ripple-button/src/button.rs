//! Interactive button component with variant styling and ripple feedback.
//!
//! The [`button`] component resolves its appearance from a
//! [`ButtonVariant`]/[`AccentColor`] pair, wraps arbitrary child content, and
//! spawns an expanding circular ripple at the cursor position on every click.
//! Ripples are rendered as overlay children clipped to the button's bounds
//! and never intercept pointer events.
//!
//! The child closure receives the current content color so labels follow the
//! variant's rules (including the hover transition) without a styling
//! context:
//!
//! ```rust,ignore
//! use ripple_button::{button, AccentColor, ButtonArgsBuilder, ButtonVariant};
//! use tessera_ui_basic_components::text::{text, TextArgsBuilder};
//!
//! button(
//!     ButtonArgsBuilder::default()
//!         .variant(ButtonVariant::Solid)
//!         .color(AccentColor::Primary)
//!         .on_click(|| println!("clicked"))
//!         .build()
//!         .expect("builder construction failed"),
//!     |content_color| {
//!         text(
//!             TextArgsBuilder::default()
//!                 .text("Click Me".to_string())
//!                 .color(content_color)
//!                 .build()
//!                 .expect("builder construction failed"),
//!         );
//!     },
//! );
//! ```

use std::{sync::Arc, time::Instant};

use derive_builder::Builder;
use tessera_ui::{
    Color, ComputedData, Constraint, CursorEventContent, DimensionValue, Dp, GestureState, NodeId,
    PressKeyEventType, Px, PxPosition, PxSize, State,
    accesskit::{Action, Role},
    remember, tessera,
    winit::window::CursorIcon,
};
use tessera_ui_basic_components::{
    padding_utils::remove_padding_from_dimension,
    pipelines::ShapeCommand,
    pos_misc::is_position_in_component,
    shape_def::{ResolvedShape, Shape},
};

use crate::{
    ripple::{RippleFrame, RippleState},
    theme::{AccentColor, BORDER_WIDTH, ButtonVariant, SurfaceColors, resolve},
};

/// Arguments for the [`button`] component.
#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct ButtonArgs {
    /// Structural style family of the surface.
    #[builder(default)]
    pub variant: ButtonVariant,
    /// Accent hue applied through the variant's rules.
    #[builder(default)]
    pub color: AccentColor,
    /// The shape of the button.
    #[builder(default = "Shape::rounded_rectangle(Dp(20.0))")]
    pub shape: Shape,
    /// Symmetric padding around the content.
    #[builder(default = "Dp(12.0)")]
    pub padding: Dp,
    /// Optional explicit width behavior for the button.
    #[builder(default = "DimensionValue::WRAP", setter(into))]
    pub width: DimensionValue,
    /// Optional explicit height behavior for the button.
    #[builder(default = "DimensionValue::WRAP", setter(into))]
    pub height: DimensionValue,
    /// The click callback function.
    #[builder(default, setter(custom, strip_option))]
    pub on_click: Option<Arc<dyn Fn() + Send + Sync>>,
    /// Optional label read by assistive technologies.
    #[builder(default, setter(strip_option, into))]
    pub accessibility_label: Option<String>,
}

impl ButtonArgsBuilder {
    /// Set the click handler.
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Some(Arc::new(on_click)));
        self
    }

    /// Set the click handler using a shared callback.
    pub fn on_click_shared(mut self, on_click: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.on_click = Some(Some(on_click));
        self
    }
}

impl Default for ButtonArgs {
    fn default() -> Self {
        ButtonArgsBuilder::default()
            .build()
            .expect("builder construction failed")
    }
}

/// Convenience constructors for the three variants.
impl ButtonArgs {
    /// A solid button in the given accent.
    pub fn solid(color: AccentColor) -> Self {
        ButtonArgsBuilder::default()
            .variant(ButtonVariant::Solid)
            .color(color)
            .build()
            .expect("builder construction failed")
    }

    /// A bordered button in the given accent.
    pub fn bordered(color: AccentColor) -> Self {
        ButtonArgsBuilder::default()
            .variant(ButtonVariant::Bordered)
            .color(color)
            .build()
            .expect("builder construction failed")
    }

    /// A light button in the given accent.
    pub fn light(color: AccentColor) -> Self {
        ButtonArgsBuilder::default()
            .variant(ButtonVariant::Light)
            .color(color)
            .build()
            .expect("builder construction failed")
    }
}

/// Creates an interactive button that wraps custom child content.
///
/// The ripple state is remembered internally; use [`button_with_state`] when
/// the parent needs to own or observe it.
///
/// # Parameters
///
/// - `args`: a [`ButtonArgs`] describing variant, accent, shape, padding,
///   sizing and the `on_click` callback.
/// - `child`: renders the content; receives the current content color.
#[tessera]
pub fn button(args: impl Into<ButtonArgs>, child: impl FnOnce(Color)) {
    let ripple_state = remember(RippleState::new);
    button_with_state(args, ripple_state, child);
}

/// Same as [`button`], with the ripple state owned by the caller.
///
/// Handing the state in keeps the ripple collection observable from outside
/// the component, the way a parent holds a reference to the underlying
/// element in retained-tree frameworks.
#[tessera]
pub fn button_with_state(
    args: impl Into<ButtonArgs>,
    ripple_state: State<RippleState>,
    child: impl FnOnce(Color),
) {
    let args: ButtonArgs = args.into();
    let style = resolve(args.variant, args.color);

    let now = Instant::now();
    let frames: Vec<RippleFrame> = ripple_state.with_mut(|state| {
        // Completion is observed against the frame clock; each finished id
        // goes through the same keyed removal path as an explicit signal.
        for id in state.finished_ids(now) {
            state.finish(id);
        }
        state
            .ripples()
            .iter()
            .map(|ripple| ripple.frame(now))
            .collect()
    });
    let hover_blend = ripple_state.with(|state| state.hover_progress(now));
    let colors = style.at_hover(hover_blend);

    (child)(colors.content);
    for frame in &frames {
        ripple_overlay(style.ripple.with_alpha(style.ripple.a * frame.opacity));
    }

    let ripple_count = frames.len();
    let args_measure = args.clone();
    measure(Box::new(move |input| {
        let intrinsic_constraint = Constraint::new(args_measure.width, args_measure.height);
        let effective_constraint = intrinsic_constraint.merge(input.parent_constraint);
        let padding_px: Px = args_measure.padding.into();
        let child_constraint = Constraint::new(
            remove_padding_from_dimension(effective_constraint.width, padding_px),
            remove_padding_from_dimension(effective_constraint.height, padding_px),
        );

        // Content children come first in composition order; the trailing
        // nodes are the ripple overlays spawned this frame.
        let split_index = input.children_ids.len() - ripple_count;
        let content_ids: Vec<NodeId> = input.children_ids[..split_index].to_vec();
        let ripple_ids: Vec<NodeId> = input.children_ids[split_index..].to_vec();

        let mut to_measure: Vec<(NodeId, Constraint)> = content_ids
            .iter()
            .copied()
            .map(|node_id| (node_id, child_constraint))
            .collect();
        for (&node_id, frame) in ripple_ids.iter().zip(&frames) {
            let diameter = DimensionValue::Fixed(frame.diameter);
            to_measure.push((node_id, Constraint::new(diameter, diameter)));
        }
        let measurements = input.measure_children(to_measure)?;

        let mut content_size = ComputedData {
            width: Px(0),
            height: Px(0),
        };
        for &node_id in &content_ids {
            if let Some(measurement) = measurements.get(&node_id) {
                content_size.width = content_size.width.max(measurement.width);
                content_size.height = content_size.height.max(measurement.height);
            }
            input.place_child(
                node_id,
                PxPosition {
                    x: padding_px,
                    y: padding_px,
                },
            );
        }

        let (width, height) = surface_size(effective_constraint, content_size, padding_px);

        if let Some(background) =
            background_command(colors, args_measure.shape, PxSize::new(width, height))
        {
            input.metadata_mut().push_draw_command(background);
        }

        for (&node_id, frame) in ripple_ids.iter().zip(&frames) {
            input.place_child(node_id, frame.position);
        }

        // Ripples expand past the surface; clip them to the button's bounds.
        input.metadata_mut().clips_children = true;

        Ok(ComputedData { width, height })
    }));

    input_handler(Box::new(move |mut input| {
        apply_button_accessibility(&mut input, &args);

        let size = input.computed_data;
        let cursor_pos = input.cursor_position_rel;
        let is_cursor_inside = cursor_pos
            .map(|pos| is_position_in_component(size, pos))
            .unwrap_or(false);

        ripple_state.with_mut(|state| state.set_hovered(is_cursor_inside));

        if !is_cursor_inside {
            return;
        }
        input.requests.cursor_icon = CursorIcon::Pointer;

        let pressed = input.cursor_events.iter().any(|event| {
            matches!(
                event.content,
                CursorEventContent::Pressed(PressKeyEventType::Left)
            )
        });
        let released = input.cursor_events.iter().any(|event| {
            event.gesture_state == GestureState::TapCandidate
                && matches!(
                    event.content,
                    CursorEventContent::Released(PressKeyEventType::Left)
                )
        });

        if pressed && let Some(pos) = cursor_pos {
            ripple_state.with_mut(|state| {
                state.spawn(pos, PxSize::new(size.width, size.height));
            });
        }

        if released && let Some(ref on_click) = args.on_click {
            on_click();
        }
    }));
}

/// Circular overlay drawn for one live ripple.
///
/// Fills whatever size its parent hands it and registers no input handler, so
/// it never steals pointer events from the button's content.
#[tessera]
fn ripple_overlay(color: Color) {
    measure(Box::new(move |input| {
        let width = match input.parent_constraint.width {
            DimensionValue::Fixed(value) => value,
            _ => Px(0),
        };
        let height = match input.parent_constraint.height {
            DimensionValue::Fixed(value) => value,
            _ => Px(0),
        };
        input
            .metadata_mut()
            .push_draw_command(ShapeCommand::Ellipse {
                color,
                shadow: None,
            });
        Ok(ComputedData { width, height })
    }));
}

/// Builds the background draw command for the current surface colors, or
/// `None` when the variant paints nothing at rest.
fn background_command(colors: SurfaceColors, shape: Shape, size: PxSize) -> Option<ShapeCommand> {
    let border_width = BORDER_WIDTH.to_pixels_f32();
    match shape.resolve_for_size(size) {
        ResolvedShape::Rounded {
            corner_radii,
            corner_g2,
        } => match (colors.fill, colors.border) {
            (Some(color), None) => Some(ShapeCommand::Rect {
                color,
                corner_radii,
                corner_g2,
                shadow: None,
            }),
            (None, Some(color)) => Some(ShapeCommand::OutlinedRect {
                color,
                corner_radii,
                corner_g2,
                shadow: None,
                border_width,
            }),
            (Some(fill), Some(border)) => Some(ShapeCommand::FilledOutlinedRect {
                color: fill,
                border_color: border,
                corner_radii,
                corner_g2,
                shadow: None,
                border_width,
            }),
            (None, None) => None,
        },
        ResolvedShape::Ellipse => match (colors.fill, colors.border) {
            (Some(color), None) => Some(ShapeCommand::Ellipse {
                color,
                shadow: None,
            }),
            (None, Some(color)) => Some(ShapeCommand::OutlinedEllipse {
                color,
                shadow: None,
                border_width,
            }),
            (Some(fill), Some(border)) => Some(ShapeCommand::FilledOutlinedEllipse {
                color: fill,
                border_color: border,
                shadow: None,
                border_width,
            }),
            (None, None) => None,
        },
    }
}

/// Resolves the surface's own size from the merged constraint and the
/// measured content.
fn surface_size(
    effective_constraint: Constraint,
    content_size: ComputedData,
    padding_px: Px,
) -> (Px, Px) {
    let min_width = content_size.width + padding_px * 2;
    let min_height = content_size.height + padding_px * 2;

    fn clamp_wrap(min: Option<Px>, max: Option<Px>, min_measure: Px) -> Px {
        min.unwrap_or(Px(0))
            .max(min_measure)
            .min(max.unwrap_or(Px::MAX))
    }

    fn fill_value(min: Option<Px>, max: Option<Px>, min_measure: Px) -> Px {
        max.expect("fill requires a bounded parent constraint")
            .max(min_measure)
            .max(min.unwrap_or(Px(0)))
    }

    let width = match effective_constraint.width {
        DimensionValue::Fixed(value) => value,
        DimensionValue::Wrap { min, max } => clamp_wrap(min, max, min_width),
        DimensionValue::Fill { min, max } => fill_value(min, max, min_width),
    };

    let height = match effective_constraint.height {
        DimensionValue::Fixed(value) => value,
        DimensionValue::Wrap { min, max } => clamp_wrap(min, max, min_height),
        DimensionValue::Fill { min, max } => fill_value(min, max, min_height),
    };

    (width, height)
}

fn apply_button_accessibility(input: &mut tessera_ui::InputHandlerInput<'_>, args: &ButtonArgs) {
    let mut builder = input.accessibility().role(Role::Button).focusable();
    if let Some(label) = args.accessibility_label.as_ref() {
        builder = builder.label(label.clone());
    }
    if args.on_click.is_some() {
        builder = builder.action(Action::Click);
    }
    builder.commit();

    if let Some(on_click) = args.on_click.clone() {
        input.set_accessibility_action_handler(move |action| {
            if action == Action::Click {
                on_click();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> PxSize {
        PxSize::new(Px(200), Px(80))
    }

    #[test]
    fn solid_variant_draws_a_filled_rect() {
        let colors = resolve(ButtonVariant::Solid, AccentColor::Primary).at_hover(0.0);
        let command = background_command(colors, Shape::default(), size());
        assert!(matches!(command, Some(ShapeCommand::Rect { .. })));
    }

    #[test]
    fn bordered_variant_draws_an_outline_only() {
        let colors = resolve(ButtonVariant::Bordered, AccentColor::Error).at_hover(0.0);
        let command = background_command(colors, Shape::default(), size());
        match command {
            Some(ShapeCommand::OutlinedRect {
                color,
                border_width,
                ..
            }) => {
                assert_eq!(color, AccentColor::Error.base());
                assert_eq!(border_width, BORDER_WIDTH.to_pixels_f32());
            }
            other => panic!("expected an outlined rect, got {other:?}"),
        }
    }

    #[test]
    fn light_variant_draws_no_background_at_rest() {
        let colors = resolve(ButtonVariant::Light, AccentColor::Secondary).at_hover(0.0);
        assert!(background_command(colors, Shape::default(), size()).is_none());
    }

    #[test]
    fn light_variant_gains_a_fill_when_hovered() {
        let colors = resolve(ButtonVariant::Light, AccentColor::Secondary).at_hover(1.0);
        let command = background_command(colors, Shape::default(), size());
        assert!(matches!(command, Some(ShapeCommand::Rect { .. })));
    }

    #[test]
    fn wrap_sizing_adds_padding_around_content() {
        let constraint = Constraint::new(DimensionValue::WRAP, DimensionValue::WRAP);
        let content = ComputedData {
            width: Px(100),
            height: Px(30),
        };
        assert_eq!(
            surface_size(constraint, content, Px(12)),
            (Px(124), Px(54))
        );
    }

    #[test]
    fn fixed_sizing_wins_over_content() {
        let constraint = Constraint::new(
            DimensionValue::Fixed(Px(300)),
            DimensionValue::Fixed(Px(60)),
        );
        let content = ComputedData {
            width: Px(100),
            height: Px(30),
        };
        assert_eq!(surface_size(constraint, content, Px(12)), (Px(300), Px(60)));
    }
}
