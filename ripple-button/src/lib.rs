//! A themeable button component with a click-triggered ripple animation,
//! built for the Tessera UI framework.
//!
//! The crate provides a single widget: [`button`]. Its appearance is resolved
//! from two closed enumerations, [`ButtonVariant`] (solid, bordered, light)
//! and [`AccentColor`] (primary, secondary, error, success), and every click
//! spawns an expanding circular ripple at the cursor position, clipped to the
//! button's bounds.
//!
//! # Usage
//!
//! Drawing reuses the shape pipeline of `tessera-ui-basic-components`, so the
//! application has to register those pipelines once at startup:
//!
//! ```rust,ignore
//! use tessera_ui::renderer::WgpuApp;
//! use tessera_ui_basic_components::pipelines::register_pipelines;
//!
//! fn setup(app: &mut WgpuApp) {
//!     register_pipelines(app);
//! }
//! ```
//!
//! Then place buttons anywhere in the component tree:
//!
//! ```rust,ignore
//! use ripple_button::{button, AccentColor, ButtonArgsBuilder, ButtonVariant};
//! use tessera_ui_basic_components::text::{text, TextArgsBuilder};
//!
//! button(
//!     ButtonArgsBuilder::default()
//!         .variant(ButtonVariant::Bordered)
//!         .color(AccentColor::Error)
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

mod animation;

pub mod button;
pub mod ripple;
pub mod theme;

pub use button::{ButtonArgs, ButtonArgsBuilder, button, button_with_state};
pub use ripple::{
    RIPPLE_DURATION, RIPPLE_MAX_SCALE, Ripple, RippleFrame, RippleId, RippleRect, RippleState,
};
pub use theme::{AccentColor, ButtonStyle, ButtonVariant, SurfaceColors, resolve};
