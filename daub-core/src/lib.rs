//! Everything about a canvas that doesn't need a window: palette and brush state, the shapes
//! drawn so far, undo, and reading or writing pixels. The [`Controller`] drives a [`Surface`]
//! from [`CanvasEvents`], so frontends only need to translate their input and paint the result.

pub mod action;
pub mod brush;
pub mod color;
pub mod controller;
pub mod dialog;
pub mod history;
pub mod id;
pub mod io;
pub mod raster;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod units;

pub use action::Action;
pub use controller::{CanvasEvents, Controller, PointerEvent, Region};
pub use surface::Surface;
