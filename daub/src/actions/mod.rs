//! # Actions
//!
//! [`Action`]s are the non-pointer things a user can ask of the canvas. They arrive from toolbar
//! buttons or from [`hotkeys`], and are handed to the controller unchanged.

pub mod hotkeys;

pub use daub_core::Action;
