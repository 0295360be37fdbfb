//! Calibration overlay for plot digitizing.
//!
//! This crate is compiled to WebAssembly and runs in the browser as the front
//! end of a notebook widget. It draws a plot image with two vertical and two
//! horizontal guide lines, lets the user drag those lines, and writes every
//! accepted position back to the host model. The host only supplies the model
//! object and a mount element; see [`widget::render`].
//!
//! Everything except [`engine::Engine`], [`render`], [`host`] and [`widget`]
//! is plain Rust and runs in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Pointer buttons, cursors and the drag state machine |
//! | [`hit`] | Hit-testing the pointer against guide lines |
//! | [`lines`] | Guide-line positions and their ordering invariant |
//! | [`scale`] | Screen/image conversions for the static scale factor |
//! | [`scene`] | Frame layout: guide segments, markers, captions |
//! | [`render`] | Paints a [`scene::Scene`] onto a 2D canvas context |
//! | [`model`] | Host model interface and an in-memory store |
//! | [`host`] | Binding of [`model::ModelStore`] to the JS model object |
//! | [`config`] | Style and widget settings read from the model |
//! | [`calibration`] | Pixel to plot-value mapping from the guide lines |
//! | [`widget`] | WASM entry point and DOM event wiring |
//! | [`consts`] | Shared numeric constants (hit radii, caption offsets, etc.) |

pub mod calibration;
pub mod config;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod host;
pub mod input;
pub mod lines;
pub mod model;
pub mod render;
pub mod scale;
pub mod scene;
pub mod widget;
