#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod pointer;
pub mod primitive;
pub mod raster;
pub mod renderer;
pub mod stamp;
pub mod style;
pub mod util;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use color::{PaintColor, resolve_color};
pub use config::PaintConfig;
pub use error::{PaintError, Result};
pub use pointer::PointerSample;
pub use primitive::Primitive;
pub use renderer::{Renderer, render_frame};
pub use stamp::{Stamp, StampRng};
pub use style::{Brush, PaintState, StyleState};
