#![warn(clippy::all)]

mod animation;
mod config;
mod error;
mod frame;
mod gif;
mod grid;
mod pacer;
mod pattern;

pub use animation::{generate, Animation, Termination};
pub use config::Config;
pub use error::GridError;
pub use frame::Frame;
pub use gif::{write_gif, write_gif_to_path};
pub use grid::LifeGrid;
pub use pacer::UpdatePacer;
pub use pattern::{
    from_image, from_image_file, from_json_file, from_json_str, from_rle, from_text, GridSave,
    LoadError,
};
