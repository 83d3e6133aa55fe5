pub mod common;
pub mod image;
pub mod video;

pub use common::*;
pub use image::*;
pub use video::*;
