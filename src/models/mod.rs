pub mod artifact;
pub mod image;
pub mod text;

pub use artifact::*;
pub use image::*;
pub use text::*;
