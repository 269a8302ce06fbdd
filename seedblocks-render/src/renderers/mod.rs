//! Built-in block renderers for the seed component set.

pub mod banner;
pub mod post_grid;
pub mod text_image;
pub mod three_in_a_row;

pub use banner::BannerRenderer;
pub use post_grid::{PostGridRenderer, POST_GRID_IMAGE_SIZE};
pub use text_image::TextImageRenderer;
pub use three_in_a_row::ThreeInARowRenderer;
