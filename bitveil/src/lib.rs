pub mod error;
pub mod grid;
pub mod channel;
pub mod combine;
pub mod extract;

pub use combine::combine;
pub use error::{CombineError, GridError};
pub use extract::extract;
pub use grid::PixelGrid;
