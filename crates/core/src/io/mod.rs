//! I/O operations for elevation inputs and image outputs

mod dem;
mod png;

pub use dem::read_dem;
pub use png::write_image;
