mod json;
mod render;


pub use json::*;
pub use render::*;
