pub mod draw_list;
pub mod surface;

pub use draw_list::{CircleInstance, DrawList, LineInstance};
pub use surface::Surface;
