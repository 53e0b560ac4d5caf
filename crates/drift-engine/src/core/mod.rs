pub mod field;
pub mod frame_loop;
pub mod time;
