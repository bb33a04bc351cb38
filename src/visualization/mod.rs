pub mod camera;
pub mod frame;
pub mod projection;
