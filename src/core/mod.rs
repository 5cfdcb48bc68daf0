pub mod ballistics;
pub mod error;
pub mod playback;
pub mod summary;
pub mod window;
