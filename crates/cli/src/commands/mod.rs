pub mod batch;
pub mod from_nano;
pub mod send_mode;
pub mod to_nano;
