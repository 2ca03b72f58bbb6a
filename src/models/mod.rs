pub mod status;

pub use status::SessionStatus;
