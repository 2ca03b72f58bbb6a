pub mod navbar_viewmodel;

pub use navbar_viewmodel::*;
