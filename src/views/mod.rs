pub mod navbar;

pub use navbar::apply_navbar_plan;
