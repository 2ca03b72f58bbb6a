// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod auth_state;

pub use auth_state::*;
