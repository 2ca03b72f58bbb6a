// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================
// Guarda únicamente el último estado aplicado a la navbar, para detectar
// re-sincronizaciones sin cambios (línea de log en NavbarApp::sync). Cada
// pasada vuelve a obtener el estado del backend; nada más lo consume.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SessionStatus;

/// Estado de autenticación (último estado aplicado a la navbar)
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub username: Rc<RefCell<Option<String>>>,
    pub has_profile: Rc<RefCell<bool>>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            username: Rc::new(RefCell::new(None)),
            has_profile: Rc::new(RefCell::new(false)),
        }
    }

    /// Obtener logged in
    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    /// Obtener username
    pub fn get_username(&self) -> Option<String> {
        self.username.borrow().clone()
    }

    /// Obtener has_profile
    pub fn get_has_profile(&self) -> bool {
        *self.has_profile.borrow()
    }

    /// Aplicar un SessionStatus recién obtenido del backend
    pub fn apply_status(&self, status: &SessionStatus) {
        *self.is_logged_in.borrow_mut() = status.logged_in;
        *self.username.borrow_mut() = status.username.clone();
        *self.has_profile.borrow_mut() = status.has_profile;
    }

    /// Verificar si un SessionStatus coincide con el estado ya aplicado
    pub fn matches(&self, status: &SessionStatus) -> bool {
        self.get_logged_in() == status.logged_in
            && self.get_username() == status.username
            && self.get_has_profile() == status.has_profile
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aplica_y_compara_status() {
        let state = AuthState::new();
        let status = SessionStatus {
            logged_in: true,
            username: Some("Ann".to_string()),
            has_profile: false,
        };

        assert!(!state.matches(&status));
        state.apply_status(&status);
        assert!(state.matches(&status));
        assert!(state.get_logged_in());
        assert_eq!(state.get_username().as_deref(), Some("Ann"));
        assert!(!state.get_has_profile());
    }
}
