// ============================================================================
// APP - Pasada de reconciliación de la navbar
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::current_pathname;
use crate::models::SessionStatus;
use crate::services::fetch_status;
use crate::state::AuthState;
use crate::utils::HOME_PATH;
use crate::viewmodels::plan_navbar;
use crate::views::apply_navbar_plan;

/// Aplicación de sincronización de navbar
#[derive(Clone)]
pub struct NavbarApp {
    state: AuthState,
}

impl NavbarApp {
    /// Crear nueva aplicación
    pub fn new() -> Self {
        Self {
            state: AuthState::new(),
        }
    }

    /// Pasada completa de reconciliación: fetch → plan → aplicar al DOM.
    /// Devuelve el SessionStatus obtenido del backend.
    pub async fn sync(&self) -> Result<SessionStatus, JsValue> {
        let status = fetch_status().await.map_err(|e| JsValue::from_str(&e))?;

        if self.state.matches(&status) {
            log::info!("ℹ️ Estado de sesión sin cambios desde la última pasada");
        }
        self.state.apply_status(&status);

        let path = current_pathname().unwrap_or_else(|| HOME_PATH.to_string());
        let plan = plan_navbar(&status, &path);
        apply_navbar_plan(&plan)?;

        Ok(status)
    }
}

impl Default for NavbarApp {
    fn default() -> Self {
        Self::new()
    }
}
