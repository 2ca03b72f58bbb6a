use gloo_net::http::Request;

use crate::models::SessionStatus;
use crate::utils::{BACKEND_URL, STATUS_ENDPOINT};

/// Obtener el estado de sesión actual desde el backend
pub async fn fetch_status() -> Result<SessionStatus, String> {
    let url = format!("{}{}", BACKEND_URL, STATUS_ENDPOINT);

    log::info!("🔐 Consultando estado de sesión...");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let status = response
        .json::<SessionStatus>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if status.logged_in {
        log::info!(
            "✅ Sesión activa para: {} (perfil: {})",
            status.display_name(),
            status.has_profile
        );
    } else {
        log::info!("ℹ️ Sin sesión activa");
    }

    Ok(status)
}
