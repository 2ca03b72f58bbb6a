// ============================================================================
// NAVBAR SYNC - Sincronización de navbar con estado de sesión (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Aplican el plan al DOM (sin lógica)
// - ViewModels: Tabla de decisión pura (estado × ruta → plan)
// - Services: SOLO comunicación API
// - State: Último estado aplicado con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;

use crate::app::NavbarApp;

// Instancia global de la app para poder re-sincronizar desde JavaScript
thread_local! {
    static APP: RefCell<Option<NavbarApp>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Navbar Sync - Rust Puro + MVVM");

    let app = NavbarApp::new();
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app.clone());
    });

    // Primera pasada de reconciliación al cargar la página.
    // Un fetch fallido deja la navbar en su estado por defecto (solo se loggea).
    spawn_local(async move {
        if let Err(e) = app.sync().await {
            log::error!("❌ Error sincronizando navbar: {:?}", e);
        }
    });

    Ok(())
}

/// Re-ejecutar la reconciliación (llamable desde JavaScript).
/// La inserción del banner es idempotente, por lo que repetir la pasada
/// sobre la misma página es seguro.
#[wasm_bindgen]
pub fn sync_navbar_wasm() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().clone() {
            spawn_local(async move {
                if let Err(e) = app.sync().await {
                    log::error!("❌ Error re-sincronizando navbar: {:?}", e);
                }
            });
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
