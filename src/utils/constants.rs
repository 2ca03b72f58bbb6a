/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (URLs relativas al mismo origen)
/// - Despliegues separados: via BACKEND_URL env var (.env + build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Endpoint de estado de sesión
pub const STATUS_ENDPOINT: &str = "/api/status";

/// Endpoint de logout (el link de auth apunta aquí, no se invoca desde Rust)
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

// Rutas de página
pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const PROFILE_PATH: &str = "/profile";

// Contrato DOM: ids que la página host debe proveer
pub const AUTH_LINK_ID: &str = "auth-link";
pub const AUTH_NAV_ITEM_ID: &str = "auth-nav-item";
pub const PROFILE_NAV_ITEM_ID: &str = "profile-nav-item";
pub const PROFILE_ALERT_ID: &str = "profile-alert";
pub const CONTAINER_SELECTOR: &str = ".container";
