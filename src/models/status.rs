use serde::Deserialize;

/// Estado de sesión devuelto por GET /api/status.
/// `username` y `has_profile` solo son significativos cuando `logged_in` es true;
/// el backend puede enviar `username: null` para sesiones anónimas.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SessionStatus {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub has_profile: bool,
}

impl SessionStatus {
    /// Nombre a mostrar en la UI (vacío si el backend no envió username)
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}
