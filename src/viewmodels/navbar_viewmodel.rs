// ============================================================================
// NAVBAR VIEWMODEL - Lógica de reconciliación de la barra de navegación
// ============================================================================
// Tabla de decisión pura: (estado de sesión, ruta actual) → NavbarPlan.
// Las Views aplican el plan al DOM sin tomar decisiones propias.
// ============================================================================

use crate::models::SessionStatus;
use crate::utils::{AUTH_PATH, HOME_PATH, LOGOUT_ENDPOINT, PROFILE_PATH};

// Textos de UI (en vietnamita, como el resto de la aplicación)
const LOGIN_LABEL: &str = "Đăng Nhập/Đăng Ký";

/// Clasificación de la ruta actual (comparación exacta de pathname)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathKind {
    Home,
    Auth,
    Profile,
    Other,
}

impl PathKind {
    pub fn from_path(path: &str) -> Self {
        if path == HOME_PATH {
            PathKind::Home
        } else if path == AUTH_PATH {
            PathKind::Auth
        } else if path == PROFILE_PATH {
            PathKind::Profile
        } else {
            PathKind::Other
        }
    }
}

/// Contenido del link de auth (#auth-link)
#[derive(Clone, PartialEq, Debug)]
pub struct AuthLinkContent {
    pub label: String,
    pub href: &'static str,
}

/// Acción de página resultante de la reconciliación
#[derive(Clone, PartialEq, Debug)]
pub enum PageAction {
    /// Nada que hacer más allá de la navbar
    None,
    /// Redirigir el navegador a la ruta indicada
    Redirect(&'static str),
    /// Insertar el banner de perfil incompleto (saludo con el username)
    ShowProfileBanner(String),
}

/// Plan completo para una pasada de reconciliación
#[derive(Clone, PartialEq, Debug)]
pub struct NavbarPlan {
    pub auth_link: AuthLinkContent,
    pub profile_nav_visible: bool,
    pub action: PageAction,
}

/// Etiqueta de logout con el username embebido
pub fn logout_label(username: &str) -> String {
    format!("Đăng Xuất ({})", username)
}

/// HTML interno del banner de perfil incompleto
pub fn banner_html(username: &str) -> String {
    format!(
        "<strong>Xin chào, {}!</strong> Bạn chưa có Hồ sơ. Vui lòng \
         <a href=\"{}\" class=\"alert-link\">Nhập Hồ sơ cá nhân</a> \
         để sử dụng đầy đủ tính năng.",
        username, PROFILE_PATH
    )
}

/// Tabla de decisión: estado de sesión + ruta actual → plan de navbar
pub fn plan_navbar(status: &SessionStatus, path: &str) -> NavbarPlan {
    let kind = PathKind::from_path(path);

    if status.logged_in {
        let username = status.display_name();
        let auth_link = AuthLinkContent {
            label: logout_label(username),
            href: LOGOUT_ENDPOINT,
        };

        let action = match kind {
            // En la página de auth con sesión activa: salir hacia home o perfil
            PathKind::Auth => {
                if status.has_profile {
                    PageAction::Redirect(HOME_PATH)
                } else {
                    PageAction::Redirect(PROFILE_PATH)
                }
            }
            // Ya está en la página de perfil: sin banner ni redirect
            PathKind::Profile => PageAction::None,
            // Resto de páginas: banner si todavía no hay perfil
            PathKind::Home | PathKind::Other => {
                if status.has_profile {
                    PageAction::None
                } else {
                    PageAction::ShowProfileBanner(username.to_string())
                }
            }
        };

        NavbarPlan {
            auth_link,
            profile_nav_visible: true,
            action,
        }
    } else {
        let auth_link = AuthLinkContent {
            label: LOGIN_LABEL.to_string(),
            href: AUTH_PATH,
        };

        // Sin sesión, solo la página de perfil exige volver a auth;
        // la home permanece accesible para usuarios anónimos
        let action = match kind {
            PathKind::Profile => PageAction::Redirect(AUTH_PATH),
            _ => PageAction::None,
        };

        NavbarPlan {
            auth_link,
            profile_nav_visible: false,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(username: &str, has_profile: bool) -> SessionStatus {
        SessionStatus {
            logged_in: true,
            username: Some(username.to_string()),
            has_profile,
        }
    }

    fn logged_out() -> SessionStatus {
        SessionStatus {
            logged_in: false,
            username: None,
            has_profile: false,
        }
    }

    #[test]
    fn clasifica_rutas_por_igualdad_exacta() {
        assert_eq!(PathKind::from_path("/"), PathKind::Home);
        assert_eq!(PathKind::from_path("/auth"), PathKind::Auth);
        assert_eq!(PathKind::from_path("/profile"), PathKind::Profile);
        assert_eq!(PathKind::from_path("/log"), PathKind::Other);
        // Comparación exacta: trailing slash no es la página de perfil
        assert_eq!(PathKind::from_path("/profile/"), PathKind::Other);
    }

    #[test]
    fn con_perfil_en_auth_redirige_a_home() {
        let plan = plan_navbar(&logged_in("Ann", true), "/auth");
        assert_eq!(plan.action, PageAction::Redirect("/"));
        assert!(plan.profile_nav_visible);
    }

    #[test]
    fn sin_perfil_en_auth_redirige_a_profile() {
        let plan = plan_navbar(&logged_in("Ann", false), "/auth");
        assert_eq!(plan.action, PageAction::Redirect("/profile"));
    }

    #[test]
    fn sin_perfil_en_home_muestra_banner_y_logout() {
        let plan = plan_navbar(&logged_in("Bob", false), "/");
        assert_eq!(plan.auth_link.label, "Đăng Xuất (Bob)");
        assert_eq!(plan.auth_link.href, "/api/logout");
        assert!(plan.profile_nav_visible);
        assert_eq!(plan.action, PageAction::ShowProfileBanner("Bob".to_string()));
    }

    #[test]
    fn la_tabla_es_estable_entre_pasadas() {
        // Dos pasadas con el mismo estado producen el mismo plan;
        // la idempotencia del banner la garantiza la view con #profile-alert
        let status = logged_in("Bob", false);
        let first = plan_navbar(&status, "/");
        let second = plan_navbar(&status, "/");
        assert_eq!(first, second);
    }

    #[test]
    fn con_perfil_en_home_no_hay_banner() {
        let plan = plan_navbar(&logged_in("Ann", true), "/");
        assert_eq!(plan.action, PageAction::None);
    }

    #[test]
    fn sin_perfil_en_profile_no_hay_banner() {
        let plan = plan_navbar(&logged_in("Ann", false), "/profile");
        assert_eq!(plan.action, PageAction::None);
    }

    #[test]
    fn sin_perfil_en_otra_pagina_muestra_banner() {
        let plan = plan_navbar(&logged_in("Ann", false), "/log");
        assert_eq!(plan.action, PageAction::ShowProfileBanner("Ann".to_string()));
    }

    #[test]
    fn sin_sesion_en_profile_redirige_a_auth() {
        let plan = plan_navbar(&logged_out(), "/profile");
        assert_eq!(plan.action, PageAction::Redirect("/auth"));
        assert!(!plan.profile_nav_visible);
    }

    #[test]
    fn sin_sesion_en_home_no_redirige() {
        let plan = plan_navbar(&logged_out(), "/");
        assert_eq!(plan.auth_link.label, "Đăng Nhập/Đăng Ký");
        assert_eq!(plan.auth_link.href, "/auth");
        assert!(!plan.profile_nav_visible);
        assert_eq!(plan.action, PageAction::None);
    }

    #[test]
    fn sin_sesion_en_otra_pagina_no_redirige() {
        let plan = plan_navbar(&logged_out(), "/chart");
        assert_eq!(plan.action, PageAction::None);
    }

    #[test]
    fn username_ausente_renderiza_nombre_vacio() {
        let status = SessionStatus {
            logged_in: true,
            username: None,
            has_profile: true,
        };
        let plan = plan_navbar(&status, "/");
        assert_eq!(plan.auth_link.label, "Đăng Xuất ()");
    }

    #[test]
    fn banner_html_incluye_saludo_y_link_a_profile() {
        let html = banner_html("Bob");
        assert!(html.contains("Xin chào, Bob!"));
        assert!(html.contains("href=\"/profile\""));
        assert!(html.contains("alert-link"));
    }
}
