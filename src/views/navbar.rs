// ============================================================================
// NAVBAR VIEW - Aplica un NavbarPlan al DOM (sin lógica de decisión)
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{
    get_element_by_id, prepend_child, query_selector, redirect, set_attribute, set_display,
    set_text_content, ElementBuilder,
};
use crate::utils::{
    AUTH_LINK_ID, AUTH_NAV_ITEM_ID, CONTAINER_SELECTOR, PROFILE_ALERT_ID, PROFILE_NAV_ITEM_ID,
};
use crate::viewmodels::{banner_html, NavbarPlan, PageAction};

/// Aplicar el plan al DOM: link de auth, visibilidad del nav de perfil
/// y la acción de página (redirect o banner)
pub fn apply_navbar_plan(plan: &NavbarPlan) -> Result<(), JsValue> {
    let auth_link = get_element_by_id(AUTH_LINK_ID)
        .ok_or_else(|| JsValue::from_str("No #auth-link element found"))?;
    let profile_nav_item = get_element_by_id(PROFILE_NAV_ITEM_ID)
        .ok_or_else(|| JsValue::from_str("No #profile-nav-item element found"))?;
    // #auth-nav-item forma parte del contrato de la página pero la
    // reconciliación actual no lo modifica (ver DESIGN.md)
    let _auth_nav_item = get_element_by_id(AUTH_NAV_ITEM_ID);

    set_text_content(&auth_link, &plan.auth_link.label);
    set_attribute(&auth_link, "href", plan.auth_link.href)?;

    let display = if plan.profile_nav_visible { "block" } else { "none" };
    set_display(&profile_nav_item, display)?;

    match &plan.action {
        PageAction::Redirect(target) => {
            log::info!("🔀 Redirigiendo a: {}", target);
            redirect(target)?;
        }
        PageAction::ShowProfileBanner(username) => {
            insert_profile_banner(username)?;
        }
        PageAction::None => {}
    }

    Ok(())
}

/// Insertar el banner de perfil incompleto al principio de .container.
/// Idempotente: si #profile-alert ya existe no se crea otro.
fn insert_profile_banner(username: &str) -> Result<(), JsValue> {
    if get_element_by_id(PROFILE_ALERT_ID).is_some() {
        return Ok(());
    }

    let container = query_selector(CONTAINER_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("No .container element found"))?;

    let alert = ElementBuilder::new("div")?
        .id(PROFILE_ALERT_ID)?
        .class("alert alert-warning text-center mt-3")
        .html(&banner_html(username))
        .build();

    prepend_child(&container, &alert)?;
    log::info!("⚠️ Banner de perfil incompleto insertado para: {}", username);
    Ok(())
}
