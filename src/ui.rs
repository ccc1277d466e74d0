//! Header, sidebar and theme wiring around the canvas.

use crate::core::config::APP_CONFIG;
use crate::core::locale::{
    localized_path, Locale, Messages, MSG_APP_TITLE, MSG_CHANGE_LANGUAGE, MSG_TOGGLE_THEME,
    MSG_TRAILER_LABEL,
};
use crate::core::theme::ColorMode;
use crate::core::{CanvasSettingsHandle, TrailerKey, TRAILERS};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const TRAILER_SELECT_ID: &str = "trailer-select";
const LANG_MENU_ID: &str = "lang-menu";

/// Fill the trailer `<select>` with the catalog, in catalog order.
pub fn populate_trailer_select(document: &web::Document, selected: TrailerKey) -> anyhow::Result<()> {
    let select = document
        .get_element_by_id(TRAILER_SELECT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", TRAILER_SELECT_ID))?
        .dyn_into::<web::HtmlSelectElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    select.set_inner_html("");
    for spec in TRAILERS.iter() {
        let option = document
            .create_element("option")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlOptionElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        option.set_value(spec.key.as_str());
        option.set_text(spec.label);
        option.set_selected(spec.key == selected);
        select
            .append_child(&option)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// The select is the only writer of the canvas settings.
pub fn wire_trailer_select(document: &web::Document, settings: CanvasSettingsHandle) {
    let Some(el) = document.get_element_by_id(TRAILER_SELECT_ID) else {
        log::warn!("[ui] missing #{}", TRAILER_SELECT_ID);
        return;
    };
    let Ok(select) = el.dyn_into::<web::HtmlSelectElement>() else {
        log::warn!("[ui] #{} is not a <select>", TRAILER_SELECT_ID);
        return;
    };
    let select_for_change = select.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let value = select_for_change.value();
        match value.parse::<TrailerKey>() {
            Ok(key) => {
                if let Err(e) = settings.set_trailer(key) {
                    log::error!("[ui] {}", e);
                }
            }
            Err(e) => log::warn!("[ui] {}", e),
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-render every localized string on the page.
pub fn apply_locale(document: &web::Document, locale: Locale) {
    let messages = Messages::for_locale(locale);
    dom::set_text(document, "app-title", messages.get(MSG_APP_TITLE));
    dom::set_text(document, "trailer-select-label", messages.get(MSG_TRAILER_LABEL));
    if let Some(el) = document.get_element_by_id("lang-button") {
        _ = el.set_attribute("aria-label", messages.get(MSG_CHANGE_LANGUAGE));
        _ = el.set_attribute("title", messages.get(MSG_CHANGE_LANGUAGE));
    }
    if let Some(el) = document.get_element_by_id("theme-toggle") {
        _ = el.set_attribute("aria-label", messages.get(MSG_TOGGLE_THEME));
        _ = el.set_attribute("title", messages.get(MSG_TOGGLE_THEME));
    }
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", locale.as_str());
    }
    overlay::update_credits(document, &messages);
}

fn set_menu_open(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(LANG_MENU_ID) {
        let cl = menu.class_list();
        _ = if open {
            cl.remove_1("hidden")
        } else {
            cl.add_1("hidden")
        };
    }
    if let Some(button) = document.get_element_by_id("lang-button") {
        _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

fn switch_locale(document: &web::Document, current: &Rc<RefCell<Locale>>, locale: Locale) {
    set_menu_open(document, false);
    let Some(window) = web::window() else {
        return;
    };
    let pathname = window.location().pathname().unwrap_or_else(|_| "/".into());
    let target = localized_path(&pathname, locale);
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&target)) {
                log::warn!("[ui] pushState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("[ui] no history: {:?}", e),
    }
    *current.borrow_mut() = locale;
    apply_locale(document, locale);
    log::info!("[ui] locale={} path={}", locale, target);
}

/// Language button opens a menu with one entry per supported locale.
pub fn wire_language_menu(document: &web::Document, current: Rc<RefCell<Locale>>) {
    let Some(menu) = document.get_element_by_id(LANG_MENU_ID) else {
        log::warn!("[ui] missing #{}", LANG_MENU_ID);
        return;
    };
    menu.set_inner_html("");
    for &locale in APP_CONFIG.locales {
        let Ok(item) = document.create_element("button") else {
            continue;
        };
        _ = item.set_attribute("type", "button");
        _ = item.set_attribute("role", "menuitem");
        item.set_text_content(Some(&locale.menu_label()));
        let doc = document.clone();
        let current = current.clone();
        dom::add_element_click_listener(&item, move || switch_locale(&doc, &current, locale));
        _ = menu.append_child(&item);
    }
    set_menu_open(document, false);

    let doc = document.clone();
    dom::add_click_listener(document, "lang-button", move || {
        let open = doc
            .get_element_by_id(LANG_MENU_ID)
            .map(|m| m.class_list().contains("hidden"))
            .unwrap_or(false);
        set_menu_open(&doc, open);
    });
}

pub fn apply_theme(document: &web::Document, mode: ColorMode) {
    let Some(body) = document.body() else {
        return;
    };
    let p = mode.palette();
    _ = body.set_attribute("data-theme", mode.as_str());
    _ = body.set_attribute(
        "style",
        &format!(
            "--bg:{};--paper:{};--text:{};--divider:{}",
            p.background, p.paper, p.text, p.divider
        ),
    );
}

pub fn wire_theme_toggle(document: &web::Document, mode: Rc<RefCell<ColorMode>>) {
    let doc = document.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        let next = mode.borrow().toggled();
        *mode.borrow_mut() = next;
        apply_theme(&doc, next);
    });
}
