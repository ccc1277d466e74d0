use crate::constants::{CREDITS_LICENSE, CREDITS_MODEL_NAME, CREDITS_MODEL_URL};
use crate::core::locale::{Messages, MSG_CREDITS_MODEL};
use crate::core::ScaleReading;
use web_sys as web;

/// Resize the scale bar and rewrite its label.
pub fn update_scale_bar(document: &web::Document, reading: &ScaleReading) {
    if let Some(el) = document.get_element_by_id("scale-bar-line") {
        _ = el.set_attribute("style", &format!("width:{:.1}px", reading.pixels));
    }
    if let Some(el) = document.get_element_by_id("scale-bar-label") {
        el.set_text_content(Some(&reading.label()));
    }
}

/// Fill the model credits footer for the current locale.
pub fn update_credits(document: &web::Document, messages: &Messages) {
    if let Some(el) = document.get_element_by_id("credits-prefix") {
        el.set_text_content(Some(messages.get(MSG_CREDITS_MODEL)));
    }
    if let Some(el) = document.get_element_by_id("credits-link") {
        _ = el.set_attribute("href", CREDITS_MODEL_URL);
        _ = el.set_attribute("target", "_blank");
        _ = el.set_attribute("rel", "noopener noreferrer");
        el.set_text_content(Some(CREDITS_MODEL_NAME));
    }
    if let Some(el) = document.get_element_by_id("credits-license") {
        el.set_text_content(Some(CREDITS_LICENSE));
    }
}
