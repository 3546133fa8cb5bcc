use crate::constants::{
    CONTACT_FORM_ID, FORM_RELAY_ENDPOINT, TOAST_EMAIL_COPIED, TOAST_SENT, TOAST_SEND_FAILED,
};
use crate::core::content::CONTACT;
use crate::{dom, toast};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay answered HTTP {0}")]
    Status(u16),
}

/// POST the form's fields to the relay; no retry.
async fn submit(form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let endpoint = form
        .get_attribute("action")
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| FORM_RELAY_ENDPOINT.to_string());
    let data = web::FormData::new_with_form(form)
        .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    let request = web::Request::new_with_str_and_init(&endpoint, &init)
        .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
    _ = request.headers().set("Accept", "application/json");

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(format!("{:?}", e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(SubmitError::Status(resp.status()));
    }
    Ok(())
}

/// Hook the rendered contact form and the copy-email button. Call after
/// the contact markup is mounted.
pub fn wire_contact(document: &web::Document) {
    if let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        let doc = document.clone();
        let form_submit = form.clone();
        dom::add_listener(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let form = form_submit.clone();
            let doc = doc.clone();
            spawn_local(async move {
                match submit(&form).await {
                    Ok(()) => {
                        log::info!("[contact] message sent");
                        form.reset();
                        toast::show(&doc, TOAST_SENT);
                    }
                    Err(e) => {
                        log::error!("[contact] send failed: {}", e);
                        toast::show(&doc, TOAST_SEND_FAILED);
                    }
                }
            });
        });
    }

    for button in dom::query_all(document, ".copy-email") {
        let doc = document.clone();
        dom::add_click_listener(&button, move |_ev: web::MouseEvent| {
            let doc = doc.clone();
            spawn_local(async move {
                let Some(window) = web::window() else {
                    return;
                };
                let promise = window.navigator().clipboard().write_text(CONTACT.email);
                match JsFuture::from(promise).await {
                    Ok(_) => toast::show(&doc, TOAST_EMAIL_COPIED),
                    Err(e) => log::warn!("[contact] clipboard write failed: {:?}", e),
                }
            });
        });
    }
}
