//! The one shared `<audio>` element and its failure reporting.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
use crate::api::Mezmur;

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("mezmurhub-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("mezmurhub-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Stop and fully unbind the current source so the element holds nothing.
#[cfg(target_arch = "wasm32")]
pub fn unload_audio_element(audio: &HtmlAudioElement) {
    let _ = audio.pause();
    audio.set_src("");
    let _ = audio.remove_attribute("src");
    audio.load();
}

/// Map the element's `MediaError` code to a user-facing message for a
/// rejected play attempt. Read through `Reflect` so no extra web-sys
/// surface is needed.
#[cfg(target_arch = "wasm32")]
pub fn playback_failure_message(audio: &HtmlAudioElement, track: &Mezmur) -> String {
    let audio_js = wasm_bindgen::JsValue::from(audio.clone());
    let code = js_sys::Reflect::get(&audio_js, &"error".into())
        .ok()
        .filter(|error| !error.is_null() && !error.is_undefined())
        .and_then(|error| js_sys::Reflect::get(&error, &"code".into()).ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    let title = &track.title;
    match code {
        1 => format!("Playback of \"{title}\" was aborted before the stream loaded."),
        2 => format!("Network error while loading \"{title}\"."),
        3 => format!("\"{title}\" could not be decoded."),
        4 => format!("No supported audio source found for \"{title}\"."),
        _ => format!("Unable to play \"{title}\" right now."),
    }
}
