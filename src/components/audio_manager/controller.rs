//! Playback commands and the component that wires the shared `<audio>`
//! element's events back into the session.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

use crate::api::Mezmur;
use crate::components::toast::ToastController;

#[cfg(target_arch = "wasm32")]
use super::element::{get_or_create_audio_element, playback_failure_message, unload_audio_element};
use super::session::PlaybackSession;

/// Single shared authority over what plays and how loud. Cloned freely into
/// any component or callback that needs to issue a transport command; every
/// copy mutates the same session signal.
#[derive(Clone, Copy)]
pub struct PlaybackController {
    session: Signal<PlaybackSession>,
    toasts: ToastController,
}

impl PlaybackController {
    pub fn new(session: Signal<PlaybackSession>, toasts: ToastController) -> Self {
        Self { session, toasts }
    }

    /// Reactive read of the whole session; components re-render when any
    /// field changes.
    pub fn snapshot(&self) -> PlaybackSession {
        self.session.read().clone()
    }

    /// Load `track` (unloading whatever was current if it differs) and ask
    /// the element to play. Fire-and-forget: the outcome lands in the
    /// session and the toast sink once the native play promise settles, and
    /// a promise that settles after the user has already switched tracks is
    /// discarded.
    pub fn play(&mut self, track: Mezmur) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(audio) = get_or_create_audio_element() else {
                self.toasts
                    .error("Audio playback is not available in this browser.");
                return;
            };

            let rebind = self.session.write().load_track(&track);
            if rebind {
                audio.set_src(&track.audio_url);
            }
            audio.set_volume(self.session.peek().volume);

            let requested_id = track.id.clone();
            let title = track.title.clone();

            match audio.play() {
                Ok(promise) => {
                    let mut controller = *self;
                    spawn(async move {
                        let outcome = wasm_bindgen_futures::JsFuture::from(promise).await;

                        // Ignore a promise that lost the race against a
                        // later track switch.
                        let still_current = controller
                            .session
                            .peek()
                            .current_track
                            .as_ref()
                            .map(|current| current.id == requested_id)
                            .unwrap_or(false);
                        if !still_current {
                            return;
                        }

                        match outcome {
                            Ok(_) => {
                                controller.session.write().mark_playing();
                                controller.toasts.success(format!("Now playing \"{title}\""));
                            }
                            Err(_) => {
                                let message = playback_failure_message(&audio, &track);
                                unload_audio_element(&audio);
                                controller.session.write().clear();
                                controller.toasts.error(message);
                            }
                        }
                    });
                }
                Err(_) => {
                    unload_audio_element(&audio);
                    self.session.write().clear();
                    self.toasts.error(format!("Unable to start \"{title}\"."));
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = track;
            self.toasts
                .error("Audio playback is only wired up in the web build.");
        }
    }

    /// Pause without unloading; a later toggle resumes from here.
    pub fn pause(&mut self) {
        if self.session.peek().current_track.is_none() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
        self.session.write().mark_paused();
    }

    pub fn toggle_play_pause(&mut self) {
        let snapshot = self.session.peek().clone();
        let Some(track) = snapshot.current_track else {
            return;
        };
        if snapshot.is_playing {
            self.pause();
        } else {
            self.play(track);
        }
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.session.write().set_volume(volume);
        #[cfg(target_arch = "wasm32")]
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(self.session.peek().volume);
        }
    }

    /// Jump to `seconds`, clamped into `[0, duration]`.
    pub fn seek(&mut self, seconds: f64) {
        if self.session.peek().current_track.is_none() {
            return;
        }
        let target = self.session.peek().clamped_seek(seconds);
        #[cfg(target_arch = "wasm32")]
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(target);
        }
        self.session.write().set_position(target);
    }

    /// Tear the whole subsystem down; used when the app root unmounts.
    pub fn shutdown(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(audio) = get_or_create_audio_element() {
            unload_audio_element(&audio);
        }
        self.session.write().clear();
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_duration(&mut self, seconds: f64) {
        self.session.write().set_duration(seconds);
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_position(&mut self, seconds: f64) {
        self.session.write().set_position(seconds);
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_ended(&mut self) {
        self.session.write().mark_ended();
    }

    #[cfg(target_arch = "wasm32")]
    fn resync_volume(&mut self, volume: f64) {
        if (self.session.peek().volume - volume).abs() > 1e-6 {
            self.session.write().set_volume(volume);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn is_toggle_shortcut(event: &KeyboardEvent) -> bool {
    if event.default_prevented() || event.is_composing() || is_editable_shortcut_target(event) {
        return false;
    }

    let key = event.key();
    let code = event.code();
    if key == "MediaPlayPause" || code == "MediaPlayPause" || key == "AudioPlay" || key == "AudioPause"
    {
        return true;
    }

    !event.meta_key()
        && !event.ctrl_key()
        && !event.alt_key()
        && (key == " " || key == "Spacebar" || code == "Space")
}

#[cfg(target_arch = "wasm32")]
fn click_player_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}

/// Headless component that owns the element-event plumbing. Mounted once in
/// the app shell; renders nothing.
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlaybackController>();

    // One-time setup: create the element and attach its event listeners for
    // the lifetime of the app.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        let runtime = Runtime::current();

        let metadata_cb = {
            let audio = audio.clone();
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                let duration = audio.duration();
                if duration.is_finite() {
                    controller.apply_duration(duration);
                }
            }) as Box<dyn FnMut()>)
        };
        let timeupdate_cb = {
            let audio = audio.clone();
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.apply_position(audio.current_time());
            }) as Box<dyn FnMut()>)
        };
        let ended_cb = {
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.apply_ended();
            }) as Box<dyn FnMut()>)
        };
        let volume_cb = {
            let audio = audio.clone();
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.resync_volume(audio.volume());
            }) as Box<dyn FnMut()>)
        };

        let _ = audio.add_event_listener_with_callback(
            "loadedmetadata",
            metadata_cb.as_ref().unchecked_ref(),
        );
        let _ = audio
            .add_event_listener_with_callback("timeupdate", timeupdate_cb.as_ref().unchecked_ref());
        let _ = audio.add_event_listener_with_callback("ended", ended_cb.as_ref().unchecked_ref());
        let _ = audio
            .add_event_listener_with_callback("volumechange", volume_cb.as_ref().unchecked_ref());

        metadata_cb.forget();
        timeupdate_cb.forget();
        ended_cb.forget();
        volume_cb.forget();

        // Space / hardware media keys toggle playback. The shortcut clicks
        // the transport button so the command re-enters through the normal
        // event path.
        if let Some(doc) = window().and_then(|w| w.document()) {
            let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if is_toggle_shortcut(&event) {
                    event.prevent_default();
                    click_player_control_button("play-pause-btn");
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ =
                doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            key_cb.forget();
        }
    });

    use_drop(move || {
        let mut controller = controller;
        controller.shutdown();
    });

    rsx! {}
}
