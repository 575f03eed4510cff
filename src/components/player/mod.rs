//! Floating transport widget. Draggable panel on desktop viewports, fixed
//! bar on small ones; hides itself whenever nothing is loaded.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

use crate::api::format_duration;
use crate::components::audio_manager::PlaybackController;
use crate::components::Icon;
use crate::db;

mod controls;
mod position;

use controls::{MuteButton, PlayPauseButton, SkipBackButton, SkipForwardButton, VolumeSlider};
pub use position::WidgetPosition;
use position::{initial_position, is_desktop_viewport};
#[cfg(target_arch = "wasm32")]
use position::{clamp_to_viewport, drag_position, DragGrab};

/// Current viewport size in CSS pixels.
#[cfg(target_arch = "wasm32")]
fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 800.0);
    };
    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(800.0);
    (width, height)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_size() -> (f64, f64) {
    (1280.0, 800.0)
}

#[cfg(target_arch = "wasm32")]
struct DragListeners {
    on_move: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_up: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

// Move/up listeners live at window scope only while a gesture is active.
#[cfg(target_arch = "wasm32")]
thread_local! {
    static ACTIVE_DRAG: std::cell::RefCell<Option<DragListeners>> =
        std::cell::RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
fn begin_drag(
    grab: DragGrab,
    mut widget_position: Signal<Option<WidgetPosition>>,
    mut dragging: Signal<bool>,
) {
    // A new grab while listeners are somehow still live replaces them.
    release_drag_listeners();

    let Some(win) = window() else {
        return;
    };
    let runtime = Runtime::current();

    let on_move = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let (viewport_w, viewport_h) = viewport_size();
            widget_position.set(Some(drag_position(
                event.client_x() as f64,
                event.client_y() as f64,
                grab,
                viewport_w,
                viewport_h,
            )));
        }) as Box<dyn FnMut(_)>)
    };
    let on_up = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let (viewport_w, viewport_h) = viewport_size();
            let final_position = drag_position(
                event.client_x() as f64,
                event.client_y() as f64,
                grab,
                viewport_w,
                viewport_h,
            );
            widget_position.set(Some(final_position));
            dragging.set(false);
            // Cosmetic state: a failed write just means the computed default
            // comes back next session.
            let _ = db::save_player_position(final_position);
            release_drag_listeners();
        }) as Box<dyn FnMut(_)>)
    };

    let _ = win.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    let _ = win.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref());
    ACTIVE_DRAG.with(|slot| *slot.borrow_mut() = Some(DragListeners { on_move, on_up }));
}

#[cfg(target_arch = "wasm32")]
fn release_drag_listeners() {
    let Some(listeners) = ACTIVE_DRAG.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    if let Some(win) = window() {
        let _ = win
            .remove_event_listener_with_callback("mousemove", listeners.on_move.as_ref().unchecked_ref());
        let _ = win
            .remove_event_listener_with_callback("mouseup", listeners.on_up.as_ref().unchecked_ref());
    }
    // The mouseup handler lands here while its own closure is still on the
    // JS stack, so dropping waits a tick.
    gloo_timers::callback::Timeout::new(0, move || drop(listeners)).forget();
}

#[component]
pub fn Player() -> Element {
    let playback = use_context::<PlaybackController>();
    let session = playback.snapshot();
    let mut widget_position = use_signal(|| None::<WidgetPosition>);
    let dragging = use_signal(|| false);

    // Resolve the persisted position once at mount; a storage failure falls
    // back to the computed default.
    use_effect(move || {
        let saved = db::load_player_position().ok().flatten();
        let (viewport_w, viewport_h) = viewport_size();
        widget_position.set(Some(initial_position(saved, viewport_w, viewport_h)));
    });

    // Keep the widget inside the viewport when the window resizes.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };
        let runtime = Runtime::current();
        let resize_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            let (viewport_w, viewport_h) = viewport_size();
            if let Some(current) = *widget_position.peek() {
                widget_position.set(Some(clamp_to_viewport(
                    current.x, current.y, viewport_w, viewport_h,
                )));
            }
        }) as Box<dyn FnMut()>);
        let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        resize_cb.forget();
    });

    let on_handle_mousedown = {
        let dragging = dragging;
        move |evt: Event<MouseData>| {
            #[cfg(target_arch = "wasm32")]
            {
                let (viewport_w, _) = viewport_size();
                if !is_desktop_viewport(viewport_w) {
                    return;
                }
                let Some(current) = *widget_position.peek() else {
                    return;
                };
                let point = evt.client_coordinates();
                let grab = DragGrab {
                    offset_x: point.x - current.x,
                    offset_y: point.y - current.y,
                };
                let mut dragging = dragging;
                dragging.set(true);
                begin_drag(grab, widget_position, dragging);
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = evt;
        }
    };

    let mut playback_for_input = playback;
    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            let duration = playback_for_input.snapshot().duration;
            if duration > 0.0 {
                playback_for_input.seek((percent.clamp(0.0, 100.0) / 100.0) * duration);
            }
        }
    };
    let mut playback_for_commit = playback;
    let on_seek_commit = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            let duration = playback_for_commit.snapshot().duration;
            if duration > 0.0 {
                playback_for_commit.seek((percent.clamp(0.0, 100.0) / 100.0) * duration);
            }
        }
    };

    let has_track = session.current_track.is_some();
    let (viewport_w, _) = viewport_size();
    let position_style = if is_desktop_viewport(viewport_w) {
        match *widget_position.read() {
            Some(position) => format!("left:{}px;top:{}px;", position.x, position.y),
            None => String::new(),
        }
    } else {
        String::new()
    };

    let widget_class = if !has_track {
        "player-widget player-widget-hidden"
    } else if dragging() {
        "player-widget player-widget-dragging"
    } else {
        "player-widget"
    };

    let progress = session.progress_percent();
    let duration = session.duration;

    rsx! {
        div { class: "{widget_class}", style: "{position_style}",
            div { class: "player-handle", onmousedown: on_handle_mousedown,
                Icon {
                    name: "grip".to_string(),
                    class: "icon-16 player-grip".to_string(),
                }
                {
                    match &session.current_track {
                        Some(track) => rsx! {
                            div { class: "player-track-info",
                                span { class: "player-title", "{track.title}" }
                                span { class: "player-artist", "{track.artist}" }
                            }
                        },
                        None => rsx! {
                            div { class: "player-track-info",
                                span { class: "player-title", "Nothing playing" }
                            }
                        },
                    }
                }
            }
            div { class: "player-transport",
                SkipBackButton {}
                PlayPauseButton {}
                SkipForwardButton {}
            }
            div { class: "player-progress",
                span { class: "player-time", {format_duration(session.position.max(0.0) as u32)} }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: progress.round() as i32,
                    class: "player-seek",
                    oninput: on_seek_input,
                    onchange: on_seek_commit,
                }
                span { class: "player-time",
                    {
                        if duration > 0.0 {
                            format_duration(duration as u32)
                        } else {
                            "--:--".to_string()
                        }
                    }
                }
            }
            div { class: "player-volume-cluster",
                MuteButton {}
                VolumeSlider {}
            }
        }
    }
}
