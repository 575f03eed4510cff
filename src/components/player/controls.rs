use dioxus::prelude::*;

use crate::components::audio_manager::PlaybackController;
use crate::components::Icon;

const SKIP_STEP_SECS: f64 = 10.0;
const FALLBACK_UNMUTE_VOLUME: f64 = 0.7;

/// Next `(volume, remembered)` pair for a mute-button press. Unmuting
/// restores the remembered level, or a sensible default when the player was
/// muted at volume zero.
fn mute_transition(current_volume: f64, remembered: Option<f64>) -> (f64, Option<f64>) {
    if current_volume > 0.0 {
        (0.0, Some(current_volume))
    } else {
        let restored = remembered
            .filter(|volume| *volume > 0.0)
            .unwrap_or(FALLBACK_UNMUTE_VOLUME);
        (restored, None)
    }
}

/// Play/Pause button. Carries a stable element id so the global keyboard
/// shortcut can click it.
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut playback = use_context::<PlaybackController>();
    let playing = playback.snapshot().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "player-play-btn",
            onclick: move |_| playback.toggle_play_pause(),
            Icon {
                name: if playing { "pause".to_string() } else { "play".to_string() },
                class: "icon-20".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn SkipBackButton() -> Element {
    let mut playback = use_context::<PlaybackController>();

    rsx! {
        button {
            r#type: "button",
            class: "player-icon-btn",
            onclick: move |_| {
                let position = playback.snapshot().position;
                playback.seek(position - SKIP_STEP_SECS);
            },
            Icon { name: "skip-back".to_string(), class: "icon-16".to_string() }
        }
    }
}

#[component]
pub(super) fn SkipForwardButton() -> Element {
    let mut playback = use_context::<PlaybackController>();

    rsx! {
        button {
            r#type: "button",
            class: "player-icon-btn",
            onclick: move |_| {
                let position = playback.snapshot().position;
                playback.seek(position + SKIP_STEP_SECS);
            },
            Icon { name: "skip-forward".to_string(), class: "icon-16".to_string() }
        }
    }
}

/// Mute toggle that remembers the pre-mute level for the round trip back.
#[component]
pub(super) fn MuteButton() -> Element {
    let mut playback = use_context::<PlaybackController>();
    let mut remembered = use_signal(|| None::<f64>);
    let muted = playback.snapshot().volume <= 0.0;

    rsx! {
        button {
            r#type: "button",
            class: "player-icon-btn",
            onclick: move |_| {
                let current = playback.snapshot().volume;
                let (next_volume, next_remembered) = mute_transition(current, *remembered.peek());
                playback.set_volume(next_volume);
                remembered.set(next_remembered);
            },
            Icon {
                name: if muted { "volume-mute".to_string() } else { "volume".to_string() },
                class: "icon-16".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn VolumeSlider() -> Element {
    let mut playback = use_context::<PlaybackController>();
    let volume = playback.snapshot().volume;

    rsx! {
        input {
            r#type: "range",
            min: "0",
            max: "100",
            value: (volume * 100.0).round() as i32,
            class: "player-volume",
            oninput: move |e: Event<FormData>| {
                if let Ok(value) = e.value().parse::<f64>() {
                    playback.set_volume(value / 100.0);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_round_trip_restores_the_exact_volume() {
        let (muted, remembered) = mute_transition(0.42, None);
        assert_eq!(muted, 0.0);
        assert_eq!(remembered, Some(0.42));

        let (restored, remembered) = mute_transition(muted, remembered);
        assert_eq!(restored, 0.42);
        assert_eq!(remembered, None);
    }

    #[test]
    fn unmuting_from_zero_falls_back_to_the_default_level() {
        // Muted while the volume was already zero: nothing useful to restore.
        let (restored, remembered) = mute_transition(0.0, Some(0.0));
        assert_eq!(restored, FALLBACK_UNMUTE_VOLUME);
        assert_eq!(remembered, None);

        let (restored, _) = mute_transition(0.0, None);
        assert_eq!(restored, FALLBACK_UNMUTE_VOLUME);
    }
}
