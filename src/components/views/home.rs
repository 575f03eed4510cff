use dioxus::prelude::*;
use rand::Rng;

use crate::api::{HubClient, Mezmur};
use crate::components::audio_manager::PlaybackController;
use crate::components::{AppView, Icon, Navigation};

#[component]
pub fn HomeView() -> Element {
    let navigation = use_context::<Navigation>();
    let mezmurs = use_resource(move || async move {
        HubClient::from_env().fetch_mezmurs(None, None, 12).await
    });

    // One stable pick per fetched list, not per render.
    let featured = use_memo(move || {
        let list = match &*mezmurs.read() {
            Some(Ok(list)) => list.clone(),
            _ => Vec::new(),
        };
        if list.is_empty() {
            None
        } else {
            let index = rand::thread_rng().gen_range(0..list.len());
            Some(list[index].clone())
        }
    });

    rsx! {
        div { class: "view",
            section { class: "hero",
                h1 { class: "hero-title", "Mezmur Hub" }
                p { class: "hero-subtitle",
                    "Listen to Orthodox mezmurs, read their lyrics, and carry the player with you across the site."
                }
            }

            if let Some(track) = featured() {
                section { class: "section",
                    h2 { class: "section-title", "Featured today" }
                    TrackCard { mezmur: track, featured: true }
                }
            }

            section { class: "section",
                header { class: "section-header",
                    h2 { class: "section-title", "Latest mezmurs" }
                    button {
                        class: "link-btn",
                        onclick: move |_| navigation.navigate_to(AppView::Mezmurs),
                        "Browse all"
                    }
                }
                {
                    match &*mezmurs.read() {
                        Some(Ok(list)) => rsx! {
                            div { class: "track-grid",
                                for mezmur in list.iter().take(6) {
                                    TrackCard {
                                        key: "{mezmur.id}",
                                        mezmur: mezmur.clone(),
                                        featured: false,
                                    }
                                }
                            }
                        },
                        Some(Err(message)) => rsx! {
                            p { class: "fetch-error", "Could not load mezmurs: {message}" }
                        },
                        None => rsx! {
                            p { class: "loading", "Loading mezmurs..." }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TrackCard(mezmur: Mezmur, featured: bool) -> Element {
    let mut playback = use_context::<PlaybackController>();
    let session = playback.snapshot();
    let playing_this = session
        .current_track
        .as_ref()
        .map(|current| current.id == mezmur.id)
        .unwrap_or(false)
        && session.is_playing;

    let track = mezmur.clone();
    let added = mezmur
        .created_at
        .map(|date| date.format("%b %e, %Y").to_string());

    rsx! {
        div { class: if featured { "track-card track-card-featured" } else { "track-card" },
            button {
                r#type: "button",
                class: "track-play-btn",
                onclick: move |_| {
                    let snapshot = playback.snapshot();
                    let is_current = snapshot
                        .current_track
                        .as_ref()
                        .map(|current| current.id == track.id)
                        .unwrap_or(false);
                    if is_current && snapshot.is_playing {
                        playback.pause();
                    } else {
                        playback.play(track.clone());
                    }
                },
                Icon {
                    name: if playing_this { "pause".to_string() } else { "play".to_string() },
                    class: "icon-20".to_string(),
                }
            }
            div { class: "track-card-info",
                span { class: "track-title", "{mezmur.title}" }
                span { class: "track-artist", "{mezmur.artist}" }
                if let Some(added) = added {
                    span { class: "track-added", "Added {added}" }
                }
            }
        }
    }
}
