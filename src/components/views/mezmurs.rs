use dioxus::prelude::*;

use crate::api::{HubClient, Mezmur};
use crate::components::audio_manager::PlaybackController;
use crate::components::Icon;
use crate::utils::slugify;

#[component]
pub fn MezmursView() -> Element {
    let mut search_query = use_signal(String::new);
    let mut selected_category = use_signal(|| None::<String>);
    let open_lyrics = use_signal(|| None::<String>);

    let categories =
        use_resource(move || async move { HubClient::from_env().fetch_categories().await });

    let mezmurs = use_resource(move || {
        let query = search_query();
        let category = selected_category();
        async move {
            HubClient::from_env()
                .fetch_mezmurs(Some(query.as_str()), category.as_deref(), 60)
                .await
        }
    });

    rsx! {
        div { class: "view",
            header { class: "page-header",
                h1 { class: "page-title", "Mezmurs" }

                div { class: "search-box",
                    Icon { name: "search".to_string(), class: "icon-16 search-icon".to_string() }
                    input {
                        class: "search-input",
                        placeholder: "Search mezmurs",
                        value: search_query,
                        oninput: move |e| {
                            let value = e.value();
                            if value.is_empty() || value.len() >= 2 {
                                search_query.set(value);
                            }
                        },
                    }
                }

                if let Some(Ok(list)) = &*categories.read() {
                    div { class: "category-chips",
                        button {
                            r#type: "button",
                            class: if selected_category().is_none() { "chip chip-active" } else { "chip" },
                            onclick: move |_| selected_category.set(None),
                            "All"
                        }
                        for category in list.iter() {
                            button {
                                key: "{category.id}",
                                r#type: "button",
                                class: if selected_category().as_deref() == Some(category.id.as_str()) { "chip chip-active" } else { "chip" },
                                onclick: {
                                    let id = category.id.clone();
                                    move |_| selected_category.set(Some(id.clone()))
                                },
                                "{category.name}"
                            }
                        }
                    }
                }
            }

            {
                match &*mezmurs.read() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "empty-state", "No mezmurs match your search." }
                    },
                    Some(Ok(list)) => rsx! {
                        div { class: "track-list",
                            for mezmur in list.iter() {
                                MezmurRow {
                                    key: "{mezmur.id}",
                                    mezmur: mezmur.clone(),
                                    open_lyrics,
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

#[component]
fn MezmurRow(mezmur: Mezmur, open_lyrics: Signal<Option<String>>) -> Element {
    let mut playback = use_context::<PlaybackController>();
    let mut open_lyrics = open_lyrics;
    let session = playback.snapshot();
    let playing_this = session
        .current_track
        .as_ref()
        .map(|current| current.id == mezmur.id)
        .unwrap_or(false)
        && session.is_playing;

    let track = mezmur.clone();
    let lyrics_open = open_lyrics().as_deref() == Some(mezmur.id.as_str());
    let row_anchor = format!("mezmur-{}", slugify(&mezmur.title));
    let download_name = slugify(&mezmur.title);

    rsx! {
        div { id: "{row_anchor}", class: "track-row",
            div { class: "track-row-main",
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
                        class: "icon-16".to_string(),
                    }
                }
                div { class: "track-row-info",
                    span { class: "track-title", "{mezmur.title}" }
                    span { class: "track-artist", "{mezmur.artist}" }
                }
                div { class: "track-row-actions",
                    if mezmur.lyrics.is_some() {
                        button {
                            r#type: "button",
                            class: if lyrics_open { "player-icon-btn icon-btn-active" } else { "player-icon-btn" },
                            onclick: {
                                let id = mezmur.id.clone();
                                move |_| {
                                    if open_lyrics().as_deref() == Some(id.as_str()) {
                                        open_lyrics.set(None);
                                    } else {
                                        open_lyrics.set(Some(id.clone()));
                                    }
                                }
                            },
                            Icon { name: "lyrics".to_string(), class: "icon-16".to_string() }
                        }
                    }
                    if mezmur.is_downloadable {
                        a {
                            class: "player-icon-btn",
                            href: "{mezmur.audio_url}",
                            download: "{download_name}",
                            Icon { name: "download".to_string(), class: "icon-16".to_string() }
                        }
                    }
                }
            }
            if lyrics_open {
                if let Some(lyrics) = &mezmur.lyrics {
                    pre { class: "track-lyrics", "{lyrics}" }
                }
            }
        }
    }
}
