use dioxus::prelude::*;

use crate::components::views::{HomeView, MezmursView};
use crate::components::{
    view_label, AppView, AudioController, Icon, Navigation, PlaybackController, PlaybackSession,
    Player, Toast, ToastController, Toaster,
};
use crate::db::{self, AppSettings};

const NAV_VIEWS: [AppView; 2] = [AppView::Home, AppView::Mezmurs];

#[component]
pub fn AppShell() -> Element {
    let session = use_signal(PlaybackSession::default);
    let toast_list = use_signal(Vec::<Toast>::new);
    let toasts = ToastController::new(toast_list);
    let playback = PlaybackController::new(session, toasts);

    let current_view = use_signal(|| AppView::Home);
    let history = use_signal(Vec::<AppView>::new);
    let navigation = Navigation::new(current_view, history);

    // Provide state via context
    use_context_provider(|| playback);
    use_context_provider(|| toasts);
    use_context_provider(|| navigation.clone());

    // Initialize persistence and seed the session volume on mount.
    use_effect(move || {
        spawn(async move {
            if let Err(_e) = db::initialize_database().await {
                #[cfg(not(target_arch = "wasm32"))]
                eprintln!("Failed to initialize database: {}", _e);
                return;
            }
            if let Ok(settings) = db::load_settings().await {
                let mut playback = playback;
                playback.set_volume(settings.volume);
            }
        });
    });

    // Persist the volume whenever it changes.
    let volume = use_memo(move || playback.snapshot().volume);
    use_effect(move || {
        let volume = volume();
        spawn(async move {
            let _ = db::save_settings(AppSettings { volume }).await;
        });
    });

    let view = navigation.current();

    let nav_for_back = navigation.clone();
    let on_back = move |_| {
        nav_for_back.go_back();
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "app-header-left",
                    if navigation.can_go_back() {
                        button { r#type: "button", class: "player-icon-btn", onclick: on_back,
                            Icon { name: "chevron-left".to_string(), class: "icon-16".to_string() }
                        }
                    }
                    div { class: "app-brand",
                        Icon { name: "music".to_string(), class: "icon-20".to_string() }
                        span { "Mezmur Hub" }
                    }
                }
                nav { class: "app-nav",
                    for nav_view in NAV_VIEWS {
                        button {
                            r#type: "button",
                            class: if view == nav_view { "nav-btn nav-btn-active" } else { "nav-btn" },
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| navigation.navigate_to(nav_view)
                            },
                            {view_label(&nav_view)}
                        }
                    }
                }
            }

            main { class: "app-main",
                {
                    match view {
                        AppView::Home => rsx! {
                            HomeView {}
                        },
                        AppView::Mezmurs => rsx! {
                            MezmursView {}
                        },
                    }
                }
            }

            AudioController {}
            Player {}
            Toaster {}
        }
    }
}
