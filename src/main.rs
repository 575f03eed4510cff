use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod diagnostics;
mod utils;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "manifest", href: "/assets/site.webmanifest" }

        document::Meta { name: "theme-color", content: "#7c5a1e" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Mezmur Hub" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
