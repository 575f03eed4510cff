//! Defines the shared application view state.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppView {
    Home,
    Mezmurs,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Home",
        AppView::Mezmurs => "Mezmurs",
    }
}
