use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::shared::types::AppView;
use crate::views::{PowerPlantOverview, SolarDashboard};
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let mut current_view = use_signal(AppView::default);

    let navigate = move |view: AppView| {
        info!("[app] navigate to {}", view.as_str());
        current_view.set(view);
    };

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#f9fafb" } // gray-50
        document::Meta { name: "color-scheme", content: "light" }
        {
            match *current_view.read() {
                AppView::Dashboard => rsx! { SolarDashboard { on_navigate: navigate } },
                AppView::PowerPlant => rsx! { PowerPlantOverview { on_navigate: navigate } },
            }
        }
    }
}
