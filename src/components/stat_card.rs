use dioxus::prelude::*;

use crate::utils::format::format_change;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Purple,
    Orange,
}

impl Tone {
    // Full class names so the Tailwind scanner picks them up
    fn badge_class(self) -> &'static str {
        match self {
            Tone::Green => "bg-green-50 text-green-500",
            Tone::Blue => "bg-blue-50 text-blue-500",
            Tone::Purple => "bg-purple-50 text-purple-500",
            Tone::Orange => "bg-orange-50 text-orange-600",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Green => "text-green-600",
            Tone::Blue => "text-blue-600",
            Tone::Purple => "text-purple-600",
            Tone::Orange => "text-orange-600",
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StatCard(
    title: String,
    value: String,
    unit: String,
    change: Option<f64>,
    tone: Tone,
    glyph: String,
) -> Element {
    let badge = tone.badge_class();
    let change_class = match change {
        Some(c) if c > 0.0 => "text-green-500",
        _ => "text-red-500",
    };
    rsx! {
        div { class: "bg-white rounded-2xl p-6 shadow-sm hover:shadow-lg transition-all duration-300",
            div { class: "flex items-center justify-between mb-4",
                div { class: "p-3 rounded-xl w-12 h-12 flex items-center justify-center font-bold {badge}", "{glyph}" }
                if let Some(change) = change {
                    span { class: "text-sm font-semibold {change_class}", "{format_change(change)}" }
                }
            }
            p { class: "text-gray-600 text-sm mb-1", "{title}" }
            p { class: "text-3xl font-bold text-gray-900",
                "{value}"
                span { class: "text-lg font-normal text-gray-600 ml-1", "{unit}" }
            }
        }
    }
}

/// Headline figure with a comparison line underneath, used on the plant overview.
#[allow(non_snake_case)]
#[component]
pub fn SummaryCard(title: String, value: String, delta: String, tone: Tone, glyph: String) -> Element {
    let badge = tone.badge_class();
    let delta_class = tone.text_class();
    rsx! {
        div { class: "bg-white rounded-xl p-6 shadow-sm border border-gray-200",
            div { class: "flex items-center justify-between mb-4",
                span { class: "text-gray-600 font-medium", "{title}" }
                div { class: "w-10 h-10 rounded-lg flex items-center justify-center text-sm font-bold {badge}", "{glyph}" }
            }
            div { class: "text-3xl font-bold text-gray-900 mb-2", "{value}" }
            div { class: "text-sm {delta_class}", "{delta}" }
        }
    }
}
