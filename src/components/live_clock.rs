use dioxus::prelude::*;

use crate::utils::format::{clock_text, now_label};

#[allow(non_snake_case)]
#[component]
pub fn LiveClock() -> Element {
    // Empty on the server and during hydration; the client fills it in
    let label: Signal<Option<String>> = use_signal(|| None);

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        // Keep the handle so the interval stops on unmount
        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut ticker = ticker.clone();
            move || {
                if let Some(h) = ticker.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect({
            let mut label = label.clone();
            let mut ticker = ticker.clone();
            move || {
                if ticker.peek().is_some() {
                    return;
                }
                label.set(now_label());
                let handle = Interval::new(1_000, move || {
                    label.set(now_label());
                });
                ticker.set(Some(handle));
            }
        });
    }

    #[cfg(all(not(feature = "web"), not(feature = "server")))]
    {
        use_effect({
            let mut label = label.clone();
            move || label.set(now_label())
        });
    }

    let shown = clock_text(label.read().as_deref());
    rsx! {
        span { class: "tabular-nums", "마지막 업데이트: {shown}" }
    }
}
