//! Preloader overlay
//!
//! Full-screen counter shown once on load. After the hold it plays its exit
//! transition and then reports completion.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use portfolio_core::content::OWNER_NAME;
use portfolio_core::preloader::{progress_percent, COUNTER_TICK, PRELOADER_EXIT, PRELOADER_HOLD};
use portfolio_core::PreloaderPhase;

fn millis(duration: std::time::Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Props, Clone, PartialEq)]
pub struct PreloaderProps {
    /// Fired once, after the exit transition has finished
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn Preloader(props: PreloaderProps) -> Element {
    let mut phase = use_signal(|| PreloaderPhase::Holding);
    let mut percent = use_signal(|| 0u8);

    // Schedule: hold, exit, complete
    use_effect(move || {
        let on_complete = props.on_complete;
        spawn(async move {
            TimeoutFuture::new(millis(PRELOADER_HOLD)).await;
            phase.set(PreloaderPhase::Exiting);
            TimeoutFuture::new(millis(PRELOADER_EXIT)).await;
            phase.set(PreloaderPhase::Done);
            tracing::info!("Preloader finished");
            on_complete.call(());
        });
    });

    // Counter, cosmetic only
    use_effect(move || {
        spawn(async move {
            let mut elapsed = std::time::Duration::ZERO;
            while elapsed < PRELOADER_HOLD {
                TimeoutFuture::new(millis(COUNTER_TICK)).await;
                elapsed += COUNTER_TICK;
                percent.set(progress_percent(elapsed));
            }
        });
    });

    let class = phase().class();
    let count = format!("{:03}", percent());
    let fill = f64::from(percent()) / 100.0;

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "aria-live": "polite",
            div { class: "preloader-inner",
                span { class: "preloader-name", "{OWNER_NAME}" }
                span { class: "preloader-count", "{count}" }
            }
            div { class: "preloader-bar",
                span { class: "preloader-bar-fill", style: "transform: scaleX({fill})" }
            }
        }
    }
}
