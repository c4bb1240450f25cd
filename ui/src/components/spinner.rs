use dioxus::prelude::*;

/// Two bars clapping together, shown while a request is in flight.
#[component]
pub fn ClapSpinner(
    #[props(default = 20)] size: u32,
    #[props(default = "#fff".to_string())] front_color: String,
    #[props(default = "#fff".to_string())] back_color: String,
) -> Element {
    rsx! {
        div {
            class: "clap-spinner",
            role: "status",
            style: "width: {size}px; height: {size}px;",
            span { class: "clap-spinner-front", style: "background: {front_color};" }
            span { class: "clap-spinner-back", style: "background: {back_color};" }
        }
    }
}
