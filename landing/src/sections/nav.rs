use super::COMPANY_NAME;
use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("HOME", "#"),
    ("SERVICES", "#services"),
    ("PROPERTIES", "#story"),
    ("CONTACT", "#contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Restyle the fixed header as soon as the page scrolls away from the top.
    Effect::new(move || {
        attach_scroll_listener(set_scrolled);
    });

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="nav-inner">
                <a href="#" class="nav-brand">{COMPANY_NAME.to_uppercase()}</a>
                <nav class="nav-links">
                    {LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! { <a href=*href class="nav-link">{*label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <button
                    class="nav-menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Collapsed-viewport menu, same links stacked.
            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">
                    {LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="nav-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "nav nav-scrolled" } else { "nav" }
}

fn attach_scroll_listener(set_scrolled: WriteSignal<bool>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if let Some(window) = web_sys::window() {
        let tracked = window.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let offset = tracked.scroll_y().unwrap_or(0.0);
            set_scrolled.set(offset > 0.0);
        }) as Box<dyn FnMut(_)>);

        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

        closure.forget(); // Keep the closure alive
    }
}
