use super::AVERAGE_RATING;
use infinity_catalog::{Catalog, ServiceBrowser};
use leptos::prelude::*;

/// Rows of cards rendered at once: the whole expanded grid, or a single
/// carousel row when collapsed.
const EXPANDED_ROWS: usize = 3;

#[component]
pub fn Services() -> impl IntoView {
    let browser = RwSignal::new(ServiceBrowser::new(Catalog::builtin()));

    let cards = move || {
        browser.with(|b| {
            let rows = if b.show_all() { EXPANDED_ROWS } else { 1 };
            b.current_window(rows)
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
    };
    let page_count = move || browser.with(|b| b.page_count());
    let page_readout =
        move || browser.with(|b| format!("Page {} of {}", b.page() + 1, b.page_count()));

    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"OUR COMPREHENSIVE SERVICES"</h3>
                    <div class="services-controls">
                        <input
                            type="search"
                            class="services-search"
                            placeholder="Search services..."
                            prop:value=move || browser.with(|b| b.query().to_string())
                            on:input=move |ev| {
                                browser.update(|b| b.set_query(event_target_value(&ev)))
                            }
                        />
                        <button
                            class="btn btn-outline"
                            on:click=move |_| browser.update(|b| b.toggle_show_all())
                        >
                            {move || {
                                browser.with(|b| if b.show_all() { "Show Less" } else { "See All" })
                            }}
                        </button>
                    </div>
                </div>

                <Show
                    when=move || !cards().is_empty()
                    fallback=|| {
                        view! {
                            <p class="services-empty">"No services match your search."</p>
                        }
                    }
                >
                    <div class="services-grid">
                        {move || {
                            cards()
                                .into_iter()
                                .map(|name| view! { <ServiceCard name=name /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || { page_count() > 1 }>
                    <div class="carousel-controls">
                        <button
                            class="carousel-btn"
                            on:click=move |_| browser.update(|b| b.prev_page())
                        >
                            "‹"
                        </button>
                        <span class="carousel-readout">{page_readout}</span>
                        <button
                            class="carousel-btn"
                            on:click=move |_| browser.update(|b| b.next_page())
                        >
                            "›"
                        </button>
                    </div>
                </Show>

                <div class="services-facts">
                    <span class="pill">"24/7 AVAILABILITY"</span>
                    <span class="pill">"PROPERTY MARKETING"</span>
                    <span class="pill">{format!("{AVERAGE_RATING} AVERAGE RATING")}</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(name: String) -> impl IntoView {
    let blurb = service_blurb(&name);
    view! {
        <article class="service-card">
            <h4 class="service-card-title">{name}</h4>
            <p class="service-card-blurb">{blurb}</p>
        </article>
    }
}

fn service_blurb(name: &str) -> String {
    format!("Professional {} tailored to your needs.", name.to_lowercase())
}
