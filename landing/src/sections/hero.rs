use super::AVERAGE_RATING;
use leptos::prelude::*;

#[component]
pub fn Hero(contact_open: RwSignal<bool>) -> impl IntoView {
    let rating_line = format!("{AVERAGE_RATING} Average Rating");

    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <div class="hero-rating">
                        <span class="hero-rating-star">"★"</span>
                        <span class="hero-rating-text">{rating_line}</span>
                    </div>
                    <h2 class="hero-title">"TORONTO'S PREMIER PROPERTY MANAGEMENT"</h2>
                    <span class="pill">"24/7 AVAILABILITY"</span>
                    <p class="hero-description">
                        "INFINITY PROPERTY MANAGEMENT OFFERS COMPREHENSIVE SERVICES FOR PROPERTY "
                        "OWNERS, FROM TENANT SCREENING TO MAINTENANCE, WITH UNPARALLELED "
                        "PROFESSIONALISM AND EFFICIENCY."
                    </p>
                    <div class="hero-actions">
                        <a href="#services" class="btn btn-outline">"OUR SERVICES"</a>
                        <button
                            class="btn btn-outline"
                            on:click=move |_| contact_open.set(true)
                        >
                            "GET IN TOUCH"
                        </button>
                    </div>
                </div>

                <div class="hero-panel">
                    <img
                        src="assets/skyline.svg"
                        alt="Toronto skyline with CN Tower and rooftop terrace"
                        class="hero-image"
                    />
                    <span class="hero-tag">"TOP RATED"</span>
                    <div class="hero-dots">
                        <span class="dot dot-active"></span>
                        <span class="dot"></span>
                        <span class="dot"></span>
                    </div>
                </div>
            </div>
        </section>
    }
}
