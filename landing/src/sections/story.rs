use leptos::prelude::*;

/// The three practice areas highlighted under the company story.
struct Highlight {
    title: &'static str,
    blurb: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Property Management",
        blurb: "Comprehensive management services for residential and commercial properties, \
                ensuring optimal performance and tenant satisfaction.",
    },
    Highlight {
        title: "Leasing Services",
        blurb: "Expert tenant placement and lease management, maximizing occupancy rates and \
                rental income for property owners.",
    },
    Highlight {
        title: "Maintenance Solutions",
        blurb: "Proactive maintenance programs and rapid response services to preserve and \
                enhance property value.",
    },
];

#[component]
pub fn Story() -> impl IntoView {
    view! {
        <section id="story" class="story">
            <div class="container">
                <div class="story-intro">
                    <h2 class="section-title">"Our Story"</h2>
                    <p class="story-copy">
                        "Founded in 2010, Infinity Property Management has been revolutionizing "
                        "the Toronto real estate scene with our innovative approach and "
                        "unwavering commitment to excellence."
                    </p>
                    <a href="#contact" class="btn btn-outline">"Learn More ›"</a>
                </div>

                <div class="story-highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|highlight| {
                            view! {
                                <div class="story-highlight">
                                    <h2 class="story-highlight-title">{highlight.title}</h2>
                                    <p class="story-highlight-blurb">{highlight.blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
