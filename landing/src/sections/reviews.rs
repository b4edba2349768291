use leptos::prelude::*;

const STARS_TOTAL: u8 = 5;

/// Customer review card content
struct Review {
    author: &'static str,
    body: &'static str,
    stars: u8,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Sarah T.",
        body: "Infinity Property Management has been exceptional in handling our rental \
               property. Their professionalism and efficiency are unmatched. We've seen a \
               significant improvement in our property's performance since partnering with them.",
        stars: 4,
    },
    Review {
        author: "Michael R.",
        body: "Lee Corbin from Infinity Property Management has been incredibly responsive and \
               attentive to our needs. Their 24/7 availability has been a game-changer for us. \
               Highly recommended for any property owner!",
        stars: 4,
    },
    Review {
        author: "David L.",
        body: "The team at Infinity Property Management has made managing our properties \
               stress-free. Their detailed financial reporting has given us clear insights into \
               our investments. We're extremely satisfied with their services.",
        stars: 4,
    },
];

#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"CUSTOMER REVIEWS"</h3>
                    <a href="#reviews" class="btn btn-outline">"See All Reviews"</a>
                </div>
                <div class="reviews-grid">
                    {REVIEWS
                        .iter()
                        .map(|review| {
                            view! {
                                <article class="review-card">
                                    <div class="review-stars">
                                        {(0..STARS_TOTAL)
                                            .map(|slot| {
                                                view! {
                                                    <span class=star_class(
                                                        slot,
                                                        review.stars,
                                                    )>"★"</span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <p class="review-body">{review.body}</p>
                                    <p class="review-author">{format!("- {}", review.author)}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

fn star_class(slot: u8, stars: u8) -> &'static str {
    if slot < stars { "star star-filled" } else { "star" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_of_five_stars_are_filled() {
        let filled = (0..STARS_TOTAL).filter(|&slot| star_class(slot, 4) == "star star-filled");
        assert_eq!(filled.count(), 4);
        assert_eq!(star_class(4, 4), "star");
    }
}
