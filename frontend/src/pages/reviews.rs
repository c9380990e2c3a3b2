use yew::prelude::*;

use crate::components::sections::{stars, FinalCta, PageHero, QuoteCtaProps, Testimonials};
use crate::content::{Review, REVIEWS};
use crate::seo::{local_business_schema, Seo, SeoProps};

/// Mean rating to one decimal place, or `None` with no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    let mean = total as f64 / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[function_component(Reviews)]
pub fn reviews(props: &QuoteCtaProps) -> Html {
    let meta = SeoProps::page(
        "Customer Reviews",
        "What Hampshire homeowners say about Hampshire Roof Care.",
        "/reviews",
    );
    let summary = average_rating(REVIEWS)
        .map(|avg| format!("{} {:.1} from {} reviews", stars(avg.round() as u8), avg, REVIEWS.len()))
        .unwrap_or_default();

    html! {
        <div class="catalog-page reviews-page">
            <Seo {meta} schemas={vec![local_business_schema()]} />
            <PageHero title="Customer Reviews" subtitle={summary} eyebrow={Some("Reviews")} />
            <Testimonials reviews={REVIEWS} />
            <FinalCta on_quote={props.on_quote.clone()} />
            <style>
                {r#"
                .reviews-page .testimonials {
                    max-width: 1200px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .testimonial {
                    margin: 0;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #f8fafc;
                }

                .stars {
                    color: #f59e0b;
                }
                "#}
            </style>
            <style>{crate::components::cards::CATALOG_STYLE}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_catalog_is_in_range() {
        let avg = average_rating(REVIEWS).unwrap();
        assert!((1.0..=5.0).contains(&avg));
    }

    #[test]
    fn no_reviews_no_average() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_rounds_to_one_place() {
        let review = |rating| Review { author: "A", location: "B", text: "C", rating };
        assert_eq!(average_rating(&[review(5), review(4), review(4)]), Some(4.3));
    }
}
