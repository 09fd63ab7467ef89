//! Star Rating Components

use leptos::prelude::*;

/// Five-character star string, rounded to the nearest whole star
pub fn stars(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Read-only rating display
#[component]
pub fn StarRating(rating: Option<f64>) -> impl IntoView {
    match rating {
        Some(r) => view! {
            <span class="star-rating" title=format!("{:.1} out of 5", r)>
                {stars(r)}
                <span class="star-rating-value">{format!("{:.1}", r)}</span>
            </span>
        }
        .into_any(),
        None => view! { <span class="star-rating none">"No ratings yet"</span> }.into_any(),
    }
}

/// Clickable 1-5 star picker
#[component]
pub fn StarInput(value: ReadSignal<u8>, set_value: WriteSignal<u8>) -> impl IntoView {
    view! {
        <span class="star-input">
            {(1..=5u8).map(|n| {
                view! {
                    <button
                        type="button"
                        class=move || { if value.get() >= n { "star filled" } else { "star" } }
                        title=format!("{} star{}", n, if n == 1 { "" } else { "s" })
                        on:click=move |_| set_value.set(n)
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(3.6), "★★★★☆");
        assert_eq!(stars(9.0), "★★★★★");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }
}
