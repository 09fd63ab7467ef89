//! Review Section Component
//!
//! Lists a book's reviews and lets a logged-in reader add one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{spawn_load, EmptyState, ErrorBanner, LoadState, Spinner, StarInput, StarRating};
use crate::context::use_toasts;
use crate::models::{NewReview, Review};
use crate::store::{store_handle_error, store_is_logged_in, store_token, use_app_store};
use crate::validation::validate_review;

fn average(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

#[component]
pub fn ReviewSection(#[prop(into)] book_id: String) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (reviews, set_reviews) = signal(LoadState::<Vec<Review>>::Loading);
    let book_id = StoredValue::new(book_id);

    Effect::new(move |_| {
        let id = book_id.get_value();
        spawn_load(set_reviews, async move { api::list_reviews(&id).await });
    });

    // Form state
    let (rating, set_rating) = signal(0u8);
    let (comment, set_comment) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let review = NewReview {
            rating: rating.get_untracked(),
            comment: comment.get_untracked().trim().to_string(),
        };
        if let Err(msg) = validate_review(review.rating, &review.comment) {
            set_form_error.set(Some(msg));
            return;
        }
        let Some(token) = store_token(&store) else { return };
        set_form_error.set(None);
        set_submitting.set(true);
        let id = book_id.get_value();
        spawn_local(async move {
            match api::create_review(&token, &id, &review).await {
                Ok(created) => {
                    let _ = set_reviews.try_update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.insert(0, created);
                        }
                    });
                    let _ = set_rating.try_set(0);
                    let _ = set_comment.try_set(String::new());
                    toasts.success("Thanks for your review!");
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    let _ = set_form_error.try_set(Some(e.user_message()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <section class="review-section">
            <h2>"Reviews"</h2>
            {move || match reviews.get() {
                LoadState::Loading => view! { <Spinner label="Loading reviews..." /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(list) if list.is_empty() => {
                    view! { <EmptyState message="No reviews yet. Be the first!" /> }.into_any()
                }
                LoadState::Ready(list) => {
                    let avg = average(&list);
                    view! {
                        <div class="review-summary">
                            <StarRating rating=avg />
                            <span>{format!("{} review{}", list.len(), if list.len() == 1 { "" } else { "s" })}</span>
                        </div>
                        <ul class="review-list">
                            {list.into_iter().map(|r| view! {
                                <li class="review">
                                    <div class="review-header">
                                        <strong>{r.user_name.clone()}</strong>
                                        <StarRating rating=Some(f64::from(r.rating)) />
                                        {r.created_at.map(|at| view! {
                                            <time class="review-date">{at.format("%b %e, %Y").to_string()}</time>
                                        })}
                                    </div>
                                    <p class="review-comment">{r.comment.clone()}</p>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}

            <Show
                when=move || store_is_logged_in(&store)
                fallback=|| view! {
                    <p class="review-login-hint"><A href="/login">"Log in"</A>" to write a review."</p>
                }
            >
                <form class="review-form" on:submit=on_submit>
                    <label>"Your rating"</label>
                    <StarInput value=rating set_value=set_rating />
                    <textarea
                        placeholder="What did you think?"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Posting..." } else { "Post review" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review { id: "r".into(), user_name: "Ana".into(), rating, comment: "ok".into(), created_at: None }
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[review(5), review(4)]), Some(4.5));
    }
}
