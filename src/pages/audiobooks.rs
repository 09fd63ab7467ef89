//! Audiobook Pages
//!
//! List page and detail page with an in-browser player built on the
//! native `<audio>` element.

use leptos::html;
use leptos::prelude::*;

use crate::config::AUDIO_SKIP_SECONDS;
use crate::models::{Book, BookKind};
use crate::pages::books::{render_detail, use_book, BookDetailShell, BookListPage};
use crate::store::{store_is_logged_in, use_app_store};

const PLAYBACK_RATES: [f64; 5] = [0.75, 1.0, 1.25, 1.5, 2.0];

/// 75.4 -> "1:15", 3725 -> "1:02:05"
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// New position after skipping `delta` seconds, kept inside the track
pub fn skip_position(current: f64, delta: f64, duration: f64) -> f64 {
    let end = if duration.is_finite() && duration > 0.0 { duration } else { f64::MAX };
    (current + delta).clamp(0.0, end)
}

#[component]
pub fn AudiobooksPage() -> impl IntoView {
    view! {
        <BookListPage
            kind=BookKind::Audiobook
            title="Audiobooks"
            intro="Stories read aloud by great narrators. Listen right in your browser."
        />
    }
}

#[component]
pub fn AudiobookDetailPage() -> impl IntoView {
    let book = use_book(BookKind::Audiobook);
    move || {
        render_detail(book.get(), |book: Book| {
            let audio_url = book.audio_url.clone();
            let meta = audiobook_meta(&book);
            view! {
                <BookDetailShell book=book>
                    <p class="audiobook-meta">{meta}</p>
                    {audio_url.map(|src| view! { <AudioPlayer src=src /> })}
                </BookDetailShell>
            }
        })
    }
}

fn audiobook_meta(book: &Book) -> String {
    let mut parts = Vec::new();
    if let Some(narrator) = &book.narrator {
        parts.push(format!("Narrated by {}", narrator));
    }
    if let Some(minutes) = book.duration_minutes {
        parts.push(format!("{} h {} min", minutes / 60, minutes % 60));
    }
    parts.join(" · ")
}

#[component]
fn AudioPlayer(#[prop(into)] src: String) -> impl IntoView {
    let store = use_app_store();
    let audio_ref: NodeRef<html::Audio> = NodeRef::new();
    let (playing, set_playing) = signal(false);
    let (position, set_position) = signal(0.0f64);
    let (duration, set_duration) = signal(0.0f64);
    let (rate, set_rate) = signal(1.0f64);

    let toggle = move |_| {
        let Some(audio) = audio_ref.get() else { return };
        if audio.paused() {
            if let Err(e) = audio.play() {
                log::warn!("audio play rejected: {:?}", e);
            }
        } else if let Err(e) = audio.pause() {
            log::warn!("audio pause failed: {:?}", e);
        }
    };

    let skip = move |delta: f64| {
        if let Some(audio) = audio_ref.get() {
            audio.set_current_time(skip_position(audio.current_time(), delta, audio.duration()));
        }
    };

    let seek = move |ev: web_sys::Event| {
        if let (Some(audio), Ok(to)) = (audio_ref.get(), event_target_value(&ev).parse::<f64>()) {
            audio.set_current_time(to);
        }
    };

    let change_rate = move |ev: web_sys::Event| {
        let Ok(r) = event_target_value(&ev).parse::<f64>() else { return };
        set_rate.set(r);
        if let Some(audio) = audio_ref.get() {
            audio.set_playback_rate(r);
        }
    };

    view! {
        <Show
            when=move || store_is_logged_in(&store)
            fallback=|| view! { <p class="notice">"Log in to listen to this audiobook."</p> }
        >
            <div class="audio-player">
                <audio
                    node_ref=audio_ref
                    src=src.clone()
                    preload="metadata"
                    on:play=move |_| set_playing.set(true)
                    on:pause=move |_| set_playing.set(false)
                    on:ended=move |_| set_playing.set(false)
                    on:timeupdate=move |_| {
                        if let Some(audio) = audio_ref.get() {
                            set_position.set(audio.current_time());
                        }
                    }
                    on:loadedmetadata=move |_| {
                        if let Some(audio) = audio_ref.get() {
                            set_duration.set(audio.duration());
                            audio.set_playback_rate(rate.get_untracked());
                        }
                    }
                ></audio>
                <div class="audio-controls">
                    <button class="skip-btn" on:click=move |_| skip(-AUDIO_SKIP_SECONDS)>"⟲ 15s"</button>
                    <button class="play-btn" on:click=toggle>
                        {move || if playing.get() { "Pause" } else { "Play" }}
                    </button>
                    <button class="skip-btn" on:click=move |_| skip(AUDIO_SKIP_SECONDS)>"15s ⟳"</button>
                </div>
                <div class="audio-progress">
                    <span>{move || format_time(position.get())}</span>
                    <input
                        type="range"
                        min="0"
                        step="1"
                        prop:max=move || duration.get().max(0.0).to_string()
                        prop:value=move || position.get().to_string()
                        on:change=seek
                    />
                    <span>{move || format_time(duration.get())}</span>
                </div>
                <label class="audio-rate">
                    "Speed "
                    <select prop:value=move || rate.get().to_string() on:change=change_rate>
                        {PLAYBACK_RATES.into_iter().map(|r| view! {
                            <option value=r.to_string()>{format!("{}×", r)}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(75.4), "1:15");
        assert_eq!(format_time(3725.0), "1:02:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn test_skip_position_clamps() {
        assert_eq!(skip_position(10.0, -15.0, 100.0), 0.0);
        assert_eq!(skip_position(95.0, 15.0, 100.0), 100.0);
        assert_eq!(skip_position(20.0, 15.0, 100.0), 35.0);
        // Unknown duration (stream still loading)
        assert_eq!(skip_position(20.0, 15.0, f64::NAN), 35.0);
    }
}
