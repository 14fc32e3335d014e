//! "Popular Question" carousel fed by the backend question list.
//!
//! Fetches once on mount. A failed fetch shows a static error line; there
//! is no retry.

use leptos::prelude::*;

use crate::state::questions::{CarouselLayout, CarouselState};
use crate::util::cancel::CancelToken;
use crate::util::viewport::use_viewport_width;

/// Inline error when the backend answers but not with a question list.
const FETCH_FAILED: &str = "Failed to fetch questions";

/// Fetch the question list once into `carousel`.
pub fn load_questions(carousel: RwSignal<CarouselState>, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_questions().await;
        if cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(items) => carousel.update(|c| c.loaded(items)),
            Err(crate::net::api::ApiError::Status(status)) => {
                leptos::logging::warn!("question list: status {status}");
                carousel.update(|c| c.failed(FETCH_FAILED));
            }
            Err(e) => {
                leptos::logging::error!("question list: {e}");
                carousel.update(|c| c.failed(e.to_string()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (carousel, cancel, FETCH_FAILED);
}

#[component]
pub fn QuestionCarousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::default());
    let width = use_viewport_width();
    let layout = Memo::new(move |_| CarouselLayout::for_width(width.get()));
    let cancel = CancelToken::for_owner();

    load_questions(carousel, cancel);

    view! {
        <section id="courses" class="question-carousel">
            <div class="question-carousel__header">
                <h3 class="question-carousel__title">"Popular Question"</h3>
                <a href="/question" class="question-carousel__explore">"Explore >"</a>
            </div>
            {move || {
                let state = carousel.get();
                if state.loading {
                    return view! { <div class="question-carousel__status">"Loading..."</div> }.into_any();
                }
                if let Some(error) = state.error.clone() {
                    return view! { <div class="question-carousel__status">"Error: " {error}</div> }.into_any();
                }
                let current = layout.get();
                view! {
                    <div class="question-carousel__track">
                        <button
                            class="question-carousel__nav"
                            aria-label="Previous"
                            on:click=move |_| carousel.update(|c| c.prev(layout.get_untracked()))
                        >
                            "<"
                        </button>
                        {state
                            .visible(current)
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class="question-card">
                                        <img class="question-card__image" src=card.image_src alt=""/>
                                        <h4 class="question-card__content">{card.content}</h4>
                                        <p class="question-card__category">{card.category}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <button
                            class="question-carousel__nav"
                            aria-label="Next"
                            on:click=move |_| carousel.update(|c| c.next(layout.get_untracked()))
                        >
                            ">"
                        </button>
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
