//! Full question list behind the carousel's "Explore" and the popover's
//! "Question" links.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::question_carousel::load_questions;
use crate::state::questions::CarouselState;
use crate::util::cancel::CancelToken;

#[component]
pub fn QuestionsPage() -> impl IntoView {
    let questions = RwSignal::new(CarouselState::default());
    load_questions(questions, CancelToken::for_owner());

    view! {
        <main class="questions-page">
            <Navbar page="Question"/>
            {move || {
                let state = questions.get();
                if state.loading {
                    return view! { <p class="questions-page__status">"Loading..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="questions-page__status">"Error: " {error}</p> }.into_any();
                }
                if state.cards.is_empty() {
                    return view! { <p class="questions-page__status">"No questions yet."</p> }.into_any();
                }
                view! {
                    <div class="questions-page__grid">
                        {state
                            .cards
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
                    </div>
                }
                    .into_any()
            }}
        </main>
    }
}
