//! Public landing page with the popular-question carousel.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::question_carousel::QuestionCarousel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <Navbar page="Home"/>
            <QuestionCarousel/>
        </main>
    }
}
