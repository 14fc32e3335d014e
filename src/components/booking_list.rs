//! Filterable, paginated list of bookings with accept/reject actions.

#[cfg(test)]
#[path = "booking_list_test.rs"]
mod booking_list_test;

use leptos::prelude::*;

use crate::state::bookings::{BookingStatus, BookingsState, Decision, StatusFilter};

/// Render an ISO-8601 start time as `YYYY-MM-DD HH:MM`. Inputs that do not
/// look like ISO timestamps are shown unchanged.
pub fn format_start_time(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let hh_mm: String = time.chars().take(5).collect();
    format!("{date} {hh_mm}")
}

#[component]
pub fn BookingList(bookings: RwSignal<BookingsState>, on_decide: Callback<(i64, Decision)>) -> impl IntoView {
    let on_filter = move |ev: leptos::ev::Event| {
        let filter = StatusFilter::from_value(&event_target_value(&ev));
        bookings.update(|s| s.set_filter(filter));
    };

    view! {
        <section class="booking-list">
            <h2 class="booking-list__title">"My Bookings"</h2>

            <div class="booking-list__filter">
                <label for="statusFilter">"Filter by status:"</label>
                <select
                    id="statusFilter"
                    class="booking-list__select"
                    prop:value=move || bookings.get().filter.value()
                    on:change=on_filter
                >
                    <option value="All">"All"</option>
                    {BookingStatus::FILTERABLE
                        .into_iter()
                        .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                let page = bookings.get().current_page();
                if page.is_empty() {
                    return view! { <p class="booking-list__empty">"No bookings found."</p> }.into_any();
                }
                view! {
                    <div class="booking-list__items">
                        {page
                            .into_iter()
                            .map(|booking| {
                                let id = booking.id;
                                let pending = booking.is_pending();
                                view! {
                                    <div class="booking-card">
                                        <div class="booking-card__field">
                                            <h3>"Start Time"</h3>
                                            <p>{format_start_time(&booking.start_time)}</p>
                                        </div>
                                        <div class="booking-card__field">
                                            <h3>"Booked By"</h3>
                                            <p>{booking.booked_by_name().to_owned()}</p>
                                        </div>
                                        <div class="booking-card__field">
                                            <h3>"Status"</h3>
                                            <p class=booking.status.css_class()>{booking.status.label()}</p>
                                        </div>
                                        <Show when=move || pending>
                                            <div class="booking-card__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| on_decide.run((id, Decision::Accept))
                                                >
                                                    "Accept"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_decide.run((id, Decision::Reject))
                                                >
                                                    "Reject"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            <div class="booking-list__pages">
                {move || {
                    let state = bookings.get();
                    state
                        .page_numbers()
                        .into_iter()
                        .map(|n| {
                            let class = if n == state.page { "page-btn page-btn--active" } else { "page-btn" };
                            view! {
                                <button class=class on:click=move |_| bookings.update(|s| s.go_to_page(n))>
                                    {n}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
