//! Booking list state for the "My Requests" page.
//!
//! DESIGN
//! ======
//! Holds the fetched list plus the status filter and 1-based page index.
//! Filtering happens before pagination; both are derived on read so the
//! stored list stays exactly what the backend returned, apart from
//! accept/reject results the backend already confirmed.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use serde::{Deserialize, Serialize};

/// Bookings shown per page.
pub const PAGE_SIZE: usize = 5;

/// Lifecycle state of a booking as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Accepted,
    Declined,
    OverTime,
    /// Any status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Statuses offered by the filter control, in display order.
    pub const FILTERABLE: [Self; 4] = [Self::Pending, Self::Accepted, Self::Declined, Self::OverTime];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::OverTime => "OverTime",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.label() == raw)
    }

    /// Modifier class used to colour the status text.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Accepted => "booking-status--accepted",
            Self::Declined => "booking-status--declined",
            Self::Pending => "booking-status--pending",
            Self::OverTime | Self::Unknown => "booking-status--neutral",
        }
    }
}

/// The mentee who made the booking. The backend sends `null` for
/// accounts without a display name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedBy {
    #[serde(default)]
    pub fullname: Option<String>,
}

/// A mentoring session request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub start_time: String,
    pub status: BookingStatus,
    /// Absent or `null` for deleted accounts.
    #[serde(default)]
    pub user: Option<BookedBy>,
}

impl Booking {
    pub fn booked_by_name(&self) -> &str {
        self.user.as_ref().and_then(|u| u.fullname.as_deref()).unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }
}

/// Mentor's verdict on a pending booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Status the booking moves to once the backend confirms.
    pub fn resulting_status(self) -> BookingStatus {
        match self {
            Self::Accept => BookingStatus::Accepted,
            Self::Reject => BookingStatus::Declined,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Accept => "Booking accepted successfully!",
            Self::Reject => "Booking rejected successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Accept => "Failed to accept booking",
            Self::Reject => "Failed to reject booking",
        }
    }
}

/// Client-side status filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn matches(self, status: BookingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Value used in the `<select>` control.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    /// Inverse of `value`; unknown strings fall back to `All`.
    pub fn from_value(raw: &str) -> Self {
        BookingStatus::parse(raw).map_or(Self::All, Self::Only)
    }
}

/// View-local booking list with filter and pagination.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub filter: StatusFilter,
    /// 1-based page index.
    pub page: usize,
    pub loading: bool,
}

impl Default for BookingsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: StatusFilter::All,
            page: 1,
            loading: false,
        }
    }
}

impl BookingsState {
    /// Replace the list with a fresh backend response.
    pub fn set_items(&mut self, items: Vec<Booking>) {
        self.items = items;
        self.loading = false;
        self.clamp_page();
    }

    /// Bookings passing the current filter, in backend order.
    pub fn filtered(&self) -> Vec<&Booking> {
        self.items.iter().filter(|b| self.filter.matches(b.status)).collect()
    }

    /// `ceil(filtered / PAGE_SIZE)`; zero when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// Page button numbers, `1..=page_count`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.page_count()).collect()
    }

    /// Contiguous slice of the filtered list for the current page.
    pub fn current_page(&self) -> Vec<Booking> {
        let start = self.page.saturating_sub(1) * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).cloned().collect()
    }

    /// Change the filter and return to the first page.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.clamp_page();
    }

    /// Record a backend-confirmed decision on booking `id`.
    ///
    /// Returns `false` if no booking with that id is loaded.
    pub fn apply_decision(&mut self, id: i64, decision: Decision) -> bool {
        let Some(booking) = self.items.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        booking.status = decision.resulting_status();
        self.clamp_page();
        true
    }

    fn clamp_page(&mut self) {
        let pages = self.page_count().max(1);
        if self.page > pages {
            self.page = pages;
        }
    }
}
