//! Popular-question carousel state.
//!
//! The backend question list is mapped once into `CarouselCard`s. The
//! carousel shows a sliding window over the cards whose width depends on
//! the viewport, wrapping around at both ends.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use serde::Deserialize;

/// Question as returned by the backend list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Display shape for one carousel slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselCard {
    pub content: String,
    pub image_src: String,
    pub category: String,
}

impl From<QuestionItem> for CarouselCard {
    fn from(item: QuestionItem) -> Self {
        Self {
            content: item.content,
            image_src: item.image.unwrap_or_default(),
            category: item.category_name.unwrap_or_default(),
        }
    }
}

/// Slides visible and slides advanced per step at a given viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselLayout {
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
}

impl CarouselLayout {
    pub const WIDE_MIN_PX: f64 = 1200.0;
    pub const MEDIUM_MIN_PX: f64 = 600.0;

    pub fn for_width(width_px: f64) -> Self {
        if width_px >= Self::WIDE_MIN_PX {
            Self { slides_to_show: 3, slides_to_scroll: 2 }
        } else if width_px >= Self::MEDIUM_MIN_PX {
            Self { slides_to_show: 2, slides_to_scroll: 1 }
        } else {
            Self { slides_to_show: 1, slides_to_scroll: 1 }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub cards: Vec<CarouselCard>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index of the leftmost visible card.
    pub offset: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            loading: true,
            error: None,
            offset: 0,
        }
    }
}

impl CarouselState {
    pub fn loaded(&mut self, items: Vec<QuestionItem>) {
        self.cards = items.into_iter().map(CarouselCard::from).collect();
        self.loading = false;
        self.error = None;
        self.offset = 0;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Cards in the visible window, wrapping past the end. Never repeats a
    /// card when there are fewer cards than slots.
    pub fn visible(&self, layout: CarouselLayout) -> Vec<CarouselCard> {
        let len = self.cards.len();
        if len == 0 {
            return Vec::new();
        }
        (0..layout.slides_to_show.min(len))
            .map(|i| self.cards[(self.offset + i) % len].clone())
            .collect()
    }

    pub fn next(&mut self, layout: CarouselLayout) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.offset = (self.offset + layout.slides_to_scroll) % len;
    }

    pub fn prev(&mut self, layout: CarouselLayout) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        let step = layout.slides_to_scroll % len;
        self.offset = (self.offset + len - step) % len;
    }
}
