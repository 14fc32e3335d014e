use super::*;

fn make_items(count: usize) -> Vec<QuestionItem> {
    (0..count)
        .map(|i| QuestionItem {
            content: format!("q{i}"),
            image: Some(format!("/img/{i}.png")),
            category_name: Some("Rust".to_owned()),
        })
        .collect()
}

fn contents(cards: &[CarouselCard]) -> Vec<&str> {
    cards.iter().map(|c| c.content.as_str()).collect()
}

// =============================================================
// Mapping
// =============================================================

#[test]
fn question_item_maps_backend_fields() {
    let item: QuestionItem = serde_json::from_value(serde_json::json!({
        "content": "How do lifetimes work?",
        "image": "https://cdn.example.com/q.png",
        "categoryName": "Rust",
        "id": 3
    }))
    .unwrap();
    let card = CarouselCard::from(item);
    assert_eq!(card.content, "How do lifetimes work?");
    assert_eq!(card.image_src, "https://cdn.example.com/q.png");
    assert_eq!(card.category, "Rust");
}

#[test]
fn missing_image_maps_to_empty_src() {
    let item: QuestionItem = serde_json::from_value(serde_json::json!({ "content": "x", "image": null })).unwrap();
    let card = CarouselCard::from(item);
    assert_eq!(card.image_src, "");
    assert_eq!(card.category, "");
}

// =============================================================
// Layout breakpoints
// =============================================================

#[test]
fn layout_breakpoints() {
    assert_eq!(CarouselLayout::for_width(1920.0).slides_to_show, 3);
    assert_eq!(CarouselLayout::for_width(1200.0).slides_to_show, 3);
    assert_eq!(CarouselLayout::for_width(1199.0).slides_to_show, 2);
    assert_eq!(CarouselLayout::for_width(600.0).slides_to_show, 2);
    assert_eq!(CarouselLayout::for_width(599.0).slides_to_show, 1);
}

#[test]
fn wide_layout_scrolls_two() {
    assert_eq!(CarouselLayout::for_width(1400.0).slides_to_scroll, 2);
    assert_eq!(CarouselLayout::for_width(800.0).slides_to_scroll, 1);
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = CarouselState::default();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failure_sets_error_and_stops_loading() {
    let mut state = CarouselState::default();
    state.failed("Failed to fetch questions");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch questions"));
    assert!(state.cards.is_empty());
}

#[test]
fn visible_window_wraps_around() {
    let mut state = CarouselState::default();
    state.loaded(make_items(4));
    let wide = CarouselLayout::for_width(1300.0);

    assert_eq!(contents(&state.visible(wide)), vec!["q0", "q1", "q2"]);
    state.next(wide);
    assert_eq!(contents(&state.visible(wide)), vec!["q2", "q3", "q0"]);
    state.next(wide);
    assert_eq!(state.offset, 0);
}

#[test]
fn prev_wraps_to_end() {
    let mut state = CarouselState::default();
    state.loaded(make_items(5));
    let narrow = CarouselLayout::for_width(400.0);

    state.prev(narrow);
    assert_eq!(state.offset, 4);
    assert_eq!(contents(&state.visible(narrow)), vec!["q4"]);
}

#[test]
fn fewer_cards_than_slots_shows_each_once() {
    let mut state = CarouselState::default();
    state.loaded(make_items(2));
    let wide = CarouselLayout::for_width(1300.0);
    assert_eq!(contents(&state.visible(wide)), vec!["q0", "q1"]);
}

#[test]
fn empty_carousel_navigation_is_noop() {
    let mut state = CarouselState::default();
    state.loaded(Vec::new());
    let layout = CarouselLayout::for_width(1300.0);
    state.next(layout);
    state.prev(layout);
    assert_eq!(state.offset, 0);
    assert!(state.visible(layout).is_empty());
}
