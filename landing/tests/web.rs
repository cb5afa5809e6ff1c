//! Browser tests for the fade-in observer.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use paylloom_landing::config::{DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS};
use paylloom_landing::observer::FadeInObserver;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A block at the very top of the page, i.e. inside the viewport.
fn block_in_view() -> Element {
    let el = document().create_element("div").unwrap();
    el.set_attribute("style", "height: 120px").unwrap();
    document().body().unwrap().prepend_with_node_1(&el).unwrap();
    el
}

/// A block far below the fold.
fn block_below_fold() -> Element {
    let el = document().create_element("div").unwrap();
    el.set_attribute("style", "position: absolute; top: 100000px; height: 120px")
        .unwrap();
    document().body().unwrap().append_with_node_1(&el).unwrap();
    el
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn has_visible_class(el: &Element) -> bool {
    el.class_list().contains(VISIBLE_CLASS)
}

#[wasm_bindgen_test]
fn registering_twice_is_a_no_op() {
    let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
    let el = block_in_view();

    assert!(observer.register(&el));
    assert!(!observer.register(&el));
    assert_eq!(observer.watched(), 1);
}

#[wasm_bindgen_test]
async fn block_in_view_gets_visible_class() {
    let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
    let el = block_in_view();
    observer.register(&el);

    sleep(150).await;

    assert!(has_visible_class(&el));
    assert!(observer.is_visible(&el));
}

#[wasm_bindgen_test]
async fn block_below_fold_stays_hidden() {
    let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
    let el = block_below_fold();
    observer.register(&el);

    sleep(150).await;

    assert!(!has_visible_class(&el));
    assert!(!observer.is_visible(&el));
}

#[wasm_bindgen_test]
async fn visibility_survives_scrolling_out() {
    let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
    let el = block_in_view();
    observer.register(&el);
    sleep(150).await;
    assert!(has_visible_class(&el));

    el.set_attribute("style", "position: absolute; top: 100000px; height: 120px")
        .unwrap();
    sleep(150).await;

    assert!(has_visible_class(&el));
    assert!(observer.is_visible(&el));
}

#[wasm_bindgen_test]
async fn disconnected_observer_ignores_new_blocks() {
    let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
    observer.disconnect();
    observer.disconnect();
    assert!(observer.is_disconnected());

    let el = block_in_view();
    assert!(!observer.register(&el));

    sleep(150).await;
    assert!(!has_visible_class(&el));
}

#[wasm_bindgen_test]
async fn dropped_observer_stops_revealing() {
    let el = block_below_fold();
    {
        let observer = FadeInObserver::new(DEFAULT_FADE_THRESHOLD, VISIBLE_CLASS).unwrap();
        observer.register(&el);
    }

    // Scroll it into view after the observer is gone
    el.set_attribute("style", "height: 120px").unwrap();
    document().body().unwrap().prepend_with_node_1(&el).unwrap();
    sleep(150).await;

    assert!(!has_visible_class(&el));
}
