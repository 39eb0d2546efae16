#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;
use yew::platform::time::sleep;

use valentine_web::app::App;
use valentine_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn click(selector: &str) {
    let doc = dom::document().expect("document");
    let el: HtmlElement = doc
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} should exist"))
        .dyn_into()
        .expect("html element");
    el.click();
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn clicking_through_the_intro_reaches_the_menu() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    for _ in 0..9 {
        click("#intro");
        settle().await;
    }
    let doc = dom::document().expect("document");
    let cards = doc.query_selector_all(".day-card").expect("query cards");
    assert_eq!(cards.length(), 8);
}

#[wasm_bindgen_test]
async fn opening_and_closing_a_day_returns_to_the_menu() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    for _ in 0..9 {
        click("#intro");
        settle().await;
    }
    click(".day-card[data-day='6']");
    settle().await;
    click(".stage .exit");
    settle().await;
    let doc = dom::document().expect("document");
    assert!(doc.query_selector(".stage").expect("query").is_none());
    assert!(doc.query_selector(".day-card").expect("query").is_some());
}

#[wasm_bindgen_test]
async fn music_toggle_works_before_any_other_click() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    click(".music-toggle");
    settle().await;
    let doc = dom::document().expect("document");
    let toggle = doc
        .query_selector(".music-toggle")
        .expect("query")
        .expect("toggle rendered");
    assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("true"));
    assert_eq!(toggle.get_attribute("aria-label").as_deref(), Some("Mute music"));
    assert!(doc.query_selector("#intro").expect("query").is_some());
}
