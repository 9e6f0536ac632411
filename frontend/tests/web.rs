//! Browser tests for the landing controller.
//!
//! Run with `wasm-pack test --headless --chrome frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::{initialize, Controller, LandingConfig};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit, MouseEvent, Node,
};

wasm_bindgen_test_configure!(run_in_browser);

const SIGNUP_FORM: &str = r#"
    <form class="email-signup">
        <input type="email" />
        <button type="submit">Get Started</button>
    </form>
"#;

const ACCORDION: &str = r#"
    <ul class="accordion">
        <li><input type="radio" name="faq" id="q1"><label for="q1">One</label></li>
        <li><input type="radio" name="faq" id="q2"><label for="q2">Two</label></li>
    </ul>
"#;

const LANGUAGE: &str = r#"
    <div class="lang-wrap"><button class="language-btn">English <img src="x.png"></button></div>
    <p class="elsewhere">elsewhere</p>
"#;

const NAV: &str = r#"<nav><button class="lang">English</button><button class="signin">Sign In</button></nav>"#;

/// Renders `markup` into a fixture container, leaving the test runner's own output untouched.
fn start(markup: &str) -> (Document, Controller) {
    start_with(markup, LandingConfig::default())
}

fn start_with(markup: &str, config: LandingConfig) -> (Document, Controller) {
    let document = web_sys::window().unwrap().document().unwrap();
    let fixture = match document.get_element_by_id("fixture") {
        Some(fixture) => fixture,
        None => {
            let fixture = document.create_element("div").unwrap();
            fixture.set_id("fixture");
            document.body().unwrap().append_child(&fixture).unwrap();
            fixture
        }
    };
    fixture.set_inner_html(markup);
    let controller = initialize(&document, config).unwrap();
    (document, controller)
}

fn get<T: JsCast>(document: &Document, selector: &str) -> T {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {}", selector))
        .dyn_into::<T>()
        .unwrap()
}

fn count(document: &Document, selector: &str) -> u32 {
    document.query_selector_all(selector).unwrap().length()
}

fn toasts(document: &Document) -> Vec<String> {
    let list = document.query_selector_all(".simple-toast").unwrap();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.text_content())
        .collect()
}

/// Dispatches a cancelable submit; returns `false` when a handler prevented it.
fn submit(document: &Document) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    get::<HtmlElement>(document, "form.email-signup")
        .dispatch_event(&event)
        .unwrap()
}

fn press(element: &HtmlElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

fn mouse_down(element: &HtmlElement) {
    let event = MouseEvent::new("mousedown").unwrap();
    element.dispatch_event(&event).unwrap();
}

/// What a real pointer does: `mousedown`, then the `click` that activates the label.
fn pointer_click(element: &HtmlElement) {
    mouse_down(element);
    element.click();
}

#[wasm_bindgen_test]
fn signup_with_empty_email_prompts_and_focuses_input() {
    let (document, controller) = start(SIGNUP_FORM);
    let messages = controller.config().messages.clone();

    let submitted = submit(&document);

    assert!(!submitted);
    assert_eq!(toasts(&document), vec![messages.email_required]);
    let input: HtmlInputElement = get(&document, "form.email-signup input");
    let input: &Node = &input;
    let active = document.active_element().unwrap();
    assert!(active.is_same_node(Some(input)));
}

#[wasm_bindgen_test]
fn signup_with_bad_email_leaves_button_alone() {
    let (document, controller) = start(SIGNUP_FORM);
    get::<HtmlInputElement>(&document, "form.email-signup input").set_value("bad-email");

    submit(&document);

    assert_eq!(toasts(&document), vec![controller.config().messages.email_invalid.clone()]);
    let button: HtmlButtonElement = get(&document, "form.email-signup button");
    assert_eq!(button.text_content().unwrap(), "Get Started");
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
async fn signup_with_valid_email_processes_then_opens_next_step() {
    let (document, controller) = start(SIGNUP_FORM);
    get::<HtmlInputElement>(&document, "form.email-signup input").set_value("user@example.com");

    submit(&document);

    let button: HtmlButtonElement = get(&document, "form.email-signup button");
    assert_eq!(button.text_content().unwrap(), "Processing...");
    assert!(button.disabled());
    assert_eq!(count(&document, ".simple-modal"), 0);

    TimeoutFuture::new(1_000).await;

    assert_eq!(button.text_content().unwrap(), "Get Started");
    assert!(!button.disabled());
    assert_eq!(count(&document, ".simple-modal"), 1);

    get::<HtmlElement>(&document, ".modal-done").click();
    assert_eq!(count(&document, ".simple-modal"), 0);
    assert!(toasts(&document).contains(&controller.config().messages.signup_complete));
}

#[wasm_bindgen_test]
async fn signup_resubmit_keeps_original_label_and_one_modal() {
    let (document, _controller) = start(SIGNUP_FORM);
    get::<HtmlInputElement>(&document, "form.email-signup input").set_value("user@example.com");

    submit(&document);
    TimeoutFuture::new(300).await;
    submit(&document);
    TimeoutFuture::new(1_200).await;

    let button: HtmlButtonElement = get(&document, "form.email-signup button");
    assert_eq!(button.text_content().unwrap(), "Get Started");
    assert!(!button.disabled());
    assert_eq!(count(&document, ".simple-modal"), 1);

    get::<HtmlElement>(&document, ".modal-cancel").click();
    assert_eq!(count(&document, ".simple-modal"), 0);
}

#[wasm_bindgen_test]
async fn signup_without_submit_button_still_opens_next_step() {
    let (document, _controller) = start(r#"<form class="email-signup"><input type="email"></form>"#);
    get::<HtmlInputElement>(&document, "form.email-signup input").set_value("user@example.com");

    submit(&document);
    TimeoutFuture::new(800).await;

    assert_eq!(count(&document, ".simple-modal"), 1);
}

#[wasm_bindgen_test]
fn accordion_label_press_toggles_item() {
    let (document, _controller) = start(ACCORDION);
    let label: HtmlElement = get(&document, "label[for='q1']");
    let input: HtmlInputElement = get(&document, "#q1");

    mouse_down(&label);
    assert!(input.checked());

    mouse_down(&label);
    assert!(!input.checked());
}

#[wasm_bindgen_test]
fn accordion_full_pointer_click_opens_and_closes() {
    let (document, _controller) = start(ACCORDION);
    let label: HtmlElement = get(&document, "label[for='q1']");
    let input: HtmlInputElement = get(&document, "#q1");
    let other: HtmlInputElement = get(&document, "#q2");

    pointer_click(&label);
    assert!(input.checked());
    assert!(!other.checked());

    pointer_click(&label);
    assert!(!input.checked());
    assert!(!other.checked());
}

#[wasm_bindgen_test]
fn accordion_keyboard_matches_pointer() {
    let (document, _controller) = start(ACCORDION);
    let label: HtmlElement = get(&document, "label[for='q2']");
    let input: HtmlInputElement = get(&document, "#q2");
    assert_eq!(label.get_attribute("tabindex").as_deref(), Some("0"));

    press(&label, "Enter");
    assert!(input.checked());

    press(&label, " ");
    assert!(!input.checked());

    press(&label, "a");
    assert!(!input.checked());
}

#[wasm_bindgen_test]
fn language_trigger_toggles_single_panel() {
    let (document, _controller) = start(LANGUAGE);
    let trigger: HtmlElement = get(&document, ".language-btn");

    trigger.click();
    assert_eq!(count(&document, ".lang-dropdown"), 1);
    assert_eq!(count(&document, ".lang-item"), 6);

    trigger.click();
    assert_eq!(count(&document, ".lang-dropdown"), 0);
}

#[wasm_bindgen_test]
fn language_selection_relabels_trigger() {
    let (document, _controller) = start(LANGUAGE);
    let trigger: HtmlElement = get(&document, ".language-btn");

    trigger.click();
    let items = document.query_selector_all(".lang-item").unwrap();
    items.get(1).unwrap().dyn_into::<HtmlElement>().unwrap().click();

    assert_eq!(count(&document, ".lang-dropdown"), 0);
    assert!(trigger.text_content().unwrap().starts_with("हिन्दी"));
    assert_eq!(count(&document, ".language-btn img"), 1);
    assert!(toasts(&document).contains(&"Language set to हिन्दी (demo)".to_string()));
}

#[wasm_bindgen_test]
fn language_outside_click_closes_without_relabel() {
    let (document, _controller) = start(LANGUAGE);
    let trigger: HtmlElement = get(&document, ".language-btn");

    trigger.click();
    get::<HtmlElement>(&document, ".elsewhere").click();

    assert_eq!(count(&document, ".lang-dropdown"), 0);
    assert!(trigger.text_content().unwrap().starts_with("English"));
}

#[wasm_bindgen_test]
async fn signin_short_password_keeps_modal_open() {
    let (document, controller) = start(NAV);
    get::<HtmlElement>(&document, ".signin").click();
    assert_eq!(count(&document, ".signin-modal"), 1);

    get::<HtmlInputElement>(&document, "#signin-email").set_value("user@example.com");
    get::<HtmlInputElement>(&document, "#signin-pass").set_value("abc");
    get::<HtmlElement>(&document, "#signin-submit").click();

    let expected = controller.config().messages.password_too_short(4);
    assert!(toasts(&document).contains(&expected));
    TimeoutFuture::new(800).await;
    assert_eq!(count(&document, ".signin-modal"), 1);
}

#[wasm_bindgen_test]
fn signin_invalid_email_keeps_modal_open() {
    let (document, controller) = start(NAV);
    get::<HtmlElement>(&document, ".signin").click();

    get::<HtmlInputElement>(&document, "#signin-email").set_value("not-an-email");
    get::<HtmlInputElement>(&document, "#signin-pass").set_value("abcd");
    get::<HtmlElement>(&document, "#signin-submit").click();

    assert_eq!(
        toasts(&document),
        vec![controller.config().messages.signin_email_invalid.clone()]
    );
    assert_eq!(count(&document, ".signin-modal"), 1);
}

#[wasm_bindgen_test]
fn signin_cancel_closes_modal() {
    let (document, _controller) = start(NAV);
    get::<HtmlElement>(&document, ".signin").click();
    assert_eq!(count(&document, ".signin-modal"), 1);

    get::<HtmlElement>(&document, "#signin-close").click();
    assert_eq!(count(&document, ".signin-modal"), 0);
    assert!(toasts(&document).is_empty());
}

#[wasm_bindgen_test]
async fn signin_success_closes_modal() {
    let (document, controller) = start(NAV);
    get::<HtmlElement>(&document, ".signin").click();
    get::<HtmlElement>(&document, ".signin").click();
    assert_eq!(count(&document, ".signin-modal"), 1);

    get::<HtmlInputElement>(&document, "#signin-email").set_value("user@example.com");
    get::<HtmlInputElement>(&document, "#signin-pass").set_value("abcd");
    get::<HtmlElement>(&document, "#signin-submit").click();

    assert!(toasts(&document).contains(&controller.config().messages.signin_success));
    assert_eq!(count(&document, ".signin-modal"), 1);
    TimeoutFuture::new(800).await;
    assert_eq!(count(&document, ".signin-modal"), 0);
}

#[wasm_bindgen_test]
fn signin_backdrop_click_closes_but_panel_click_does_not() {
    let (document, _controller) = start(NAV);
    get::<HtmlElement>(&document, ".signin").click();

    get::<HtmlElement>(&document, ".signin-modal > div").click();
    assert_eq!(count(&document, ".signin-modal"), 1);

    get::<HtmlElement>(&document, ".signin-modal").click();
    assert_eq!(count(&document, ".signin-modal"), 0);
}

#[wasm_bindgen_test]
fn header_nav_follows_scroll_threshold() {
    let (document, _controller) = start(
        r#"<div class="header"><nav>nav</nav></div><div style="height: 5000px"></div>"#,
    );
    let window = web_sys::window().unwrap();
    let nav: HtmlElement = get(&document, ".header nav");

    window.scroll_to_with_x_and_y(0.0, 200.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    let style = nav.style();
    assert_eq!(style.get_property_value("background-color").unwrap(), "rgba(0, 0, 0, 0.6)");
    assert_eq!(style.get_property_value("backdrop-filter").unwrap(), "blur(6px)");

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_ne!(style.get_property_value("background-color").unwrap(), "rgba(0, 0, 0, 0.6)");
    assert_eq!(style.get_property_value("backdrop-filter").unwrap(), "none");
}

#[wasm_bindgen_test]
async fn toast_is_removed_after_its_duration() {
    let config = LandingConfig {
        toast_duration_ms: 200,
        ..LandingConfig::default()
    };
    let (document, controller) = start_with(SIGNUP_FORM, config);

    submit(&document);
    assert_eq!(toasts(&document).len(), 1);
    assert_eq!(controller.toasts().visible_count(), 1);

    TimeoutFuture::new(400).await;

    assert!(toasts(&document).is_empty());
    assert_eq!(controller.toasts().visible_count(), 0);
}

#[wasm_bindgen_test]
fn dropping_controller_unbinds_and_clears_toasts() {
    let (document, controller) = start(SIGNUP_FORM);
    submit(&document);
    assert_eq!(toasts(&document).len(), 1);

    drop(controller);
    assert!(toasts(&document).is_empty());

    assert!(submit(&document));
    assert!(toasts(&document).is_empty());
}
