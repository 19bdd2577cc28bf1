//! Numpad plus emulating a Tab press
//!
//! In the tabbable scope the intercepted key moves to the next tabbable
//! element, marked or not. Once focus lands on an element that is not
//! eligible the key is no longer intercepted there, so it stays put.

mod common;

use common::Page;
use plusastab::{NavigationScope, Options};

const START: &str = r#"<input id="start" type="text" value="starting point" />"#;
const START_CLASS: &str = r#"<input id="start" type="text" value="starting point" class="plus-as-tab" />"#;
const START_DATA: &str = r#"<input id="start" type="text" value="starting point" data-plus-as-tab="true" />"#;
const A: &str = r#"<input id="a" type="text" value="plussable" />"#;
const END: &str = r#"<input id="end" type="submit" value="end of the plussable elements" />"#;
const END_CLASS_OFF: &str = r#"<input id="end" type="submit" value="end" class="disable-plus-as-tab" />"#;
const END_DATA_OFF: &str = r#"<input id="end" type="submit" value="end" data-plus-as-tab="false" />"#;

fn wrap(open: &str, inner: &[&str]) -> String {
    format!("{open}{}</div>", inner.concat())
}

// ============================================================================
// INIT
// ============================================================================

#[test]
fn test_static_elements() {
    let html = format!(
        r#"<body>
            <div id="elements-initialized-at-startup">
                <div class="plus-as-tab">{START}{A}<input id="b" type="text" /></div>
                {END}
            </div>
        </body>"#
    );
    let mut page = Page::from_html(&html, Options::default().with_scope(NavigationScope::Tabbable));

    page.focus("start");
    page.press_expect(false, "a");
    page.press_expect(false, "b");
    page.press_expect(false, "end");
    page.assert_focused("end");
}

// ============================================================================
// ELEMENTS
// ============================================================================

#[test]
fn test_elements_forward_class_name() {
    let mut page = Page::tabbable();
    page.append(START_CLASS).append(END);

    page.focus("start");
    page.press_expect(false, "end");
}

#[test]
fn test_elements_forward_data_attribute() {
    let mut page = Page::tabbable();
    page.append(START_DATA).append(END);

    page.focus("start");
    page.press_expect(false, "end");
}

#[test]
fn test_elements_reverse_class_name() {
    let mut page = Page::tabbable();
    page.append(END).append(START_CLASS);

    page.focus("start");
    page.press_expect(true, "end");
}

#[test]
fn test_elements_reverse_data_attribute() {
    let mut page = Page::tabbable();
    page.append(END).append(START_DATA);

    page.focus("start");
    page.press_expect(true, "end");
}

// ============================================================================
// CONTAINERS
// ============================================================================

#[test]
fn test_containers_forward() {
    for open in [r#"<div class="plus-as-tab">"#, r#"<div data-plus-as-tab="true">"#] {
        let mut page = Page::tabbable();
        page.append(&wrap(open, &[START, A])).append(END);

        page.focus("start");
        page.press_expect(false, "a");
        page.press_expect(false, "end");
    }
}

#[test]
fn test_containers_forward_exclude() {
    for end in [END_CLASS_OFF, END_DATA_OFF] {
        let mut page = Page::tabbable();
        page.append(&wrap(r#"<div class="plus-as-tab">"#, &[START, A, end]));

        page.focus("start");
        page.press_expect(false, "a");
        page.press_expect(false, "end");
        page.press_expect(false, "end");
    }
}

#[test]
fn test_containers_reverse() {
    for open in [r#"<div class="plus-as-tab">"#, r#"<div data-plus-as-tab="true">"#] {
        let mut page = Page::tabbable();
        page.append(END).append(&wrap(open, &[A, START]));

        page.focus("start");
        page.press_expect(true, "a");
        page.press_expect(true, "end");
    }
}

#[test]
fn test_containers_reverse_exclude() {
    for end in [END_CLASS_OFF, END_DATA_OFF] {
        let mut page = Page::tabbable();
        page.append(&wrap(r#"<div data-plus-as-tab="true">"#, &[end, A, START]));

        page.focus("start");
        page.press_expect(true, "a");
        page.press_expect(true, "end");
        page.press_expect(true, "end");
    }
}

// ============================================================================
// PROGRAMMATIC ENABLE
// ============================================================================

#[test]
fn test_enable_element_forward() {
    let mut page = Page::tabbable();
    page.append(START).append(END);
    page.plus_as_tab("start", true);

    page.focus("start");
    page.press_expect(false, "end");
}

#[test]
fn test_enable_element_reverse() {
    let mut page = Page::tabbable();
    page.append(END).append(START);
    page.plus_as_tab("start", true);

    page.focus("start");
    page.press_expect(true, "end");
}

#[test]
fn test_enable_container_forward() {
    let mut page = Page::tabbable();
    page.append(&wrap(r#"<div id="container">"#, &[START, A])).append(END);
    page.plus_as_tab("container", true);

    page.focus("start");
    page.press_expect(false, "a");
    page.press_expect(false, "end");
}

#[test]
fn test_enable_container_forward_exclude() {
    let mut page = Page::tabbable();
    page.append(&wrap(r#"<div id="container">"#, &[START, A, END_DATA_OFF]));
    page.plus_as_tab("container", true);

    page.focus("start");
    page.press_expect(false, "a");
    page.press_expect(false, "end");
    page.press_expect(false, "end");
}

#[test]
fn test_enable_container_reverse() {
    let mut page = Page::tabbable();
    page.append(END).append(&wrap(r#"<div id="container">"#, &[A, START]));
    page.plus_as_tab("container", true);

    page.focus("start");
    page.press_expect(true, "a");
    page.press_expect(true, "end");
}

#[test]
fn test_enable_container_reverse_exclude() {
    let mut page = Page::tabbable();
    page.append(&wrap(r#"<div id="container">"#, &[END_DATA_OFF, A, START]));
    page.plus_as_tab("container", true);

    page.focus("start");
    page.press_expect(true, "a");
    page.press_expect(true, "end");
    page.press_expect(true, "end");
}

// ============================================================================
// PROGRAMMATIC DISABLE
// ============================================================================

#[test]
fn test_disable_element_forward() {
    let mut page = Page::tabbable();
    page.append(&wrap(r#"<div data-plus-as-tab="true">"#, &[START, END]));
    page.plus_as_tab("end", false);

    page.focus("start");
    page.press_expect(false, "end");
    page.press_expect(false, "end");
}

#[test]
fn test_disable_element_reverse() {
    let mut page = Page::tabbable();
    page.append(&wrap(r#"<div data-plus-as-tab="true">"#, &[END, START]));
    page.plus_as_tab("end", false);

    page.focus("start");
    page.press_expect(true, "end");
    page.press_expect(true, "end");
}

#[test]
fn test_disable_container_forward() {
    let mut page = Page::tabbable();
    let inner = wrap(r#"<div id="container">"#, &[END]);
    page.append(&wrap(r#"<div data-plus-as-tab="true">"#, &[START, inner.as_str()]));
    page.plus_as_tab("container", false);

    page.focus("start");
    page.press_expect(false, "end");
    page.press_expect(false, "end");
}

#[test]
fn test_disable_container_reverse() {
    let mut page = Page::tabbable();
    let inner = wrap(r#"<div id="container">"#, &[END]);
    page.append(&wrap(r#"<div data-plus-as-tab="true">"#, &[inner.as_str(), START]));
    page.plus_as_tab("container", false);

    page.focus("start");
    page.press_expect(true, "end");
    page.press_expect(true, "end");
}

// ============================================================================
// SCRIPT-FOCUSABLE ELEMENTS
// ============================================================================

#[test]
fn test_script_focusable_start_moves_to_next_tabbable() {
    let script_start = r#"<div id="start" tabindex="-1" class="plus-as-tab"></div>"#;

    let mut page = Page::tabbable();
    page.append(A).append(script_start).append(END);
    page.focus("start");
    page.press_expect(false, "end");

    page.focus("start");
    page.press_expect(true, "a");
}
