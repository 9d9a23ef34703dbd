//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use drumpad::DrumMachineHandle;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_in(root_id: &str) -> DrumMachineHandle {
    let host = document().create_element("div").unwrap();
    host.set_id(root_id);
    document().body().unwrap().append_child(&host).unwrap();

    let config = format!(r#"{{"root_id": "{}", "log_level": "debug"}}"#, root_id);
    drumpad::mount(Some(config)).unwrap()
}

fn element(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn press(kind: &str, key: &str, ctrl: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn click(id: &str) {
    element(id).dyn_into::<HtmlElement>().unwrap().click();
}

fn is_playing(id: &str) -> bool {
    element(id).class_name().split(' ').any(|c| c == "playing")
}

fn readout() -> String {
    element("display").text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_mount_builds_grid() {
    let mut handle = mount_in("root-grid");

    assert_eq!(element("drum-machine").child_element_count(), 9);
    assert_eq!(readout(), "");

    let clip = element("Q");
    assert_eq!(clip.class_name(), "clip");
    assert_eq!(clip.parent_element().unwrap().id(), "heater 1");
    assert!(clip.get_attribute("src").unwrap().ends_with("/Heater-1.mp3"));
    assert_eq!(element("kick").class_name(), "drum-pad");

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_key_press_and_release() {
    let mut handle = mount_in("root-keys");

    press("keydown", "q", false);
    assert!(is_playing("heater 1"));
    assert_eq!(readout(), "heater 1");

    press("keyup", "q", false);
    assert!(!is_playing("heater 1"));
    assert_eq!(readout(), "heater 1");

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_upper_case_key() {
    let mut handle = mount_in("root-case");

    press("keydown", "C", false);
    assert!(is_playing("closed HH"));
    assert_eq!(readout(), "closed HH");

    press("keyup", "c", false);
    assert!(!is_playing("closed HH"));

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_unmapped_and_modified_keys_ignored() {
    let mut handle = mount_in("root-unmapped");
    let before = handle.snapshot().unwrap();

    press("keydown", "p", false);
    press("keydown", "Shift", false);
    press("keydown", "q", true);

    assert_eq!(handle.snapshot().unwrap(), before);
    assert_eq!(readout(), "");

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_click_retriggers() {
    let mut handle = mount_in("root-click");

    click("kick");
    assert!(is_playing("kick"));
    assert_eq!(readout(), "kick");

    click("kick");
    assert!(is_playing("kick"));

    click("clap");
    assert_eq!(readout(), "clap");
    // Click highlights only clear on key-up
    assert!(is_playing("kick"));

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_unmount_removes_widget() {
    let mut handle = mount_in("root-unmount");
    handle.unmount().unwrap();

    assert!(document().get_element_by_id("drum-machine").is_none());

    // Listeners are gone too, this must not throw
    press("keydown", "q", false);
}

#[wasm_bindgen_test]
fn test_release_with_modifier_held() {
    let mut handle = mount_in("root-modifier");

    press("keydown", "q", false);
    assert!(is_playing("heater 1"));

    // Ctrl went down before "q" came up
    press("keyup", "q", true);
    assert!(!is_playing("heater 1"));

    // The pad is free to play again
    press("keydown", "q", false);
    assert!(is_playing("heater 1"));
    press("keyup", "q", false);

    handle.unmount().unwrap();
}

#[wasm_bindgen_test]
fn test_dropped_handle_stays_live() {
    let handle = mount_in("root-dropped");
    drop(handle);

    press("keydown", "x", false);
    assert!(is_playing("kick"));
    assert_eq!(readout(), "kick");
    press("keyup", "x", false);
    assert!(!is_playing("kick"));

    click("clap");
    assert_eq!(readout(), "clap");

    // The widget now lives for the page; take it out of the way of later tests
    element("root-dropped").remove();
}
