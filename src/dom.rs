//! Mounts the widget into the page and wires browser events to the router.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlAudioElement, KeyboardEvent};

use crate::audio::{AudioBank, HtmlClip};
use crate::config::Config;
use crate::error::{DrumError, Result};
use crate::pads::PadTable;
use crate::render::{self, MachineView, CLIP_CLASS, DISPLAY_ID, MACHINE_ID};
use crate::router::InputRouter;
use crate::state::DrumState;
use crate::types::TriggerKey;

const APP_CLASS: &str = "drum-app";

struct Widget {
    router: InputRouter<HtmlClip>,
    tiles: HashMap<TriggerKey, Element>,
    display: Element,
}

impl Widget {
    fn render(&self) {
        apply(&render::view(self.router.state()), &self.tiles, &self.display);
    }
}

fn apply(view: &MachineView, tiles: &HashMap<TriggerKey, Element>, display: &Element) {
    for pad in &view.pads {
        if let Some(tile) = tiles.get(&pad.trigger) {
            tile.set_class_name(&pad.class_name);
        }
    }
    display.set_text_content(Some(&view.readout));
}

/// An event listener that stays registered while this value is kept.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }

    fn detach(&self) -> Result<()> {
        self.target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// A mounted drum machine. Returned to JavaScript by `mount`.
#[wasm_bindgen]
pub struct DrumMachineHandle {
    widget: Rc<RefCell<Widget>>,
    root: Element,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl DrumMachineHandle {
    /// Current state as JSON.
    pub fn snapshot(&self) -> std::result::Result<String, JsValue> {
        let widget = self.widget.borrow();
        let json = serde_json::to_string(widget.router.state()).map_err(DrumError::Snapshot)?;
        Ok(json)
    }

    /// Removes the listeners and the widget's elements, and silences its clips.
    pub fn unmount(&mut self) -> std::result::Result<(), JsValue> {
        // Detach everything before reporting, a dropped closure must not stay registered
        let mut first_err = None;
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.detach() {
                log::warn!("failed to detach {} listener: {}", listener.event, err);
                first_err.get_or_insert(err);
                listener.callback.forget();
            }
        }
        if let Some(err) = first_err {
            return Err(err.into());
        }

        let widget = self.widget.borrow();
        for clip in widget.router.audio().clips() {
            clip.element().pause()?;
        }
        self.root.remove();
        log::info!("drum machine unmounted");
        Ok(())
    }
}

impl Drop for DrumMachineHandle {
    /// Without `unmount` the widget stays live: its closures are leaked to JS.
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.callback.forget();
        }
    }
}

pub fn mount(config: &Config) -> Result<DrumMachineHandle> {
    let window = web_sys::window().ok_or_else(|| DrumError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DrumError::Dom("no document".into()))?;
    let host = host_element(&document, &config.root_id)?;

    let table = PadTable::standard()?;
    let state = DrumState::new(&table, &config.clip_base_url);
    let view = render::view(&state);

    let root = document.create_element("div")?;
    root.set_class_name(APP_CLASS);

    let machine = document.create_element("div")?;
    machine.set_id(MACHINE_ID);

    let mut tiles = HashMap::new();
    let mut clips = Vec::new();
    for pad in &view.pads {
        let tile = document.create_element("div")?;
        tile.set_id(&pad.id);

        let audio = document
            .create_element("audio")?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|_| DrumError::Dom("created element is not <audio>".into()))?;
        audio.set_class_name(CLIP_CLASS);
        audio.set_id(&pad.clip_id);
        audio.set_src(&pad.clip_url);
        audio.set_attribute("preload", "auto")?;

        tile.append_child(&audio)?;
        tile.append_with_str_1(&pad.label)?;
        machine.append_child(&tile)?;

        tiles.insert(pad.trigger, tile);
        clips.push((pad.trigger, HtmlClip::new(audio)));
    }

    let display = document.create_element("div")?;
    display.set_id(DISPLAY_ID);

    root.append_child(&machine)?;
    root.append_child(&display)?;
    host.append_child(&root)?;

    apply(&view, &tiles, &display);

    let widget = Rc::new(RefCell::new(Widget {
        router: InputRouter::new(table, state, AudioBank::new(clips)),
        tiles: tiles.clone(),
        display,
    }));

    let mut listeners = Vec::with_capacity(tiles.len() + 2);
    for (trigger, tile) in tiles {
        let widget = widget.clone();
        listeners.push(Listener::attach(tile.into(), "click", move |_| {
            on_click(&widget, trigger)
        })?);
    }

    let window: EventTarget = window.into();
    listeners.push(Listener::attach(window.clone(), "keydown", {
        let widget = widget.clone();
        move |event| on_key(&widget, &event, true)
    })?);
    listeners.push(Listener::attach(window, "keyup", {
        let widget = widget.clone();
        move |event| on_key(&widget, &event, false)
    })?);

    log::info!("drum machine mounted with {} pads", widget.borrow().tiles.len());
    Ok(DrumMachineHandle {
        widget,
        root,
        listeners,
    })
}

fn host_element(document: &Document, root_id: &str) -> Result<Element> {
    if let Some(element) = document.get_element_by_id(root_id) {
        return Ok(element);
    }
    log::debug!("no #{} element, mounting on <body>", root_id);
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| DrumError::Dom("document has no body".into()))
}

fn on_key(widget: &Rc<RefCell<Widget>>, event: &Event, down: bool) {
    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    if let Err(err) = handle_key(widget, event, down) {
        fail(err);
    }
}

/// Routes one key event. The widget borrow ends before this returns.
fn handle_key(widget: &RefCell<Widget>, event: &KeyboardEvent, down: bool) -> Result<bool> {
    // Shortcuts only suppress presses; a release must always clear the pad
    if down && (event.ctrl_key() || event.alt_key() || event.meta_key()) {
        return Ok(false);
    }

    let key = event.key();
    let mut widget = widget.borrow_mut();
    if down && widget.router.table().lookup(&key).is_some() {
        event.prevent_default();
    }

    let changed = if down {
        widget.router.on_key_down(&key)?
    } else {
        widget.router.on_key_up(&key)?
    };
    if changed {
        widget.render();
    }
    Ok(changed)
}

fn on_click(widget: &Rc<RefCell<Widget>>, trigger: TriggerKey) {
    let result = {
        let mut widget = widget.borrow_mut();
        let result = widget.router.on_click(trigger);
        if result.is_ok() {
            widget.render();
        }
        result
    };

    if let Err(err) = result {
        fail(err);
    }
}

/// Router and table disagree, nothing sensible left to do.
fn fail(err: DrumError) -> ! {
    log::error!("{}", err);
    wasm_bindgen::throw_str(&err.to_string())
}
