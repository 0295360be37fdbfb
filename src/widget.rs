//! WASM entry point.
//!
//! [`render`] is what the notebook front end calls with its model object and
//! a mount element. It builds a `<div><canvas></canvas></div>`, starts the
//! image load, and wires mouse events to a shared [`Engine`]. The returned
//! [`Widget`] owns every listener; dropping it (JS `free()`) detaches them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement, MouseEvent};

use crate::engine::{Engine, EngineCore};
use crate::host::{HostModel, JsModel};
use crate::input::Button;
use crate::scale::Point;

type SharedEngine = Rc<RefCell<Engine<JsModel>>>;
type MouseListener = Closure<dyn FnMut(MouseEvent)>;

const MOUSE_EVENTS: [&str; 4] = ["mousedown", "mousemove", "mouseup", "mouseleave"];

/// Handle to a mounted overlay.
#[wasm_bindgen]
pub struct Widget {
    engine: SharedEngine,
    listeners: Vec<(&'static str, MouseListener)>,
    // Held so the image callbacks outlive `render`.
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for Widget {
    fn drop(&mut self) {
        let engine = self.engine.borrow();
        detach(engine.canvas(), &self.listeners);
        engine.image().set_onload(None);
        engine.image().set_onerror(None);
    }
}

/// Mount the overlay into `el`, reading and writing `model`.
///
/// # Errors
///
/// Returns `Err` if the DOM refuses an element or a listener. Invalid model
/// settings never fail here; they fall back to defaults.
#[wasm_bindgen]
pub fn render(model: HostModel, el: HtmlElement) -> Result<Widget, JsValue> {
    init_console();

    let core = EngineCore::from_model(JsModel::new(model));
    let image_src = core.config.image_src.clone();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
    let container = document.create_element("div")?;
    container.append_child(&canvas)?;
    el.append_child(&container)?;

    let image = HtmlImageElement::new()?;
    let engine: SharedEngine = Rc::new(RefCell::new(Engine::new(canvas.clone(), image.clone(), core)?));

    // Nothing may fail once the image holds the load callbacks.
    let mut listeners = Vec::with_capacity(MOUSE_EVENTS.len());
    for event in MOUSE_EVENTS {
        let listener = mouse_listener(event, Rc::clone(&engine));
        if let Err(err) = canvas.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            detach(&canvas, &listeners);
            return Err(err);
        }
        listeners.push((event, listener));
    }

    let on_load = {
        let engine = Rc::clone(&engine);
        Closure::wrap(Box::new(move || {
            if let Err(err) = engine.borrow_mut().on_image_loaded() {
                tracing::error!(?err, "initial render failed");
            }
        }) as Box<dyn FnMut()>)
    };
    let on_error = {
        let src = image_src.clone();
        Closure::wrap(Box::new(move || {
            tracing::warn!(src = %truncate(&src), "background image failed to load");
        }) as Box<dyn FnMut()>)
    };
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(&image_src);

    Ok(Widget { engine, listeners, _on_load: on_load, _on_error: on_error })
}

fn mouse_listener(event: &'static str, engine: SharedEngine) -> MouseListener {
    Closure::wrap(Box::new(move |ev: MouseEvent| {
        let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        let mut engine = engine.borrow_mut();
        let result = match event {
            "mousedown" => engine.on_pointer_down(point, Button::from_dom(ev.button())),
            "mousemove" => engine.on_pointer_move(point),
            "mouseup" => engine.on_pointer_up(),
            _ => engine.on_pointer_leave(),
        };
        if let Err(err) = result {
            tracing::error!(event, ?err, "canvas update failed");
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn detach(canvas: &HtmlCanvasElement, listeners: &[(&'static str, MouseListener)]) {
    for (event, listener) in listeners {
        if let Err(err) = canvas.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            tracing::warn!(event, ?err, "failed to detach listener");
        }
    }
}

/// Data URLs are long; keep log lines readable.
fn truncate(src: &str) -> &str {
    src.char_indices().nth(64).map_or(src, |(i, _)| &src[..i])
}

#[cfg(target_arch = "wasm32")]
fn init_console() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            tracing::warn!(%err, "console logger already installed");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn init_console() {}
