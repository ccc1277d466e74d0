use crate::core::orbit::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    pointer_id: i32,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone)]
struct OrbitWiring {
    canvas: web::HtmlCanvasElement,
    camera: Rc<RefCell<OrbitCamera>>,
    drag: Rc<RefCell<DragState>>,
}

/// Drag to orbit, wheel to zoom. No panning.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let w = OrbitWiring {
        canvas: canvas.clone(),
        camera,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        *w2.drag.borrow_mut() = DragState {
            active: true,
            pointer_id: ev.pointer_id(),
            last_x: ev.client_x() as f32,
            last_y: ev.client_y() as f32,
        };
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (dx, dy) = {
            let mut d = w2.drag.borrow_mut();
            if !d.active || d.pointer_id != ev.pointer_id() {
                return;
            }
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            let delta = (x - d.last_x, y - d.last_y);
            d.last_x = x;
            d.last_y = y;
            delta
        };
        let viewport_h = w2.canvas.client_height() as f32;
        w2.camera.borrow_mut().rotate_by_pixels(dx, dy, viewport_h);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring, event: &str) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut d = w2.drag.borrow_mut();
        if d.active && d.pointer_id == ev.pointer_id() {
            d.active = false;
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w2.camera.borrow_mut().zoom(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    // non-passive so the page does not scroll while zooming
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w.canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
