//! Unit Circle entry point
//!
//! On the web, wires DOM events into the app. Natively, runs a scripted
//! pointer session against recording surfaces and prints the results.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlInputElement, MouseEvent, TouchEvent};

    use unit_circle::interaction::{PointerEvent, PointerKind, PointerSource};
    use unit_circle::platform::web::{CanvasSurface, DomInfoPanel, DomPinnedList};
    use unit_circle::{App, OptionKey, Options};

    type WebApp = App<CanvasSurface, DomInfoPanel, DomPinnedList>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Unit Circle starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(canvas.clone()).expect("no 2d context");
        let app = Rc::new(RefCell::new(App::new(
            surface,
            DomInfoPanel::new(document.clone()),
            DomPinnedList::new(document.clone()),
            Options::default(),
        )));

        setup_mouse_handlers(&canvas, app.clone());
        setup_touch_handlers(&canvas, app.clone());
        setup_option_toggles(app.clone());
        setup_pinned_list(app.clone());
        setup_resize(app);

        log::info!("Unit Circle running!");
    }

    fn mouse_event(kind: PointerKind, event: &MouseEvent) -> PointerEvent {
        PointerEvent::mouse(kind, event.offset_x() as f64, event.offset_y() as f64)
    }

    /// First touch of a list, relative to the canvas
    fn touch_pos(canvas: &HtmlCanvasElement, touches: &web_sys::TouchList) -> Option<DVec2> {
        let touch = touches.get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(DVec2::new(
            touch.client_x() as f64 - rect.left(),
            touch.client_y() as f64 - rect.top(),
        ))
    }

    fn setup_mouse_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
        let handlers: [(&str, Option<PointerKind>); 4] = [
            ("mousedown", Some(PointerKind::Down)),
            ("mousemove", Some(PointerKind::Move)),
            ("mouseup", Some(PointerKind::Up)),
            ("mouseleave", None),
        ];

        for (name, kind) in handlers {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pointer = match kind {
                    Some(kind) => mouse_event(kind, &event),
                    None => PointerEvent::leave(PointerSource::Mouse),
                };
                app.borrow_mut().handle_event(pointer);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
        // Touch start / move: position from the active touch list
        for (name, kind) in [("touchstart", PointerKind::Down), ("touchmove", PointerKind::Move)] {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let pos = touch_pos(&canvas_clone, &event.touches());
                app.borrow_mut()
                    .handle_event(PointerEvent::new(kind, PointerSource::Touch, pos));
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: the lifted finger is only in changedTouches
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let pos = touch_pos(&canvas_clone, &event.changed_touches());
                let mut a = app.borrow_mut();
                a.handle_event(PointerEvent::new(PointerKind::Up, PointerSource::Touch, pos));
                a.handle_event(PointerEvent::leave(PointerSource::Touch));
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().handle_event(PointerEvent::new(
                    PointerKind::Cancel,
                    PointerSource::Touch,
                    None,
                ));
            });
            let _ = canvas
                .add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_option_toggles(app: Rc<RefCell<WebApp>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for key in OptionKey::ALL {
            let Some(input) = document
                .get_element_by_id(key.as_str())
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                log::warn!("missing checkbox #{}", key.as_str());
                continue;
            };
            input.set_checked(app.borrow().options().get(key));

            let app = app.clone();
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().set_option(key, input_clone.checked());
            });
            let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pinned_list(app: Rc<RefCell<WebApp>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Row clicks are delegated to the list element
        if let Some(list) = document.get_element_by_id("pinned-list") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let Some(id) = target
                    .closest("[data-pin-id]")
                    .ok()
                    .flatten()
                    .and_then(|row| row.get_attribute("data-pin-id"))
                    .and_then(|id| id.parse().ok())
                else {
                    return;
                };
                if target.class_list().contains("pin-delete") {
                    app.borrow_mut().delete_pin(id);
                } else {
                    app.borrow_mut().toggle_pin(id);
                }
            });
            let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("clear-pins") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().clear_pins();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<WebApp>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Unit Circle (native) starting...");
    log::info!("Native mode has no window - serve the web build to interact");

    println!("\nReplaying a scripted pointer session...");
    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use unit_circle::interaction::{PointerEvent, PointerKind};
    use unit_circle::platform::RenderSurface;
    use unit_circle::platform::recording::{RecordingList, RecordingPanel, RecordingSurface};
    use unit_circle::{App, Options};

    let mut app = App::new(
        RecordingSurface::new(800.0, 600.0),
        RecordingPanel::default(),
        RecordingList::default(),
        Options::default(),
    );

    let vp = app.surface().viewport();
    for (kind, degrees) in [
        (PointerKind::Down, 44.9),
        (PointerKind::Move, 45.3),
        (PointerKind::Up, 45.3),
        (PointerKind::Down, 200.0),
        (PointerKind::Up, 200.0),
        (PointerKind::Down, 200.0),
        (PointerKind::Up, 200.0),
    ] {
        let p = vp.point_at(f64::to_radians(degrees), 0.8);
        app.handle_event(PointerEvent::mouse(kind, p.x, p.y));
    }

    for row in &app.list().rows {
        println!("  pin {}: {}{}", row.id, row.label, if row.selected { " (selected)" } else { "" });
    }
    if let Some(report) = &app.panel().report {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("could not serialize report: {e}"),
        }
    }
    println!("✓ {} frames drawn", app.surface().frames);
}
