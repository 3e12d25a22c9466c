mod utils;

pub mod color;
pub mod config;
pub mod field;
pub mod palette;
pub mod particle;
pub mod surface;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlCanvasElement, Window};

pub use color::Color;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use palette::Palette;
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface};
pub use theme::{Theme, ThemeSwitch};

use config::{CANVAS_ID, DARK_CLASS, THEME_TOGGLE_ID};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

type SharedField = Rc<RefCell<ParticleField>>;
type SharedSurface = Rc<RefCell<CanvasSurface>>;

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn as_function(closure: &Closure<dyn FnMut()>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(as_function(f))
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as u32, height as u32))
}

// Entry point, runs once when the module is instantiated. Pages without the
// particle canvas get nothing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element.dyn_into::<HtmlCanvasElement>()?,
        None => {
            console::log_1(&format!("no #{} on this page, particles disabled", CANVAS_ID).into());
            return Ok(());
        }
    };

    let surface = CanvasSurface::new(canvas)?;
    let (width, height) = viewport_size(&window)?;
    surface.resize(width, height);

    let field = Rc::new(RefCell::new(ParticleField::new(width as f64, height as f64)));
    let surface = Rc::new(RefCell::new(surface));

    listen_for_resize(&window, &field, &surface)?;
    install_theme_switch(&document, &field)?;
    run_frame_loop(field, surface)
}

fn resize_to_viewport(field: &SharedField, surface: &SharedSurface) -> Result<(), JsValue> {
    let (width, height) = viewport_size(&window()?)?;
    surface.borrow().resize(width, height);
    field.borrow_mut().on_resize(width as f64, height as f64);
    Ok(())
}

fn listen_for_resize(
    window: &Window,
    field: &SharedField,
    surface: &SharedSurface,
) -> Result<(), JsValue> {
    let field = field.clone();
    let surface = surface.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(err) = resize_to_viewport(&field, &surface) {
            console::error_1(&err);
        }
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("resize", as_function(&closure))?;
    closure.forget();
    Ok(())
}

fn page_theme(root: &Element) -> Theme {
    if root.class_list().contains(DARK_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn install_theme_switch(document: &Document, field: &SharedField) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;

    let mut switch = ThemeSwitch::new(page_theme(&root));

    {
        let root = root.clone();
        switch.subscribe(move |theme| {
            let classes = root.class_list();
            let result = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
            if let Err(err) = result {
                console::error_1(&err);
            }
        });
    }
    {
        let field = field.clone();
        switch.subscribe(move |_| field.borrow_mut().on_palette_change());
    }

    let toggle = match document.get_element_by_id(THEME_TOGGLE_ID) {
        Some(toggle) => toggle,
        None => return Ok(()),
    };

    let switch = Rc::new(RefCell::new(switch));
    let closure = Closure::wrap(Box::new(move || {
        // page scripts may have changed the class since the last click
        let theme = switch.borrow_mut().toggle_from(page_theme(&root));
        console::log_1(&format!("theme switched to {:?}", theme).into());
    }) as Box<dyn FnMut()>);

    toggle.add_event_listener_with_callback("click", as_function(&closure))?;
    closure.forget();
    Ok(())
}

// Each pass re-arms itself, so the loop lives as long as the page does.
fn run_frame_loop(field: SharedField, surface: SharedSurface) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            #[cfg(feature = "frame-timing")]
            let _timer = Timer::new("ParticleField::frame");
            let mut surface = surface.borrow_mut();
            if let Err(err) = field.borrow_mut().frame(&mut *surface) {
                console::error_1(&err);
            }
        }

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    request_animation_frame(callback)?;
    Ok(())
}
