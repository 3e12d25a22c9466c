//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_particles::config::{CANVAS_ID, DARK_CLASS, THEME_TOGGLE_ID};
use portfolio_particles::{start, CanvasSurface, FieldConfig, ParticleField, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlCanvasElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn root() -> Element {
    document().document_element().unwrap()
}

fn new_canvas() -> HtmlCanvasElement {
    document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn viewport() -> (u32, u32) {
    let width = window().inner_width().unwrap().as_f64().unwrap();
    let height = window().inner_height().unwrap().as_f64().unwrap();
    (width as u32, height as u32)
}

// Particle canvas and theme toggle mounted in the body, removed again on drop
struct Page {
    canvas: HtmlCanvasElement,
    toggle: Element,
}

impl Page {
    fn mount() -> Page {
        let body = document().body().unwrap();

        let canvas = new_canvas();
        canvas.set_id(CANVAS_ID);
        body.append_child(&canvas).unwrap();

        let toggle = document().create_element("button").unwrap();
        toggle.set_id(THEME_TOGGLE_ID);
        body.append_child(&toggle).unwrap();

        root().class_list().remove_1(DARK_CLASS).unwrap();
        Page { canvas, toggle }
    }

    fn click_toggle(&self) {
        self.toggle
            .dispatch_event(&Event::new("click").unwrap())
            .unwrap();
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.canvas.remove();
        self.toggle.remove();
        let _ = root().class_list().remove_1(DARK_CLASS);
    }
}

fn page_is_dark() -> bool {
    root().class_list().contains(DARK_CLASS)
}

#[wasm_bindgen_test]
fn canvas_surface_reports_resized_dimensions() {
    let surface = CanvasSurface::new(new_canvas()).unwrap();
    surface.resize(640, 360);
    assert_eq!(surface.width(), 640.0);
    assert_eq!(surface.height(), 360.0);
}

#[wasm_bindgen_test]
fn field_renders_frames_onto_canvas() {
    let mut surface = CanvasSurface::new(new_canvas()).unwrap();
    surface.resize(320, 240);
    let mut field = ParticleField::with_rng(
        surface.width(),
        surface.height(),
        FieldConfig::default(),
        StdRng::seed_from_u64(42),
    );

    for _ in 0..10 {
        field.frame(&mut surface).unwrap();
    }
    assert_eq!(field.particles().len(), 200);
}

#[wasm_bindgen_test]
fn fill_styles_are_built_once_per_color() {
    let mut surface = CanvasSurface::new(new_canvas()).unwrap();
    surface.resize(320, 240);
    let mut field = ParticleField::with_rng(
        320.0,
        240.0,
        FieldConfig::default(),
        StdRng::seed_from_u64(43),
    );

    for _ in 0..5 {
        field.frame(&mut surface).unwrap();
    }
    let cached = surface.cached_fill_styles();
    assert!(cached > 0 && cached <= 4, "{} fill styles", cached);
}

#[wasm_bindgen_test]
fn start_without_particle_canvas_is_a_no_op() {
    assert!(start().is_ok());
}

#[wasm_bindgen_test]
fn start_sizes_canvas_to_viewport() {
    let page = Page::mount();
    start().unwrap();

    let (width, height) = viewport();
    assert_eq!((page.canvas.width(), page.canvas.height()), (width, height));
}

#[wasm_bindgen_test]
fn resize_event_resizes_canvas_to_viewport() {
    let page = Page::mount();
    start().unwrap();

    page.canvas.set_width(1);
    page.canvas.set_height(1);
    window()
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();

    let (width, height) = viewport();
    assert_eq!((page.canvas.width(), page.canvas.height()), (width, height));
}

#[wasm_bindgen_test]
fn toggle_click_flips_dark_class() {
    let page = Page::mount();
    start().unwrap();
    assert!(!page_is_dark());

    page.click_toggle();
    assert!(page_is_dark());

    page.click_toggle();
    assert!(!page_is_dark());
}

#[wasm_bindgen_test]
fn toggle_click_follows_class_set_by_page_scripts() {
    let page = Page::mount();
    start().unwrap();

    // saved-theme script switches to dark after the particles started
    root().class_list().add_1(DARK_CLASS).unwrap();

    page.click_toggle();
    assert!(!page_is_dark());
}
