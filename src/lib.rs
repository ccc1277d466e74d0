#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CAMERA_FOV_DEG, CAMERA_START, ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR,
    ORBIT_MIN_DISTANCE,
};
use crate::core::locale::Locale;
use crate::core::model::ModelMesh;
use crate::core::orbit::{OrbitCamera, OrbitLimits};
use crate::core::theme::ColorMode;
use crate::core::{CanvasSettingsProvider, ScaleReading};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_camera() -> OrbitCamera {
    OrbitCamera::new(
        Vec3::from_array(CAMERA_START),
        Vec3::ZERO,
        CAMERA_FOV_DEG,
        OrbitLimits {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
        },
    )
    .with_damping(ORBIT_DAMPING)
}

/// Header and sidebar: strings, theme, language menu and the trailer selector.
fn wire_chrome(document: &web::Document, settings: &CanvasSettingsProvider) -> anyhow::Result<()> {
    let pathname = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let locale = Locale::from_pathname(&pathname);
    ui::apply_locale(document, locale);
    ui::wire_language_menu(document, Rc::new(RefCell::new(locale)));

    let mode = ColorMode::default();
    ui::apply_theme(document, mode);
    ui::wire_theme_toggle(document, Rc::new(RefCell::new(mode)));

    ui::populate_trailer_select(document, settings.handle().get().trailer)?;
    ui::wire_trailer_select(document, settings.handle());
    log::info!("[ui] locale={} theme={}", locale, mode.as_str());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pallet-view starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let settings = CanvasSettingsProvider::default();
    wire_chrome(&document, &settings)?;

    let scale_reading = ScaleReading::default();
    overlay::update_scale_bar(&document, &scale_reading);

    let camera = Rc::new(RefCell::new(build_camera()));
    events::wire_orbit_controls(&canvas, camera.clone());

    let pending_truck: Rc<RefCell<Option<ModelMesh>>> = Rc::new(RefCell::new(None));
    asset::load_truck(pending_truck.clone());

    // Initialize WebGPU; without it the page still works, only the canvas stays blank
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        settings: settings.handle(),
        _settings_owner: settings,
        camera,
        canvas,
        document,
        gpu,
        pending_truck,
        started: now,
        last_instant: now,
        grid_rotation: 0.0,
        scale_reading,
        last_revision: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
