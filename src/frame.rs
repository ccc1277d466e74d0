use crate::constants::*;
use crate::core::color::{cycling_hue_rgb, srgb_to_linear};
use crate::core::model::ModelMesh;
use crate::core::orbit::OrbitCamera;
use crate::core::{
    estimate_scale, to_world_box, truck_placement, CanvasSettingsHandle, CanvasSettingsProvider,
    Projection, ScaleReading, BOX_CENTER_Y, WORLD_SCALE,
};
use crate::overlay;
use crate::render;
use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    // Owns the settings for the whole session; every reader goes through a handle
    pub _settings_owner: CanvasSettingsProvider,
    pub settings: CanvasSettingsHandle,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub gpu: Option<render::GpuState<'a>>,
    pub pending_truck: Rc<RefCell<Option<ModelMesh>>>,

    pub started: Instant,
    pub last_instant: Instant,
    pub grid_rotation: f32,
    pub scale_reading: ScaleReading,
    pub last_revision: Option<u64>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let settings = self.settings.get();
        if self.last_revision != Some(settings.revision) {
            log::info!(
                "[frame] showing {} ({}x{}x{}cm)",
                settings.trailer,
                settings.dimensions.width,
                settings.dimensions.length,
                settings.dimensions.height
            );
            self.last_revision = Some(settings.revision);
        }
        let world_box = to_world_box(settings.dimensions, WORLD_SCALE);
        let truck = truck_placement(settings.dimensions);

        self.grid_rotation += GRID_SPIN_PER_FRAME;

        let (view_proj, eye, distance, fov_deg) = {
            let mut cam = self.camera.borrow_mut();
            cam.update();
            let w = self.canvas.width().max(1) as f32;
            let h = self.canvas.height().max(1) as f32;
            (cam.view_proj(w / h), cam.eye(), cam.distance(), cam.fov_y_deg)
        };

        // Scale bar is laid out in CSS pixels, so measure the canvas the same way
        let css_height = self.canvas.client_height();
        if css_height > 0 {
            let reading = estimate_scale(
                distance as f64,
                Projection::Perspective {
                    vertical_fov_deg: fov_deg as f64,
                },
                css_height as f64,
            );
            if reading.meters.is_finite() && reading.pixels.is_finite() {
                self.scale_reading = reading;
                overlay::update_scale_bar(&self.document, &self.scale_reading);
            }
        }

        let hue = cycling_hue_rgb(elapsed, BOX_HUE_DEG_PER_SEC);
        let cargo_color = hue.map(srgb_to_linear);

        if let Some(g) = &mut self.gpu {
            if let Some(mesh) = self.pending_truck.borrow_mut().take() {
                g.set_truck_mesh(&mesh);
            }
            g.set_cargo_box(world_box);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let params = render::FrameParams {
                view_proj,
                eye,
                cargo_model: Mat4::from_translation(Vec3::new(0.0, BOX_CENTER_Y, 0.0)),
                cargo_color,
                truck_model: truck.model_matrix(),
                grid_rotation: self.grid_rotation,
            };
            if let Err(e) = g.render(dt_sec, &params) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
