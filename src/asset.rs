use crate::constants::{TRUCK_COLOR_HEX, TRUCK_MODEL_PATH};
use crate::core::color::hex_to_linear;
use crate::core::model::{parse_glb, ModelMesh};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> HTTP {}", path, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and flatten the truck model once; the frame loop uploads it when it lands.
pub fn load_truck(pending: Rc<RefCell<Option<ModelMesh>>>) {
    spawn_local(async move {
        let loaded = async {
            let bytes = fetch_bytes(TRUCK_MODEL_PATH).await?;
            let mesh = parse_glb(&bytes, hex_to_linear(TRUCK_COLOR_HEX))?;
            anyhow::Ok(mesh)
        };
        match loaded.await {
            Ok(mesh) => {
                log::info!(
                    "[asset] {} loaded: {} triangles",
                    TRUCK_MODEL_PATH,
                    mesh.triangle_count()
                );
                *pending.borrow_mut() = Some(mesh);
            }
            Err(e) => log::warn!("[asset] truck model unavailable: {:?}", e),
        }
    });
}
