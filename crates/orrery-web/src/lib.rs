pub mod runner;

pub use runner::{AppRunner, LoopState};

use wasm_bindgen::JsValue;

/// Convert an engine error into a JS `Error` the host can display.
pub fn to_js_error(err: orrery_engine::OrreryError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Route panics to the browser console and install the `log` backend.
/// Safe to call more than once.
pub fn install_hooks() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_configure, app_init, app_tick, input
///   handlers, texture callbacks, frame buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod app;
/// use app::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `orrery_engine::App`
///   and has a `new()` constructor
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner, creating it on first use.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.get_or_insert_with(|| $crate::AppRunner::new(<$app_type>::new()));
                f(runner)
            })
        }

        /// Override config fields before `app_init`.
        #[wasm_bindgen]
        pub fn app_configure(json: &str) -> Result<(), JsValue> {
            $crate::install_hooks();
            with_runner(|r| r.configure(json)).map_err($crate::to_js_error)
        }

        /// Negotiate the rendering context and build the scene.
        /// Fails with a user-facing message when neither WebGPU nor WebGL2 exists.
        #[wasm_bindgen]
        pub fn app_init(has_webgpu: bool, has_webgl2: bool) -> Result<(), JsValue> {
            $crate::install_hooks();
            let caps = orrery_engine::Capabilities::new(has_webgpu, has_webgl2);
            with_runner(|r| r.init(caps)).map_err($crate::to_js_error)?;
            log::info!("{}: initialized", $app_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn app_tick(now_ms: f64) {
            with_runner(|r| {
                r.tick(now_ms);
            });
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_scroll(scroll_y: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::Scroll { y: scroll_y }));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32, device_pixel_ratio: f32) {
            with_runner(|r| {
                r.push_input(orrery_engine::InputEvent::Resize { width, height, device_pixel_ratio })
            });
        }

        #[wasm_bindgen]
        pub fn app_texture_loaded(slot: u32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::TextureLoaded { slot }));
        }

        #[wasm_bindgen]
        pub fn app_texture_failed(slot: u32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::TextureFailed { slot }));
        }

        /// JSON array of `{slot, name, path, background}` for the host loader.
        #[wasm_bindgen]
        pub fn app_texture_manifest() -> Result<String, JsValue> {
            with_runner(|r| r.texture_manifest_json()).map_err($crate::to_js_error)
        }

        // ---- Frame buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len())
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.frame_layout().max_instances as u32)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.frame_layout().max_events as u32)
        }
    };
}
