use wasm_bindgen::prelude::*;

mod app;
mod bodies;
mod journey;
mod system;

use app::SolarScroll;

orrery_web::export_app!(SolarScroll, "solar-scroll");
