//! Scroll-driven landing page effects compiled to WebAssembly.
//!
//! `core` holds the platform-free logic and builds on any target; the
//! browser glue below it is only compiled for `wasm32`.

pub mod constants;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod media;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod sections;

#[cfg(target_arch = "wasm32")]
pub use app::start;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use instant::Instant;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    use crate::error::EffectError;
    use crate::frame::{self, FrameContext};
    use crate::render::Background;
    use crate::sections::benefits::Benefits;
    use crate::sections::decor::{CrossFlickers, LogoGrid, Parallax};
    use crate::sections::features::Features;
    use crate::sections::hero::Hero;
    use crate::sections::yard::Yard;
    use crate::sections::Section;
    use crate::{dom, events};

    /// Log and skip an effect whose markup is not on this page.
    fn installed<T>(name: &str, result: Result<T, EffectError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("[init] {} skipped: {}", name, e);
                None
            }
        }
    }

    fn boxed<T: Section + 'static>(section: T) -> Rc<RefCell<dyn Section>> {
        Rc::new(RefCell::new(section))
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("scroll-fx starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let viewport = dom::viewport();

        let background = installed("background", Background::install(&document))
            .map(|b| Rc::new(RefCell::new(b)));

        let mut sections: Vec<Rc<RefCell<dyn Section>>> = Vec::new();
        if let Some(hero) = installed("hero", Hero::install(&document, &viewport)) {
            sections.push(boxed(hero));
        }
        let yard = Yard::install(&document, &viewport, background.clone());
        if let Some(yard) = installed("yos", yard) {
            sections.push(boxed(yard));
        }
        if let Some(benefits) = installed("benefits", Benefits::install(&document, &viewport)) {
            sections.push(boxed(benefits));
        }
        if let Some(features) = installed("features", Features::install(&document, &viewport)) {
            sections.push(features);
        }
        if let Some(parallax) = installed("parallax", Parallax::install(&document)) {
            sections.push(boxed(parallax));
        }
        let crosses = CrossFlickers::install(&document, &viewport);
        if let Some(crosses) = installed("cross flicker", crosses) {
            sections.push(boxed(crosses));
        }
        if let Some(logos) = installed("logo grid", LogoGrid::install(&document)) {
            sections.push(boxed(logos));
        }
        let hovers = events::wire_border_hover(&document);

        log::info!(
            "[init] {} sections, background={}, border hovers={}",
            sections.len(),
            background.is_some(),
            hovers
        );

        let resize_pending = Rc::new(Cell::new(false));
        frame::wire_resize(&resize_pending);
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            started: Instant::now(),
            sections,
            background,
            resize_pending,
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
