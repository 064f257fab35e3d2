#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{Clamped, JsCast, JsValue};
use wasm_bindgen_test::*;

use scroll_fx::core::viewport::Viewport;
use scroll_fx::core::{generate_notch_path, Compositor, MaskFrame, NotchConfig, PixelCanvas};
use scroll_fx::error::EffectError;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn notch_path_accepted_by_svg() {
    let doc = document();
    let path = doc
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "path")
        .unwrap();
    let d = generate_notch_path(1200.0, 600.0, &NotchConfig::for_viewport(true));
    path.set_attribute("d", &d).unwrap();
    assert_eq!(path.get_attribute("d").as_deref(), Some(d.as_str()));
}

#[wasm_bindgen_test]
fn mask_uploads_as_image_data() {
    let mut mask = MaskFrame::new(15);
    mask.synthesize_pulse(0.0, 1.0);
    let rgba = mask.to_rgba();
    let bytes: &[u8] = bytemuck::cast_slice(&rgba);
    let data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes), 15, 15)
        .unwrap();
    assert_eq!(data.width(), 15);
    assert_eq!(data.data().len(), 15 * 15 * 4);
    let centre = (7 * 15 + 7) * 4;
    assert_eq!(data.data()[centre + 3], 64);
}

#[wasm_bindgen_test]
fn composited_frame_blits_to_canvas() {
    let doc = document();
    let canvas: web_sys::HtmlCanvasElement = doc
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(500);
    canvas.set_height(500);
    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let mut compositor = Compositor::default();
    let mut target = PixelCanvas::default();
    compositor.resize(Viewport::new(500.0, 500.0, 1.0), &mut target);
    compositor.render(0.0, &mut target);

    let data =
        web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(target.as_bytes()), 500, 500)
            .unwrap();
    ctx.put_image_data(&data, 0.0, 0.0).unwrap();
    let read = ctx.get_image_data(251.0, 251.0, 1.0, 1.0).unwrap().data();
    // Premultiplied storage may shift colour channels slightly; alpha is exact.
    assert_eq!(read[3], 64);
}

#[wasm_bindgen_test]
fn js_errors_become_effect_errors() {
    let err: EffectError = JsValue::from_str("boom").into();
    assert!(matches!(err, EffectError::Js(_)));
    assert!(err.to_string().contains("boom"));
}
