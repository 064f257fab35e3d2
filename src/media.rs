use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

pub fn videos_in(root: &web::Element) -> Vec<web::HtmlMediaElement> {
    dom::query_all_in(root, "video")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
        .collect()
}

/// Rewind and play. A rejected play promise (autoplay policy) is logged and
/// otherwise ignored.
pub fn play_from_start(video: &web::HtmlMediaElement) {
    video.set_current_time(0.0);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[media] autoplay prevented: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[media] play failed: {:?}", e),
    }
}

#[inline]
pub fn play_if_paused(video: &web::HtmlMediaElement) {
    if video.paused() {
        play_from_start(video);
    }
}

#[inline]
pub fn pause(video: &web::HtmlMediaElement) {
    if !video.paused() {
        _ = video.pause();
    }
}

/// Resolves once the image has decoded, or fails with the load error.
pub async fn load_image(url: &str) -> Result<web::HtmlImageElement, JsValue> {
    let img = web::HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(promise).await?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}
