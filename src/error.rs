use thiserror::Error;

/// Reasons an effect could not be installed on the page.
///
/// None of these are fatal: the caller logs a warning and moves on to the
/// next effect, so a missing section only means that effect does not play.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("no {0} context available")]
    NoContext(&'static str),
    #[error("section `{0}` has no items")]
    EmptySection(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl EffectError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EffectError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}
