use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("intersection observer setup failed: {0}")]
    Observer(String),
}

impl DomError {
    pub fn observer(err: JsValue) -> Self {
        DomError::Observer(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

pub type Result<T> = std::result::Result<T, DomError>;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(DomError::NoWindow.to_string(), "browser window is not available");
        assert_eq!(
            DomError::Observer("TypeError".into()).to_string(),
            "intersection observer setup failed: TypeError"
        );
    }
}
