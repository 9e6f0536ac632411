use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("No window attached to the document")]
    NoWindow,
    #[error("Document has no body")]
    NoBody,
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Element {0} has an unexpected type")]
    UnexpectedElement(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for ControllerError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ControllerError::Dom(message)
    }
}
