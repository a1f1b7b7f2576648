use thiserror::Error;

/// Why a persisted zoom value was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoomError {
    #[error("stored zoom {0:?} is not a number")]
    NotANumber(String),

    #[error("stored zoom {0} is outside the allowed range")]
    OutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return DomError::Js(String::from(err.message()));
        }
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZoomError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "stored zoom \"abc\" is not a number");

        let err = ZoomError::OutOfRange(3.0);
        assert_eq!(err.to_string(), "stored zoom 3 is outside the allowed range");

        let err = StorageError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage write failed: quota exceeded");

        let err = DomError::MissingElement("zoomContainer".to_string());
        assert_eq!(err.to_string(), "element #zoomContainer not found");
    }
}
