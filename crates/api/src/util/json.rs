use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{HeaderValue, CONTENT_TYPE},
    Response, StatusCode,
};
use model::wire::ErrorBody;
use serde::{de::DeserializeOwned, Serialize};

pub type Reply = Response<Full<Bytes>>;

/// Parses a JSON request body. Returns `None` for empty or malformed input.
pub fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Option<T> {
    serde_json::from_slice(bytes).ok()
}

/// Serializes `value` as the body of a JSON response.
pub fn respond<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Reply {
    let (status, bytes) = match serde_json::to_vec(value) {
        Ok(bytes) => (status, Bytes::from(bytes)),
        Err(err) => {
            log::error!("Cannot serialize response body: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, Bytes::from_static(b"{\"error\":\"Internal server error\"}"))
        }
    };

    let mut res = Response::new(Full::new(bytes));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    res
}

pub fn ok<T: Serialize + ?Sized>(value: &T) -> Reply {
    respond(StatusCode::OK, value)
}

pub fn error(err: &crate::error::Error) -> Reply {
    respond(err.status(), &ErrorBody { error: err.to_string() })
}
