//! `/api/avatar-config` handler

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::avatar::default_avatar;
use crate::error::RequestError;
use crate::http;
use crate::logger;

pub const AVATAR_CONFIG_PATH: &str = "/api/avatar-config";

/// GET returns the avatar as JSON; any other method is 405
pub fn avatar_config<B>(req: &Request<B>) -> Response<Full<Bytes>> {
    match try_avatar_config(req.method()) {
        Ok(resp) => resp,
        Err(err) => {
            let message = format!("{AVATAR_CONFIG_PATH} -> {}: {err}", err.status().as_u16());
            if let RequestError::Serialization(_) = err {
                logger::log_error(&message);
            } else {
                logger::log_warning(&message);
            }
            err.into_response()
        }
    }
}

fn try_avatar_config(method: &Method) -> Result<Response<Full<Bytes>>, RequestError> {
    if method != Method::GET {
        return Err(RequestError::MethodNotAllowed(method.clone()));
    }
    http::build_json_response(&default_avatar())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AvatarConfig;
    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use hyper::StatusCode;

    fn request(method: Method) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(AVATAR_CONFIG_PATH)
            .body(())
            .unwrap()
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_get_returns_avatar_json() {
        let resp = avatar_config(&request(Method::GET));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");

        let parsed: AvatarConfig = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(parsed.id, "avatar-001");
        assert_eq!(parsed.name, "Default Avatar");
        assert_eq!((parsed.position.x, parsed.position.y, parsed.position.z), (0.0, 0.0, 0.0));
        assert_eq!(parsed.color, "#4F46E5");
        assert!((parsed.scale - 1.0).abs() < f64::EPSILON);
        assert!(parsed.visible);
    }

    #[tokio::test]
    async fn test_repeated_gets_are_byte_identical() {
        let first = body_bytes(avatar_config(&request(Method::GET))).await;
        for _ in 0..5 {
            let next = body_bytes(avatar_config(&request(Method::GET))).await;
            assert_eq!(first, next);
        }
    }

    #[tokio::test]
    async fn test_non_get_is_405() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
            let resp = avatar_config(&request(method));
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_ne!(resp.headers()[CONTENT_TYPE], "application/json");
            assert_eq!(body_bytes(resp).await, "Method Not Allowed");
        }
    }
}
