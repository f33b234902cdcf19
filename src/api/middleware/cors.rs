//! Permissive cross-origin middleware.
//!
//! Every response on a wrapped route gets the same origin and header values,
//! and any `OPTIONS` request is answered directly as a preflight with an empty
//! body. The advertised methods depend on the policy of the route group.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

const POST_METHODS: &str = "POST, OPTIONS";
const GET_METHODS: &str = "GET, OPTIONS";

/// Methods advertised in `Access-Control-Allow-Methods` for a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Always advertises the same methods.
    Fixed(&'static str),
    /// Advertises `POST, OPTIONS` to POST requests and to preflights asking
    /// for POST, `GET, OPTIONS` to everything else.
    ByMethod,
}

impl CorsPolicy {
    /// For endpoints accepting `POST` (encode and named tool calls).
    pub const POST: Self = Self::Fixed(POST_METHODS);

    /// For read-only endpoints.
    pub const GET: Self = Self::Fixed(GET_METHODS);

    /// For the tools collection, which serves discovery on GET and a nameless
    /// tool call on POST.
    pub const TOOLS: Self = Self::ByMethod;

    fn allow_methods(&self, method: &Method, headers: &HeaderMap) -> &'static str {
        match self {
            Self::Fixed(methods) => *methods,
            Self::ByMethod => {
                let effective = if method == Method::OPTIONS {
                    headers
                        .get(ACCESS_CONTROL_REQUEST_METHOD)
                        .and_then(|value| value.to_str().ok())
                } else {
                    Some(method.as_str())
                };

                match effective {
                    Some(m) if m.eq_ignore_ascii_case("POST") => POST_METHODS,
                    _ => GET_METHODS,
                }
            }
        }
    }
}

fn apply(headers: &mut HeaderMap, allow_methods: &'static str) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(allow_methods),
    );
}

/// Adds CORS headers and short-circuits preflight requests.
///
/// # Example
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/encode-plantuml", post(encode_handler))
///     .layer(middleware::from_fn_with_state(CorsPolicy::POST, cors::layer));
/// ```
pub async fn layer(State(policy): State<CorsPolicy>, req: Request, next: Next) -> Response {
    let allow_methods = policy.allow_methods(req.method(), req.headers());

    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        apply(headers, allow_methods);
        return response;
    }

    let mut response = next.run(req).await;
    apply(response.headers_mut(), allow_methods);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_headers() {
        let mut headers = HeaderMap::new();
        apply(&mut headers, GET_METHODS);

        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
    }

    #[test]
    fn test_apply_overrides_existing_values() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("https://a.example"));
        apply(&mut headers, POST_METHODS);

        assert_eq!(headers.get_all(ACCESS_CONTROL_ALLOW_ORIGIN).iter().count(), 1);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    }

    #[test]
    fn test_fixed_policy_ignores_method() {
        let headers = HeaderMap::new();

        assert_eq!(CorsPolicy::POST.allow_methods(&Method::GET, &headers), POST_METHODS);
        assert_eq!(CorsPolicy::GET.allow_methods(&Method::POST, &headers), GET_METHODS);
    }

    #[test]
    fn test_by_method_policy() {
        let empty = HeaderMap::new();
        let mut asks_post = HeaderMap::new();
        asks_post.insert(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"));

        assert_eq!(CorsPolicy::TOOLS.allow_methods(&Method::GET, &empty), GET_METHODS);
        assert_eq!(CorsPolicy::TOOLS.allow_methods(&Method::POST, &empty), POST_METHODS);
        assert_eq!(CorsPolicy::TOOLS.allow_methods(&Method::PUT, &empty), GET_METHODS);
        assert_eq!(CorsPolicy::TOOLS.allow_methods(&Method::OPTIONS, &empty), GET_METHODS);
        assert_eq!(
            CorsPolicy::TOOLS.allow_methods(&Method::OPTIONS, &asks_post),
            POST_METHODS
        );
    }
}
