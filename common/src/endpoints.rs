//! Serverless endpoints the site talks to, each with a single fallback route.

use std::fmt::Display;
use std::future::Future;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub primary: &'static str,
    pub fallback: &'static str,
}

pub const CHECKOUT_SESSION: Endpoint = Endpoint {
    primary: "/api/get-checkout-session",
    fallback: "/.netlify/functions/get-checkout-session",
};

pub const CREATE_CHECKOUT: Endpoint = Endpoint {
    primary: "/api/create-checkout-session",
    fallback: "/.netlify/functions/create-checkout-session",
};

pub const CREATE_BOOKING: Endpoint = Endpoint {
    primary: "/api/create-supersaas-booking",
    fallback: "/.netlify/functions/create-supersaas-booking",
};

pub const CONTACT: &str = "/api/contact";

impl Endpoint {
    /// Both routes, primary first.
    pub fn paths(&self) -> [&'static str; 2] {
        [self.primary, self.fallback]
    }
}

/// Both the primary and the fallback attempt failed.
#[derive(Debug, Error)]
#[error("request failed: {primary}; fallback also failed: {fallback}")]
pub struct FallbackError<E> {
    pub primary: E,
    pub fallback: E,
}

/// Runs `attempt` against the primary path and, only if that fails, once
/// more against the fallback path.
pub async fn with_fallback<T, E, F, Fut>(
    endpoint: &Endpoint,
    mut attempt: F,
) -> Result<T, FallbackError<E>>
where
    E: Display,
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let primary = match attempt(endpoint.primary).await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    log::warn!(
        "{} failed ({}), trying {}",
        endpoint.primary,
        primary,
        endpoint.fallback
    );
    attempt(endpoint.fallback)
        .await
        .map_err(|fallback| FallbackError { primary, fallback })
}

/// Builds `{base}{path}?{key}={value}` with the value percent-encoded.
pub fn with_query(base: &str, path: &str, key: &str, value: &str) -> String {
    format!(
        "{}{}?{}={}",
        base.trim_end_matches('/'),
        path,
        key,
        urlencoding::encode(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let calls = RefCell::new(Vec::new());
        let result: Result<u32, FallbackError<String>> =
            with_fallback(&CHECKOUT_SESSION, |path| {
                calls.borrow_mut().push(path);
                async { Ok(7) }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(*calls.borrow(), vec![CHECKOUT_SESSION.primary]);
    }

    #[tokio::test]
    async fn primary_failure_tries_fallback_exactly_once() {
        let calls = RefCell::new(Vec::new());
        let result = with_fallback(&CHECKOUT_SESSION, |path| {
            calls.borrow_mut().push(path);
            async move {
                if path == CHECKOUT_SESSION.primary {
                    Err("404 Not Found".to_string())
                } else {
                    Ok("session")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "session");
        assert_eq!(
            *calls.borrow(),
            vec![CHECKOUT_SESSION.primary, CHECKOUT_SESSION.fallback]
        );
    }

    #[tokio::test]
    async fn surfaces_both_errors_after_fallback_fails() {
        let calls = RefCell::new(0);
        let result: Result<(), _> = with_fallback(&CREATE_BOOKING, |path| {
            *calls.borrow_mut() += 1;
            async move { Err(format!("{path} unreachable")) }
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(err.primary, "/api/create-supersaas-booking unreachable");
        assert_eq!(
            err.fallback,
            "/.netlify/functions/create-supersaas-booking unreachable"
        );
        assert!(err.to_string().contains("fallback also failed"));
    }

    #[test]
    fn encodes_query_values() {
        assert_eq!(
            with_query("http://localhost:3000/", CHECKOUT_SESSION.primary, "session_id", "cs_test a&b"),
            "http://localhost:3000/api/get-checkout-session?session_id=cs_test%20a%26b"
        );
        assert_eq!(
            with_query("", CHECKOUT_SESSION.fallback, "session_id", "cs_1"),
            "/.netlify/functions/get-checkout-session?session_id=cs_1"
        );
    }
}
