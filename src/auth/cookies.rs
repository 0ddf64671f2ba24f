//! Cookie accessors
//!
//! Two request surfaces carry the session cookie: the per-request
//! [`CookieJar`] extractor used by handlers, and the raw `Cookie` header of a
//! request seen by interception middleware. Both are read through
//! [`CookieSource`]; only the jar can be written.

use axum::http::{HeaderMap, Request, header};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Read access to request cookies.
pub trait CookieSource {
    /// Value of the named cookie, `None` when it is not present.
    fn cookie_value(&self, name: &str) -> Option<String>;
}

/// Read/write access to the cookies of a request/response pair.
pub trait CookieStore: CookieSource {
    fn set_cookie(&mut self, cookie: Cookie<'static>);

    /// Remove the named cookie. Removing an absent cookie is a no-op.
    fn delete_cookie(&mut self, name: &str);
}

impl CookieSource for CookieJar {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|c| c.max_age() != Some(Duration::ZERO))
            .map(|c| c.value().to_owned())
    }
}

impl CookieStore for CookieJar {
    fn set_cookie(&mut self, cookie: Cookie<'static>) {
        *self = self.clone().add(cookie);
    }

    /// Always queues an expired `Set-Cookie`, whether or not the request
    /// carried the cookie. A removed cookie reads back as absent.
    fn delete_cookie(&mut self, name: &str) {
        let mut removal = Cookie::build((name.to_owned(), "")).path("/").build();
        removal.make_removal();
        *self = self.clone().add(removal);
    }
}

impl CookieSource for HeaderMap {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_owned())
    }
}

impl<B> CookieSource for Request<B> {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.headers().cookie_value(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn reads_named_cookie_from_header() {
        let headers = headers("theme=dark; auth-token=abc.def.ghi; other=1");
        assert_eq!(
            headers.cookie_value(SESSION_COOKIE_NAME).as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(headers.cookie_value("missing"), None);
    }

    #[test]
    fn empty_value_is_present_but_empty() {
        let headers = headers("auth-token=");
        assert_eq!(headers.cookie_value(SESSION_COOKIE_NAME).as_deref(), Some(""));
    }

    #[test]
    fn request_reads_through_headers() {
        let req = Request::builder()
            .header(header::COOKIE, "auth-token=t1")
            .body(())
            .unwrap();
        assert_eq!(req.cookie_value(SESSION_COOKIE_NAME).as_deref(), Some("t1"));
    }

    #[test]
    fn cookies_split_across_headers() {
        let req = Request::builder()
            .header(header::COOKIE, "a=1")
            .header(header::COOKIE, "auth-token=t2")
            .body(())
            .unwrap();
        assert_eq!(req.cookie_value(SESSION_COOKIE_NAME).as_deref(), Some("t2"));
    }

    #[test]
    fn jar_set_and_delete() {
        let mut jar = CookieJar::new();
        jar.set_cookie(Cookie::new(SESSION_COOKIE_NAME, "tok"));
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME).as_deref(), Some("tok"));

        jar.delete_cookie(SESSION_COOKIE_NAME);
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME), None);

        jar.delete_cookie(SESSION_COOKIE_NAME);
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME), None);
    }

    #[test]
    fn delete_on_empty_jar_queues_removal() {
        let mut jar = CookieJar::new();
        jar.delete_cookie(SESSION_COOKIE_NAME);

        let removal = jar.get(SESSION_COOKIE_NAME).unwrap();
        assert_eq!(removal.value(), "");
        assert_eq!(removal.path(), Some("/"));
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME), None);

        let response = axum::response::IntoResponse::into_response(jar);
        let set_cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(set_cookies.len(), 1);
        assert!(set_cookies[0].to_str().unwrap().starts_with("auth-token=;"));
    }

    #[test]
    fn jar_deletes_inbound_cookie() {
        let mut jar = CookieJar::from_headers(&headers("auth-token=inbound"));
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME).as_deref(), Some("inbound"));

        jar.delete_cookie(SESSION_COOKIE_NAME);
        assert_eq!(jar.cookie_value(SESSION_COOKIE_NAME), None);
    }
}
