use crate::config::Config;
use http::{StatusCode, Uri};
use std::borrow::Cow;
use std::fmt::Write;

pub enum Mode {
    /// Every request goes to the target verbatim.
    Fixed,
    /// The request path is appended to the target.
    Rewrite,
}

pub struct Redirect {
    mode: Mode,
    target: String,
    prefix: String,
    status: StatusCode,
}

impl Redirect {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: if config.target.ends_with('/') {
                Mode::Rewrite
            } else {
                Mode::Fixed
            },
            target: config.target.clone(),
            prefix: config.prefix.clone(),
            status: if config.permanent {
                StatusCode::MOVED_PERMANENTLY
            } else {
                StatusCode::FOUND
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn destination(&self, uri: &Uri) -> Cow<'_, str> {
        match self.mode {
            Mode::Fixed => Cow::Borrowed(&self.target),
            Mode::Rewrite => {
                let path = uri.path();
                let path = path.strip_prefix(self.prefix.as_str()).unwrap_or(path);
                let path = path.strip_prefix('/').unwrap_or(path);

                let mut dest = String::with_capacity(self.target.len() + path.len());
                dest.push_str(&self.target);
                dest.push_str(path);
                if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
                    dest.push('?');
                    dest.push_str(query);
                }
                Cow::Owned(dest)
            }
        }
    }
}

/// Percent-encode every byte outside of ASCII, leaving existing escapes alone.
pub fn hex_escape_non_ascii(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            let mut buf = [0; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(escaped, "%{:02X}", b);
            }
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(target: &str, prefix: &str, permanent: bool) -> Redirect {
        Redirect::new(&Config {
            listen: ":80".to_string(),
            target: target.to_string(),
            prefix: prefix.to_string(),
            permanent,
            verbose: false,
        })
    }

    fn dest(r: &Redirect, uri: &'static str) -> String {
        r.destination(&Uri::from_static(uri)).into_owned()
    }

    #[test]
    fn fixed_ignores_request() {
        let r = redirect("https://b.example.com", "/bbb", false);
        for uri in ["/", "/bbb/ccc", "/bbb/ccc?x=1", "/healthzz", "/a//b"] {
            assert_eq!(dest(&r, uri), "https://b.example.com");
        }
    }

    #[test]
    fn rewrite_without_prefix() {
        let r = redirect("https://b.example.com/ddd/", "", true);
        assert_eq!(dest(&r, "/bbb/ccc"), "https://b.example.com/ddd/bbb/ccc");
        assert_eq!(dest(&r, "/"), "https://b.example.com/ddd/");
        assert_eq!(dest(&r, "//bbb"), "https://b.example.com/ddd//bbb");
    }

    #[test]
    fn rewrite_keeps_query() {
        let r = redirect("https://b.example.com/ddd/", "", false);
        assert_eq!(
            dest(&r, "/bbb/ccc?x=1&y=%20"),
            "https://b.example.com/ddd/bbb/ccc?x=1&y=%20"
        );
        assert_eq!(dest(&r, "/bbb?"), "https://b.example.com/ddd/bbb");
        assert_eq!(dest(&r, "/?x"), "https://b.example.com/ddd/?x");
    }

    #[test]
    fn rewrite_strips_prefix() {
        let r = redirect("https://b.example.com/ddd/", "/bbb", true);
        assert_eq!(dest(&r, "/bbb/ccc"), "https://b.example.com/ddd/ccc");
        assert_eq!(dest(&r, "/bbb"), "https://b.example.com/ddd/");
        assert_eq!(dest(&r, "/bbbccc"), "https://b.example.com/ddd/ccc");
        assert_eq!(dest(&r, "/bbb/ccc?q=1"), "https://b.example.com/ddd/ccc?q=1");
    }

    #[test]
    fn rewrite_prefix_mismatch_passes_through() {
        let r = redirect("https://b.example.com/ddd/", "/bbb", false);
        assert_eq!(dest(&r, "/ccc/bbb"), "https://b.example.com/ddd/ccc/bbb");
        assert_eq!(dest(&r, "/bb"), "https://b.example.com/ddd/bb");
    }

    #[test]
    fn status() {
        assert_eq!(redirect("https://b.example.com", "", false).status(), StatusCode::FOUND);
        assert_eq!(
            redirect("https://b.example.com", "", true).status(),
            StatusCode::MOVED_PERMANENTLY
        );
    }

    #[test]
    fn escapes_non_ascii() {
        assert_eq!(hex_escape_non_ascii("https://b.example.com/"), "https://b.example.com/");
        assert_eq!(
            hex_escape_non_ascii("https://b.example.com/ü%20"),
            "https://b.example.com/%C3%BC%20"
        );
    }
}
