use crate::redir::hex_escape_non_ascii;
use crate::routes::State;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE, LOCATION};
use hyper::{Method, Request, Response, StatusCode};

pub fn respond<B>(req: &Request<B>, state: &State) -> Response<Full<Bytes>> {
    let status = state.redirect.status();
    let destination = state.redirect.destination(req.uri());

    let location = match HeaderValue::from_str(&hex_escape_non_ascii(&destination)) {
        Ok(l) => l,
        Err(e) => {
            log::warn!(
                "{} {} -> [invalid location] {:?} {}",
                req.method(),
                req.uri(),
                destination,
                e
            );
            let mut resp = Response::new(Full::default());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return resp;
        }
    };

    let mut resp = if req.method() == Method::GET {
        let note = format!(
            "<a href=\"{}\">{}</a>.\n\n",
            html_escape(&destination),
            status.canonical_reason().unwrap_or_default()
        );
        Response::new(Full::from(note))
    } else {
        Response::new(Full::default())
    };
    if req.method() == Method::GET || req.method() == Method::HEAD {
        resp.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }
    *resp.status_mut() = status;
    resp.headers_mut().insert(LOCATION, location);

    if let Some(line) = verbose_line(req, state, status, &destination) {
        log::info!("{}", line);
    }

    resp
}

fn verbose_line<B>(
    req: &Request<B>,
    state: &State,
    status: StatusCode,
    destination: &str,
) -> Option<String> {
    if !state.verbose {
        return None;
    }
    Some(format!(
        "{} {} {} {}",
        req.method(),
        req.uri(),
        status.as_u16(),
        destination
    ))
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
