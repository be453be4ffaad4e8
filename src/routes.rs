use crate::config::Config;
use crate::redir::Redirect;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

mod health;
mod options;
mod redirect;

pub const HEALTH_PATH: &str = "/healthz";

pub struct State {
    pub redirect: Redirect,
    pub verbose: bool,
}

impl State {
    pub fn new(config: &Config) -> Self {
        Self {
            redirect: Redirect::new(config),
            verbose: config.verbose,
        }
    }
}

pub async fn respond_to_request<B>(req: Request<B>, state: &State) -> Response<Full<Bytes>> {
    if req.uri().path() == HEALTH_PATH {
        health::get(&req)
    } else if req.method() == Method::OPTIONS && req.uri() == "*" {
        options::any(&req)
    } else {
        redirect::respond(&req, state)
    }
}
