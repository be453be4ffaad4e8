use headers::{ContentLength, HeaderMapExt};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

/// `OPTIONS *` asks about the server, not a resource, so it is never redirected.
pub fn any<B>(req: &Request<B>) -> Response<Full<Bytes>> {
    log::debug!("{} {} -> [server options]", req.method(), req.uri());
    let mut resp = Response::new(Full::default());
    resp.headers_mut().typed_insert(ContentLength(0));
    resp
}
