use headers::{ContentLength, ContentType, HeaderMapExt};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

const OK: &[u8] = b"OK";

pub fn get<B>(req: &Request<B>) -> Response<Full<Bytes>> {
    log::debug!("{} {} -> [healthy]", req.method(), req.uri());
    let mut resp = Response::new(Full::new(Bytes::from_static(OK)));
    resp.headers_mut().typed_insert(ContentType::text());
    resp.headers_mut()
        .typed_insert(ContentLength(OK.len() as u64));
    resp
}
