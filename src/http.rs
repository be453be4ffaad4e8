use crate::err::Error;
use crate::tcp;
use hyper::body::{Body, Incoming};
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve connections from `listener` until `shutdown` completes, then stop accepting
/// and wait for every open connection to finish.
///
/// An error from `shutdown` or from the listener is returned without draining.
pub async fn serve_until<S, F, B>(
    listener: TcpListener,
    state: S,
    handle_req: F,
    shutdown: impl Future<Output = Result<(), Error>>,
) -> Result<(), Error>
where
    S: Send + Sync + 'static,
    F: for<'s> ServiceFn<'s, Request<Incoming>, S, Response<B>> + Copy + Send + 'static,
    B: Body + Send + 'static,
    <B as Body>::Data: Send,
    <B as Body>::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let state = Arc::new(state);
    let server = auto::Builder::new(TokioExecutor::new());
    let graceful = GracefulShutdown::new();
    let mut shutdown = pin!(shutdown);

    loop {
        let tcp = tokio::select! {
            tcp = tcp::accept(&listener) => tcp.map_err(Error::Accept)?,
            res = &mut shutdown => {
                res?;
                break;
            }
        };
        let io = TokioIo::new(tcp);

        let state = Arc::clone(&state);
        let serve = service_fn(move |req| {
            let state = Arc::clone(&state);
            async move { Ok::<_, Infallible>(handle_req(req, &state).await) }
        });

        let conn = graceful.watch(server.serve_connection_with_upgrades(io, serve).into_owned());
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                log::error!("Error serving connection: {}", e);
            }
        });
    }

    drop(listener);
    log::info!("draining connections");
    graceful.shutdown().await;

    Ok(())
}

// The handler's future borrows the state, so its bounds would need to be written as
// ```
// where
//     F: for<'s> FnOnce(Request<Incoming>, &'s S) -> Fut<'s>,
//     Fut<'s>: Future<Output = Response<B>> + Send + 's,
// ```
// which needs higher-kinded bounds. This trait carries both, and is implemented for every
// function that satisfies them.
pub trait ServiceFn<'s, T, S, R>
where
    Self: FnOnce(T, &'s S) -> Self::Fut,
    Self::Fut: Future<Output = R> + Send + 's,
    S: 's,
{
    type Fut;
}

impl<'s, T, S, R, F, Fut> ServiceFn<'s, T, S, R> for F
where
    F: FnOnce(T, &'s S) -> Fut,
    Fut: Future<Output = R> + Send + 's,
    S: 's,
{
    type Fut = Fut;
}
