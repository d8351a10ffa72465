//! Request logging middleware
//!
//! One structured line per request: method, path, status, duration. Responses
//! with status >= 400 log at `warn`.

use std::rc::Rc;
use std::time::Instant;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Wrap the app to log every request.
pub struct RequestLogging;

impl<S, B> Transform<S, ServiceRequest> for RequestLogging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggingService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestLoggingService {
            service: Rc::new(service),
        })
    }
}

pub struct RequestLoggingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let method = req.method().to_string();
        let path = req.path().to_string();
        let span = tracing::info_span!("request", id = %Uuid::new_v4(), method = %method, path = %path);
        let start = Instant::now();

        Box::pin(
            async move {
                let result = service.call(req).await;
                let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(res) if res.status().as_u16() >= 400 => {
                        warn!(status = res.status().as_u16(), duration_ms, "request completed with error status");
                    }
                    Ok(res) => {
                        info!(status = res.status().as_u16(), duration_ms, "request completed");
                    }
                    Err(e) => {
                        warn!(error = %e, duration_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}
