use crate::delivery::{DeliveryClient, DeliveryError, DeliveryRequest};
use futures::future::{self, BoxFuture};
use futures::FutureExt;
use std::sync::Mutex;

/// Answers every send with a fixed result and records what it was asked.
pub struct StubDeliveryClient {
    result: Result<(), DeliveryError>,
    requests: Mutex<Vec<DeliveryRequest>>,
}

impl StubDeliveryClient {
    pub fn succeeding() -> Self {
        Self::answering(Ok(()))
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(result: Result<(), DeliveryError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DeliveryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DeliveryClient for StubDeliveryClient {
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'_, Result<(), DeliveryError>> {
        self.requests.lock().unwrap().push(request);
        future::ready(self.result.clone()).boxed()
    }
}
