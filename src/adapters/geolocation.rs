use tokio::sync::oneshot;

use crate::error::GeolocationError;
use crate::types::geo::Coordinates;

/// One-shot reply slot handed to a geolocation request.
///
/// Dropping it without replying counts as `GeolocationError::Unavailable`.
#[derive(Debug)]
pub struct PositionReply(oneshot::Sender<Result<Coordinates, GeolocationError>>);

impl PositionReply {
    pub fn success(self, position: Coordinates) {
        let _ = self.0.send(Ok(position));
    }

    pub fn failure(self, error: GeolocationError) {
        let _ = self.0.send(Err(error));
    }
}

pub trait Geolocation {
    fn get_current_position(&self, reply: PositionReply);
}

pub async fn locate<G: Geolocation + ?Sized>(geo: &G) -> Result<Coordinates, GeolocationError> {
    let (tx, rx) = oneshot::channel();
    geo.get_current_position(PositionReply(tx));
    rx.await.unwrap_or_else(|_| Err(GeolocationError::Unavailable))
}
