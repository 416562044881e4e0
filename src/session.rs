use log::{debug, error, info};

use crate::defaults::DefaultPolicy;
use crate::service::{LocationDataService, LocationRequest, ServiceError};
use crate::types::{ObservationPoint, SessionStatus};

/// Issued by [`ObservationSession::begin`]; identifies one location query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub enum Resolution {
    Applied,
    /// A newer query has already been displayed; this answer was dropped.
    Stale,
    Failed(ServiceError),
}

/// Holds the observation point currently on display.
///
/// Every query gets a sequence number. An answer replaces the displayed point
/// only if it belongs to a newer query than the one shown, so a slow early
/// response can never overwrite a later one. Failures leave the displayed
/// point untouched.
#[derive(Debug, Default)]
pub struct ObservationSession {
    next_seq: u64,
    pending: usize,
    shown_seq: Option<u64>,
    current: Option<ObservationPoint>,
    last_failed: bool,
}

impl ObservationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, request: &LocationRequest) -> RequestToken {
        self.next_seq += 1;
        self.pending += 1;
        debug!(
            "query #{} for [{}, {}]",
            self.next_seq, request.latitude, request.longitude
        );
        RequestToken(self.next_seq)
    }

    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<ObservationPoint, ServiceError>,
    ) -> Resolution {
        self.pending = self.pending.saturating_sub(1);
        if self.shown_seq.is_some_and(|shown| shown >= token.0) {
            debug!("dropping stale answer for query #{}", token.0);
            return Resolution::Stale;
        }
        match result {
            Err(e) => {
                error!("location data query #{} failed: {e}", token.0);
                self.last_failed = true;
                Resolution::Failed(e)
            }
            Ok(point) => {
                info!("showing {} ({})", point.name, point.duration);
                self.shown_seq = Some(token.0);
                self.current = Some(point);
                self.last_failed = false;
                Resolution::Applied
            }
        }
    }

    /// Run one query against `service` and apply its answer.
    pub fn query(
        &mut self,
        service: &dyn LocationDataService,
        request: LocationRequest,
    ) -> Resolution {
        let token = self.begin(&request);
        let policy = DefaultPolicy::for_date(&request.date);
        let result = service
            .fetch(&request)
            .map(|raw| policy.apply(raw, &request));
        self.resolve(token, result)
    }

    pub fn current(&self) -> Option<&ObservationPoint> {
        self.current.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        if self.pending > 0 {
            SessionStatus::Loading
        } else if self.last_failed {
            SessionStatus::Error
        } else if self.current.is_some() {
            SessionStatus::Success
        } else {
            SessionStatus::Idle
        }
    }

    /// Forget the displayed point, e.g. when another eclipse is selected.
    pub fn clear(&mut self) {
        self.current = None;
        self.last_failed = false;
        self.shown_seq = Some(self.next_seq);
    }
}
