use relay_core_health_contracts::{HealthService, HealthStatus};
use relay_shared_contracts::time::TimeService;

/// Liveness only: answering at all means the process is up, the smtp
/// transport is deliberately not consulted.
#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Time> {
    time: Time,
}

impl<Time> HealthServiceImpl<Time> {
    pub fn new(time: Time) -> Self {
        Self { time }
    }
}

impl<Time> HealthService for HealthServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now(),
        }
    }
}
