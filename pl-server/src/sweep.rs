use crate::state::AppState;

use pl_config::SweepConfig;

use log::{info, warn};

/// Spawn the scheduled retention sweep, independent of the request path
pub fn spawn_retention_sweep(state: &AppState, config: &SweepConfig) {
    if !config.enabled {
        info!("Retention sweep disabled by configuration");
        return;
    }

    let retention = state.retention.clone();
    let interval_secs = config.interval_secs;
    info!("Retention sweep enabled: every {}s", interval_secs);

    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        // The first tick fires immediately; skip it so startup stays quiet
        interval.tick().await;

        loop {
            interval.tick().await;

            let outcome = retention.apply_retention_policy().await;
            if outcome.success {
                info!("Scheduled retention sweep removed {} entries", outcome.deleted);
            } else {
                warn!(
                    "Scheduled retention sweep reported failure after {} deletions",
                    outcome.deleted
                );
            }
        }
    });
}
