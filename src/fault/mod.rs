//! Bug simulation: one shared flag that turns every business endpoint into a
//! synthetic 500 until it is switched off again.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BugMode {
    Healthy,
    Faulted,
}

impl BugMode {
    fn from_enabled(enabled: bool) -> Self {
        if enabled {
            BugMode::Faulted
        } else {
            BugMode::Healthy
        }
    }
}

/// The gated subsystem a simulated fault is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultSite {
    Catalog,
    Product(i64),
    Orders,
    Inventory,
}

impl fmt::Display for FaultSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultSite::Catalog => f.write_str("Database connection failed"),
            FaultSite::Product(id) => write!(f, "Failed to fetch product {}", id),
            FaultSite::Orders => f.write_str("Order processing failed"),
            FaultSite::Inventory => f.write_str("Inventory service unavailable"),
        }
    }
}

/// Handle to the bug flag. Clones share the same flag; separate
/// `BugSimulator::new` calls do not.
#[derive(Debug, Clone, Default)]
pub struct BugSimulator {
    enabled: Arc<AtomicBool>,
}

impl BugSimulator {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn enable(&self) -> BugMode {
        let was_enabled = self.enabled.swap(true, Ordering::SeqCst);
        if was_enabled {
            debug!("Bug mode already enabled");
        } else {
            warn!("BUG MODE ENABLED - gated endpoints will return 500 errors");
        }
        BugMode::Faulted
    }

    pub fn disable(&self) -> BugMode {
        let was_enabled = self.enabled.swap(false, Ordering::SeqCst);
        if was_enabled {
            info!("Bug mode disabled - API restored to normal");
        } else {
            debug!("Bug mode already disabled");
        }
        BugMode::Healthy
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn mode(&self) -> BugMode {
        BugMode::from_enabled(self.is_enabled())
    }

    /// Fails with [`AppError::SimulatedFault`] while bug mode is on.
    pub fn check(&self, site: FaultSite) -> AppResult<()> {
        if self.is_enabled() {
            return Err(AppError::SimulatedFault(site));
        }
        Ok(())
    }
}
