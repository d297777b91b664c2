//! Shared query parameter types for API handlers.

use lumen_core::pricing::BillingCycle;
use serde::Deserialize;

/// Billing-cycle toggle for pricing views (`?billing=monthly|yearly`).
///
/// Defaults to monthly. Any other value is rejected with 400 by the
/// `Query` extractor.
#[derive(Debug, Default, Deserialize)]
pub struct BillingParams {
    #[serde(default)]
    pub billing: BillingCycle,
}
