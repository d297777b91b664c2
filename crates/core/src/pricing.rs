//! Pricing section: billing-cycle selection and tier ordering.

use serde::{Deserialize, Serialize};

use crate::models::PricingTier;
use crate::types::DocId;

/// Which price column the pricing section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn price_of(self, tier: &PricingTier) -> f64 {
        match self {
            BillingCycle::Monthly => tier.price_monthly,
            BillingCycle::Yearly => tier.price_yearly,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/mo",
            BillingCycle::Yearly => "/yr",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub id: DocId,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub suffix: &'static str,
    pub features: Vec<String>,
    /// Layout hint only.
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingSection {
    pub billing_cycle: BillingCycle,
    pub tiers: Vec<TierView>,
}

/// Build the pricing section for `cycle`, or `None` when there are no tiers
/// (the section is then not rendered at all).
pub fn pricing_section(tiers: &[PricingTier], cycle: BillingCycle) -> Option<PricingSection> {
    if tiers.is_empty() {
        return None;
    }

    let mut ordered: Vec<&PricingTier> = tiers.iter().collect();
    ordered.sort_by_key(|t| t.order);

    let tiers = ordered
        .into_iter()
        .map(|tier| TierView {
            id: tier.id.clone(),
            title: tier.title.clone(),
            price: cycle.price_of(tier),
            currency: tier.currency.clone(),
            suffix: cycle.suffix(),
            features: tier.features.clone(),
            featured: tier.featured,
        })
        .collect();

    Some(PricingSection {
        billing_cycle: cycle,
        tiers,
    })
}
