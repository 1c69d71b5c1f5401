use rust_decimal::Decimal;
use serde::Serialize;

use crate::i18n::TranslationKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub monthly_price: Decimal,
    pub currency: &'static str,
    pub can_manage_events: bool,
    pub is_current: bool,
}

impl PlanTier {
    pub fn for_paid_flag(has_paid_plan: bool) -> Self {
        if has_paid_plan {
            PlanTier::Pro
        } else {
            PlanTier::Free
        }
    }

    pub fn name_key(self) -> TranslationKey {
        match self {
            PlanTier::Free => TranslationKey::Free,
            PlanTier::Pro => TranslationKey::Pro,
        }
    }

    pub fn monthly_price(self) -> Decimal {
        match self {
            PlanTier::Free => Decimal::ZERO,
            PlanTier::Pro => Decimal::new(299, 0),
        }
    }
}
