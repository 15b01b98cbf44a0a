use serde::{Deserialize, Serialize};

use super::domain::Decision;
use super::error::DecisionError;

pub const SEGMENT_1_CREDIT_MODIFIER: u32 = 100;
pub const SEGMENT_2_CREDIT_MODIFIER: u32 = 300;
pub const SEGMENT_3_CREDIT_MODIFIER: u32 = 1000;

/// Risk tier selected from the last four digits of the personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CreditSegment {
    Ineligible,
    Tier1,
    Tier2,
    Tier3,
}

/// Segment-key floors and credit modifiers. Keys below `tier_1_floor` are ineligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTiers {
    pub tier_1_floor: u16,
    pub tier_2_floor: u16,
    pub tier_3_floor: u16,
    pub tier_1_modifier: u32,
    pub tier_2_modifier: u32,
    pub tier_3_modifier: u32,
}

impl CreditTiers {
    pub fn segment_for(&self, segment_key: u16) -> CreditSegment {
        if segment_key < self.tier_1_floor {
            CreditSegment::Ineligible
        } else if segment_key < self.tier_2_floor {
            CreditSegment::Tier1
        } else if segment_key < self.tier_3_floor {
            CreditSegment::Tier2
        } else {
            CreditSegment::Tier3
        }
    }

    pub fn credit_modifier(&self, segment: CreditSegment) -> u32 {
        match segment {
            CreditSegment::Ineligible => 0,
            CreditSegment::Tier1 => self.tier_1_modifier,
            CreditSegment::Tier2 => self.tier_2_modifier,
            CreditSegment::Tier3 => self.tier_3_modifier,
        }
    }
}

impl Default for CreditTiers {
    fn default() -> Self {
        Self {
            tier_1_floor: 2500,
            tier_2_floor: 5000,
            tier_3_floor: 7500,
            tier_1_modifier: SEGMENT_1_CREDIT_MODIFIER,
            tier_2_modifier: SEGMENT_2_CREDIT_MODIFIER,
            tier_3_modifier: SEGMENT_3_CREDIT_MODIFIER,
        }
    }
}

/// Approves `modifier * period` for the requested period as-is.
pub(crate) fn size_loan(
    segment_key: u16,
    period_months: u32,
    tiers: &CreditTiers,
) -> Result<Decision, DecisionError> {
    let modifier = tiers.credit_modifier(tiers.segment_for(segment_key));
    if modifier == 0 {
        return Err(DecisionError::NoValidLoan);
    }

    Ok(Decision::approved(modifier * period_months, period_months))
}
