use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pipeline Configuration
// ============================================================================
//
// Tunable limits for validation and discounting. Defaults reproduce the
// standard rules; presets cover the common variations.
//
// ============================================================================

/// Highest order total the strict validator accepts.
pub const DEFAULT_STRICT_CEILING: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Log directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,order_patterns=debug";

/// One discount bracket: totals strictly above `threshold` get `rate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub threshold: Decimal,
    pub rate: Decimal,
}

impl DiscountTier {
    pub fn new(threshold: Decimal, rate: Decimal) -> Self {
        Self { threshold, rate }
    }
}

/// Discount brackets, kept sorted from the highest threshold down.
///
/// Deserialization goes through [`DiscountTiers::new`], so loaded configs are
/// sorted too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "TierList")]
pub struct DiscountTiers {
    tiers: Vec<DiscountTier>,
}

#[derive(Deserialize)]
struct TierList {
    tiers: Vec<DiscountTier>,
}

impl From<TierList> for DiscountTiers {
    fn from(list: TierList) -> Self {
        Self::new(list.tiers)
    }
}

impl Default for DiscountTiers {
    fn default() -> Self {
        Self::new(vec![
            DiscountTier::new(Decimal::new(500, 0), Decimal::new(10, 2)),
            DiscountTier::new(Decimal::new(200, 0), Decimal::new(5, 2)),
        ])
    }
}

impl DiscountTiers {
    pub fn new(mut tiers: Vec<DiscountTier>) -> Self {
        tiers.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self { tiers }
    }

    /// No brackets at all; every order pays full price.
    pub fn none() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Rate of the highest bracket the total strictly exceeds, or zero.
    pub fn rate_for(&self, total: Decimal) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| total > tier.threshold)
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ceiling applied by the strict order validator
    pub strict_ceiling: Decimal,
    /// Brackets used by the discount calculator
    pub discount_tiers: DiscountTiers,
    /// Fallback tracing filter directive
    pub log_filter: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strict_ceiling: DEFAULT_STRICT_CEILING,
            discount_tiers: DiscountTiers::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Same limits as the default, with discounts switched off.
    pub fn without_discounts() -> Self {
        Self {
            discount_tiers: DiscountTiers::none(),
            ..Self::default()
        }
    }

    pub fn with_strict_ceiling(mut self, ceiling: Decimal) -> Self {
        self.strict_ceiling = ceiling;
        self
    }
}
