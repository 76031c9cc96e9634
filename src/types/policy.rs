use crate::error::ParkgateError;
use crate::types::input::ProjectType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub thresholds: Thresholds,
    pub weights: Weights,
    pub bonus: Bonuses,
    pub bands: Bands,
    pub advice: AdviceBounds,
    pub horizon: HorizonMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub invest_per_mu: f64,
    pub tax_per_mu: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            invest_per_mu: 300.0,
            tax_per_mu: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub invest: f64,
    pub tax: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            invest: 50.0,
            tax: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bonuses {
    pub national_title: f64,
    pub provincial_title: f64,
    pub customer_stable: f64,
    pub chain_fill: f64,
    pub stable_years: f64,
    pub stable_years_min: u32,
    pub credit_ready: f64,
}

impl Default for Bonuses {
    fn default() -> Self {
        Self {
            national_title: 8.0,
            provincial_title: 5.0,
            customer_stable: 4.0,
            chain_fill: 3.0,
            stable_years: 0.0,
            stable_years_min: 3,
            credit_ready: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bands {
    pub high: f64,
    pub mid: f64,
}

impl Default for Bands {
    fn default() -> Self {
        Self {
            high: 75.0,
            mid: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdviceBounds {
    pub statistics_tax: f64,
    pub statistics_output: f64,
}

impl Default for AdviceBounds {
    fn default() -> Self {
        Self {
            statistics_tax: 2000.0,
            statistics_output: 20000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HorizonMonths {
    pub land: u32,
    pub existing_no_policy: u32,
    pub own_factory_with_policy: u32,
}

impl Default for HorizonMonths {
    fn default() -> Self {
        Self {
            land: 36,
            existing_no_policy: 24,
            own_factory_with_policy: 36,
        }
    }
}

impl HorizonMonths {
    pub fn for_project(&self, project_type: ProjectType) -> u32 {
        match project_type {
            ProjectType::Land => self.land,
            ProjectType::ExistingNoPolicy => self.existing_no_policy,
            ProjectType::OwnFactoryWithPolicy => self.own_factory_with_policy,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), ParkgateError> {
        let amounts = [
            ("thresholds.invest_per_mu", self.thresholds.invest_per_mu),
            ("thresholds.tax_per_mu", self.thresholds.tax_per_mu),
            ("weights.invest", self.weights.invest),
            ("weights.tax", self.weights.tax),
            ("bonus.national_title", self.bonus.national_title),
            ("bonus.provincial_title", self.bonus.provincial_title),
            ("bonus.customer_stable", self.bonus.customer_stable),
            ("bonus.chain_fill", self.bonus.chain_fill),
            ("bonus.stable_years", self.bonus.stable_years),
            ("bonus.credit_ready", self.bonus.credit_ready),
            ("advice.statistics_tax", self.advice.statistics_tax),
            ("advice.statistics_output", self.advice.statistics_output),
        ];
        for (key, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ParkgateError::InvalidPolicy(format!(
                    "{key} must be a finite non-negative number (found {value})"
                )));
            }
        }

        let weight_sum = self.weights.invest + self.weights.tax;
        if weight_sum > 100.0 {
            return Err(ParkgateError::InvalidPolicy(format!(
                "weights.invest + weights.tax must not exceed 100 (found {weight_sum:.1})"
            )));
        }

        for (key, value) in [("bands.high", self.bands.high), ("bands.mid", self.bands.mid)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ParkgateError::InvalidPolicy(format!(
                    "{key} must be between 0 and 100 (found {value})"
                )));
            }
        }
        if self.bands.mid > self.bands.high {
            return Err(ParkgateError::InvalidPolicy(format!(
                "bands.mid ({}) must not exceed bands.high ({})",
                self.bands.mid, self.bands.high
            )));
        }

        Ok(())
    }
}
