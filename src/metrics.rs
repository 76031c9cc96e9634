pub const SQM_PER_MU: f64 = 666.67;

pub fn normalized_mu(land_mu: f64, building_area: f64, floor_ratio: f64) -> f64 {
    if land_mu > 0.0 {
        return land_mu;
    }
    if building_area > 0.0 && floor_ratio > 0.0 {
        let derived = building_area / (floor_ratio * SQM_PER_MU);
        if derived.is_finite() && derived > 0.0 {
            return derived;
        }
    }
    0.0
}

pub fn intensity(amount: f64, mu: f64) -> f64 {
    if mu > 0.0 {
        amount / mu
    } else {
        0.0
    }
}

pub fn shortfall(threshold: f64, mu: f64, current: f64) -> f64 {
    (threshold * mu - current).max(0.0)
}
