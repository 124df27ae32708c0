//! Weight units and the fixed kg/lb conversion

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Unit shown by the horizontal tape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl Unit {
    /// Factor applied to kilogram quantities to express them in this unit
    pub fn factor(self) -> f64 {
        match self {
            Unit::Kg => 1.0,
            Unit::Lbs => LBS_PER_KG,
        }
    }

    /// Convert a whole value expressed in `from` into this unit, rounding to the nearest integer
    pub fn convert(self, value: i32, from: Unit) -> i32 {
        if self == from {
            return value;
        }
        let kg = f64::from(value) / from.factor();
        (kg * self.factor()).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_to_lbs_rounds() {
        assert_eq!(Unit::Lbs.convert(50, Unit::Kg), 110);
        assert_eq!(Unit::Lbs.convert(100, Unit::Kg), 220);
        assert_eq!(Unit::Lbs.convert(0, Unit::Kg), 0);
    }

    #[test]
    fn test_lbs_to_kg_rounds() {
        assert_eq!(Unit::Kg.convert(110, Unit::Lbs), 50);
        assert_eq!(Unit::Kg.convert(220, Unit::Lbs), 100);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(Unit::Kg.convert(73, Unit::Kg), 73);
        assert_eq!(Unit::Lbs.convert(73, Unit::Lbs), 73);
    }

    #[test]
    fn test_round_trip_within_one() {
        for kg in -50..=500 {
            let lbs = Unit::Lbs.convert(kg, Unit::Kg);
            let back = Unit::Kg.convert(lbs, Unit::Lbs);
            assert!((back - kg).abs() <= 1, "{kg} -> {lbs} -> {back}");
        }
    }
}
