use std::collections::BTreeMap;

/// A known viscosity at a temperature, measured or derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// Temperature, °C.
    pub temperature: i16,

    /// Kinematic viscosity, cSt.
    pub viscosity: f64,
}

/// Known viscosities of one lubricant, keyed by temperature in °C.
///
/// Entries are kept in ascending temperature order. The store performs no
/// physical validation; it only remembers what it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationStore {
    points: BTreeMap<i16, f64>,
}

impl CalibrationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the viscosity recorded at `temperature`, if any.
    #[must_use]
    pub fn get(&self, temperature: i16) -> Option<f64> {
        self.points.get(&temperature).copied()
    }

    /// Records `viscosity` at `temperature`, replacing any previous value.
    pub fn set(&mut self, temperature: i16, viscosity: f64) {
        self.points.insert(temperature, viscosity);
    }

    /// Returns `true` if a viscosity is recorded at `temperature`.
    #[must_use]
    pub fn contains(&self, temperature: i16) -> bool {
        self.points.contains_key(&temperature)
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the lowest- and highest-temperature points.
    ///
    /// Returns `None` unless the store holds at least two points, since the
    /// pair only makes sense as two distinct anchors.
    #[must_use]
    pub fn extremes(&self) -> Option<(CalibrationPoint, CalibrationPoint)> {
        if self.points.len() < 2 {
            return None;
        }
        let (&lo_t, &lo_v) = self.points.first_key_value()?;
        let (&hi_t, &hi_v) = self.points.last_key_value()?;
        Some((
            CalibrationPoint {
                temperature: lo_t,
                viscosity: lo_v,
            },
            CalibrationPoint {
                temperature: hi_t,
                viscosity: hi_v,
            },
        ))
    }

    /// Returns the lowest-temperature point, if at least two points are known.
    #[must_use]
    pub fn lowest(&self) -> Option<CalibrationPoint> {
        self.extremes().map(|(lowest, _)| lowest)
    }

    /// Returns the highest-temperature point, if at least two points are known.
    #[must_use]
    pub fn highest(&self) -> Option<CalibrationPoint> {
        self.extremes().map(|(_, highest)| highest)
    }

    /// Iterates over all points in ascending temperature order.
    pub fn iter(&self) -> impl Iterator<Item = CalibrationPoint> + '_ {
        self.points
            .iter()
            .map(|(&temperature, &viscosity)| CalibrationPoint {
                temperature,
                viscosity,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set() {
        let mut store = CalibrationStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(40), None);

        store.set(40, 32.0);
        assert_eq!(store.get(40), Some(32.0));

        store.set(40, 30.0);
        assert_eq!(store.get(40), Some(30.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn extremes_need_two_points() {
        let mut store = CalibrationStore::new();
        assert_eq!(store.extremes(), None);

        store.set(40, 30.0);
        assert_eq!(store.lowest(), None);
        assert_eq!(store.highest(), None);

        store.set(100, 4.24);
        assert_eq!(store.lowest().map(|p| p.temperature), Some(40));
        assert_eq!(store.highest().map(|p| p.temperature), Some(100));
    }

    #[test]
    fn extremes_follow_numeric_order_not_insertion() {
        let mut store = CalibrationStore::new();
        store.set(100, 4.24);
        store.set(40, 30.0);
        store.set(60, 13.1);
        store.set(-10, 900.0);

        let (lowest, highest) = store.extremes().unwrap();
        assert_eq!(
            lowest,
            CalibrationPoint {
                temperature: -10,
                viscosity: 900.0
            }
        );
        assert_eq!(highest.temperature, 100);

        let temperatures: Vec<_> = store.iter().map(|p| p.temperature).collect();
        assert_eq!(temperatures, [-10, 40, 60, 100]);
    }
}
