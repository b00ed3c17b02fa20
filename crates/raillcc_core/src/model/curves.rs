//! Degradation curves and the provider that serves them
//!
//! A [`CurveSet`] maps "months since the relevant maintenance event" to a
//! monotone function of the current gauge. Curves are produced outside the
//! engine (from measurement campaigns) and are read-only here.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::keys::{Condition, CurveKey, RailSide};
use crate::config::RailSpec;
use crate::error::LookupError;
use crate::interpolation::{GaugeBoundary, MonotoneCubic};

/// One degradation curve set: month -> (gauge -> value)
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    key: CurveKey,
    gauge_levels: Vec<f64>,
    months: BTreeMap<u32, MonotoneCubic>,
}

impl CurveSet {
    /// Build a curve set from per-month samples, one value per gauge level
    pub fn new(
        key: CurveKey,
        gauge_levels: Vec<f64>,
        samples: impl IntoIterator<Item = (u32, Vec<f64>)>,
    ) -> Result<Self, LookupError> {
        let mut months = BTreeMap::new();
        for (month, values) in samples {
            if month == 0 {
                return Err(LookupError::MalformedCurve {
                    key,
                    reason: "months are counted from 1",
                });
            }
            let interpolant = MonotoneCubic::new(gauge_levels.clone(), values)
                .map_err(|reason| LookupError::MalformedCurve {
                    key: key.clone(),
                    reason,
                })?;
            months.insert(month, interpolant);
        }

        if months.is_empty() {
            return Err(LookupError::MalformedCurve {
                key,
                reason: "curve has no monthly samples",
            });
        }

        Ok(Self {
            key,
            gauge_levels,
            months,
        })
    }

    /// Build a curve set by sampling `f(month, gauge)` on a grid
    pub fn from_fn(
        key: CurveKey,
        gauge_levels: Vec<f64>,
        months: RangeInclusive<u32>,
        f: impl Fn(u32, f64) -> f64,
    ) -> Result<Self, LookupError> {
        let samples: Vec<(u32, Vec<f64>)> = months
            .map(|month| (month, gauge_levels.iter().map(|&g| f(month, g)).collect()))
            .collect();
        Self::new(key, gauge_levels, samples)
    }

    pub fn key(&self) -> &CurveKey {
        &self.key
    }

    /// Last sampled month
    pub fn last_month(&self) -> u32 {
        // Construction guarantees at least one month
        self.months.keys().next_back().copied().unwrap_or(0)
    }

    /// Value of the curve `month` months after the event, at `gauge`
    pub fn evaluate(
        &self,
        month: u32,
        gauge: f64,
        boundary: GaugeBoundary,
    ) -> Result<f64, LookupError> {
        self.months
            .get(&month)
            .map(|curve| curve.evaluate(gauge, boundary))
            .ok_or_else(|| LookupError::MissingMonth {
                key: self.key.clone(),
                month,
            })
    }

    fn to_record(&self) -> CurveRecord {
        CurveRecord {
            condition: self.key.condition,
            profile: self.key.profile.clone(),
            side: self.key.side,
            radius: self.key.radius,
            load: self.key.load_tonnes(),
            gauge_levels: self.gauge_levels.clone(),
            months: self
                .months
                .iter()
                .map(|(&month, curve)| MonthSamples {
                    month,
                    values: curve.values().to_vec(),
                })
                .collect(),
        }
    }
}

/// Serialized form of a [`CurveSet`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub condition: Condition,
    pub profile: String,
    pub side: RailSide,
    pub radius: u32,
    /// Axle load in tonnes
    pub load: f64,
    pub gauge_levels: Vec<f64>,
    pub months: Vec<MonthSamples>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSamples {
    pub month: u32,
    pub values: Vec<f64>,
}

impl TryFrom<CurveRecord> for CurveSet {
    type Error = LookupError;

    fn try_from(record: CurveRecord) -> Result<Self, Self::Error> {
        let key = CurveKey::new(
            record.condition,
            record.profile,
            record.side,
            record.radius,
            record.load,
        );
        CurveSet::new(
            key,
            record.gauge_levels,
            record.months.into_iter().map(|s| (s.month, s.values)),
        )
    }
}

/// Source of degradation curves
pub trait CurveProvider {
    /// Curve set for `key`, or [`LookupError::MissingCurve`] when there is no data
    fn lookup(&self, key: &CurveKey) -> Result<&CurveSet, LookupError>;
}

/// In-memory curve provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurveRecord>", into = "Vec<CurveRecord>")]
pub struct CurveStore {
    curves: FxHashMap<CurveKey, CurveSet>,
}

impl CurveStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve set, returning the one it replaced
    pub fn insert(&mut self, curve: CurveSet) -> Option<CurveSet> {
        self.curves.insert(curve.key.clone(), curve)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&CurveKey> {
        let mut keys: Vec<&CurveKey> = self.curves.keys().collect();
        keys.sort();
        keys
    }
}

impl CurveProvider for CurveStore {
    fn lookup(&self, key: &CurveKey) -> Result<&CurveSet, LookupError> {
        self.curves
            .get(key)
            .ok_or_else(|| LookupError::MissingCurve(key.clone()))
    }
}

impl TryFrom<Vec<CurveRecord>> for CurveStore {
    type Error = LookupError;

    fn try_from(records: Vec<CurveRecord>) -> Result<Self, Self::Error> {
        let mut store = CurveStore::new();
        for record in records {
            store.insert(CurveSet::try_from(record)?);
        }
        Ok(store)
    }
}

impl From<CurveStore> for Vec<CurveRecord> {
    fn from(store: CurveStore) -> Self {
        let mut records: Vec<(CurveKey, CurveRecord)> = store
            .curves
            .into_iter()
            .map(|(key, curve)| (key, curve.to_record()))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records.into_iter().map(|(_, record)| record).collect()
    }
}

impl FromIterator<CurveSet> for CurveStore {
    fn from_iter<I: IntoIterator<Item = CurveSet>>(iter: I) -> Self {
        let mut store = CurveStore::new();
        for curve in iter {
            store.insert(curve);
        }
        store
    }
}

/// The four curve sets that drive one rail
#[derive(Debug, Clone, Copy)]
pub struct RailCurves<'a> {
    pub side: RailSide,
    pub index: &'a CurveSet,
    pub wear: &'a CurveSet,
    pub rcf_residual: &'a CurveSet,
    pub rcf_depth: &'a CurveSet,
}

impl<'a> RailCurves<'a> {
    /// Look up all four conditions for a rail; fails on the first missing key
    pub fn resolve<P>(provider: &'a P, rail: &RailSpec) -> Result<Self, LookupError>
    where
        P: CurveProvider + ?Sized,
    {
        let lookup = move |condition| provider.lookup(&rail.curve_key(condition));
        Ok(Self {
            side: rail.side,
            index: lookup(Condition::IndexWear)?,
            wear: lookup(Condition::NaturalWear)?,
            rcf_residual: lookup(Condition::RcfResidual)?,
            rcf_depth: lookup(Condition::RcfDepth)?,
        })
    }

    /// Largest month sampled by all four curves
    pub fn common_last_month(&self) -> u32 {
        [self.index, self.wear, self.rcf_residual, self.rcf_depth]
            .iter()
            .map(|c| c.last_month())
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(condition: Condition) -> CurveKey {
        CurveKey::new(condition, "MB4", RailSide::High, 1465, 32.5)
    }

    #[test]
    fn test_evaluate_missing_month_reports_key() {
        let curve =
            CurveSet::from_fn(key(Condition::NaturalWear), vec![1440.0, 1450.0], 1..=6, |m, _| {
                f64::from(m)
            })
            .unwrap();
        let err = curve
            .evaluate(7, 1445.0, GaugeBoundary::Extrapolate)
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::MissingMonth {
                key: key(Condition::NaturalWear),
                month: 7
            }
        );
        assert_eq!(curve.last_month(), 6);
    }

    #[test]
    fn test_store_lookup_distinguishes_missing_from_zero() {
        let zero = CurveSet::from_fn(
            key(Condition::RcfDepth),
            vec![1440.0, 1450.0],
            1..=12,
            |_, _| 0.0,
        )
        .unwrap();
        let store: CurveStore = std::iter::once(zero).collect();

        let found = store.lookup(&key(Condition::RcfDepth)).unwrap();
        assert_eq!(found.evaluate(3, 1442.0, GaugeBoundary::Clamp), Ok(0.0));

        let missing = store.lookup(&key(Condition::IndexWear)).unwrap_err();
        assert_eq!(missing, LookupError::MissingCurve(key(Condition::IndexWear)));
    }

    #[test]
    fn test_malformed_samples_rejected() {
        let result = CurveSet::new(
            key(Condition::IndexWear),
            vec![1440.0, 1450.0],
            vec![(1, vec![0.1, 0.2, 0.3])],
        );
        assert!(matches!(result, Err(LookupError::MalformedCurve { .. })));

        let empty = CurveSet::new(
            key(Condition::IndexWear),
            vec![1440.0, 1450.0],
            Vec::<(u32, Vec<f64>)>::new(),
        );
        assert!(matches!(empty, Err(LookupError::MalformedCurve { .. })));
    }

    #[test]
    fn test_store_serde_round_trip_keeps_curves() {
        let curve = CurveSet::from_fn(
            key(Condition::IndexWear),
            vec![1440.0, 1445.0, 1450.0],
            1..=3,
            |m, g| f64::from(m) * 0.1 + (g - 1440.0) * 0.01,
        )
        .unwrap();
        let store: CurveStore = std::iter::once(curve.clone()).collect();

        let json = serde_json::to_string(&store).unwrap();
        let restored: CurveStore = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.lookup(curve.key()).unwrap(), &curve);
    }

    #[test]
    fn test_resolve_rail_curves_fails_on_first_missing_condition() {
        let rail = RailSpec::new("MB4", RailSide::High, 1465, 32.5);
        let index = CurveSet::from_fn(
            key(Condition::IndexWear),
            vec![1440.0, 1450.0],
            1..=12,
            |_, _| 0.2,
        )
        .unwrap();
        let store: CurveStore = std::iter::once(index).collect();

        let err = RailCurves::resolve(&store, &rail).unwrap_err();
        assert_eq!(err, LookupError::MissingCurve(key(Condition::NaturalWear)));
    }
}
