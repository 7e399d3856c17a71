use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::TOP_PRIZE_ID;

/// A single outcome on the promo wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Prize {
    pub id: String,
    pub label: String,
    pub sub_label: String,
    pub description: String,
    /// Relative weight, not normalized.
    pub weight: u32,
    /// Whether redeeming the prize needs a booking first.
    pub requires_booking: bool,
    pub color: String,
    pub emoji: String,
}

impl Prize {
    pub fn new(id: &str, label: &str, sub_label: &str, description: &str, weight: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            sub_label: sub_label.to_string(),
            description: description.to_string(),
            weight,
            requires_booking: false,
            color: "#f472b6".to_string(),
            emoji: "🎁".to_string(),
        }
    }

    pub fn with_booking(mut self) -> Self {
        self.requires_booking = true;
        self
    }

    pub fn with_style(mut self, color: &str, emoji: &str) -> Self {
        self.color = color.to_string();
        self.emoji = emoji.to_string();
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("prize catalog has no entries")]
    Empty,
    #[error("prize catalog weights sum to zero")]
    ZeroTotalWeight,
    #[error("duplicate prize id `{0}`")]
    DuplicateId(String),
}

/// An ordered list of prizes whose weights are known to sum to more than zero.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
    total_weight: u64,
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        if prizes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for prize in &prizes {
            if !seen.insert(prize.id.as_str()) {
                return Err(CatalogError::DuplicateId(prize.id.clone()));
            }
        }

        let total_weight: u64 = prizes.iter().map(|p| u64::from(p.weight)).sum();
        if total_weight == 0 {
            return Err(CatalogError::ZeroTotalWeight);
        }

        Ok(Self { prizes, total_weight })
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.prizes.iter().position(|p| p.id == id)
    }

    pub fn probability(&self, id: &str) -> Option<f64> {
        self.get(id)
            .map(|p| f64::from(p.weight) / self.total_weight as f64)
    }
}

pub static DEFAULT_CATALOG: Lazy<PrizeCatalog> = Lazy::new(|| {
    PrizeCatalog::new(default_prizes()).expect("built-in prize catalog must be valid")
});

fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new(
            TOP_PRIZE_ID,
            "FREE TRIP",
            "all-inclusive",
            "A fully hosted recovery trip: flights, 5-star stay and concierge.",
            1,
        )
        .with_booking()
        .with_style("#f59e0b", "✈️"),
        Prize::new("500-off", "$500 OFF", "any procedure", "$500 off your first procedure package.", 6)
            .with_booking()
            .with_style("#ec4899", "💎"),
        Prize::new("spa-day", "SPA DAY", "on us", "A full recovery spa day at a partner resort.", 10)
            .with_booking()
            .with_style("#a855f7", "🧖"),
        Prize::new("250-off", "$250 OFF", "any package", "$250 off any trip package.", 14)
            .with_booking()
            .with_style("#f472b6", "💸"),
        Prize::new(
            "airport-transfer",
            "FREE TRANSFER",
            "airport VIP",
            "Private VIP transfer from the airport to your hotel.",
            16,
        )
        .with_style("#06b6d4", "🚘"),
        Prize::new("100-off", "$100 OFF", "your booking", "$100 off your booking deposit.", 18)
            .with_style("#8b5cf6", "🎟️"),
        Prize::new(
            "consultation",
            "FREE CONSULT",
            "virtual",
            "A free virtual consultation with a vetted specialist.",
            20,
        )
        .with_style("#10b981", "🩺"),
        Prize::new("10-percent", "10% OFF", "group trips", "10% off when you travel with friends.", 15)
            .with_style("#fb7185", "👯"),
    ]
}

/// Draws one prize. A known `forced_winner_id` is returned without touching `rng`.
pub fn select_prize<'a, R: Rng + ?Sized>(
    catalog: &'a PrizeCatalog,
    forced_winner_id: Option<&str>,
    rng: &mut R,
) -> &'a Prize {
    if let Some(id) = forced_winner_id {
        match catalog.get(id) {
            Some(prize) => return prize,
            None => log::warn!("forced winner `{}` is not in the catalog, drawing normally", id),
        }
    }

    let mut remaining = rng.gen::<f64>() * catalog.total_weight as f64;
    for prize in &catalog.prizes {
        if prize.weight == 0 {
            continue;
        }
        remaining -= f64::from(prize.weight);
        if remaining <= 0.0 {
            return prize;
        }
    }

    // Only reachable through float rounding at the very top of the range.
    &catalog.prizes[catalog.prizes.len() - 1]
}

// Constants for frontend animation
pub const SPIN_DURATION_MS: u32 = 5000;
pub const MIN_SPINS: u32 = 5;
pub const MAX_SPINS: u32 = 8;

pub fn random_full_spins<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_SPINS..=MAX_SPINS)
}

/// Final clockwise rotation in degrees that leaves segment `index` centred under a
/// pointer at 12 o'clock. Segments are drawn clockwise from the pointer, all equal size.
pub fn wheel_landing_rotation(index: usize, segments: usize, full_spins: u32) -> f64 {
    let segment = 360.0 / segments.max(1) as f64;
    let offset = 360.0 - (index as f64 + 0.5) * segment;
    f64::from(full_spins) * 360.0 + offset
}

/// Segment currently under the pointer for a given rotation.
pub fn segment_at_rotation(rotation: f64, segments: usize) -> usize {
    let segments = segments.max(1);
    let segment = 360.0 / segments as f64;
    let normalized = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    ((normalized / segment).floor() as usize).min(segments - 1)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub prize: Prize,
    pub rotation: f64,
    pub forced: bool,
}

/// Current state of the promo wheel.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpinWheel {
    pub is_spinning: bool,
    pub last_result: Option<SpinResult>,
}

impl SpinWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_spin(&mut self) {
        self.is_spinning = true;
        self.last_result = None;
    }

    pub fn complete_spin(&mut self, result: SpinResult) {
        self.is_spinning = false;
        self.last_result = Some(result);
    }

    /// Picks a prize and the rotation that shows it, then marks the wheel as spinning.
    /// The caller finishes with `complete_spin` once the animation ends.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        catalog: &PrizeCatalog,
        forced_winner_id: Option<&str>,
        rng: &mut R,
    ) -> SpinResult {
        self.start_spin();
        let prize = select_prize(catalog, forced_winner_id, rng);
        let index = catalog.position(&prize.id).unwrap_or(0);
        let rotation = wheel_landing_rotation(index, catalog.len(), random_full_spins(rng));
        let forced = forced_winner_id.map_or(false, |id| id == prize.id);

        log::info!("🎡 wheel landed on {} (forced: {})", prize.id, forced);

        SpinResult {
            prize: prize.clone(),
            rotation,
            forced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn catalog(weights: &[u32]) -> PrizeCatalog {
        let prizes = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Prize::new(&format!("p{}", i), "label", "sub", "desc", *w))
            .collect();
        PrizeCatalog::new(prizes).unwrap()
    }

    #[test]
    fn test_default_catalog() {
        assert_eq!(DEFAULT_CATALOG.len(), 8);
        assert_eq!(DEFAULT_CATALOG.total_weight(), 100);
        assert!(DEFAULT_CATALOG.get(TOP_PRIZE_ID).unwrap().requires_booking);
    }

    #[test]
    fn test_catalog_rejects_bad_config() {
        assert_eq!(PrizeCatalog::new(vec![]), Err(CatalogError::Empty));
        let zero = vec![Prize::new("a", "", "", "", 0), Prize::new("b", "", "", "", 0)];
        assert_eq!(PrizeCatalog::new(zero), Err(CatalogError::ZeroTotalWeight));
        let dup = vec![Prize::new("a", "", "", "", 1), Prize::new("a", "", "", "", 2)];
        assert_eq!(
            PrizeCatalog::new(dup),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_probability() {
        let c = catalog(&[1, 3]);
        assert_eq!(c.probability("p0"), Some(0.25));
        assert_eq!(c.probability("p1"), Some(0.75));
        assert_eq!(c.probability("missing"), None);
    }

    #[test]
    fn test_forced_winner_ignores_rng() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let prize = select_prize(&DEFAULT_CATALOG, Some(TOP_PRIZE_ID), &mut rng);
            assert_eq!(prize.id, TOP_PRIZE_ID);
        }
    }

    #[test]
    fn test_unknown_forced_winner_falls_back_to_draw() {
        let c = catalog(&[0, 5]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_prize(&c, Some("nope"), &mut rng).id, "p1");
    }

    #[test]
    fn test_same_seed_same_prize() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                select_prize(&DEFAULT_CATALOG, None, &mut a).id,
                select_prize(&DEFAULT_CATALOG, None, &mut b).id
            );
        }
    }

    #[test]
    fn test_zero_weight_entries_never_drawn() {
        let c = catalog(&[0, 1, 0, 1]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let id = &select_prize(&c, None, &mut rng).id;
            assert!(id == "p1" || id == "p3");
        }
    }

    #[test]
    fn test_draw_distribution_matches_weights() {
        let trials = 200_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..trials {
            let prize = select_prize(&DEFAULT_CATALOG, None, &mut rng);
            *counts.entry(prize.id.clone()).or_default() += 1;
        }

        for prize in DEFAULT_CATALOG.prizes() {
            let expected = DEFAULT_CATALOG.probability(&prize.id).unwrap();
            let observed = f64::from(*counts.get(&prize.id).unwrap_or(&0)) / trials as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "{}: observed {} expected {}",
                prize.id,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_landing_rotation_points_at_segment() {
        for index in 0..8 {
            for spins in MIN_SPINS..=MAX_SPINS {
                let rotation = wheel_landing_rotation(index, 8, spins);
                assert!(rotation >= f64::from(spins) * 360.0);
                assert_eq!(segment_at_rotation(rotation, 8), index);
            }
        }
    }

    #[test]
    fn test_spin_records_result() {
        let mut wheel = SpinWheel::new();
        let mut rng = StdRng::seed_from_u64(1);
        let result = wheel.spin(&DEFAULT_CATALOG, Some(TOP_PRIZE_ID), &mut rng);
        assert!(wheel.is_spinning);
        assert!(result.forced);
        assert_eq!(segment_at_rotation(result.rotation, 8), 0);

        wheel.complete_spin(result.clone());
        assert!(!wheel.is_spinning);
        assert_eq!(wheel.last_result, Some(result));
    }
}
