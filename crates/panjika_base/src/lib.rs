//! Angle arithmetic, panchang element classification and the classical
//! lookup tables (tithi, nakshatra, yoga, karana, vaar, Bengali months,
//! kalam segments).
//!
//! Everything here is pure and table-driven; no ephemeris access.

pub mod angle;
pub mod bengali;
pub mod classify;
pub mod error;
pub mod kalam;
pub mod karana;
pub mod nakshatra;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use angle::{cyclic_diff, normalize_360, normalize_to_pm180, segment_index};
pub use bengali::{ALL_BENGALI_MONTHS, BANGABDA_ERA_OFFSET, BengaliMonth, bangabda_year};
pub use classify::{
    ALL_ELEMENTS, Element, ElementIndices, classify, elongation, karana_index, longitude_sum,
    nakshatra_index, nakshatra_pada, tithi_index, yoga_index,
};
pub use error::DomainError;
pub use kalam::{ABHIJIT_PART, ALL_KALAMS, KALAM_PARTS, Kalam, MUHURTA_PARTS};
pub use karana::{KARANA_SEQUENCE, KARANA_SPAN_DEG, Karana, MOVABLE_KARANAS};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, PADA_SPAN_DEG};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SPAN_DEG, Tithi};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_SPAN_DEG, Yoga};
