//! Result Scorer
//!
//! Confidence heuristic for normalized provider records.

use crate::domain::entities::NormalizedGeoRecord;
use crate::domain::value_objects::Confidence;

const CITY_POINTS: u8 = 30;
const REGION_POINTS: u8 = 25;
const COUNTRY_POINTS: u8 = 20;
const ISP_POINTS: u8 = 15;
const COORDINATE_POINTS: u8 = 10;

/// Scores a record by which fields it carries.
///
/// Additive: city 30, region 25, country 20, ISP 15, and 10 when both
/// latitude and longitude are present. A single coordinate scores nothing.
pub struct ResultScorer;

impl ResultScorer {
    pub fn score(record: &NormalizedGeoRecord) -> Confidence {
        let mut points = 0u8;

        if record.city.is_some() {
            points += CITY_POINTS;
        }
        if record.region_name.is_some() {
            points += REGION_POINTS;
        }
        if record.country.is_some() {
            points += COUNTRY_POINTS;
        }
        if record.isp.is_some() {
            points += ISP_POINTS;
        }
        if record.coordinates().is_some() {
            points += COORDINATE_POINTS;
        }

        Confidence::new(points)
    }
}
