//! # 거리 계산 유틸리티
//!
//! 두 위경도 좌표 사이의 대권 거리(great-circle distance)를 haversine 공식으로 계산합니다.

/// 지구 평균 반지름 (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 두 좌표 사이의 거리를 킬로미터 단위로 반환합니다.
///
/// 입력은 도(degree) 단위입니다. 숫자가 아닌 입력(`NaN`)은 그대로 `NaN`을 전파하며,
/// 입력 검증은 호출자의 책임입니다.
///
/// # Examples
///
/// ```rust
/// use geo_user_service::utils::distance::haversine_km;
///
/// let quarter = haversine_km(0.0, 0.0, 0.0, 90.0);
/// assert!((quarter - 10007.54).abs() < 0.1);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(haversine_km(37.5665, 126.978, 37.5665, 126.978), 0.0);
        assert_eq!(haversine_km(-45.0, 170.0, -45.0, 170.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let seoul_to_paris = haversine_km(37.5665, 126.978, 48.8566, 2.3522);
        let paris_to_seoul = haversine_km(48.8566, 2.3522, 37.5665, 126.978);

        assert!((seoul_to_paris - paris_to_seoul).abs() < EPSILON);
    }

    #[test]
    fn test_quarter_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 90.0);
        assert!((d - 10007.543398).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }

    #[test]
    fn test_known_city_pair() {
        // 서울 - 부산 약 325km
        let d = haversine_km(37.5665, 126.978, 35.1796, 129.0756);
        assert!((d - 325.0).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(haversine_km(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
