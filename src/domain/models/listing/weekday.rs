//! 요일별 사용자 목록 모델
//!
//! 요일 번호 체계는 두 가지입니다.
//!
//! - **요청 번호**: 클라이언트가 보내는 0 기반 번호 (0=일요일 .. 6=토요일)
//! - **저장소 번호**: MongoDB `$dayOfWeek` 규칙의 1 기반 번호 (1=일요일 .. 7=토요일)
//!
//! 범위를 벗어나거나 숫자가 아닌 요청 번호는 에러 없이 빈 그룹이 됩니다.
//! 이런 그룹의 키는 요청된 토큰 그대로이며(`"9"`, `"x"`), 하나의 `"undefined"` 키로
//! 합쳐지지 않습니다. 유효한 요일 키는 항상 소문자 요일 이름입니다.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// 일요일부터 시작하는 요일 이름
pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// 클라이언트가 요청한 요일 번호 하나
#[derive(Debug, Clone, PartialEq)]
pub struct WeekNumber {
    raw: String,
    value: Option<i64>,
}

impl WeekNumber {
    /// 쉼표로 나뉜 토큰 하나를 해석합니다.
    ///
    /// 앞쪽의 부호와 숫자까지만 읽으므로 `"1.0"`, `"1abc"`는 모두 1입니다.
    /// 숫자로 시작하지 않으면 값이 없습니다.
    pub fn parse(token: &str) -> Self {
        let raw = token.trim().to_string();
        let value = leading_integer(&raw);
        Self { raw, value }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// 0..=6 범위일 때의 요일 이름
    pub fn day_name(&self) -> Option<&'static str> {
        self.value
            .filter(|v| (0..7).contains(v))
            .map(|v| DAY_NAMES[v as usize])
    }

    /// 저장소 요일 번호 (요청 번호 + 1)
    pub fn store_weekday(&self) -> Option<i32> {
        self.day_name().and(self.value).map(|v| v as i32 + 1)
    }

    /// 응답 맵의 키. 유효한 요일은 이름, 그 외에는 요청된 토큰 그대로입니다.
    pub fn group_key(&self) -> String {
        match self.day_name() {
            Some(name) => name.to_string(),
            None => self.raw.clone(),
        }
    }
}

fn leading_integer(token: &str) -> Option<i64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }

    let sign_len = token.len() - unsigned.len();
    token[..sign_len + digits].parse::<i64>().ok()
}

/// 요청 번호 목록을 중복 없는 저장소 요일 번호로 변환합니다.
pub fn store_weekdays(requested: &[WeekNumber]) -> Vec<i32> {
    let mut days: Vec<i32> = Vec::new();
    for day in requested.iter().filter_map(WeekNumber::store_weekday) {
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days
}

/// 요일 조회 결과 한 건 (`name`, `email`, 저장소 요일 번호)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayUser {
    pub name: String,
    pub email: String,
    pub week_day: i32,
}

/// 응답에 노출되는 사용자 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

/// 요일 이름 → 사용자 목록 매핑
///
/// 요청된 모든 키가 요청 순서대로 존재하며(빈 목록 포함),
/// 각 목록은 저장소가 돌려준 순서를 유지합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekdayGroups {
    groups: Vec<(String, Vec<UserSummary>)>,
}

impl WeekdayGroups {
    /// 요청된 키마다 빈 그룹을 만듭니다.
    pub fn new(requested: &[WeekNumber]) -> Self {
        let mut groups = Self::default();
        for number in requested {
            let key = number.group_key();
            if groups.get(&key).is_none() {
                groups.groups.push((key, Vec::new()));
            }
        }
        groups
    }

    /// 요청 번호와 조회 결과로 그룹을 구성합니다.
    pub fn collect(requested: &[WeekNumber], rows: impl IntoIterator<Item = WeekdayUser>) -> Self {
        let mut groups = Self::new(requested);
        for row in rows {
            groups.push(row);
        }
        groups
    }

    /// 조회 결과 한 건을 해당 요일 그룹에 추가합니다. 요청되지 않은 요일은 무시됩니다.
    pub fn push(&mut self, row: WeekdayUser) {
        let Some(day_name) = usize::try_from(row.week_day - 1)
            .ok()
            .and_then(|index| DAY_NAMES.get(index))
        else {
            return;
        };

        if let Some((_, users)) = self.groups.iter_mut().find(|(key, _)| key == day_name) {
            users.push(UserSummary {
                name: row.name,
                email: row.email,
            });
        }
    }

    pub fn get(&self, key: &str) -> Option<&[UserSummary]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, users)| users.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for WeekdayGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, users) in &self.groups {
            map.serialize_entry(key, users)?;
        }
        map.end()
    }
}
