//! # 観測値
//!
//! 観測所・観測日ごとの降水量と気温、および気温の集計結果。
//!
//! ## 重複日の扱い
//!
//! 同じ観測日に複数の観測所の行が存在する。
//!
//! - 降水量: 観測日をキーとする [`PrecipitationByDate`] に畳み込む。
//!   `(date, station)` 順に並んだ行を順に適用し、同じ日付では後の行が勝つ。
//!   結果は入力順に依存せず決定的になる。
//! - 気温: 行ごとに 1 件として保持する（畳み込まない）。

use std::collections::BTreeMap;

use crate::{observation::ObservationDate, station::StationCode};

/// 観測値（`measurement` テーブルの 1 行）
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station:       StationCode,
    pub date:          ObservationDate,
    /// 欠測の場合は `None`
    pub precipitation: Option<f64>,
    pub temperature:   f64,
}

impl Measurement {
    pub fn to_precipitation_reading(&self) -> PrecipitationReading {
        PrecipitationReading {
            station:       self.station.clone(),
            date:          self.date,
            precipitation: self.precipitation,
        }
    }

    pub fn to_temperature_observation(&self) -> TemperatureObservation {
        TemperatureObservation {
            station:     self.station.clone(),
            date:        self.date,
            temperature: self.temperature,
        }
    }
}

/// 降水量の観測値（1 行）
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub station:       StationCode,
    pub date:          ObservationDate,
    /// 欠測の場合は `None`
    pub precipitation: Option<f64>,
}

/// 気温の観測値（1 行）
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureObservation {
    pub station:     StationCode,
    pub date:        ObservationDate,
    pub temperature: f64,
}

/// 観測日 → 降水量のマップ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecipitationByDate(BTreeMap<ObservationDate, Option<f64>>);

impl PrecipitationByDate {
    /// 観測値を畳み込む
    ///
    /// 同じ観測日の行が複数ある場合、`(date, station)` 順で最後の行の値を採用する。
    pub fn collect(readings: impl IntoIterator<Item = PrecipitationReading>) -> Self {
        let mut ordered: Vec<_> = readings.into_iter().collect();
        ordered.sort_by(|a, b| (a.date, &a.station).cmp(&(b.date, &b.station)));

        Self(
            ordered
                .into_iter()
                .map(|reading| (reading.date, reading.precipitation))
                .collect(),
        )
    }

    pub fn get(&self, date: &ObservationDate) -> Option<Option<f64>> {
        self.0.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 観測日の昇順で走査する
    pub fn iter(&self) -> impl Iterator<Item = (&ObservationDate, &Option<f64>)> {
        self.0.iter()
    }
}

/// 気温の集計結果（MIN / AVG / MAX）
///
/// 対象行が 0 件の場合、3 つとも `None` になる。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// 気温の列から MIN / AVG / MAX を求める
    ///
    /// データストアの集計関数と同じく、空の入力では 3 つとも `None` になる。
    pub fn from_temperatures(temperatures: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0_u32;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for t in temperatures {
            count += 1;
            sum += t;
            min = min.min(t);
            max = max.max(t);
        }

        if count == 0 {
            return Self::default();
        }
        Self {
            min: Some(min),
            avg: Some(sum / f64::from(count)),
            max: Some(max),
        }
    }

    /// `[min, avg, max]` の固定順で返す
    pub fn to_array(&self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }

    /// 集計対象の行が存在しなかったか
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}
