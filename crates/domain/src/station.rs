//! # 観測所
//!
//! 観測所のメタデータ。API が公開するのは観測所コードのみで、
//! 名称・座標・標高はデータストアのスキーマに合わせて保持する。

use derive_more::Display;
use serde::Serialize;

/// 観測所コード（例: `USC00519397`）
///
/// データストア上で一意。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[display("{_0}")]
pub struct StationCode(String);

impl StationCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 観測所
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    code:      StationCode,
    name:      Option<String>,
    latitude:  Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

/// データストアの行から [`Station`] を組み立てるためのパラメータ
#[derive(Debug, Clone)]
pub struct StationRecord {
    pub code:      StationCode,
    pub name:      Option<String>,
    pub latitude:  Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Station {
    /// データストアから読み込んだ値で復元する
    pub fn from_db(record: StationRecord) -> Self {
        Self {
            code:      record.code,
            name:      record.name,
            latitude:  record.latitude,
            longitude: record.longitude,
            elevation: record.elevation,
        }
    }

    pub fn code(&self) -> &StationCode {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn into_code(self) -> StationCode {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dbで全フィールドが復元される() {
        let station = Station::from_db(StationRecord {
            code:      StationCode::new("USC00519397"),
            name:      Some("WAIKIKI 717.2, HI US".to_string()),
            latitude:  Some(21.2716),
            longitude: Some(-157.8168),
            elevation: Some(3.0),
        });

        assert_eq!(station.code().as_str(), "USC00519397");
        assert_eq!(station.name(), Some("WAIKIKI 717.2, HI US"));
        assert_eq!(station.latitude(), Some(21.2716));
        assert_eq!(station.longitude(), Some(-157.8168));
        assert_eq!(station.elevation(), Some(3.0));
    }

    #[test]
    fn test_station_codeのserializeは文字列になる() {
        let json = serde_json::to_value(StationCode::new("USC00513117")).unwrap();
        assert_eq!(json, serde_json::json!("USC00513117"));
    }
}
