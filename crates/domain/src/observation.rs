//! # 観測日と日付範囲
//!
//! データストアでは観測日は `"YYYY-MM-DD"` 文字列として保存されている。
//! 読み込み直後に [`ObservationDate`] へ変換し、以降の比較・演算は
//! 暦日として行う。文字列の辞書順と時系列順の一致には依存しない。
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`ObservationDate`] | `NaiveDate` | 観測日 |
//! | [`DateRange`] | `start` + 任意の `end` | 集計・抽出対象の日付範囲（両端を含む） |

use chrono::{Days, NaiveDate};
use derive_more::Display;
use serde::Serialize;

use crate::DomainError;

/// 観測日の文字列表現
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 直近ウィンドウの日数
///
/// 最新観測日からこの日数だけ遡った日をウィンドウの開始日とする。
/// 閏年でも 365 日固定。
pub const TRAILING_WINDOW_DAYS: u64 = 365;

/// 観測日（値オブジェクト）
///
/// `Display` は `YYYY-MM-DD` 形式で出力し、データストアへのバインドと
/// JSON レスポンスのキーにそのまま使える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[display("{_0}")]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// `YYYY-MM-DD` 形式の文字列をパースする
    ///
    /// # エラー
    ///
    /// 形式が不正、または暦上存在しない日付の場合は
    /// `DomainError::InvalidDate` を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate(value.to_string()))
    }

    /// データストアの比較に使う `YYYY-MM-DD` 文字列
    pub fn to_db_string(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// 指定日数だけ遡った観測日を返す
    pub fn days_before(&self, days: u64) -> Result<Self, DomainError> {
        self.0
            .checked_sub_days(Days::new(days))
            .map(Self)
            .ok_or_else(|| DomainError::DateOutOfRange(format!("{} - {days} 日", self.0)))
    }
}

/// 観測日の範囲
///
/// `start` 以上、`end` が指定されていれば `end` 以下（両端を含む）。
/// `start > end` の範囲も構築可能で、その場合は該当行が存在しないだけである。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: ObservationDate,
    end:   Option<ObservationDate>,
}

impl DateRange {
    /// 開始日以降すべてを対象とする範囲
    pub fn since(start: ObservationDate) -> Self {
        Self { start, end: None }
    }

    /// 開始日から終了日までを対象とする範囲
    pub fn between(start: ObservationDate, end: ObservationDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// パスパラメータ（`start` と任意の `end`）から範囲を作る
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, DomainError> {
        let start = ObservationDate::parse(start)?;
        match end {
            Some(end) => Ok(Self::between(start, ObservationDate::parse(end)?)),
            None => Ok(Self::since(start)),
        }
    }

    /// 最新観測日から 365 日遡った日以降のウィンドウ
    ///
    /// 上限は設けない（最新観測日より後の行は存在しないため）。
    pub fn trailing_year(latest: ObservationDate) -> Result<Self, DomainError> {
        Ok(Self::since(latest.days_before(TRAILING_WINDOW_DAYS)?))
    }

    pub fn start(&self) -> ObservationDate {
        self.start
    }

    pub fn end(&self) -> Option<ObservationDate> {
        self.end
    }

    /// 範囲に含まれるかを判定する
    pub fn contains(&self, date: ObservationDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(value: &str) -> ObservationDate {
        ObservationDate::parse(value).unwrap()
    }

    #[rstest]
    #[case("2017-08-23")]
    #[case("2016-02-29")]
    #[case("0001-01-01")]
    fn test_parse_正しい形式の日付を受け付ける(#[case] input: &str) {
        let parsed = ObservationDate::parse(input).unwrap();
        assert_eq!(parsed.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("2017/08/23")]
    #[case("2017-13-01")]
    #[case("2017-02-30")]
    #[case("2017-08-23T00:00:00")]
    #[case("yesterday")]
    fn test_parse_不正な日付でinvalid_dateを返す(#[case] input: &str) {
        assert_eq!(
            ObservationDate::parse(input),
            Err(DomainError::InvalidDate(input.to_string()))
        );
    }

    #[test]
    fn test_to_db_stringはyyyy_mm_dd形式を返す() {
        assert_eq!(date("2010-01-05").to_db_string(), "2010-01-05");
    }

    #[test]
    fn test_serializeで日付文字列になる() {
        let json = serde_json::to_value(date("2017-08-23")).unwrap();
        assert_eq!(json, serde_json::json!("2017-08-23"));
    }

    #[test]
    fn test_trailing_yearは365日前を開始日とする() {
        let window = DateRange::trailing_year(date("2017-08-23")).unwrap();

        assert_eq!(window.start(), date("2016-08-23"));
        assert_eq!(window.end(), None);
    }

    #[test]
    fn test_trailing_yearは閏年をまたいでも365日固定() {
        // 2016-02-29 を含む期間なので暦上の 1 年前より 1 日遅い
        let window = DateRange::trailing_year(date("2016-12-31")).unwrap();
        assert_eq!(window.start(), date("2016-01-01"));
    }

    #[test]
    fn test_trailing_yearが範囲外の場合date_out_of_rangeを返す() {
        let earliest = ObservationDate(NaiveDate::MIN);
        assert!(matches!(
            DateRange::trailing_year(earliest),
            Err(DomainError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_終了日なしの場合sinceになる() {
        let range = DateRange::parse("2017-08-20", None).unwrap();
        assert_eq!(range, DateRange::since(date("2017-08-20")));
    }

    #[test]
    fn test_parse_終了日ありの場合betweenになる() {
        let range = DateRange::parse("2017-08-20", Some("2017-08-21")).unwrap();
        assert_eq!(
            range,
            DateRange::between(date("2017-08-20"), date("2017-08-21"))
        );
    }

    #[test]
    fn test_parse_終了日が不正な場合エラーを返す() {
        assert_eq!(
            DateRange::parse("2017-08-20", Some("2017-08-32")),
            Err(DomainError::InvalidDate("2017-08-32".to_string()))
        );
    }

    #[rstest]
    #[case("2017-08-19", false)]
    #[case("2017-08-20", true)]
    #[case("2017-08-21", true)]
    #[case("2017-08-22", false)]
    fn test_containsは両端を含む(#[case] input: &str, #[case] expected: bool) {
        let range = DateRange::between(date("2017-08-20"), date("2017-08-21"));
        assert_eq!(range.contains(date(input)), expected);
    }

    #[test]
    fn test_contains_終了日なしは上限なし() {
        let range = DateRange::since(date("2017-08-20"));
        assert!(range.contains(date("9999-12-31")));
        assert!(!range.contains(date("2017-08-19")));
    }
}
