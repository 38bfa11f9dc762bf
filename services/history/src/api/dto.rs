//! 查询参数

use serde::Deserialize;
use stock_common::{Pagination, empty_string_as_none};
use stock_errors::AppResult;

use crate::application::parse_timestamp;
use crate::domain::HistoryFilter;

/// `GET /history` 的查询参数，日期保留原始字符串，转换时再解析
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub shop_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub plu: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<u32>,
}

impl HistoryQuery {
    pub fn into_filter(self) -> AppResult<HistoryFilter> {
        let start_date = self
            .start_date
            .map(|raw| parse_timestamp("start_date", &raw))
            .transpose()?;
        let end_date = self
            .end_date
            .map(|raw| parse_timestamp("end_date", &raw))
            .transpose()?;

        Ok(HistoryFilter {
            shop_id: self.shop_id,
            plu: self.plu,
            start_date,
            end_date,
            action: self.action,
            pagination: Pagination::new(self.page, self.limit),
        })
    }
}
