//! Stock holding domain models.

use serde::{Deserialize, Serialize};

/// Wire model for a stock holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i32,
    pub stock_code: String,
    pub stock_name: String,
    pub stock_exchange: String,
    pub broker: String,
}

/// Input model for recording a stock holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewStock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub stock_code: String,
    pub stock_name: String,
    pub stock_exchange: String,
    pub broker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_round_trips_the_documented_example() {
        let payload = r#"{"stockCode":"IBM","stockName":"Intl Business Machines","stockExchange":"NYSE","broker":"Acme"}"#;
        let stock: NewStock = serde_json::from_str(payload).unwrap();
        assert_eq!(stock.stock_code, "IBM");
        assert_eq!(stock.stock_exchange, "NYSE");
        assert_eq!(stock.id, None);
    }
}
