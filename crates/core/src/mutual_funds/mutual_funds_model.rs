//! Mutual fund domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire model for a mutual fund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub id: i32,
    pub mf_code: String,
    pub mf_name: String,
    pub amc: String,
    /// Fund classification (equity, debt, hybrid...). Named `type` on the wire.
    #[serde(rename = "type")]
    pub fund_type: String,
}

/// Input model for creating a mutual fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMutualFund {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub mf_code: String,
    pub mf_name: String,
    pub amc: String,
    #[serde(rename = "type")]
    pub fund_type: String,
}

/// Wire model for a mutual fund purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutualFundBuyTransaction {
    pub id: i32,
    pub mf_id: i32,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub buy_date: DateTime<Utc>,
    pub sold_units: f64,
    pub is_sold_out: bool,
}

/// Input model for recording a purchase. `soldUnits` defaults to zero when
/// omitted; `isSoldOut` is accepted but governed by the server's create policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMutualFundBuyTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub mf_id: i32,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub buy_date: DateTime<Utc>,
    #[serde(default)]
    pub sold_units: f64,
    #[serde(default)]
    pub is_sold_out: bool,
}

/// Wire model for a mutual fund sale. `buy_ids` references the purchases the
/// sold units came from; referential integrity is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutualFundSellTransaction {
    pub id: i32,
    pub mf_id: i32,
    pub buy_ids: Vec<i32>,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub sold_date: DateTime<Utc>,
    /// Stored as reported by the client, never computed here.
    pub profit_loss: f64,
}

/// Input model for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMutualFundSellTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub mf_id: i32,
    pub buy_ids: Vec<i32>,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub sold_date: DateTime<Utc>,
    pub profit_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_type_is_named_type_on_the_wire() {
        let payload = r#"{"mfCode":"MF01","mfName":"Index Fund","amc":"Acme AMC","type":"EQUITY"}"#;
        let fund: NewMutualFund = serde_json::from_str(payload).unwrap();
        assert_eq!(fund.fund_type, "EQUITY");

        let json = serde_json::to_value(&fund).unwrap();
        assert_eq!(json["type"], "EQUITY");
        assert!(json.get("fundType").is_none());
    }

    #[test]
    fn buy_transaction_defaults_omitted_sold_fields() {
        let payload = r#"{"mfId":3,"nav":25.5,"units":100.0,"charge":1.5,"buyDate":"2024-03-01T00:00:00Z"}"#;
        let buy: NewMutualFundBuyTransaction = serde_json::from_str(payload).unwrap();
        assert_eq!(buy.sold_units, 0.0);
        assert!(!buy.is_sold_out);
    }

    #[test]
    fn buy_transaction_accepts_client_is_sold_out() {
        // The field is deserialized; the create policy decides what is stored.
        let payload = r#"{"mfId":3,"nav":25.5,"units":100.0,"charge":1.5,"buyDate":"2024-03-01T00:00:00Z","isSoldOut":true}"#;
        let buy: NewMutualFundBuyTransaction = serde_json::from_str(payload).unwrap();
        assert!(buy.is_sold_out);
    }

    #[test]
    fn sell_transaction_dates_are_iso_8601() {
        let sell = MutualFundSellTransaction {
            id: 1,
            mf_id: 3,
            buy_ids: vec![10, 11],
            nav: 30.0,
            units: 50.0,
            charge: 0.5,
            sold_date: "2024-06-15T09:30:00Z".parse().unwrap(),
            profit_loss: 225.0,
        };
        let json = serde_json::to_value(&sell).unwrap();
        assert_eq!(json["soldDate"], "2024-06-15T09:30:00Z");
        assert_eq!(json["buyIds"], serde_json::json!([10, 11]));
    }
}
