#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::mapping::{CreatePolicy, FieldRule};
    use crate::mutual_funds::{
        MutualFund, MutualFundBuyTransaction, MutualFundBuyTransactionRepositoryTrait,
        MutualFundRepositoryTrait, MutualFundSellTransaction,
        MutualFundSellTransactionRepositoryTrait, MutualFundService, MutualFundServiceTrait,
        NewMutualFund, NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    // --- Mock fund repository ---
    struct MockFundRepository {
        rows: Mutex<Vec<MutualFund>>,
    }

    impl MockFundRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MutualFundRepositoryTrait for MockFundRepository {
        fn list_active(&self) -> Result<Vec<MutualFund>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, fund: NewMutualFund, policy: CreatePolicy) -> Result<MutualFund> {
            // Mirrors what the real repository does with the policy.
            let mut rows = self.rows.lock().unwrap();
            let persisted = MutualFund {
                id: rows.len() as i32 + 1,
                mf_code: fund.mf_code,
                mf_name: fund.mf_name,
                amc: fund.amc,
                fund_type: fund.fund_type,
            };
            assert_eq!(policy.rule("active"), Some(FieldRule::Force(true)));
            rows.push(persisted.clone());
            Ok(persisted)
        }
    }

    // --- Mock buy transaction repository ---
    struct MockBuyRepository {
        rows: Mutex<Vec<MutualFundBuyTransaction>>,
    }

    impl MockBuyRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MutualFundBuyTransactionRepositoryTrait for MockBuyRepository {
        fn list_by_sold_out(&self, is_sold_out: bool) -> Result<Vec<MutualFundBuyTransaction>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.is_sold_out == is_sold_out)
                .cloned()
                .collect())
        }

        async fn insert(
            &self,
            transaction: NewMutualFundBuyTransaction,
            policy: CreatePolicy,
        ) -> Result<MutualFundBuyTransaction> {
            let mut rows = self.rows.lock().unwrap();
            let persisted = MutualFundBuyTransaction {
                id: rows.len() as i32 + 1,
                mf_id: transaction.mf_id,
                nav: transaction.nav,
                units: transaction.units,
                charge: transaction.charge,
                buy_date: transaction.buy_date,
                sold_units: transaction.sold_units,
                is_sold_out: policy.forced_bool("is_sold_out")?,
            };
            rows.push(persisted.clone());
            Ok(persisted)
        }
    }

    // --- Mock sell transaction repository ---
    struct MockSellRepository {
        rows: Mutex<Vec<MutualFundSellTransaction>>,
    }

    impl MockSellRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MutualFundSellTransactionRepositoryTrait for MockSellRepository {
        fn list_all(&self) -> Result<Vec<MutualFundSellTransaction>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(
            &self,
            transaction: NewMutualFundSellTransaction,
            policy: CreatePolicy,
        ) -> Result<MutualFundSellTransaction> {
            // The sell table has no active or sold-out column; the policy
            // must not carry a force rule for either.
            assert_eq!(policy.rule("active"), None);
            assert_eq!(policy.rule("is_sold_out"), None);
            policy.require_skip("id")?;
            let mut rows = self.rows.lock().unwrap();
            let persisted = MutualFundSellTransaction {
                id: rows.len() as i32 + 1,
                mf_id: transaction.mf_id,
                buy_ids: transaction.buy_ids,
                nav: transaction.nav,
                units: transaction.units,
                charge: transaction.charge,
                sold_date: transaction.sold_date,
                profit_loss: transaction.profit_loss,
            };
            rows.push(persisted.clone());
            Ok(persisted)
        }
    }

    fn service() -> (MutualFundService, Arc<MockBuyRepository>) {
        let buys = Arc::new(MockBuyRepository::new());
        let service = MutualFundService::new(
            Arc::new(MockFundRepository::new()),
            buys.clone(),
            Arc::new(MockSellRepository::new()),
        );
        (service, buys)
    }

    fn new_buy(is_sold_out: bool) -> NewMutualFundBuyTransaction {
        NewMutualFundBuyTransaction {
            id: None,
            mf_id: 3,
            nav: 25.5,
            units: 100.0,
            charge: 1.5,
            buy_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            sold_units: 0.0,
            is_sold_out,
        }
    }

    #[tokio::test]
    async fn add_mutual_fund_assigns_an_id() {
        let (service, _) = service();
        let fund = service
            .add_mutual_fund(NewMutualFund {
                id: None,
                mf_code: "MF01".to_string(),
                mf_name: "Index Fund".to_string(),
                amc: "Acme AMC".to_string(),
                fund_type: "EQUITY".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(fund.id, 1);
        assert_eq!(service.get_mutual_funds().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn buy_transaction_is_stored_unsold_regardless_of_client_input() {
        let (service, _) = service();
        let created = service.add_buy_transaction(new_buy(true)).await.unwrap();
        assert!(!created.is_sold_out);
    }

    #[tokio::test]
    async fn buy_transaction_listing_partitions_on_sold_out() {
        let (service, buys) = service();
        service.add_buy_transaction(new_buy(false)).await.unwrap();
        service.add_buy_transaction(new_buy(false)).await.unwrap();
        // Flip one row behind the service's back, as a later sale would.
        buys.rows.lock().unwrap()[0].is_sold_out = true;

        let open = service.get_buy_transactions(false).unwrap();
        let closed = service.get_buy_transactions(true).unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(closed.len(), 1);
        assert_ne!(open[0].id, closed[0].id);
    }

    #[tokio::test]
    async fn sell_transactions_are_listed_unfiltered() {
        let (service, _) = service();
        let sell = NewMutualFundSellTransaction {
            id: None,
            mf_id: 3,
            buy_ids: vec![1, 2],
            nav: 30.0,
            units: 150.0,
            charge: 0.5,
            sold_date: Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap(),
            profit_loss: 225.0,
        };
        let created = service.add_sell_transaction(sell).await.unwrap();
        assert_eq!(created.buy_ids, vec![1, 2]);

        let all = service.get_sell_transactions().unwrap();
        assert_eq!(all.len(), 1);
    }
}
