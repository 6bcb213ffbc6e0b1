//! Stats use case - aggregated nutrition history

use crate::repositories::StatsRepository;
use dietly_shared::errors::NetworkError;
use dietly_shared::models::{Period, StatsSample};
use std::sync::Arc;

#[derive(Clone)]
pub struct StatsUseCase {
    repo: Arc<dyn StatsRepository>,
}

impl StatsUseCase {
    pub fn new(repo: Arc<dyn StatsRepository>) -> Self {
        Self { repo }
    }

    /// Aggregated samples for the requested period. Samples carrying an
    /// unrecognized period string map to `Daily` rather than failing the
    /// whole fetch.
    pub async fn fetch(
        &self,
        period: Period,
        user_id: i64,
    ) -> Result<Vec<StatsSample>, NetworkError> {
        let samples = self.repo.fetch(period, user_id).await?;
        Ok(samples.into_iter().map(StatsSample::from_dto).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use dietly_shared::types::StatsSampleResponse;

    struct StubStatsRepository {
        samples: Vec<StatsSampleResponse>,
    }

    #[async_trait]
    impl StatsRepository for StubStatsRepository {
        async fn fetch(
            &self,
            _period: Period,
            _user_id: i64,
        ) -> Result<Vec<StatsSampleResponse>, NetworkError> {
            Ok(self.samples.clone())
        }
    }

    fn sample(period_type: &str, calories: f64) -> StatsSampleResponse {
        StatsSampleResponse {
            period_type: period_type.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            calories,
            carbohydrates: 180.0,
            protein: 90.0,
            fat: 50.0,
        }
    }

    #[tokio::test]
    async fn test_fetch_maps_known_and_unknown_periods() {
        let repo = Arc::new(StubStatsRepository {
            samples: vec![sample("WEEKLY", 1900.0), sample("BIWEEKLY", 2100.0)],
        });
        let usecase = StatsUseCase::new(repo);

        let samples = usecase.fetch(Period::Weekly, 42).await.unwrap();
        assert_eq!(samples[0].period, Period::Weekly);
        assert_eq!(samples[0].nutrition.calories, 1900.0);
        // Unknown period strings fall back to Daily instead of erroring.
        assert_eq!(samples[1].period, Period::Daily);
    }
}
