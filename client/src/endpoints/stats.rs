//! Stats resource endpoints

use crate::transport::EndpointDescriptor;
use dietly_shared::models::Period;
use reqwest::Method;
use serde_json::json;

/// Remote operations on the stats resource.
#[derive(Debug, Clone)]
pub enum StatsEndpoint {
    Fetch { period: Period, user_id: i64 },
}

impl StatsEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            StatsEndpoint::Fetch { period, user_id } => EndpointDescriptor::with_params(
                Method::GET,
                "/api/v1/stats",
                json!({ "period": period.as_wire(), "userId": user_id }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fetch_query_shape() {
        let descriptor = StatsEndpoint::Fetch {
            period: Period::Weekly,
            user_id: 12,
        }
        .descriptor();
        assert_eq!(descriptor.method, Method::GET);
        assert_eq!(descriptor.path, "/api/v1/stats");
        let params = descriptor.params.unwrap();
        assert_eq!(params["period"], "WEEKLY");
        assert_eq!(params["userId"], 12);
    }

    #[rstest]
    #[case(Period::Daily, "DAILY")]
    #[case(Period::Weekly, "WEEKLY")]
    #[case(Period::Monthly, "MONTHLY")]
    fn test_every_period_has_a_wire_query_value(#[case] period: Period, #[case] wire: &str) {
        let descriptor = StatsEndpoint::Fetch { period, user_id: 1 }.descriptor();
        assert_eq!(descriptor.params.unwrap()["period"], wire);
    }
}
