//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorBody;
use crate::models::{
    CurrencyPair, CurrencyPairPatch, DigitalBank, ExchangeRate, NewNewsItem, NewsItem,
    NewsItemPatch, Notification,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RateWatch API",
        version = "1.0.0",
        description = "Live currency rates, digital bank comparison, news and notifications.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::currency::list_currency_pairs,
        crate::gateway::handlers::currency::get_currency_pair,
        crate::gateway::handlers::currency::update_currency_pair,
        crate::gateway::handlers::banks::list_digital_banks,
        crate::gateway::handlers::banks::get_digital_bank,
        crate::gateway::handlers::news::list_news,
        crate::gateway::handlers::news::get_news_item,
        crate::gateway::handlers::news::create_news,
        crate::gateway::handlers::news::update_news_item,
        crate::gateway::handlers::notifications::list_notifications,
        crate::gateway::handlers::notifications::mark_notification_read,
        crate::gateway::handlers::rates::list_exchange_rates,
    ),
    components(
        schemas(
            CurrencyPair,
            CurrencyPairPatch,
            DigitalBank,
            NewsItem,
            NewNewsItem,
            NewsItemPatch,
            Notification,
            ExchangeRate,
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Currency Pairs", description = "Live currency pair quotes"),
        (name = "Digital Banks", description = "Digital bank comparison data"),
        (name = "News", description = "Market and banking news"),
        (name = "Notifications", description = "User-facing notifications"),
        (name = "Exchange Rates", description = "Calculator rate tables"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "RateWatch API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("RateWatch API"));
    }

    #[test]
    fn rest_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths.paths;
        assert!(paths.contains_key("/api/currency-pairs"));
        assert!(paths.contains_key("/api/currency-pairs/{id}"));
        assert!(paths.contains_key("/api/digital-banks"));
        assert!(paths.contains_key("/api/news"));
        assert!(paths.contains_key("/api/notifications/{id}/read"));
        assert!(paths.contains_key("/api/exchange-rates"));
        assert!(paths.contains_key("/api/health"));
    }
}
