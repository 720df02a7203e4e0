pub mod banks;
pub mod currency;
pub mod health;
pub mod news;
pub mod notifications;
pub mod rates;

pub use banks::{get_digital_bank, list_digital_banks};
pub use currency::{get_currency_pair, list_currency_pairs, update_currency_pair};
pub use health::{HealthResponse, health_check};
pub use news::{create_news, get_news_item, list_news, update_news_item};
pub use notifications::{list_notifications, mark_notification_read};
pub use rates::list_exchange_rates;
