//! In-memory keyed-map repository for all dashboard entities.
//!
//! Five collections keyed by a per-collection monotonic id. Every operation
//! takes and releases the lock within a single call, so each mutation is
//! logically atomic. Reads never fail; updates on a missing id return `None`.

pub mod seed;

use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{
    CurrencyPair, CurrencyPairPatch, DigitalBank, ExchangeRate, ExchangeRatePatch, NewCurrencyPair,
    NewDigitalBank, NewExchangeRate, NewNewsItem, NewNotification, NewsItem, NewsItemPatch,
    Notification, PairType,
};

/// Per-collection id counter. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
struct IdCounter(u32);

impl IdCounter {
    fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Default)]
struct Collections {
    currency_pairs: BTreeMap<u32, CurrencyPair>,
    digital_banks: BTreeMap<u32, DigitalBank>,
    news: BTreeMap<u32, NewsItem>,
    notifications: BTreeMap<u32, Notification>,
    exchange_rates: BTreeMap<u32, ExchangeRate>,

    pair_ids: IdCounter,
    bank_ids: IdCounter,
    news_ids: IdCounter,
    notification_ids: IdCounter,
    rate_ids: IdCounter,
}

/// In-memory store. Construct one per process and share it via `Arc`.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: RwLock<Collections>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Currency pairs
    // ------------------------------------------------------------------

    /// All pairs in creation order.
    pub async fn currency_pairs(&self) -> Vec<CurrencyPair> {
        self.inner.read().await.currency_pairs.values().cloned().collect()
    }

    pub async fn currency_pairs_by_type(&self, pair_type: PairType) -> Vec<CurrencyPair> {
        self.inner
            .read()
            .await
            .currency_pairs
            .values()
            .filter(|p| p.pair_type == pair_type)
            .cloned()
            .collect()
    }

    pub async fn currency_pair(&self, id: u32) -> Option<CurrencyPair> {
        self.inner.read().await.currency_pairs.get(&id).cloned()
    }

    pub async fn create_currency_pair(&self, new: NewCurrencyPair) -> CurrencyPair {
        let mut inner = self.inner.write().await;
        let id = inner.pair_ids.next();
        let pair = CurrencyPair {
            id,
            name: new.name,
            base_currency: new.base_currency,
            quote_currency: new.quote_currency,
            rate: new.rate,
            change24h: new.change24h,
            change_percent: new.change_percent,
            high24h: new.high24h,
            low24h: new.low24h,
            open24h: new.open24h,
            pair_type: new.pair_type,
            updated_at: Utc::now(),
        };
        inner.currency_pairs.insert(id, pair.clone());
        pair
    }

    /// Applies the supplied fields and stamps `updatedAt` unconditionally.
    pub async fn update_currency_pair(
        &self,
        id: u32,
        patch: CurrencyPairPatch,
    ) -> Option<CurrencyPair> {
        let mut inner = self.inner.write().await;
        let pair = inner.currency_pairs.get_mut(&id)?;
        if let Some(name) = patch.name {
            pair.name = name;
        }
        if let Some(base) = patch.base_currency {
            pair.base_currency = base;
        }
        if let Some(quote) = patch.quote_currency {
            pair.quote_currency = quote;
        }
        if let Some(rate) = patch.rate {
            pair.rate = rate;
        }
        if let Some(change) = patch.change24h {
            pair.change24h = change;
        }
        if let Some(percent) = patch.change_percent {
            pair.change_percent = percent;
        }
        if let Some(high) = patch.high24h {
            pair.high24h = high;
        }
        if let Some(low) = patch.low24h {
            pair.low24h = low;
        }
        if let Some(open) = patch.open24h {
            pair.open24h = open;
        }
        if let Some(pair_type) = patch.pair_type {
            pair.pair_type = pair_type;
        }
        pair.updated_at = Utc::now();
        Some(pair.clone())
    }

    // ------------------------------------------------------------------
    // Digital banks
    // ------------------------------------------------------------------

    pub async fn digital_banks(&self) -> Vec<DigitalBank> {
        self.inner.read().await.digital_banks.values().cloned().collect()
    }

    pub async fn digital_bank(&self, id: u32) -> Option<DigitalBank> {
        self.inner.read().await.digital_banks.get(&id).cloned()
    }

    pub async fn create_digital_bank(&self, new: NewDigitalBank) -> DigitalBank {
        let mut inner = self.inner.write().await;
        let id = inner.bank_ids.next();
        let bank = DigitalBank {
            id,
            name: new.name,
            website: new.website,
            logo_url: new.logo_url,
            transfer_fees: new.transfer_fees,
            exchange_rate: new.exchange_rate,
            transfer_speed: new.transfer_speed,
            supported_countries: new.supported_countries,
            currency_rates: new.currency_rates,
            black_market_rates: new.black_market_rates,
        };
        inner.digital_banks.insert(id, bank.clone());
        bank
    }

    // ------------------------------------------------------------------
    // News
    // ------------------------------------------------------------------

    /// All news, newest first.
    pub async fn news(&self) -> Vec<NewsItem> {
        let mut items: Vec<NewsItem> = self.inner.read().await.news.values().cloned().collect();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        items
    }

    pub async fn news_by_category(&self, category: &str) -> Vec<NewsItem> {
        let mut items: Vec<NewsItem> = self
            .inner
            .read()
            .await
            .news
            .values()
            .filter(|item| item.category == category)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        items
    }

    pub async fn news_item(&self, id: u32) -> Option<NewsItem> {
        self.inner.read().await.news.get(&id).cloned()
    }

    pub async fn create_news_item(&self, new: NewNewsItem) -> NewsItem {
        let mut inner = self.inner.write().await;
        let id = inner.news_ids.next();
        let item = NewsItem {
            id,
            title: new.title,
            content: new.content,
            summary: new.summary,
            category: new.category,
            image_url: new.image_url,
            published_at: new.published_at.unwrap_or_else(Utc::now),
        };
        inner.news.insert(id, item.clone());
        item
    }

    /// The original publish timestamp is preserved unless the patch carries
    /// a new one.
    pub async fn update_news_item(&self, id: u32, patch: NewsItemPatch) -> Option<NewsItem> {
        let mut inner = self.inner.write().await;
        let item = inner.news.get_mut(&id)?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(content) = patch.content {
            item.content = content;
        }
        if let Some(summary) = patch.summary {
            item.summary = summary;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(image_url) = patch.image_url {
            item.image_url = image_url;
        }
        if let Some(published_at) = patch.published_at {
            item.published_at = published_at;
        }
        Some(item.clone())
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// All notifications, newest first.
    pub async fn notifications(&self) -> Vec<Notification> {
        let mut items: Vec<Notification> =
            self.inner.read().await.notifications.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    pub async fn notification(&self, id: u32) -> Option<Notification> {
        self.inner.read().await.notifications.get(&id).cloned()
    }

    pub async fn create_notification(&self, new: NewNotification) -> Notification {
        let mut inner = self.inner.write().await;
        let id = inner.notification_ids.next();
        let notification = Notification {
            id,
            title: new.title,
            message: new.message,
            kind: new.kind,
            icon: new.icon,
            read: new.read,
            created_at: Utc::now(),
        };
        inner.notifications.insert(id, notification.clone());
        notification
    }

    /// One-way unread -> read transition; marking an already-read
    /// notification again is a no-op success.
    pub async fn mark_notification_read(&self, id: u32) -> Option<Notification> {
        let mut inner = self.inner.write().await;
        let notification = inner.notifications.get_mut(&id)?;
        notification.read = true;
        Some(notification.clone())
    }

    // ------------------------------------------------------------------
    // Exchange rates
    // ------------------------------------------------------------------

    pub async fn exchange_rates(&self) -> Vec<ExchangeRate> {
        self.inner.read().await.exchange_rates.values().cloned().collect()
    }

    pub async fn exchange_rate_by_base(&self, base_currency: &str) -> Option<ExchangeRate> {
        self.inner
            .read()
            .await
            .exchange_rates
            .values()
            .find(|rate| rate.base_currency == base_currency)
            .cloned()
    }

    pub async fn create_exchange_rate(&self, new: NewExchangeRate) -> ExchangeRate {
        let mut inner = self.inner.write().await;
        let id = inner.rate_ids.next();
        let rate = ExchangeRate {
            id,
            base_currency: new.base_currency,
            rates: new.rates,
            updated_at: Utc::now(),
        };
        inner.exchange_rates.insert(id, rate.clone());
        rate
    }

    /// Applies the supplied fields and stamps `updatedAt` unconditionally.
    pub async fn update_exchange_rate(
        &self,
        id: u32,
        patch: ExchangeRatePatch,
    ) -> Option<ExchangeRate> {
        let mut inner = self.inner.write().await;
        let rate = inner.exchange_rates.get_mut(&id)?;
        if let Some(base) = patch.base_currency {
            rate.base_currency = base;
        }
        if let Some(rates) = patch.rates {
            rate.rates = rates;
        }
        rate.updated_at = Utc::now();
        Some(rate.clone())
    }
}
