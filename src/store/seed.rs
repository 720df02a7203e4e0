//! Static mock records loaded at process start.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::MemStore;
use crate::models::{
    NewCurrencyPair, NewDigitalBank, NewExchangeRate, NewNewsItem, NewNotification,
    NotificationKind, PairType,
};

/// Seed the store with the mock data set: 4 currency pairs, 3 digital
/// banks, 3 news items, 3 notifications and 5 exchange-rate tables.
pub async fn populate(store: &MemStore) {
    for pair in currency_pairs() {
        store.create_currency_pair(pair).await;
    }
    for bank in digital_banks() {
        store.create_digital_bank(bank).await;
    }
    for item in news() {
        store.create_news_item(item).await;
    }
    for notification in notifications() {
        store.create_notification(notification).await;
    }
    for rate in exchange_rates() {
        store.create_exchange_rate(rate).await;
    }
    tracing::info!("store seeded with mock data");
}

fn pair(
    name: &str,
    rate: Decimal,
    change24h: Decimal,
    change_percent: Decimal,
    high24h: Decimal,
    low24h: Decimal,
    open24h: Decimal,
    pair_type: PairType,
) -> NewCurrencyPair {
    let (base, quote) = name.split_once('/').unwrap_or((name, ""));
    NewCurrencyPair {
        name: name.to_string(),
        base_currency: base.to_string(),
        quote_currency: quote.to_string(),
        rate,
        change24h,
        change_percent,
        high24h,
        low24h,
        open24h,
        pair_type,
    }
}

fn currency_pairs() -> Vec<NewCurrencyPair> {
    vec![
        pair(
            "USD/EUR",
            Decimal::new(9134, 4),
            Decimal::new(23, 4),
            Decimal::new(25, 2),
            Decimal::new(9140, 4),
            Decimal::new(9111, 4),
            Decimal::new(9111, 4),
            PairType::Fiat,
        ),
        pair(
            "EUR/USD",
            Decimal::new(10945, 4),
            Decimal::new(-24, 4),
            Decimal::new(-22, 2),
            Decimal::new(10975, 4),
            Decimal::new(10945, 4),
            Decimal::new(10969, 4),
            PairType::Fiat,
        ),
        pair(
            "BTC/USD",
            Decimal::new(3724550, 2),
            Decimal::new(66825, 2),
            Decimal::new(183, 2),
            Decimal::new(3735000, 2),
            Decimal::new(3657725, 2),
            Decimal::new(3657725, 2),
            PairType::Crypto,
        ),
        pair(
            "ETH/USD",
            Decimal::new(201875, 2),
            Decimal::new(4250, 2),
            Decimal::new(215, 2),
            Decimal::new(202230, 2),
            Decimal::new(197625, 2),
            Decimal::new(197625, 2),
            PairType::Crypto,
        ),
    ]
}

fn digital_banks() -> Vec<NewDigitalBank> {
    vec![
        NewDigitalBank {
            name: "Wise".to_string(),
            website: "wisecrypto.com".to_string(),
            logo_url: "/logos/wise.svg".to_string(),
            transfer_fees: "0.5% - 1.5%".to_string(),
            exchange_rate: "Bank rate +0.5%".to_string(),
            transfer_speed: "1-3 business days".to_string(),
            supported_countries: "170+ countries".to_string(),
            currency_rates: BTreeMap::from([
                ("USD/EUR".to_string(), Decimal::new(9125, 4)),
                ("EUR/USD".to_string(), Decimal::new(10962, 4)),
                ("USD/GBP".to_string(), Decimal::new(7845, 4)),
                ("USD/JPY".to_string(), Decimal::new(15035, 2)),
                ("USD/AED".to_string(), Decimal::new(36725, 4)),
                ("USD/SAR".to_string(), Decimal::new(37500, 4)),
            ]),
            black_market_rates: BTreeMap::from([
                ("USD/EGP".to_string(), Decimal::new(6575, 2)),
                ("USD/LBP".to_string(), Decimal::new(89500, 0)),
                ("USD/SYP".to_string(), Decimal::new(13750, 0)),
                ("USD/IQD".to_string(), Decimal::new(1460, 0)),
            ]),
        },
        NewDigitalBank {
            name: "Paysera".to_string(),
            website: "paysera.com".to_string(),
            logo_url: "/logos/paysera.svg".to_string(),
            transfer_fees: "0.8% - 2.0%".to_string(),
            exchange_rate: "Bank rate +0.7%".to_string(),
            transfer_speed: "1-2 business days".to_string(),
            supported_countries: "150+ countries".to_string(),
            currency_rates: BTreeMap::from([
                ("USD/EUR".to_string(), Decimal::new(9115, 4)),
                ("EUR/USD".to_string(), Decimal::new(10970, 4)),
                ("USD/GBP".to_string(), Decimal::new(7835, 4)),
                ("USD/JPY".to_string(), Decimal::new(15045, 2)),
                ("USD/AED".to_string(), Decimal::new(36730, 4)),
                ("USD/SAR".to_string(), Decimal::new(37515, 4)),
            ]),
            black_market_rates: BTreeMap::from([
                ("USD/EGP".to_string(), Decimal::new(6610, 2)),
                ("USD/LBP".to_string(), Decimal::new(89800, 0)),
                ("USD/SYP".to_string(), Decimal::new(13800, 0)),
                ("USD/IQD".to_string(), Decimal::new(1465, 0)),
            ]),
        },
        NewDigitalBank {
            name: "Revolut".to_string(),
            website: "revolut.com".to_string(),
            logo_url: "/logos/revolut.svg".to_string(),
            transfer_fees: "0.4% - 1.8%".to_string(),
            exchange_rate: "Bank rate +1.0%".to_string(),
            transfer_speed: "1-5 business days".to_string(),
            supported_countries: "120+ countries".to_string(),
            currency_rates: BTreeMap::from([
                ("USD/EUR".to_string(), Decimal::new(9142, 4)),
                ("EUR/USD".to_string(), Decimal::new(10938, 4)),
                ("USD/GBP".to_string(), Decimal::new(7862, 4)),
                ("USD/JPY".to_string(), Decimal::new(15025, 2)),
                ("USD/AED".to_string(), Decimal::new(36720, 4)),
                ("USD/SAR".to_string(), Decimal::new(37490, 4)),
            ]),
            black_market_rates: BTreeMap::from([
                ("USD/EGP".to_string(), Decimal::new(6590, 2)),
                ("USD/LBP".to_string(), Decimal::new(89200, 0)),
                ("USD/SYP".to_string(), Decimal::new(13680, 0)),
                ("USD/IQD".to_string(), Decimal::new(1455, 0)),
            ]),
        },
    ]
}

fn news() -> Vec<NewNewsItem> {
    let bitcoin_summary = "Bitcoin climbed above $37,000 for the first time in months \
                           after the securities regulator approved spot Bitcoin ETFs.";
    let wise_summary = "Wise announced a new package of services designed for small and \
                        medium businesses across the Middle East region.";
    let euro_summary = "The euro rose notably against the US dollar as positive signals \
                        emerged around the European economy's recovery from the inflation crisis.";
    vec![
        NewNewsItem {
            title: "Bitcoin rallies past $37,000 after ETF approval".to_string(),
            content: bitcoin_summary.to_string(),
            summary: bitcoin_summary.to_string(),
            category: "crypto".to_string(),
            image_url: "/images/bitcoin-news.jpg".to_string(),
            published_at: None,
        },
        NewNewsItem {
            title: "Wise launches new business services in the Middle East".to_string(),
            content: wise_summary.to_string(),
            summary: wise_summary.to_string(),
            category: "digitalBanking".to_string(),
            image_url: "/images/wise-news.jpg".to_string(),
            published_at: None,
        },
        NewNewsItem {
            title: "Euro regains strength against the dollar".to_string(),
            content: euro_summary.to_string(),
            summary: euro_summary.to_string(),
            category: "currencies".to_string(),
            image_url: "/images/euro-news.jpg".to_string(),
            published_at: None,
        },
    ]
}

fn notifications() -> Vec<NewNotification> {
    vec![
        NewNotification {
            title: "USD up against the euro".to_string(),
            message: "The dollar gained 0.25% against the euro over the past hours".to_string(),
            kind: NotificationKind::Success,
            icon: "arrow-up".to_string(),
            read: false,
        },
        NewNotification {
            title: "Bitcoin down 2.5%".to_string(),
            message: "Bitcoin saw a notable drop over the past hours".to_string(),
            kind: NotificationKind::Error,
            icon: "arrow-down".to_string(),
            read: false,
        },
        NewNotification {
            title: "Wise transfer rates updated".to_string(),
            message: "Transfer rates on the Wise platform were updated for major currencies"
                .to_string(),
            kind: NotificationKind::Info,
            icon: "info".to_string(),
            read: false,
        },
    ]
}

fn exchange_rates() -> Vec<NewExchangeRate> {
    vec![
        NewExchangeRate {
            base_currency: "USD".to_string(),
            rates: BTreeMap::from([
                ("EUR".to_string(), Decimal::new(9134, 4)),
                ("GBP".to_string(), Decimal::new(7835, 4)),
                ("JPY".to_string(), Decimal::new(15025, 2)),
                ("BTC".to_string(), Decimal::new(27, 6)),
            ]),
        },
        NewExchangeRate {
            base_currency: "EUR".to_string(),
            rates: BTreeMap::from([
                ("USD".to_string(), Decimal::new(10945, 4)),
                ("GBP".to_string(), Decimal::new(8576, 4)),
                ("JPY".to_string(), Decimal::new(16450, 2)),
                ("BTC".to_string(), Decimal::new(29, 6)),
            ]),
        },
        NewExchangeRate {
            base_currency: "GBP".to_string(),
            rates: BTreeMap::from([
                ("USD".to_string(), Decimal::new(12764, 4)),
                ("EUR".to_string(), Decimal::new(11660, 4)),
                ("JPY".to_string(), Decimal::new(19182, 2)),
                ("BTC".to_string(), Decimal::new(34, 6)),
            ]),
        },
        NewExchangeRate {
            base_currency: "JPY".to_string(),
            rates: BTreeMap::from([
                ("USD".to_string(), Decimal::new(665, 5)),
                ("EUR".to_string(), Decimal::new(608, 5)),
                ("GBP".to_string(), Decimal::new(521, 5)),
                ("BTC".to_string(), Decimal::new(18, 8)),
            ]),
        },
        NewExchangeRate {
            base_currency: "BTC".to_string(),
            rates: BTreeMap::from([
                ("USD".to_string(), Decimal::new(3724550, 2)),
                ("EUR".to_string(), Decimal::new(3402575, 2)),
                ("GBP".to_string(), Decimal::new(2911860, 2)),
                ("JPY".to_string(), Decimal::new(559767525, 2)),
            ]),
        },
    ]
}
