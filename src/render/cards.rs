use super::datetime::format_date_time;
use super::{escape_html, safe_href};
use crate::models::{GeneralInfo, NewsItem, PriceRecord, Scalar, SentimentRecord};

/// A record that renders itself as one dashboard card.
pub trait Card {
    fn to_html(&self) -> String;
}

fn text(value: &Scalar) -> String {
    escape_html(&value.to_string())
}

pub fn general_info_card(data: &GeneralInfo) -> String {
    format!(
        concat!(
            r#"<div class="card">"#,
            "<h3>{coin} - {full_name}</h3>",
            "<p>Launch Date: {launch_date}</p>",
            "<p>Algorithm: {algorithm}</p>",
            "<p>Proof Type: {proof_type}</p>",
            "<p>Price: ${price}</p>",
            "<p>Market Cap: {market_cap}</p>",
            "</div>"
        ),
        coin = text(&data.coin),
        full_name = text(&data.full_name),
        launch_date = text(&data.launch_date),
        algorithm = text(&data.algorithm),
        proof_type = text(&data.proof_type),
        price = text(&data.price_usd),
        market_cap = text(&data.market_cap_usd),
    )
}

pub fn price_card(data: &PriceRecord) -> String {
    format!(
        r#"<div class="card price-card"><span>{}</span><span>${}</span></div>"#,
        text(&data.coin),
        text(&data.price_usd),
    )
}

pub fn news_card(data: &NewsItem) -> String {
    let link = data.link.to_string();
    format!(
        concat!(
            r#"<div class="card news-card">"#,
            "<h3>{title}</h3>",
            "<p>Source: {source}</p>",
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">Read More</a>"#,
            "<p>Time: {time}</p>",
            "</div>"
        ),
        title = text(&data.title),
        source = text(&data.source),
        href = escape_html(safe_href(&link)),
        time = escape_html(&format_date_time(&data.time_utc)),
    )
}

/// Sentiment score scaled from 0..=10000 to a percentage with two decimals,
/// halves rounded away from zero. A missing or zero score is `"0"`;
/// out-of-range scores are not clamped.
pub fn buzz_level(score: Option<f64>) -> String {
    match score {
        Some(s) if s != 0.0 && s.is_finite() => {
            let percent = s / 10000.0 * 100.0;
            format!("{:.2}", (percent * 100.0).round() / 100.0)
        }
        _ => "0".to_string(),
    }
}

pub fn sentiment_card(data: &SentimentRecord) -> String {
    format!(
        concat!(
            r#"<div class="card">"#,
            "<h3>{symbol}</h3>",
            "<p>{interpretation}</p>",
            r#"<div class="sentiment-gauge">"#,
            r#"<div class="sentiment-bar" style="width: {buzz}%"></div>"#,
            "</div>",
            "</div>"
        ),
        symbol = text(&data.symbol),
        interpretation = text(&data.interpretation),
        buzz = buzz_level(data.score),
    )
}

impl Card for GeneralInfo {
    fn to_html(&self) -> String {
        general_info_card(self)
    }
}

impl Card for PriceRecord {
    fn to_html(&self) -> String {
        price_card(self)
    }
}

impl Card for NewsItem {
    fn to_html(&self) -> String {
        news_card(self)
    }
}

impl Card for SentimentRecord {
    fn to_html(&self) -> String {
        sentiment_card(self)
    }
}
