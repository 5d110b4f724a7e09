//! Dashboard page template.
//!
//! The page is rendered server-side: each section embeds the current markup
//! of its container, and the refresh button posts back to `/refresh`.

use super::{
    Page, GENERAL_INFO_CONTAINER, NEWS_CONTAINER, PRICES_CONTAINER, REFRESH_BUTTON,
    SENTIMENT_CONTAINER,
};

pub const STYLES: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #1e293b 0%, #0f172a 100%);
            color: #333;
            min-height: 100vh;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            padding: 20px;
        }

        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 30px;
            color: white;
        }

        header h1 {
            font-size: 2rem;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
        }

        section {
            margin-bottom: 30px;
        }

        section h2 {
            color: #e2e8f0;
            margin-bottom: 15px;
        }

        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 20px;
        }

        .card {
            background: white;
            border-radius: 15px;
            padding: 20px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
        }

        .card h3 {
            color: #4f46e5;
            margin-bottom: 10px;
            font-size: 1.1rem;
        }

        .card p {
            margin: 4px 0;
        }

        .price-card {
            display: flex;
            justify-content: space-between;
            font-weight: bold;
        }

        .news-card a {
            color: #4f46e5;
        }

        .sentiment-gauge {
            margin-top: 10px;
            height: 10px;
            border-radius: 5px;
            background: #e2e8f0;
            overflow: hidden;
        }

        .sentiment-bar {
            height: 100%;
            max-width: 100%;
            background: linear-gradient(90deg, #22c55e, #f59e0b, #ef4444);
        }

        .loading {
            color: #94a3b8;
        }

        .text-red-500 {
            color: #ef4444;
        }

        .refresh-btn {
            background: #4f46e5;
            color: white;
            border: none;
            border-radius: 8px;
            padding: 10px 18px;
            font-size: 1rem;
            cursor: pointer;
        }

        .refresh-btn:hover {
            background: #4338ca;
        }
"#;

pub fn render_page(page: &Page) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crypto Dashboard</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Crypto Dashboard</h1>
            <form method="post" action="/refresh">
                <button type="submit" class="refresh-btn" id="{refresh_id}">Refresh</button>
            </form>
        </header>

        <section>
            <h2>General Info</h2>
            <div class="grid" id="{general_id}">{general}</div>
        </section>

        <section>
            <h2>Prices</h2>
            <div class="grid" id="{prices_id}">{prices}</div>
        </section>

        <section>
            <h2>News</h2>
            <div class="grid" id="{news_id}">{news}</div>
        </section>

        <section>
            <h2>Sentiment</h2>
            <div class="grid" id="{sentiment_id}">{sentiment}</div>
        </section>
    </div>
</body>
</html>"#,
        css = STYLES,
        refresh_id = REFRESH_BUTTON,
        general_id = GENERAL_INFO_CONTAINER,
        general = page.general_info.markup(),
        prices_id = PRICES_CONTAINER,
        prices = page.prices.markup(),
        news_id = NEWS_CONTAINER,
        news = page.news.markup(),
        sentiment_id = SENTIMENT_CONTAINER,
        sentiment = page.sentiment.markup(),
    )
}
