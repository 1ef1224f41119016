// SPDX-License-Identifier: MPL-2.0
//! Mock analysis service shared by the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SITE_URL: &str = "https://www.example.co.jp";

/// Successful analysis body, shaped like the service's real answers.
pub fn success_body() -> Value {
    json!({
        "message": "Success",
        "basic_info": {
            "company_name": "株式会社サンプル",
            "business_description": "ソフトウェア開発",
            "address": "東京都千代田区1-1-1",
            "representative": "山田 太郎",
            "tel": "03-1234-5678",
            "business_hours": ""
        },
        "analysis": {
            "summary": "堅実な中堅企業",
            "investor_analysis": "安定した収益基盤",
            "job_seeker_info": "研修制度が充実"
        },
        "raw_text": "..."
    })
}

/// Error body as sent by the service when scraping fails.
pub fn error_body(message: &str) -> Value {
    json!({
        "message": "Error",
        "error": message,
        "basic_info": {
            "company_name": "取得できませんでした",
            "business_description": "取得できませんでした",
            "address": "取得できませんでした",
            "representative": "取得できませんでした",
            "tel": "取得できませんでした",
            "business_hours": "取得できませんでした"
        }
    })
}

/// Starts a server expecting exactly one analysis request for `site`.
pub async fn mock_scrape_server(site: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scrape"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": site })))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    server
}

/// Base URL on which nothing is listening.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
