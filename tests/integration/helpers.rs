// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 构造一页自然结果的响应体
pub fn organic_page(items: &[(&str, &str, &str)]) -> Value {
    json!({
        "organic": items
            .iter()
            .map(|(title, snippet, link)| json!({
                "title": title,
                "snippet": snippet,
                "link": link,
            }))
            .collect::<Vec<_>>()
    })
}

/// 在指定偏移处挂载一页搜索结果
pub async fn mount_search_page(server: &MockServer, start: usize, body: Value) {
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({ "start": start })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// 在指定偏移处挂载一个失败的搜索响应
pub async fn mount_search_failure(server: &MockServer, start: usize, status: u16) {
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({ "start": start })))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// 挂载一个返回 HTML 的页面
pub async fn mount_html_page(server: &MockServer, page_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html.to_string()))
        .mount(server)
        .await;
}
