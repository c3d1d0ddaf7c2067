// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{mount_html_page, mount_search_failure, mount_search_page, organic_page};
use leadrs::application::dto::lead_search_request::LeadSearchRequest;
use leadrs::application::use_cases::lead_search::{LeadSearchError, LeadSearchUseCase};
use leadrs::engines::fetch_engine::FetchEngine;
use leadrs::infrastructure::search::paginator::PaginationHalt;
use leadrs::infrastructure::search::serp_client::SerpClient;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn use_case(search_server: &MockServer) -> LeadSearchUseCase {
    let provider = Arc::new(
        SerpClient::new(
            format!("{}/search", search_server.uri()),
            "test-key",
            Duration::from_secs(5),
        )
        .unwrap(),
    );
    let engine = Arc::new(FetchEngine::new(Duration::from_secs(5)).unwrap());
    LeadSearchUseCase::new(provider, engine, 10)
}

fn request(query: &str, target_count: usize, country: &str) -> LeadSearchRequest {
    LeadSearchRequest {
        query: query.to_string(),
        target_count,
        country: country.to_string(),
        language: "es".to_string(),
    }
}

fn as_refs(items: &[(String, String, String)]) -> Vec<(&str, &str, &str)> {
    items
        .iter()
        .map(|(t, s, l)| (t.as_str(), s.as_str(), l.as_str()))
        .collect()
}

/// 端到端场景：两页各 10 条结果，3 条摘要含有效邮箱（2 个去重后），
/// 目标 5 → 摘要阶段产出 2 个联系人，页面阶段补齐到 5，无重复邮箱
#[tokio::test]
async fn test_end_to_end_lawyers_in_spain() {
    let search_server = MockServer::start().await;
    let page_server = MockServer::start().await;

    let link = |i: usize| format!("{}/p/{}", page_server.uri(), i);

    // 第一页：条目 0 和 1 的摘要含不同邮箱，条目 2 是重复邮箱
    let mut page1: Vec<(String, String, String)> = Vec::new();
    page1.push(("Bufete García".to_string(), "Empresa: García y Asociados, info@garcia.es".to_string(), link(0)));
    page1.push(("López Abogados".to_string(), "consultas legal@lopez.es".to_string(), link(1)));
    page1.push(("Directorio jurídico".to_string(), "lista a info@garcia.es".to_string(), link(2)));
    for i in 3..10 {
        page1.push((format!("Despacho {}", i), "abogados en Madrid".to_string(), link(i)));
    }

    let mut page2: Vec<(String, String, String)> = Vec::new();
    for i in 10..20 {
        page2.push((format!("Despacho {}", i), "abogados en Barcelona".to_string(), link(i)));
    }

    mount_search_page(&search_server, 0, organic_page(&as_refs(&page1))).await;
    mount_search_page(&search_server, 10, organic_page(&as_refs(&page2))).await;
    mount_search_page(&search_server, 20, json!({ "organic": [] })).await;

    // 其中三个页面公开了新邮箱，一个页面重复已见过的邮箱，其余 404
    mount_html_page(&page_server, "/p/3", "<p>Contacto: despacho@firm3.es</p>").await;
    mount_html_page(&page_server, "/p/4", "<p>escríbenos a abogados@firm4.es</p>").await;
    mount_html_page(&page_server, "/p/15", "<footer>contacto@firm15.es</footer>").await;
    mount_html_page(&page_server, "/p/12", "<p>info@garcia.es</p>").await;

    let report = use_case(&search_server)
        .execute(&request("Lawyers", 5, "Spain"), 10)
        .await
        .unwrap();

    assert_eq!(report.items_seen, 20);
    assert_eq!(report.contacts.len(), 5);

    // 摘要阶段的两个联系人在前，顺序确定
    assert_eq!(report.contacts[0].email, "info@garcia.es");
    assert_eq!(report.contacts[0].name, "Bufete García");
    assert_eq!(report.contacts[0].company, "García y Asociados, info@garcia.es");
    assert_eq!(report.contacts[1].email, "legal@lopez.es");

    // 无重复邮箱
    let emails: HashSet<&str> = report.contacts.iter().map(|c| c.email.as_str()).collect();
    assert_eq!(emails.len(), 5);

    // 页面阶段发现的邮箱都在其中
    assert!(emails.contains("despacho@firm3.es"));
    assert!(emails.contains("abogados@firm4.es"));
    assert!(emails.contains("contacto@firm15.es"));
}

/// 所有页面抓取都失败时，摘要阶段的联系人不受影响
#[tokio::test]
async fn test_page_fetch_failures_leave_snippet_contacts() {
    let search_server = MockServer::start().await;
    let page_server = MockServer::start().await;

    // 任何页面请求都返回 500
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&page_server)
        .await;

    let link = |i: usize| format!("{}/p/{}", page_server.uri(), i);
    let mut page1: Vec<(String, String, String)> = Vec::new();
    page1.push(("Bufete García".to_string(), "info@garcia.es".to_string(), link(0)));
    page1.push(("López Abogados".to_string(), "legal@lopez.es".to_string(), link(1)));
    for i in 2..10 {
        page1.push((format!("Despacho {}", i), "sin correo".to_string(), link(i)));
    }
    mount_search_page(&search_server, 0, organic_page(&as_refs(&page1))).await;
    mount_search_page(&search_server, 10, json!({ "organic": [] })).await;

    let report = use_case(&search_server)
        .execute(&request("Lawyers", 5, "Spain"), 10)
        .await
        .unwrap();

    assert_eq!(report.contacts.len(), 2);
    assert_eq!(report.contacts[0].email, "info@garcia.es");
    assert_eq!(report.contacts[1].email, "legal@lopez.es");
}

/// 首页请求就失败且没有任何累计数据时，运行以 SearchUnavailable 终止
#[tokio::test]
async fn test_unreachable_search_api_is_fatal() {
    let search_server = MockServer::start().await;
    mount_search_failure(&search_server, 0, 500).await;

    let result = use_case(&search_server)
        .execute(&request("Lawyers", 5, "Spain"), 10)
        .await;

    assert!(matches!(result, Err(LeadSearchError::SearchUnavailable(_))));
}

/// 搜索成功但没有任何可抽取邮箱时，报告为空而非错误
#[tokio::test]
async fn test_empty_extraction_is_reported_not_failed() {
    let search_server = MockServer::start().await;
    let page_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>sin datos de contacto</p>"))
        .mount(&page_server)
        .await;

    let items: Vec<(String, String, String)> = (0..3)
        .map(|i| {
            (
                format!("Despacho {}", i),
                "sin correo".to_string(),
                format!("{}/p/{}", page_server.uri(), i),
            )
        })
        .collect();
    mount_search_page(&search_server, 0, organic_page(&as_refs(&items))).await;
    mount_search_page(&search_server, 10, json!({ "organic": [] })).await;

    let report = use_case(&search_server)
        .execute(&request("Notarios", 5, "Spain"), 10)
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.items_seen, 3);
    assert_eq!(report.halt, PaginationHalt::Exhausted);
}

/// 无效请求在进入流水线前被拒绝
#[tokio::test]
async fn test_invalid_request_is_rejected() {
    let search_server = MockServer::start().await;

    let result = use_case(&search_server)
        .execute(&request("", 5, "Spain"), 10)
        .await;

    assert!(matches!(result, Err(LeadSearchError::ValidationError(_))));
}
