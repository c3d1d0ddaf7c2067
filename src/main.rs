// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use leadrs::application::dto::lead_search_request::LeadSearchRequest;
use leadrs::application::use_cases::lead_search::LeadSearchUseCase;
use leadrs::config::settings::Settings;
use leadrs::engines::fetch_engine::FetchEngine;
use leadrs::infrastructure::search::serp_client::SerpClient;
use leadrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，接收查询参数并运行一次线索搜索，
/// 将联系人行交给（范围之外的）导出层：制表符分隔的标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting leadrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the request from command line arguments
    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| "Lawyers".to_string());
    let target_count: usize = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);
    let country = args.next().unwrap_or_else(|| "us".to_string());
    let language = args.next().unwrap_or_else(|| "en".to_string());

    let request = LeadSearchRequest {
        query,
        target_count,
        country,
        language,
    };

    // 4. Wire components
    let provider = Arc::new(SerpClient::from_settings(&settings.search)?);
    let engine = Arc::new(FetchEngine::new(Duration::from_secs(
        settings.fetch.timeout_secs,
    ))?);
    let use_case = LeadSearchUseCase::new(provider, engine, settings.fetch.concurrency);

    // 5. Run the search
    let report = use_case.execute(&request, settings.search.page_size).await?;

    if report.is_empty() {
        info!(
            "No contacts could be extracted ({} results scanned)",
            report.items_seen
        );
        return Ok(());
    }

    // 6. Hand the rows to the export boundary
    println!("name\tcompany\trole\temail\tphone");
    for contact in &report.contacts {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            contact.name, contact.company, contact.role, contact.email, contact.phone
        );
    }

    Ok(())
}
