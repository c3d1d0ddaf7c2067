// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::budget::SearchBudget;
use crate::domain::models::contact::Contact;
use crate::domain::models::search_result::SearchResultItem;
use crate::engines::traits::PageEngine;
use crate::utils::extraction::FieldExtractor;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// 页面抓取任务池的默认容量
pub const DEFAULT_FETCH_CONCURRENCY: usize = 10;

/// 联系人聚合器
///
/// 两阶段算法：先对 API 摘要顺序抽取（确定性输出顺序），
/// 再对未命中的条目通过有界任务池并发抓取页面（完成顺序输出）。
/// 邮箱去重集合和结果列表仅由消费循环单线程写入，
/// check-then-insert 相对其他任务完成事件是原子的。
pub struct ContactAggregator {
    engine: Arc<dyn PageEngine>,
    concurrency: usize,
}

impl ContactAggregator {
    pub fn new(engine: Arc<dyn PageEngine>, concurrency: usize) -> Self {
        Self {
            engine,
            concurrency: concurrency.max(1),
        }
    }

    /// 聚合搜索结果为去重后的联系人列表
    ///
    /// 结果长度不超过 `budget.target_count`；达到上限后不再
    /// 消费任何任务结果，尚在途的抓取被丢弃（软取消）。
    pub async fn aggregate(
        &self,
        items: &[SearchResultItem],
        budget: &SearchBudget,
    ) -> Vec<Contact> {
        debug_assert!(budget.target_count > 0);

        let mut seen: HashSet<String> = HashSet::new();
        let mut contacts: Vec<Contact> = Vec::new();
        let mut snippet_hit = vec![false; items.len()];

        // Phase A: snippet pass, deterministic input order
        for (idx, item) in items.iter().enumerate() {
            for email in FieldExtractor::extract_emails(&item.snippet) {
                if !seen.insert(email.clone()) {
                    continue;
                }
                snippet_hit[idx] = true;
                contacts.push(Self::build_contact(item, email));
                if contacts.len() >= budget.target_count {
                    return contacts;
                }
            }
        }

        // Phase B: page pass over items whose snippet produced no contact
        let pending: Vec<&SearchResultItem> = items
            .iter()
            .zip(&snippet_hit)
            .filter(|(item, hit)| !**hit && !item.link.is_empty())
            .map(|(item, _)| item)
            .collect();

        if pending.is_empty() {
            return contacts;
        }

        info!(
            "Snippet pass yielded {} contacts, fetching {} pages via {} ({} concurrent)",
            contacts.len(),
            pending.len(),
            self.engine.name(),
            self.concurrency
        );

        let engine = self.engine.clone();
        let mut fetches = stream::iter(pending.into_iter().map(|item| {
            let engine = engine.clone();
            async move {
                let text = engine.fetch_visible_text(&item.link).await;
                (item, text)
            }
        }))
        .buffer_unordered(self.concurrency);

        // Single consumer loop: the only writer of `seen` and `contacts`,
        // so no two completions can race on the dedup check-and-insert.
        while let Some((item, text)) = fetches.next().await {
            for email in FieldExtractor::extract_emails(&text) {
                if !seen.insert(email.clone()) {
                    continue;
                }
                contacts.push(Self::build_contact(item, email));
                if contacts.len() >= budget.target_count {
                    // Dropping the stream discards in-flight fetches
                    return contacts;
                }
            }
        }

        contacts
    }

    /// 从结果条目构造联系人
    ///
    /// 辅助字段始终取自原始摘要（页面抓取命中时也一样），
    /// 与摘要阶段保持一致。
    fn build_contact(item: &SearchResultItem, email: String) -> Contact {
        let aux = FieldExtractor::extract_auxiliary_fields(&item.snippet);
        Contact {
            name: item.title.clone(),
            company: aux.company,
            role: aux.role,
            email,
            phone: aux.phone,
        }
    }
}
