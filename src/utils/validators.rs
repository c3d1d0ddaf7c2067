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

/// 验证邮箱候选字符串是否可接受
///
/// 规则按顺序应用：
/// 1. 必须能以第一个 `@` 分割出非空的本地部分和域名部分
/// 2. 域名部分必须包含至少一个 `.`
/// 3. 域名部分的首字符不能是数字（排除被误读为域名的版本号或 ID）
/// 4. 候选字符串不能以 `.png` 结尾（排除被模式捕获的图片文件名）
///
/// 纯谓词，无任何 I/O 副作用。
///
/// # 参数
///
/// * `candidate` - 待验证的邮箱候选字符串
///
/// # 返回值
///
/// 如果候选字符串是可接受的邮箱则返回 true，否则返回 false
pub fn is_valid_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    if domain.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }

    if candidate.ends_with(".png") {
        return false;
    }

    true
}
