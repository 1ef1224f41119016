// SPDX-License-Identifier: MPL-2.0
//! User-facing strings.
//!
//! The application ships a single Japanese catalog; there is no runtime
//! language switching.

use crate::domain::company::{AnalysisField, BasicField};

pub const APP_TITLE: &str = "企業情報アナライザー";

pub const URL_PLACEHOLDER: &str = "企業のWebサイトURLを入力";
pub const SUBMIT_BUTTON: &str = "分析開始";

pub const TAB_BASIC: &str = "基本情報";
pub const TAB_ANALYSIS: &str = "AI分析";

/// Shown in place of an empty field value.
pub const NO_INFORMATION: &str = "情報なし";

/// Prefix of the inline error banner.
pub const ERROR_BANNER_PREFIX: &str = "エラー: ";

pub const NOTIFY_URL_REQUIRED: &str = "URLを入力してください";
pub const NOTIFY_FETCH_SUCCEEDED: &str = "企業情報を取得しました";
pub const NOTIFY_BACKEND_UNREACHABLE: &str = "分析サーバーに接続できません";
pub const NOTIFY_CONFIG_LOAD_FAILED: &str = "設定ファイルを読み込めませんでした。既定の設定を使用します";

const NOTIFY_FETCH_FAILED_PREFIX: &str = "エラーが発生しました: ";

/// Failure toast text: fixed prefix followed by the error's own message.
#[must_use]
pub fn fetch_failed(message: &str) -> String {
    format!("{NOTIFY_FETCH_FAILED_PREFIX}{message}")
}

#[must_use]
pub fn basic_field(field: BasicField) -> &'static str {
    match field {
        BasicField::CompanyName => "会社名",
        BasicField::BusinessDescription => "事業内容",
        BasicField::Address => "所在地",
        BasicField::Representative => "代表者",
        BasicField::Tel => "電話番号",
        BasicField::BusinessHours => "営業時間",
    }
}

#[must_use]
pub fn analysis_field(field: AnalysisField) -> &'static str {
    match field {
        AnalysisField::Summary => "企業概要",
        AnalysisField::InvestorAnalysis => "投資家向け分析",
        AnalysisField::JobSeekerInfo => "就職活動者向け情報",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fetch_failed_keeps_message_after_prefix() {
        assert_eq!(fetch_failed("not found"), "エラーが発生しました: not found");
    }

    #[test]
    fn every_field_has_a_distinct_label() {
        let basic: HashSet<_> = BasicField::ALL.iter().map(|f| basic_field(*f)).collect();
        assert_eq!(basic.len(), BasicField::ALL.len());

        let analysis: HashSet<_> = AnalysisField::ALL
            .iter()
            .map(|f| analysis_field(*f))
            .collect();
        assert_eq!(analysis.len(), AnalysisField::ALL.len());
    }
}
