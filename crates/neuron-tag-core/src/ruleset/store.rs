//! Rule Set Store
//!
//! タグ付けルールのランタイムストア。
//! プロセス起動時にビルトインテーブルから一度だけ構築され、
//! 以降は不変。共有状態を持たないため並列ビルドでも同期不要。

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::builtin;
use crate::platform::Platform;

static BUILTIN_RULE_SET: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    inf1_dirs: to_owned(builtin::INF1_DIRS),
    trn1_dirs: to_owned(builtin::TRN1_DIRS),
    common_dirs: to_owned(builtin::COMMON_DIRS),
    add_inf1: to_owned(builtin::ADD_INF1),
    add_trn1: to_owned(builtin::ADD_TRN1),
    clear_inf1: to_owned(builtin::CLEAR_INF1),
    clear_trn1: to_owned(builtin::CLEAR_TRN1),
});

fn to_owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// タグ付けルールの集合
///
/// トップレベルディレクトリの3グループと、強制付与・強制解除の
/// 各テーブルを保持する。ファイル形式としては公開しない：
/// ルールはコード内のデータとして直接編集する。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Inf1のみを含意するトップレベルディレクトリ
    pub inf1_dirs: Vec<String>,
    /// Trn1のみを含意するトップレベルディレクトリ
    pub trn1_dirs: Vec<String>,
    /// 両プラットフォームを含意するトップレベルディレクトリ
    pub common_dirs: Vec<String>,
    /// Inf1を強制付与するパス部分文字列
    pub add_inf1: Vec<String>,
    /// Trn1を強制付与するパス部分文字列
    pub add_trn1: Vec<String>,
    /// Inf1を強制解除するパス部分文字列
    pub clear_inf1: Vec<String>,
    /// Trn1を強制解除するパス部分文字列
    pub clear_trn1: Vec<String>,
}

impl RuleSet {
    /// ビルトインルールセットを取得
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN_RULE_SET
    }

    /// トップレベルディレクトリからのシード集合
    pub fn top_level_seed(&self, dir: &str) -> Vec<Platform> {
        if self.inf1_dirs.iter().any(|d| d == dir) {
            vec![Platform::Inf1]
        } else if self.trn1_dirs.iter().any(|d| d == dir) {
            vec![Platform::Trn1]
        } else if self.common_dirs.iter().any(|d| d == dir) {
            vec![Platform::Inf1, Platform::Trn1]
        } else {
            Vec::new()
        }
    }

    /// 強制付与テーブル
    pub fn add_entries(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Inf1 => &self.add_inf1,
            Platform::Trn1 => &self.add_trn1,
        }
    }

    /// 強制解除テーブル
    pub fn clear_entries(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Inf1 => &self.clear_inf1,
            Platform::Trn1 => &self.clear_trn1,
        }
    }

    /// テーブルの構造的な問題を警告として列挙する
    ///
    /// - 重複エントリ
    /// - 空白のみのエントリ
    /// - 同一ラベルのadd/clear両方に現れるエントリ（clearが優先）
    ///
    /// いずれもエラーではない。
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let tables: &[(&str, &[String])] = &[
            ("inf1_dirs", &self.inf1_dirs),
            ("trn1_dirs", &self.trn1_dirs),
            ("common_dirs", &self.common_dirs),
            ("add_inf1", &self.add_inf1),
            ("add_trn1", &self.add_trn1),
            ("clear_inf1", &self.clear_inf1),
            ("clear_trn1", &self.clear_trn1),
        ];

        for (name, entries) in tables {
            let mut seen = HashSet::new();
            for entry in entries.iter() {
                if entry.trim().is_empty() {
                    warnings.push(format!("{}: blank entry", name));
                    continue;
                }
                if !seen.insert(entry.as_str()) {
                    warnings.push(format!("{}: duplicate entry '{}'", name, entry));
                }
            }
        }

        for platform in Platform::all() {
            let clears: HashSet<&str> = self
                .clear_entries(*platform)
                .iter()
                .map(|s| s.as_str())
                .collect();
            for entry in self.add_entries(*platform) {
                if clears.contains(entry.as_str()) {
                    warnings.push(format!(
                        "add/clear overlap for {}: '{}' (clear wins)",
                        platform, entry
                    ));
                }
            }
        }

        warnings
    }
}
