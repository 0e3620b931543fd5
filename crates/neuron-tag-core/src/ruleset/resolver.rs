//! Tag Resolver
//!
//! docnameをルールテーブルに基づいて解決し、適用プラットフォームの
//! 集合とレンダリング済みテキストを生成する。
//! 解決は (docname, RuleSet) の純粋関数であり、失敗しない。

use std::collections::BTreeSet;

use serde::Serialize;

use super::builtin::{INFERENCE_DIR, LANDING_PAGE, TEXT_TEMPLATE, TRAINING_DIR};
use super::store::RuleSet;
use crate::platform::Platform;

/// 1つのdocnameの解決結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResolution {
    /// 解決対象のdocname（スラッシュ区切り、拡張子なし）
    pub docname: String,
    /// 適用プラットフォーム（ラベル順）
    pub platforms: BTreeSet<Platform>,
}

impl TagResolution {
    /// タグが1つ以上付くか
    pub fn is_tagged(&self) -> bool {
        !self.platforms.is_empty()
    }

    /// テンプレート適用済みの1行テキスト（タグなしなら空文字列）
    pub fn rendered_line(&self) -> String {
        if self.platforms.is_empty() {
            return String::new();
        }

        let labels: Vec<String> = self
            .platforms
            .iter()
            .map(|p| format!("``{}``", p))
            .collect();
        format!("{}{}", TEXT_TEMPLATE, labels.join(", "))
    }
}

/// タグ解決器
///
/// 不変のRuleSetを借用し、docnameごとに解決結果を生成する。
pub struct TagResolver<'a> {
    rules: &'a RuleSet,
}

impl<'a> TagResolver<'a> {
    /// 指定ルールセットで解決器を作成
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// ビルトインルールセットで解決器を作成
    pub fn builtin() -> TagResolver<'static> {
        TagResolver::new(RuleSet::builtin())
    }

    /// docnameを解決する
    ///
    /// 各段階は前段の結果を上書きまたは補強する：
    /// トップレベルのシード → 親ディレクトリによるリセット →
    /// 強制付与 → 強制解除（解除が常に優先）。
    pub fn resolve(&self, docname: &str) -> TagResolution {
        let segments: Vec<&str> = docname.split('/').collect();

        // ランディングページにはタグを付けない（以降のルールも適用しない）
        if segments.first() == Some(&LANDING_PAGE) {
            return TagResolution {
                docname: docname.to_string(),
                platforms: BTreeSet::new(),
            };
        }

        let mut platforms: BTreeSet<Platform> = BTreeSet::new();

        if let Some(top) = segments.first() {
            platforms.extend(self.rules.top_level_seed(top));
        }

        // 親ディレクトリがワークロードを特定する場合は集合ごと置き換える。
        // 1セグメントのdocnameではそのセグメント自身が親として扱われる。
        let parent = segments[segments.len().saturating_sub(2)];
        if parent == INFERENCE_DIR {
            platforms = BTreeSet::from([Platform::Inf1]);
        } else if parent == TRAINING_DIR {
            platforms = BTreeSet::from([Platform::Trn1]);
        }

        for platform in Platform::all() {
            if matches_any(docname, self.rules.add_entries(*platform)) {
                platforms.insert(*platform);
            }
        }

        for platform in Platform::all() {
            if matches_any(docname, self.rules.clear_entries(*platform)) {
                platforms.remove(platform);
            }
        }

        TagResolution {
            docname: docname.to_string(),
            platforms,
        }
    }
}

/// エントリのいずれかがdocnameの部分文字列として現れるか
fn matches_any(docname: &str, entries: &[String]) -> bool {
    entries.iter().any(|entry| docname.contains(entry.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(docname: &str) -> TagResolution {
        TagResolver::builtin().resolve(docname)
    }

    fn platforms(docname: &str) -> Vec<Platform> {
        resolve(docname).platforms.into_iter().collect()
    }

    #[test]
    fn landing_page_is_never_tagged() {
        assert!(platforms("index").is_empty());
        assert_eq!(resolve("index").rendered_line(), "");
    }

    #[test]
    fn landing_page_ignores_later_rules() {
        // ルールに一致し得るパスでも先頭がランディングページなら空のまま
        assert!(platforms("index/general/arch").is_empty());
    }

    #[test]
    fn common_dir_seeds_both_platforms() {
        assert_eq!(
            platforms("general/setup/install"),
            vec![Platform::Inf1, Platform::Trn1]
        );
        assert_eq!(
            platforms("tools/profiler/index"),
            vec![Platform::Inf1, Platform::Trn1]
        );
    }

    #[test]
    fn inf1_only_dir_seeds_inf1() {
        assert_eq!(platforms("n1/some-page"), vec![Platform::Inf1]);
    }

    #[test]
    fn unknown_top_level_seeds_nothing() {
        assert!(platforms("unrelated/some-page").is_empty());
    }

    #[test]
    fn inference_parent_resets_to_inf1() {
        assert_eq!(
            platforms("frameworks/inference/some-tutorial"),
            vec![Platform::Inf1]
        );
    }

    #[test]
    fn training_parent_resets_to_trn1() {
        // 親ディレクトリの上書きはシードへの追加ではなく置き換え
        assert_eq!(
            platforms("frameworks/training/some-tutorial"),
            vec![Platform::Trn1]
        );
    }

    #[test]
    fn single_segment_docname_acts_as_its_own_parent() {
        assert_eq!(platforms("inference"), vec![Platform::Inf1]);
        assert_eq!(platforms("training"), vec![Platform::Trn1]);
    }

    #[test]
    fn clear_wins_over_add() {
        let rules = RuleSet {
            add_trn1: vec!["docs/special".to_string()],
            clear_trn1: vec!["docs/special".to_string()],
            ..Default::default()
        };
        let resolution = TagResolver::new(&rules).resolve("docs/special/page");
        assert!(resolution.platforms.is_empty());
    }

    #[test]
    fn add_rule_matches_substring_not_segment() {
        let rules = RuleSet {
            add_inf1: vec!["general/arch".to_string()],
            ..Default::default()
        };
        let resolver = TagResolver::new(&rules);
        assert!(resolver.resolve("general/arch/index").is_tagged());
        assert!(resolver
            .resolve("general/arch/neuron-hardware/x")
            .is_tagged());
        // "arch"を含む別パスにも一致する（部分文字列照合の仕様）
        assert!(resolver.resolve("xgeneral/archive").is_tagged());
    }

    #[test]
    fn trn1_arch_page_resolves_to_trn1_only() {
        let resolution = resolve("general/arch/neuron-hardware/trn1-arch");
        assert_eq!(
            resolution.platforms.into_iter().collect::<Vec<_>>(),
            vec![Platform::Trn1]
        );
        assert_eq!(
            resolve("general/arch/neuron-hardware/trn1-arch").rendered_line(),
            "*This document is relevant for*: ``Trn1``"
        );
    }

    #[test]
    fn check_model_tutorial_resolves_to_inf1_only() {
        let resolution = resolve("tools/tutorials/tutorial-neuron-check-model");
        assert_eq!(
            resolution.platforms.into_iter().collect::<Vec<_>>(),
            vec![Platform::Inf1]
        );
        assert_eq!(
            resolve("tools/tutorials/tutorial-neuron-check-model").rendered_line(),
            "*This document is relevant for*: ``Inf1``"
        );
    }

    #[test]
    fn rendered_line_lists_both_platforms_sorted() {
        assert_eq!(
            resolve("general/setup/install").rendered_line(),
            "*This document is relevant for*: ``Inf1``, ``Trn1``"
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let first = resolve("general/arch/neuron-hardware/trn1-arch");
        let second = resolve("general/arch/neuron-hardware/trn1-arch");
        assert_eq!(first, second);
        assert_eq!(first.rendered_line(), second.rendered_line());
    }

    #[test]
    fn substring_clear_can_empty_a_page() {
        // "nrt-troubleshoot"は"nrt-troubleshoot-trn1"の部分文字列でもあるため
        // 両ラベルが解除される（継承された挙動）
        assert!(platforms("neuron-runtime/nrt-troubleshoot-trn1").is_empty());
    }

    #[test]
    fn empty_docname_resolves_to_nothing() {
        assert!(platforms("").is_empty());
        assert_eq!(resolve("").rendered_line(), "");
    }
}
