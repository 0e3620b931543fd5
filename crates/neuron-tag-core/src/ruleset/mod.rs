//! # Ruleset Module
//!
//! ドキュメントページへの「applies to」タグ付けルールと解決器を提供する。
//!
//! ## 設計目的
//!
//! ページごとの適用プラットフォームを手作業で管理するのではなく、
//! パスベースの静的ルールから導出する：
//!
//! - **トップレベルシード**: 先頭ディレクトリからの既定集合
//! - **親ディレクトリ上書き**: inference/training配下はワークロードで確定
//! - **強制付与・強制解除**: パス部分文字列による個別調整（解除が優先）
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトインルールテーブル
//! - `store`: ルールセットのランタイムストア
//! - `resolver`: タグ解決器
//!
//! ## 使用例
//!
//! ```rust
//! use neuron_tag_core::ruleset::{RuleSet, TagResolver};
//!
//! let resolver = TagResolver::new(RuleSet::builtin());
//!
//! let resolution = resolver.resolve("general/arch/neuron-hardware/trn1-arch");
//! assert_eq!(
//!     resolution.rendered_line(),
//!     "*This document is relevant for*: ``Trn1``"
//! );
//!
//! // ランディングページはタグ付けされない
//! assert_eq!(resolver.resolve("index").rendered_line(), "");
//! ```

mod builtin;
mod resolver;
mod store;

// Re-exports
pub use builtin::{
    ADD_INF1, ADD_TRN1, CLEAR_INF1, CLEAR_TRN1, COMMON_DIRS, INF1_DIRS, INFERENCE_DIR,
    LANDING_PAGE, TEXT_TEMPLATE, TRAINING_DIR, TRN1_DIRS,
};
pub use resolver::{TagResolution, TagResolver};
pub use store::RuleSet;
