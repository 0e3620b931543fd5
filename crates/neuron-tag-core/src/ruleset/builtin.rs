//! Builtin Rule Tables
//!
//! コード内で定義されるビルトインのタグ付けルール。
//! ビルド時定数であり、実行時に変更されることはない。
//! エントリはパスの部分文字列として照合される（サブツリー単位の
//! 指定を1エントリで済ませるため、セグメント完全一致ではない）。

/// ドキュメントツリー全体のランディングページ（タグ付け対象外）
pub const LANDING_PAGE: &str = "index";

/// 推論ワークロード配下を示す親ディレクトリ名
pub const INFERENCE_DIR: &str = "inference";

/// 学習ワークロード配下を示す親ディレクトリ名
pub const TRAINING_DIR: &str = "training";

/// レンダリング時の導入句
pub const TEXT_TEMPLATE: &str = "*This document is relevant for*: ";

/// Inf1のみを含意するトップレベルディレクトリ
pub const INF1_DIRS: &[&str] = &["n1"];

/// Trn1のみを含意するトップレベルディレクトリ（現状エントリなし）
pub const TRN1_DIRS: &[&str] = &[];

/// 両プラットフォームを含意するトップレベルディレクトリ
pub const COMMON_DIRS: &[&str] = &[
    "tools",
    "neuron-runtime",
    "release-notes",
    "containers",
    "general",
    "compiler",
    "frameworks",
    "src",
];

/// パスに含まれる場合にInf1を強制付与する部分文字列
pub const ADD_INF1: &[&str] = &[
    "general/arch",
    "general/arch/index",
    "general/arch/neuron-hardware/neuron-hw-arch",
    "frameworks/mxnet-neuron",
    "frameworks/mxnet-neuron/index",
    "general/announcements/index",
    "frameworks/tensorflow/tensorflow-neuron/",
];

/// パスに含まれる場合にTrn1を強制付与する部分文字列（現状エントリなし）
pub const ADD_TRN1: &[&str] = &[];

/// パスに含まれる場合にInf1を強制解除する部分文字列
pub const CLEAR_INF1: &[&str] = &[
    "general/arch/neuron-features/neuron-caching",
    "general/arch/neuron-features/eager-debug-mode",
    "general/arch/neuron-features/collective-communication-operations",
    "general/arch/neuron-features/dynamic-shapes",
    "general/arch/neuron-features/control-flow",
    "general/arch/neuron-features/custom-c++-operators",
    "tools/tutorials/tutorial-tensorboard-scalars-mnist",
    "general/arch/neuron-features/collective-communication",
    "general/appnotes/neuronx-cc/neuronx-cc-training-mixed-precision",
    "release-notes/neuron-cc/index",
    "general/arch/neuron-hardware/trn1-arch",
    "general/benchmarks/trn1-performance",
    "general/arch/neuron-features/rounding-modes",
    "neuron-runtime/nrt-troubleshoot-trn1",
    "tools/tutorials/tutorial-neuron-monitor-mnist",
    "release-notes/runtime/aws-neuronx-collectives/",
    "release-notes/torch/torch-neuronx/",
    "release-notes/tensorflow/tensorflow-neuronx/",
    "release-notes/compiler/neuronx-cc/",
    "frameworks/torch/torch-neuronx/",
    "frameworks/tensorflow/tensorflow-neuronx/",
    "general/benchmarks/trn1/",
    "general/faq/training/",
    "general/devflows/training",
    "compiler/neuronx-cc/",
    "general/appnotes/perf/neuronx-cc/",
];

/// パスに含まれる場合にTrn1を強制解除する部分文字列
pub const CLEAR_TRN1: &[&str] = &[
    "tools/tutorials/tutorial-neuron-check-model",
    "tools/tutorials/tutorial-neuron-gatherinfo",
    "tools/tutorials/getting-started-tensorboard-neuron-plugin",
    "general/appnotes/neuron-cc/mixed-precision",
    "release-notes/neuronperf",
    "general/arch/neuron-hardware/inf1-arch",
    "containers/dlc-then-ec2-devflow",
    "containers/dlc-then-ecs-devflow",
    "containers/dlc-then-eks-devflow",
    "containers/container-sm-hosting-devflow",
    "containers/rn",
    "general/announcements/neuron1.x/",
    "general/quick-start/mxnet-neuron",
    "neuron-runtime/nrt-troubleshoot",
    "tools/tensorboard/getting-started-tensorboard-neuron-plugin",
    "tools/helper-tools/tutorial-neuron-check-model",
    "tools/helper-tools/tutorial-neuron-gatherinfo",
    "tools/neuronperf",
    "containers/tutorials/k8s-neuron-scheduler",
    "general/arch/neuron-features/neuroncore-batching",
    "general/arch/neuron-features/neuroncore-pipeline",
    "release-notes/mxnet-neuron/",
    "release-notes/torch/torch-neuron/",
    "release-notes/tensorflow/tensorflow-neuron/",
    "release-notes/compiler/neuron-cc/",
    "release-notes/neuron1/",
    "frameworks/torch/torch-neuron/",
    "frameworks/tensorflow/tensorflow-neuron/",
    "frameworks/mxnet-neuron/",
    "general/benchmarks/inf1/",
    "general/faq/inference/",
    "general/devflows/inference",
    "compiler/neuron-cc/",
    "general/appnotes/perf/neuron-cc/",
    "general/appnotes/neuron1x",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_shape() {
        assert_eq!(INF1_DIRS, &["n1"]);
        assert!(TRN1_DIRS.is_empty());
        assert!(ADD_TRN1.is_empty());
        assert!(COMMON_DIRS.contains(&"general"));
        assert!(COMMON_DIRS.contains(&"tools"));
        assert!(!ADD_INF1.is_empty());
        assert!(!CLEAR_INF1.is_empty());
        assert!(!CLEAR_TRN1.is_empty());
    }

    #[test]
    fn test_builtin_tables_entries() {
        assert!(CLEAR_INF1.contains(&"general/arch/neuron-hardware/trn1-arch"));
        assert!(CLEAR_TRN1.contains(&"tools/tutorials/tutorial-neuron-check-model"));
        assert!(ADD_INF1.contains(&"general/arch"));
    }
}
