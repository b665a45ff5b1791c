//! 测试替身：诊断接收器的最小实现。
//!
//! 集成测试与宿主单测都需要观察“解析器是否上报了定义缺失”，这里提供两个
//! 可直接使用的接收器，避免每处测试重复手写。替身位于正式模块树中（而非
//! `#[cfg(test)]`），因为下游宿主的测试同样需要它们。

use crate::registry::{DefinitionMiss, DiagnosticSink};
use alloc::vec::Vec;
use spin::Mutex;

/// 丢弃全部缺失事件的接收器。
#[derive(Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn on_definition_miss(&self, _miss: DefinitionMiss) {}
}

/// 记录全部缺失事件的接收器，供断言使用。
///
/// 内部用自旋锁保护事件缓冲：回调发生在发射热路径上，临界区只有一次
/// `Vec::push`，自旋等待的代价低于让出调度。
#[derive(Debug, Default)]
pub struct RecordingSink {
    misses: Mutex<Vec<DefinitionMiss>>,
}

impl RecordingSink {
    /// 创建空的记录接收器。
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出迄今记录的全部缺失事件副本。
    pub fn misses(&self) -> Vec<DefinitionMiss> {
        self.misses.lock().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn on_definition_miss(&self, miss: DefinitionMiss) {
        self.misses.lock().push(miss);
    }
}
