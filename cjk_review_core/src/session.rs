//! `ReviewSession`：插件实例，对宿主提供的唯一入口。
//!
//! `ReviewSession` 自身不做业务判断，而是：
//! - 持有 `ReviewContext`（状态 + 设置），激活时创建，停用时丢弃
//! - 持有 processors 链（可插拔）
//! - 把每个 `HostEvent` 依次交给 processors，直到被消费
//! - 输出 `Action` 交给宿主执行
use tracing::info;

use crate::{
    braille::{self, BrailleRegion, RegionRefresh},
    config::ReviewConfig,
    context::ReviewContext,
    dictionary::CharacterDictionary,
    event::{Action, HostEvent},
    processor::{
        CompositionProcessor, CursorProcessor, CycleProcessor, Env, ProcessStatus, Processor, SpellingProcessor,
        ToggleProcessor,
    },
    state::ReviewState,
};

pub struct ReviewSession {
    ctx: ReviewContext,
    processors: Vec<Box<dyn Processor>>,
}

impl ReviewSession {
    /// 插件激活：用宿主的语言初始化状态记录，并组装默认 processors 链。
    pub fn activate(locale: impl Into<String>, config: ReviewConfig) -> Self {
        let ctx = ReviewContext::new(locale, config);
        info!(
            locale = %ctx.state.locale,
            speech_review = %ctx.config.speech_review,
            braille_review = %ctx.config.braille_review,
            "CJK review activated"
        );
        Self {
            ctx,
            processors: vec![
                Box::new(ToggleProcessor),
                Box::new(CursorProcessor),
                Box::new(CycleProcessor),
                Box::new(SpellingProcessor),
                Box::new(CompositionProcessor),
            ],
        }
    }

    /// 插件停用：丢弃状态，返回最终设置供宿主保存。
    pub fn deactivate(self) -> ReviewConfig {
        info!("CJK review deactivated");
        self.ctx.config
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.ctx.config
    }

    pub fn state(&self) -> &ReviewState {
        &self.ctx.state
    }

    /// 处理一个宿主事件，返回要宿主执行的动作。
    pub fn handle(&mut self, env: &mut Env<'_>, event: HostEvent) -> Vec<Action> {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(env, &mut self.ctx, &event);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        actions
    }


    /// 盲文刷新回调点的入口。
    pub fn handle_pending_update<R: BrailleRegion>(
        &mut self,
        dictionary: &dyn CharacterDictionary,
        pending: &mut [R],
    ) -> RegionRefresh {
        braille::handle_pending_update(&mut self.ctx, dictionary, pending)
    }
}
