//! `hooks`：宿主回调点的接管与恢复。
//!
//! 宿主把三个回调点（拼读、盲文刷新、组字通知）的走向记在 [`HookTable`] 里；
//! 插件激活时用 [`InstalledHooks::install`] 把它们切到增强实现，并记下原来的走向；
//! 守卫被 drop（或显式 [`InstalledHooks::release`]）时按相反顺序原样恢复。
use std::ops::Deref;

use tracing::debug;

/// 可被接管的宿主回调点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    Spelling,
    BrailleUpdate,
    CompositionReport,
}

impl HookPoint {
    pub const ALL: [HookPoint; 3] = [HookPoint::Spelling, HookPoint::BrailleUpdate, HookPoint::CompositionReport];
}

/// 回调点当前交给谁处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    HostDefault,
    Enhanced,
}

/// 宿主持有的回调走向表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HookTable {
    spelling: Route,
    braille_update: Route,
    composition_report: Route,
}

impl HookTable {
    pub fn route(&self, point: HookPoint) -> Route {
        match point {
            HookPoint::Spelling => self.spelling,
            HookPoint::BrailleUpdate => self.braille_update,
            HookPoint::CompositionReport => self.composition_report,
        }
    }

    pub fn is_enhanced(&self, point: HookPoint) -> bool {
        self.route(point) == Route::Enhanced
    }

    /// 设置新走向并返回旧走向。
    fn replace(&mut self, point: HookPoint, route: Route) -> Route {
        let slot = match point {
            HookPoint::Spelling => &mut self.spelling,
            HookPoint::BrailleUpdate => &mut self.braille_update,
            HookPoint::CompositionReport => &mut self.composition_report,
        };
        std::mem::replace(slot, route)
    }
}

/// 接管期间的守卫：持有走向表并记住被替换的原走向。
pub struct InstalledHooks<'a> {
    table: &'a mut HookTable,
    saved: Vec<(HookPoint, Route)>,
}

impl<'a> InstalledHooks<'a> {
    /// 把全部回调点切到增强实现。
    pub fn install(table: &'a mut HookTable) -> Self {
        let mut saved = Vec::with_capacity(HookPoint::ALL.len());
        for point in HookPoint::ALL {
            saved.push((point, table.replace(point, Route::Enhanced)));
        }
        debug!("已接管宿主回调：{:?}", HookPoint::ALL);
        Self { table, saved }
    }

    /// 立即恢复（等价于 drop）。
    pub fn release(self) {}
}

impl Deref for InstalledHooks<'_> {
    type Target = HookTable;

    fn deref(&self) -> &HookTable {
        self.table
    }
}

impl Drop for InstalledHooks<'_> {
    fn drop(&mut self) {
        while let Some((point, route)) = self.saved.pop() {
            self.table.replace(point, route);
        }
        debug!("已恢复宿主回调");
    }
}
