//! # Screen 模块
//!
//! 顶层界面状态机：Menu / Playing / About。
//!
//! 路由器（[`app::update`](crate::app::update)）每帧读取一次当前
//! 界面，分发到对应界面的 update/draw。界面切换只发生在
//! 各界面返回的动作里，不存在隐式跳转。

/// 顶层界面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// 主菜单
    #[default]
    Menu,
    /// 游戏进行中（含玩家名输入与结算画面）
    Playing,
    /// 关于页面
    About,
}

impl Screen {
    /// 该界面是否播放菜单音乐
    ///
    /// 菜单音乐只在 Menu/About 循环；进入 Playing 立即停止。
    pub fn plays_music(&self) -> bool {
        matches!(self, Screen::Menu | Screen::About)
    }
}
