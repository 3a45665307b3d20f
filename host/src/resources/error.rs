//! # Resource Error 模块
//!
//! 定义资源加载相关的错误类型。

use thiserror::Error;

/// 资源加载错误
///
/// 任何一项资源加载失败都是致命错误：进程在进入主循环前退出。
#[derive(Error, Debug)]
pub enum ResourceError {
    /// 资源文件读取失败
    #[error("加载 {kind} 资源失败: {path} - {message}")]
    LoadFailed {
        /// 资源路径
        path: String,
        /// 资源类型（texture, sound）
        kind: String,
        /// 错误消息
        message: String,
    },

    /// 无效的资源格式
    #[error("无效的资源格式: {path} - {message}")]
    InvalidFormat {
        /// 资源路径
        path: String,
        /// 错误消息
        message: String,
    },
}
