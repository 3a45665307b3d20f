//! # Audio 模块
//!
//! 音频播放，使用 rodio 库实现。
//!
//! ## 功能特性
//!
//! - 菜单音乐：按 tick 计数循环（见 [`MusicLoop`]），无淡入淡出
//! - 音效：一次性播放，互不干扰
//! - 音频设备初始化失败不致命：游戏以静音模式继续运行
//!
//! 音乐的循环控制是纯逻辑（[`MusicLoop`]），与设备层
//! （[`AudioManager`]）分离，可以脱离音频设备测试。

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

/// 菜单音乐一轮的 tick 数（每帧一个 tick）
pub const MUSIC_LOOP_TICKS: u32 = 6000;

/// 菜单音乐循环计数器
///
/// 以帧为单位对曲目时长倒计数；计数归零时通知 Host
/// 重新播放曲目。停止与重启都是瞬时的，不做淡入淡出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicLoop {
    /// 本轮剩余 tick 数；0 表示需要（重新）开始播放
    remaining: u32,
}

impl MusicLoop {
    pub fn new() -> Self {
        Self { remaining: 0 }
    }

    /// 每帧调用一次
    ///
    /// 返回 true 时 Host 需要重新播放曲目。
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = MUSIC_LOOP_TICKS;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }

    /// 重置计数器（停止音乐时调用，下次 tick 立即重新播放）
    pub fn reset(&mut self) {
        self.remaining = 0;
    }

    /// 本轮剩余 tick 数
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for MusicLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// 音频管理器
///
/// 持有输出流与菜单音乐的播放器。音效以一次性 Sink 播放。
pub struct AudioManager {
    /// 音频输出流（必须保持存活）
    _stream: OutputStream,
    /// 音频输出句柄
    stream_handle: OutputStreamHandle,
    /// 菜单音乐播放器
    music_sink: Option<Sink>,
    /// 菜单音乐音量 (0.0 - 1.0)
    music_volume: f32,
    /// 音效音量 (0.0 - 1.0)
    sfx_volume: f32,
}

impl AudioManager {
    /// 创建新的音频管理器
    pub fn new(music_volume: f32, sfx_volume: f32) -> Result<Self, String> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| format!("无法初始化音频输出: {e}"))?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            music_sink: None,
            music_volume: music_volume.clamp(0.0, 1.0),
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
        })
    }

    /// 从头播放菜单音乐（单次播放，循环由 [`MusicLoop`] 驱动）
    pub fn play_music(&mut self, bytes: &[u8]) {
        self.stop_music();

        let source = match Decoder::new(Cursor::new(bytes.to_vec())) {
            Ok(s) => s,
            Err(e) => {
                warn!("无法解码菜单音乐: {}", e);
                return;
            }
        };

        match Sink::try_new(&self.stream_handle) {
            Ok(sink) => {
                sink.set_volume(self.music_volume);
                sink.append(source);
                self.music_sink = Some(sink);
            }
            Err(e) => warn!("无法创建音乐播放器: {}", e),
        }
    }

    /// 立即停止菜单音乐
    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }

    /// 播放一次音效
    pub fn play_sfx(&self, bytes: &[u8]) {
        let source = match Decoder::new(Cursor::new(bytes.to_vec())) {
            Ok(s) => s,
            Err(e) => {
                warn!("无法解码音效: {}", e);
                return;
            }
        };

        if let Ok(sink) = Sink::try_new(&self.stream_handle) {
            sink.set_volume(self.sfx_volume);
            sink.append(source);
            // 分离后自动播放完毕
            sink.detach();
        }
    }

    /// 菜单音乐音量
    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// 音效音量
    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }
}
