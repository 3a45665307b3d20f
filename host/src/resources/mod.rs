//! # Resources 模块
//!
//! 资源加载：启动时一次性加载所有图片和音效。
//!
//! 图片用 image crate 解码后转换为 macroquad `Texture2D`；
//! 音效保留原始字节，播放时交给 rodio 解码。
//! 任何文件缺失或解码失败都返回错误，由 main 记录日志并退出。

use std::path::Path;

use macroquad::prelude::*;

use trivia_core::SoundCue;

mod error;

pub use error::ResourceError;

/// 全部游戏资源
///
/// 字段固定，没有按名缓存的动态查找：资源集合在编译期就已确定。
#[derive(Debug)]
pub struct Assets {
    /// 主菜单背景
    pub header: Texture2D,
    /// 「开始游戏」按钮
    pub play_button: Texture2D,
    /// 「退出」按钮
    pub quit_button: Texture2D,
    /// 「关于」按钮
    pub about_button: Texture2D,
    /// 「返回」按钮
    pub back_button: Texture2D,
    /// True 答题区图章
    pub true_stamp: Texture2D,
    /// False 答题区图章
    pub false_stamp: Texture2D,
    /// 答题界面背景砖墙
    pub brick_wall: Texture2D,
    /// 答对星标
    pub gold_star: Texture2D,
    /// 答错星标
    pub gray_star: Texture2D,

    /// 答对音效
    pub correct_sound: Vec<u8>,
    /// 答错音效
    pub incorrect_sound: Vec<u8>,
    /// 结算音效
    pub game_over_sound: Vec<u8>,
    /// 菜单循环音乐
    pub menu_music: Vec<u8>,
}

impl Assets {
    /// 从资源根目录加载全部资源
    pub fn load(assets_root: &Path) -> Result<Self, ResourceError> {
        Ok(Self {
            header: load_texture_file(assets_root, "images/header.jpg")?,
            play_button: load_texture_file(assets_root, "images/quiz.png")?,
            quit_button: load_texture_file(assets_root, "images/logout.png")?,
            about_button: load_texture_file(assets_root, "images/about.png")?,
            back_button: load_texture_file(assets_root, "images/back.png")?,
            true_stamp: load_texture_file(assets_root, "images/true.png")?,
            false_stamp: load_texture_file(assets_root, "images/false.png")?,
            brick_wall: load_texture_file(assets_root, "images/BrickWall.jpg")?,
            gold_star: load_texture_file(assets_root, "images/gold_star.png")?,
            gray_star: load_texture_file(assets_root, "images/gray_star.png")?,
            correct_sound: load_sound_bytes(assets_root, "sounds/correct.wav")?,
            incorrect_sound: load_sound_bytes(assets_root, "sounds/incorrect.wav")?,
            game_over_sound: load_sound_bytes(assets_root, "sounds/gameover.wav")?,
            menu_music: load_sound_bytes(assets_root, "sounds/jazz.wav")?,
        })
    }

    /// 音效指令对应的音频数据
    pub fn sound_for(&self, cue: SoundCue) -> &[u8] {
        match cue {
            SoundCue::Correct => &self.correct_sound,
            SoundCue::Incorrect => &self.incorrect_sound,
            SoundCue::GameOver => &self.game_over_sound,
        }
    }
}

/// 加载图片文件并转换为 Texture2D
///
/// 支持 PNG、JPEG 格式。
fn load_texture_file(root: &Path, relative: &str) -> Result<Texture2D, ResourceError> {
    let path = root.join(relative);
    let bytes = std::fs::read(&path).map_err(|e| ResourceError::LoadFailed {
        path: path.display().to_string(),
        kind: "texture".to_string(),
        message: e.to_string(),
    })?;

    let img = image::load_from_memory(&bytes).map_err(|e| ResourceError::InvalidFormat {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Texture2D::from_rgba8(width as u16, height as u16, &rgba))
}

/// 读取音频文件原始字节
fn load_sound_bytes(root: &Path, relative: &str) -> Result<Vec<u8>, ResourceError> {
    let path = root.join(relative);
    std::fs::read(&path).map_err(|e| ResourceError::LoadFailed {
        path: path.display().to_string(),
        kind: "sound".to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_load_failed() {
        let err = load_sound_bytes(Path::new("no_such_dir"), "sounds/correct.wav").unwrap_err();
        match err {
            ResourceError::LoadFailed { kind, path, .. } => {
                assert_eq!(kind, "sound");
                assert!(path.contains("correct.wav"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
