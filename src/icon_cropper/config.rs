//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调参数”集中到 `CropConfig`，运行时只使用写死的 `Default`，
//! 不提供命令行或环境变量入口；测试通过构造自定义配置指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 对应线上唯一行为：15% 边距 + Lanczos3。
//! - `validate` 在构造 `IconCropper` 时执行，拒绝会产生空裁剪区域的比例。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::CropError;

/// Xcode 工程中 AppIcon 资源目录（相对当前工作目录）。
pub(crate) const DEFAULT_ICON_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// 图标裁剪配置。
#[derive(Debug, Clone)]
pub struct CropConfig {
    /// 图标所在目录，清单中的文件名拼接在其后。
    pub icon_dir: PathBuf,
    /// 每条边裁掉的比例，基于宽度计算。
    pub crop_ratio: f64,
    /// 缩放回目标尺寸时使用的滤镜。
    pub resize_filter: FilterType,
    /// 单个图标文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            icon_dir: PathBuf::from(DEFAULT_ICON_DIR),
            crop_ratio: 0.15,
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl CropConfig {
    /// 仅替换图标目录，其余保持默认。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_cropper::icon_cropper::CropConfig;
    ///
    /// let config = CropConfig::with_icon_dir("/tmp/icons");
    /// assert_eq!(config.crop_ratio, 0.15);
    /// ```
    pub fn with_icon_dir(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
            ..Self::default()
        }
    }

    /// 进度标题中展示的百分比，例如 `15`。
    pub(crate) fn crop_percent(&self) -> u32 {
        (self.crop_ratio * 100.0).round() as u32
    }

    pub(crate) fn validate(&self) -> Result<(), CropError> {
        if !self.crop_ratio.is_finite() || !(0.0..0.5).contains(&self.crop_ratio) {
            return Err(CropError::Geometry(format!(
                "裁剪比例必须在 [0, 0.5) 之间：{}",
                self.crop_ratio
            )));
        }
        if self.max_decoded_pixels == 0 {
            return Err(CropError::ResourceLimit("max_decoded_pixels 不能为 0".to_string()));
        }
        Ok(())
    }
}
