//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconCropper` 只负责流程编排与进度输出，单步行为分别交给 `loader` 与 `pipeline`。
//! 单个图标的处理链路固定为：
//! 1. 读取图片头并输出进度行，再完整解码
//! 2. 按宽度计算边距与裁剪区域
//! 3. 裁剪并缩放回目标尺寸
//! 4. 编码 PNG 并原地覆盖（无备份）
//!
//! ## 实现思路
//!
//! - 进度文本写入调用方提供的 `Write`，二进制入口传入 stdout，测试传入内存缓冲。
//! - 批处理遇到第一个错误立即返回，之后的图标不会被打开。
//! - 记录 `load/crop/save/total` 阶段耗时，便于定位慢图。

use image::GenericImageView;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use super::catalog::display_name;
use super::pipeline::compute_crop_box;
use super::{CropConfig, CropError, CropReport, DEFAULT_CATALOG, IconEntry, ProcessedIcon};

/// 图标裁剪器。
///
/// 持有写死的配置与图标清单，按清单顺序逐个处理。
pub struct IconCropper {
    pub(super) config: CropConfig,
    catalog: Vec<IconEntry>,
}

impl IconCropper {
    /// 使用默认图标清单创建裁剪器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_cropper::icon_cropper::{CropConfig, IconCropper};
    ///
    /// let cropper = IconCropper::new(CropConfig::default())?;
    /// let report = cropper.process_all(&mut std::io::stdout())?;
    /// # Ok::<(), icon_cropper::icon_cropper::CropError>(())
    /// ```
    pub fn new(config: CropConfig) -> Result<Self, CropError> {
        Self::with_catalog(config, DEFAULT_CATALOG.to_vec())
    }

    /// 使用自定义清单创建裁剪器。
    pub fn with_catalog(config: CropConfig, catalog: Vec<IconEntry>) -> Result<Self, CropError> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[IconEntry] {
        &self.catalog
    }

    /// 处理单个图标：裁剪后缩放到 `target_size × target_size` 并覆盖原文件。
    pub fn process_one<W: Write>(
        &self,
        path: &Path,
        target_size: u32,
        out: &mut W,
    ) -> Result<ProcessedIcon, CropError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let icon = self.open_icon(path)?;
        emit(
            out,
            format_args!(
                "Processing {} - Original size: {}x{}",
                display_name(path),
                icon.width,
                icon.height
            ),
        )?;
        let image = Self::decode_icon(path, &icon)?;
        drop(icon);
        let load_elapsed = load_start.elapsed();

        let (width, height) = image.dimensions();

        let crop_start = Instant::now();
        let crop_box = compute_crop_box(width, height, self.config.crop_ratio)?;
        log::debug!(
            "✂️ 裁剪区域 - {} 边距: {}px 区域: ({}, {}, {}, {})",
            path.display(),
            crop_box.left,
            crop_box.left,
            crop_box.top,
            crop_box.right,
            crop_box.bottom
        );
        let cropped = Self::crop_to_box(&image, crop_box);
        let resized = self.resize_to_target(&cropped, target_size)?;
        let crop_elapsed = crop_start.elapsed();

        let save_start = Instant::now();
        let bytes = Self::encode_png(&resized)?;
        std::fs::write(path, bytes)
            .map_err(|e| CropError::FileSystem(format!("无法写入图片文件：{}：{}", path.display(), e)))?;
        let save_elapsed = save_start.elapsed();

        emit(out, format_args!("  ✓ Updated successfully"))?;

        log::info!(
            "✅ 图标已更新 - {} {}x{} -> {}x{} 边距: {}px 耗时: load={}ms crop={}ms save={}ms total={}ms",
            path.display(),
            width,
            height,
            target_size,
            target_size,
            crop_box.left,
            load_elapsed.as_millis(),
            crop_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(ProcessedIcon::new(path, (width, height), crop_box.left, target_size))
    }

    /// 按清单顺序处理全部图标，首个错误即终止。
    pub fn process_all<W: Write>(&self, out: &mut W) -> Result<CropReport, CropError> {
        let start = Instant::now();

        emit(
            out,
            format_args!(
                "Cropping {}% from all app icons...",
                self.config.crop_percent()
            ),
        )?;
        emit(out, format_args!("{}", "=".repeat(40)))?;

        log::info!(
            "🚀 开始批处理 - 目录: {} 图标数: {}",
            self.config.icon_dir.display(),
            self.catalog.len()
        );

        let mut report = CropReport::default();
        for entry in &self.catalog {
            let path = self.config.icon_dir.join(entry.filename);
            let processed = self.process_one(&path, entry.target_size, out)?;
            report.processed.push(processed);
        }

        emit(
            out,
            format_args!("\n✓ All {} icons updated successfully!", report.len()),
        )?;

        log::info!(
            "📊 批处理完成 - {} 个图标 耗时: {}ms",
            report.len(),
            start.elapsed().as_millis()
        );

        Ok(report)
    }
}

fn emit<W: Write>(out: &mut W, line: fmt::Arguments<'_>) -> Result<(), CropError> {
    writeln!(out, "{}", line).map_err(|e| CropError::Output(format!("进度输出失败：{}", e)))
}
