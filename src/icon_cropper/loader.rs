//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 读取本地图标文件并解码为 `DynamicImage`，分两步完成：
//! `open_icon` 只读字节与图片头（存在性、体积、签名、尺寸、像素上限），
//! `decode_icon` 才做完整解码。调用方在两步之间输出进度行，
//! 因此头部完好但像素数据损坏的文件也会先打印原始尺寸再报错。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 签名：`infer` 识别为图片类型才继续。
//! - 尺寸：只读 header 做像素上限检查，避免超大图触发高内存开销。

use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;

use super::{CropConfig, CropError, IconCropper};

/// 已读取但尚未解码的图标：原始字节 + 图片头中的宽高。
pub(super) struct EncodedIcon {
    pub(super) bytes: Vec<u8>,
    pub(super) width: u32,
    pub(super) height: u32,
}

impl IconCropper {
    /// 读取图标文件并解析图片头，不解码像素。
    pub(super) fn open_icon(&self, path: &Path) -> Result<EncodedIcon, CropError> {
        let bytes = Self::read_icon_bytes(path, &self.config)?;
        let (width, height) = Self::inspect_dimensions_from_memory(path, &bytes)?;
        Self::validate_pixel_limits(&self.config, width, height)?;

        Ok(EncodedIcon {
            bytes,
            width,
            height,
        })
    }

    /// 完整解码 `open_icon` 读到的字节。
    pub(super) fn decode_icon(path: &Path, icon: &EncodedIcon) -> Result<DynamicImage, CropError> {
        let decoded = image::load_from_memory(&icon.bytes)
            .map_err(|e| CropError::Decode(format!("图片解码失败：{}：{}", path.display(), e)))?;

        log::debug!(
            "🖼️ 解码成功 - {} 尺寸: {}x{} 颜色: {:?}",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded)
    }

    fn read_icon_bytes(path: &Path, config: &CropConfig) -> Result<Vec<u8>, CropError> {
        log::debug!("📁 读取图标文件 - 路径: {}", path.display());

        if !path.exists() {
            return Err(CropError::FileSystem(format!("文件不存在：{}", path.display())));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| CropError::FileSystem(format!("无法读取文件信息：{}：{}", path.display(), e)))?;

        if metadata.len() > config.max_file_size {
            return Err(CropError::ResourceLimit(format!(
                "文件过大：{}：{:.2} MB（限制：{:.2} MB）",
                path.display(),
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| CropError::FileSystem(format!("无法读取图片文件：{}：{}", path.display(), e)))?;
        Self::validate_image_signature(path, &bytes)?;

        Ok(bytes)
    }

    fn validate_image_signature(path: &Path, bytes: &[u8]) -> Result<(), CropError> {
        if bytes.is_empty() {
            return Err(CropError::InvalidFormat(format!("图片内容为空：{}", path.display())));
        }

        let kind = infer::get(bytes).ok_or_else(|| {
            CropError::InvalidFormat(format!("无法识别图片类型：{}", path.display()))
        })?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(CropError::InvalidFormat(format!(
                "文件签名不是图片类型：{}：{}",
                path.display(),
                kind.mime_type()
            )));
        }

        Ok(())
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions_from_memory(path: &Path, bytes: &[u8]) -> Result<(u32, u32), CropError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CropError::InvalidFormat(format!("无法识别图片格式：{}：{}", path.display(), e)))?;

        reader
            .into_dimensions()
            .map_err(|e| CropError::InvalidFormat(format!("无法读取图片尺寸：{}：{}", path.display(), e)))
    }

    fn validate_pixel_limits(config: &CropConfig, width: u32, height: u32) -> Result<(), CropError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| CropError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(CropError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
