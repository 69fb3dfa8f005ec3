//! # 裁剪与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“图像 → 裁剪 → 缩放 → PNG 字节”的过程集中管理，每一步都返回 `Result`，
//! 任何异常直接上抛给编排层，由其终止整个批处理。
//!
//! ## 实现思路
//!
//! 1. 边距 = floor(宽 × 比例)，只看宽度，四条边使用同一边距
//! 2. 按 `(left, top, right, bottom)` 裁剪
//! 3. `fast_image_resize` Lanczos3 缩放到目标边长，失败时回退 `image::resize_exact`，
//!    两条路径都保持原图的颜色类型与位深
//! 4. 编码为 PNG 字节

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use super::{CropBox, CropError, IconCropper};

/// 计算每条边要裁掉的像素数。
///
/// 与浮点乘法后向下取整的结果逐位一致，例如 `1024 → 153`、`29 → 4`。
pub fn compute_crop_margin(width: u32, crop_ratio: f64) -> u32 {
    (width as f64 * crop_ratio).floor() as u32
}

/// 根据宽度计算对称裁剪区域。
///
/// 边距只由宽度决定；非正方形输入的高度方向也使用同一边距，
/// 若由此得到空区域则返回 `CropError::Geometry`。
pub fn compute_crop_box(width: u32, height: u32, crop_ratio: f64) -> Result<CropBox, CropError> {
    if width == 0 || height == 0 {
        return Err(CropError::Geometry(format!("图片尺寸为空：{}x{}", width, height)));
    }

    let margin = compute_crop_margin(width, crop_ratio);
    let doubled = margin as u64 * 2;
    if doubled >= width as u64 || doubled >= height as u64 {
        return Err(CropError::Geometry(format!(
            "边距 {}px 超出图片尺寸 {}x{}",
            margin, width, height
        )));
    }

    Ok(CropBox {
        left: margin,
        top: margin,
        right: width - margin,
        bottom: height - margin,
    })
}

impl IconCropper {
    /// 按裁剪区域截取子图。
    pub(super) fn crop_to_box(image: &DynamicImage, crop_box: CropBox) -> DynamicImage {
        image.crop_imm(crop_box.left, crop_box.top, crop_box.width(), crop_box.height())
    }

    /// 把裁剪后的子图缩放到 `target_size × target_size`，颜色类型与位深不变。
    pub(super) fn resize_to_target(
        &self,
        cropped: &DynamicImage,
        target_size: u32,
    ) -> Result<DynamicImage, CropError> {
        if target_size == 0 {
            return Err(CropError::Geometry("目标尺寸不能为 0".to_string()));
        }

        let filter = self.config.resize_filter;
        let (width, height) = cropped.dimensions();

        log::debug!(
            "🧩 缩放：{}x{} -> {}x{}（filter={:?} color={:?}）",
            width,
            height,
            target_size,
            target_size,
            filter,
            cropped.color()
        );

        match Self::resize_icon_convolution(cropped, target_size, filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}", err);
                Ok(cropped.resize_exact(target_size, target_size, filter))
            }
        }
    }

    /// 编码为 PNG 字节。
    pub(super) fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, CropError> {
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| CropError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(cursor.into_inner())
    }

    /// 直接在 `DynamicImage` 上卷积缩放。
    ///
    /// 目标缓冲按子图的 `ColorType` 分配，灰度、透明通道与 16 位深度都原样保留。
    fn resize_icon_convolution(
        cropped: &DynamicImage,
        target_size: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, CropError> {
        let mut icon = DynamicImage::new(target_size, target_size, cropped.color());
        let algorithm = match filter {
            FilterType::Nearest => fr::ResizeAlg::Nearest,
            FilterType::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            FilterType::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            FilterType::Gaussian => fr::ResizeAlg::Convolution(fr::FilterType::Gaussian),
            FilterType::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
        };
        let options = fr::ResizeOptions::new().resize_alg(algorithm);

        fr::Resizer::new()
            .resize(cropped, &mut icon, &options)
            .map_err(|e| {
                CropError::Resize(format!(
                    "缩放 {}x{} -> {}x{} 失败：{}",
                    cropped.width(),
                    cropped.height(),
                    target_size,
                    target_size,
                    e
                ))
            })?;

        Ok(icon)
    }
}
