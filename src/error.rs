//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 入口层只认 `AppError`，图片链路内部错误通过 `From` 自动上转，
//! `main` 直接用 `?` 传播，首个错误即终止整个批处理。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `CropError` 提供 `#[from]` 转换，无需手动 map。

use crate::icon_cropper::CropError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 裁剪流水线错误（读取 / 解码 / 裁剪 / 保存）
    #[error("{0}")]
    Crop(#[from] CropError),

    /// 标准输出写入失败
    #[error("输出错误: {0}")]
    Io(#[from] std::io::Error),
}
