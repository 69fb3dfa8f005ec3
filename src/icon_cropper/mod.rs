//! # 图标裁剪模块（icon_cropper）
//!
//! ## 设计思路
//!
//! 将“清单 → 读取解码 → 计算边距 → 裁剪缩放 → 覆盖保存”按职责拆分为多个子模块。
//! 整条链路单线程、顺序执行，一个图标处理完成并落盘后才开始下一个。
//!
//! - `catalog`：固定图标清单与中间数据模型
//! - `config`：裁剪比例、滤镜与资源上限
//! - `error`：链路统一错误
//! - `loader`：读取本地文件并解码
//! - `pipeline`：边距计算、裁剪、缩放、PNG 编码
//! - `handler`：逐项编排、进度输出、批处理
//!
//! ## 新同事快速上手
//!
//! ```text
//! IconCropper::process_all
//!    ↓ 按清单顺序
//! IconCropper::process_one
//!    ├─ loader.rs（读取 + 体积/像素限制 + 解码）
//!    ├─ pipeline.rs（边距 → 裁剪 → Lanczos 缩放 → PNG 编码）
//!    └─ std::fs::write（原地覆盖，无备份）
//!    ↓
//! 首个 CropError 直接返回，后续图标不再处理
//! ```
//!
//! 注意：裁剪不是幂等的。重复运行会在已裁剪并放大的图片上再裁一次。

mod catalog;
mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
#[cfg(test)]
mod test_support;

pub use catalog::{CropBox, CropReport, DEFAULT_CATALOG, IconEntry, ProcessedIcon};
pub use config::CropConfig;
pub use error::CropError;
pub use handler::IconCropper;
pub use pipeline::{compute_crop_box, compute_crop_margin};
