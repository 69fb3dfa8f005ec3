//! # 图标裁剪工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! main.rs (env_logger 初始化 + 默认批处理)
//!    ↓
//! icon_cropper::IconCropper::process_all
//!    ├─ catalog   固定图标清单（文件名 + 目标尺寸）
//!    ├─ loader    读取文件 + 资源限制 + 解码
//!    ├─ pipeline  裁剪边距 → 裁剪 → Lanczos 缩放 → PNG 编码
//!    └─ handler   逐项编排 + 进度输出 + 原地覆盖保存
//!    ↓
//! error::AppError（首个错误即终止）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 应用级错误 `AppError`，`main` 的返回类型 |
//! | [`icon_cropper`] | 图标清单、裁剪配置、裁剪/缩放流水线与批处理编排 |

pub mod error;
pub mod icon_cropper;
