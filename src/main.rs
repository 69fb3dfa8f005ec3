//! # 图标裁剪工具 — 程序入口
//!
//! 无参数运行：对固定目录下的 13 个 iOS 图标执行一次裁剪并原地覆盖。
//! 任意一个文件失败即以非零状态退出，之后的图标不会被处理。

use std::io::Write;

use icon_cropper::error::AppError;
use icon_cropper::icon_cropper::{CropConfig, IconCropper};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cropper = IconCropper::new(CropConfig::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = cropper.process_all(&mut out)?;
    out.flush()?;

    log::info!("🏁 批处理结束，共处理 {} 个图标", report.len());
    Ok(())
}
