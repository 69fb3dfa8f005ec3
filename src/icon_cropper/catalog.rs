//! # 图标清单与中间数据模型
//!
//! 清单顺序即处理顺序，条目之间没有其他关联。

use std::path::Path;

/// 图标清单中的一项：文件名 + 目标边长（像素）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub filename: &'static str,
    pub target_size: u32,
}

impl IconEntry {
    pub const fn new(filename: &'static str, target_size: u32) -> Self {
        Self {
            filename,
            target_size,
        }
    }
}

/// iOS AppIcon 标准尺寸（29 ~ 1024 px）。
pub const DEFAULT_CATALOG: [IconEntry; 13] = [
    IconEntry::new("29.png", 29),
    IconEntry::new("40.png", 40),
    IconEntry::new("57.png", 57),
    IconEntry::new("58.png", 58),
    IconEntry::new("60.png", 60),
    IconEntry::new("80.png", 80),
    IconEntry::new("87.png", 87),
    IconEntry::new("114.png", 114),
    IconEntry::new("120.png", 120),
    IconEntry::new("152.png", 152),
    IconEntry::new("167.png", 167),
    IconEntry::new("180.png", 180),
    IconEntry::new("1024.png", 1024),
];

/// 裁剪区域，坐标语义与 `(left, top, right, bottom)` 一致，右/下边界不含。
///
/// 正常只由 `compute_crop_box` 构造；手工构造的反向区域宽高按 0 计。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// 单个图标处理完成后的记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedIcon {
    pub filename: String,
    pub original_width: u32,
    pub original_height: u32,
    pub margin: u32,
    pub target_size: u32,
}

impl ProcessedIcon {
    pub(super) fn new(path: &Path, original: (u32, u32), margin: u32, target_size: u32) -> Self {
        Self {
            filename: display_name(path),
            original_width: original.0,
            original_height: original.1,
            margin,
            target_size,
        }
    }
}

/// 一次完整批处理的结果，按清单顺序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropReport {
    pub processed: Vec<ProcessedIcon>,
}

impl CropReport {
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

/// 进度行只展示文件名部分。
pub(super) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_crop_box_has_zero_extent() {
        let crop_box = CropBox {
            left: 20,
            top: 30,
            right: 10,
            bottom: 5,
        };

        assert_eq!(crop_box.width(), 0);
        assert_eq!(crop_box.height(), 0);
    }

    #[test]
    fn empty_report_until_icons_are_pushed() {
        let mut report = CropReport::default();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);

        report.processed.push(ProcessedIcon::new(Path::new("icons/29.png"), (29, 29), 4, 29));
        assert!(!report.is_empty());
        assert_eq!(report.processed[0].filename, "29.png");
    }
}
