// End-to-end batch tests against temporary icon directories
use std::path::{Path, PathBuf};

use icon_cropper::icon_cropper::{CropConfig, CropError, DEFAULT_CATALOG, IconCropper};
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgba};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icon-cropper-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir failed");
    dir
}

fn write_gradient_png(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        Rgba([r, g, 128, 255])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, ImageFormat::Png)
        .expect("write fixture failed");
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).expect("open icon failed").dimensions()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_catalog_ends_at_nominal_sizes() {
        let dir = scratch_dir("full");
        for entry in DEFAULT_CATALOG {
            write_gradient_png(&dir.join(entry.filename), entry.target_size, entry.target_size);
        }
        let cropper = IconCropper::new(CropConfig::with_icon_dir(&dir)).expect("cropper init failed");

        let mut out = Vec::new();
        let report = cropper.process_all(&mut out).expect("batch should succeed");

        assert_eq!(report.len(), 13);
        for (entry, processed) in DEFAULT_CATALOG.iter().zip(&report.processed) {
            assert_eq!(processed.filename, entry.filename);
            assert_eq!(
                dimensions(&dir.join(entry.filename)),
                (entry.target_size, entry.target_size)
            );
        }
        assert_eq!(report.processed[0].margin, 4);
        assert_eq!(report.processed[12].margin, 153);

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.starts_with("Cropping 15% from all app icons...\n"));
        assert!(printed.contains("Processing 1024.png - Original size: 1024x1024\n"));
        assert!(printed.ends_with("\n✓ All 13 icons updated successfully!\n"));
    }

    #[test]
    fn missing_60_halts_batch_before_later_entries() {
        let dir = scratch_dir("missing-60");
        let sixty = DEFAULT_CATALOG
            .iter()
            .position(|entry| entry.filename == "60.png")
            .expect("60.png in catalog");

        for (idx, entry) in DEFAULT_CATALOG.iter().enumerate() {
            if idx < sixty {
                write_gradient_png(&dir.join(entry.filename), 100, 100);
            } else if idx > sixty {
                write_gradient_png(&dir.join(entry.filename), 10, 10);
            }
        }
        let untouched: Vec<Vec<u8>> = DEFAULT_CATALOG[sixty + 1..]
            .iter()
            .map(|entry| std::fs::read(dir.join(entry.filename)).expect("read fixture failed"))
            .collect();

        let cropper = IconCropper::new(CropConfig::with_icon_dir(&dir)).expect("cropper init failed");
        let mut out = Vec::new();
        let result = cropper.process_all(&mut out);

        assert!(matches!(result, Err(CropError::FileSystem(ref msg)) if msg.contains("60.png")));

        for entry in &DEFAULT_CATALOG[..sixty] {
            assert_eq!(
                dimensions(&dir.join(entry.filename)),
                (entry.target_size, entry.target_size)
            );
        }
        for (entry, before) in DEFAULT_CATALOG[sixty + 1..].iter().zip(&untouched) {
            let after = std::fs::read(dir.join(entry.filename)).expect("read icon failed");
            assert_eq!(&after, before, "{} must not be touched", entry.filename);
        }

        let printed = String::from_utf8(out).expect("utf8");
        assert_eq!(printed.matches("  ✓ Updated successfully").count(), sixty);
        assert!(!printed.contains("icons updated successfully!"));
    }

    #[test]
    fn second_run_crops_again() {
        let once_dir = scratch_dir("once");
        let twice_dir = scratch_dir("twice");
        let catalog = vec![icon_cropper::icon_cropper::IconEntry::new("120.png", 120)];
        write_gradient_png(&once_dir.join("120.png"), 120, 120);
        write_gradient_png(&twice_dir.join("120.png"), 120, 120);

        let once = IconCropper::with_catalog(CropConfig::with_icon_dir(&once_dir), catalog.clone())
            .expect("cropper init failed");
        let twice = IconCropper::with_catalog(CropConfig::with_icon_dir(&twice_dir), catalog)
            .expect("cropper init failed");

        once.process_all(&mut Vec::new()).expect("first batch should succeed");
        twice.process_all(&mut Vec::new()).expect("first batch should succeed");
        let report = twice.process_all(&mut Vec::new()).expect("second batch should succeed");

        assert_eq!(report.processed[0].original_width, 120);
        assert_eq!(report.processed[0].margin, 18);

        let single = image::open(once_dir.join("120.png")).expect("open").to_rgba8();
        let double = image::open(twice_dir.join("120.png")).expect("open").to_rgba8();

        assert_eq!(single.dimensions(), (120, 120));
        assert_eq!(double.dimensions(), (120, 120));
        assert_ne!(single.as_raw(), double.as_raw());

        // the gradient runs left to right, so a deeper crop starts further right
        let single_left = single.get_pixel(10, 60)[0];
        let double_left = double.get_pixel(10, 60)[0];
        assert!(double_left > single_left);
    }
}
