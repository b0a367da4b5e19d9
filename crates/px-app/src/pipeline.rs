use std::fmt;
use std::path::{Path, PathBuf};

use px_ascii::{map_ascii, to_grayscale};
use px_core::config::PipelineConfig;
use px_export::{save_ascii_png, save_gray_png};
use px_source::{extract_pixels, load_image};

/// Pipeline steps that can fail on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the input file.
    Decode,
    /// Writing the grayscale raster.
    GrayscaleSave,
    /// Rasterizing and writing the ASCII-art image.
    AsciiSave,
}

impl Stage {
    /// Confirmation printed once the stage has written its output.
    ///
    /// `None` for stages that produce no file.
    #[must_use]
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::Decode => None,
            Self::GrayscaleSave => Some("Grayscale image saved"),
            Self::AsciiSave => Some("ASCII art saved as image"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decode => "decode input image",
            Self::GrayscaleSave => "save grayscale image",
            Self::AsciiSave => "save ASCII art as image",
        })
    }
}

/// A stage that gave up, with its cause.
#[derive(Debug)]
pub struct StageFailure {
    /// Which stage failed.
    pub stage: Stage,
    /// Underlying error chain.
    pub error: anyhow::Error,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to {}: {}", self.stage, self.error)
    }
}

/// Outcome of one run: what was written and what failed.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Outputs written, in order.
    pub saved: Vec<(Stage, PathBuf)>,
    /// Stages that failed, in order.
    pub failures: Vec<StageFailure>,
}

impl RunReport {
    /// True when no stage failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(
        &mut self,
        stage: Stage,
        path: &Path,
        result: Result<(), impl Into<anyhow::Error>>,
    ) {
        match result {
            Ok(()) => self.saved.push((stage, path.to_path_buf())),
            Err(e) => {
                let failure = StageFailure {
                    stage,
                    error: e.into(),
                };
                log::error!("{failure}");
                self.failures.push(failure);
            }
        }
    }
}

/// Decode → extract → grayscale (saved) → ASCII map → rasterize (saved).
///
/// A decode failure stops the run. A failed grayscale save is recorded and
/// the ASCII stage still runs from the in-memory gray grid.
#[must_use]
pub fn run(config: &PipelineConfig) -> RunReport {
    let mut report = RunReport::default();

    let source = match load_image(&config.input) {
        Ok(source) => source,
        Err(e) => {
            report.record(Stage::Decode, &config.input, Err(e));
            return report;
        }
    };

    let pixels = extract_pixels(&source);
    let gray = to_grayscale(&pixels);
    report.record(
        Stage::GrayscaleSave,
        &config.gray_output,
        save_gray_png(&gray, &config.gray_output),
    );

    let lines = map_ascii(&gray);
    log::trace!("ASCII art:\n{lines}");
    report.record(
        Stage::AsciiSave,
        &config.ascii_output,
        save_ascii_png(&lines, &config.ascii_output),
    );

    report
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    fn config_in(dir: &Path, input: &str) -> PipelineConfig {
        PipelineConfig {
            input: dir.join(input),
            gray_output: dir.join("gray.png"),
            ascii_output: dir.join("ascii.png"),
        }
    }

    #[test]
    fn mid_gray_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "in.png");
        RgbImage::from_pixel(10, 4, Rgb([128, 128, 128]))
            .save(&config.input)
            .unwrap();

        let report = run(&config);
        assert!(report.is_success(), "{:?}", report.failures);
        assert_eq!(
            report.saved.iter().map(|(s, _)| *s).collect::<Vec<_>>(),
            vec![Stage::GrayscaleSave, Stage::AsciiSave]
        );

        let gray = image::open(&config.gray_output).unwrap();
        assert_eq!(gray.dimensions(), (10, 4));
        assert!(gray.to_luma8().pixels().all(|p| p.0 == [128]));

        let ascii = image::open(&config.ascii_output).unwrap();
        assert_eq!(ascii.dimensions(), (7 * 10 + 20, 13 * 2 + 20));
    }

    #[test]
    fn sixteen_bit_input_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "deep.png");
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(6, 9, Rgb([u16::MAX, u16::MAX, u16::MAX]));
        DynamicImage::ImageRgb16(img).save(&config.input).unwrap();

        let report = run(&config);
        assert!(report.is_success(), "{:?}", report.failures);
        let gray = image::open(&config.gray_output).unwrap();
        assert_eq!(gray.dimensions(), (6, 9));
        assert!(gray.to_luma8().pixels().all(|p| p.0 == [255]));
    }

    #[test]
    fn transparent_background_turns_black() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "sprite.png");
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([255, 255, 255, 0]));
        img.put_pixel(3, 0, Rgba([255, 255, 255, 255]));
        img.save(&config.input).unwrap();

        let report = run(&config);
        assert!(report.is_success(), "{:?}", report.failures);
        let gray = image::open(&config.gray_output).unwrap().to_luma8();
        assert_eq!(gray.get_pixel(0, 0).0, [0]);
        assert_eq!(gray.get_pixel(3, 0).0, [255]);
    }

    #[test]
    fn single_pixel_image_gives_blank_ascii_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "dot.png");
        RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]))
            .save(&config.input)
            .unwrap();

        let report = run(&config);
        assert!(report.is_success(), "{:?}", report.failures);
        let gray = image::open(&config.gray_output).unwrap();
        assert_eq!(gray.dimensions(), (1, 1));
        let ascii = image::open(&config.ascii_output).unwrap();
        assert_eq!(ascii.dimensions(), (20, 20));
    }

    #[test]
    fn only_saving_stages_confirm() {
        assert_eq!(Stage::Decode.success_message(), None);
        assert_eq!(
            Stage::GrayscaleSave.success_message(),
            Some("Grayscale image saved")
        );
        assert_eq!(
            Stage::AsciiSave.success_message(),
            Some("ASCII art saved as image")
        );
    }

    #[test]
    fn missing_input_aborts_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "absent.png");

        let report = run(&config);
        assert!(report.saved.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, Stage::Decode);
        assert!(
            report.failures[0]
                .to_string()
                .starts_with("Unable to decode input image")
        );
        assert!(!config.gray_output.exists());
        assert!(!config.ascii_output.exists());
    }

    #[test]
    fn gray_save_failure_does_not_block_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), "in.png");
        config.gray_output = dir.path().join("missing/dir/gray.png");
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]))
            .save(&config.input)
            .unwrap();

        let report = run(&config);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, Stage::GrayscaleSave);
        assert_eq!(
            report.saved,
            vec![(Stage::AsciiSave, config.ascii_output.clone())]
        );
        assert!(config.ascii_output.exists());
    }
}
