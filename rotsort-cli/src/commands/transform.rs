//! Forward/inverse stage runner shared by `bwt`, `mtf` and `pipe`.

use crate::utils::{read_input, write_output};
use anyhow::{Context, Result};
use rotsort_core::{Direction, Transform};
use std::path::Path;

/// Read all of `input`, run `stage` in `direction`, write the result.
pub fn cmd_transform(
    stage: &dyn Transform,
    direction: Direction,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let data = read_input(input)?;
    let result = stage
        .apply(&data, direction)
        .with_context(|| format!("{} {:?} failed", stage.name(), direction))?;

    tracing::info!(
        stage = stage.name(),
        ?direction,
        input_len = data.len(),
        output_len = result.len(),
        "transform complete"
    );

    write_output(output, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotsort_bwt::{BwtStage, MtfStage, Pipeline};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rotsort-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_bwt_file_roundtrip() {
        let plain = temp_path("bwt-plain");
        let packed = temp_path("bwt-packed");
        let restored = temp_path("bwt-restored");
        std::fs::write(&plain, b"ABRACADABRA!").unwrap();

        let stage = BwtStage::default();
        cmd_transform(&stage, Direction::Forward, &plain, &packed).unwrap();
        let framed = std::fs::read(&packed).unwrap();
        assert_eq!(&framed[..4], &[0, 0, 0, 3]);
        assert_eq!(&framed[4..], b"ARD!RCAAAABB");

        cmd_transform(&stage, Direction::Inverse, &packed, &restored).unwrap();
        assert_eq!(std::fs::read(&restored).unwrap(), b"ABRACADABRA!");

        for path in [plain, packed, restored] {
            std::fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn test_pipeline_and_mtf_roundtrip() {
        let stages: [&dyn Transform; 2] = [&MtfStage, &Pipeline::default()];
        for stage in stages {
            let plain = temp_path(&format!("{}-plain", stage.name()));
            let packed = temp_path(&format!("{}-packed", stage.name()));
            let restored = temp_path(&format!("{}-restored", stage.name()));
            std::fs::write(&plain, b"she sells sea shells").unwrap();

            cmd_transform(stage, Direction::Forward, &plain, &packed).unwrap();
            cmd_transform(stage, Direction::Inverse, &packed, &restored).unwrap();
            assert_eq!(std::fs::read(&restored).unwrap(), b"she sells sea shells");

            for path in [plain, packed, restored] {
                std::fs::remove_file(path).unwrap();
            }
        }
    }

    #[test]
    fn test_bad_frame_reports_stage() {
        let packed = temp_path("bad-frame");
        let out = temp_path("bad-frame-out");
        std::fs::write(&packed, [0, 0, 0, 9, b'x']).unwrap();

        let err = cmd_transform(&BwtStage::default(), Direction::Inverse, &packed, &out)
            .unwrap_err();
        assert!(err.to_string().contains("bwt Inverse failed"));
        assert!(!out.exists());

        std::fs::remove_file(packed).unwrap();
    }
}
